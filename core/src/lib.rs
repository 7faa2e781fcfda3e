pub mod color;
pub mod config;
mod dataset;
mod error;
mod layout;
mod load;
pub mod resize;
pub mod scale;
pub mod scene;
pub mod svg;
mod types;

pub use color::Rgb;
pub use config::{ChartConfig, Palette};
pub use dataset::Dataset;
pub use error::{ConfigError, ExportError, LoadError};
pub use layout::{DEFAULT_VIEWPORT_FRACTION, Dimensions, Margin, Viewport};
pub use load::{load_csv, load_json, load_parquet};
pub use resize::{SubscriptionId, ViewportChange, ViewportObserver};
pub use scale::{ColorScale, LinearScale, TickFormat, extent};
pub use scene::{Axis, AxisLabel, AxisOrient, Dot, ScatterScene, Tick};
pub use svg::{export_svg, render_svg};
pub use types::{ColumnMapping, Field, LoadOptions, WeatherObservation};
