mod chart;
mod logging;

pub use chart::{ChartMeta, launch_chart};
pub use logging::init_logging;
