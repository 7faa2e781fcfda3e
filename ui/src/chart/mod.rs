use dewplot_core::{ChartConfig, Dataset};
use gpui::{
    App, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, prelude::*, px, size,
};
use tracing::{error, info};

mod axis;
mod canvas;
mod error_view;
mod header;
mod view;

use error_view::ErrorView;
use view::ScatterView;

const WINDOW_TITLE: &str = "Scatterplot";

#[derive(Clone)]
pub struct ChartMeta {
    pub source: String,
    pub config: ChartConfig,
}

/// Opens the chart window and runs the event loop until it closes.
///
/// A failed load still opens a window, showing the error instead of the chart.
pub fn launch_chart(load_result: Result<Dataset, String>, meta: ChartMeta) {
    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1200.), px(800.)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(WINDOW_TITLE.into()),
                ..Default::default()
            }),
            focus: true,
            ..Default::default()
        };

        let opened = match load_result.clone() {
            Ok(dataset) => {
                info!(points = dataset.len(), source = %meta.source, "opening chart window");
                let meta = meta.clone();
                cx.open_window(options, move |_, cx| {
                    cx.new(|_| ScatterView::new(dataset.clone(), meta.clone()))
                })
                .map(|_| ())
            }
            Err(message) => {
                let source = meta.source.clone();
                cx.open_window(options, move |_, cx| {
                    cx.new(|_| ErrorView::new(source.clone(), message.clone()))
                })
                .map(|_| ())
            }
        };

        if let Err(err) = opened {
            error!("failed to open window: {err:#}");
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
