use dewplot_core::{
    ChartConfig, Dataset, Dimensions, Field, ScatterScene, Viewport, ViewportObserver,
};
use gpui::{Bounds, Pixels, SharedString};
use tracing::{debug, warn};

use super::super::ChartMeta;

pub(crate) struct ScatterView {
    pub(super) dataset: Dataset,
    pub(super) config: ChartConfig,
    pub(super) source: String,
    pub(super) observer: ViewportObserver,
    pub(super) scene: Option<ScatterScene>,
    pub(super) scene_error: Option<String>,
    pub(super) chart_bounds: Option<Bounds<Pixels>>,
    pub(super) hover_index: Option<usize>,
    pub(super) hover_position: Option<(f32, f32)>,
}

impl ScatterView {
    pub(crate) fn new(dataset: Dataset, meta: ChartMeta) -> Self {
        let mut observer = ViewportObserver::new();
        observer.subscribe(|change| {
            debug!(
                width = change.viewport.width,
                height = change.viewport.height,
                generation = change.generation,
                "viewport resized, redrawing"
            );
        });
        Self {
            dataset,
            config: meta.config,
            source: meta.source,
            observer,
            scene: None,
            scene_error: None,
            chart_bounds: None,
            hover_index: None,
            hover_position: None,
        }
    }

    /// Rebuilds the scene when the viewport differs from the last one seen.
    pub(super) fn sync_viewport(&mut self, viewport: Viewport) {
        if self.observer.observe(viewport).is_none() {
            return;
        }

        let dims =
            Dimensions::responsive(viewport, self.config.viewport_fraction, self.config.margin);
        match ScatterScene::build(&self.dataset, dims, &self.config) {
            Ok(scene) => {
                self.scene = Some(scene);
                self.scene_error = None;
            }
            Err(err) => {
                warn!("failed to build scatter scene: {err}");
                self.scene = None;
                self.scene_error = Some(err.to_string());
            }
        }
        // hover state refers to the old geometry
        self.hover_index = None;
        self.hover_position = None;
    }

    pub(super) fn extents_text(&self) -> SharedString {
        let fmt = |field: Field| match self.dataset.extent(field) {
            Some((min, max)) => format!("{}: {min:.2} to {max:.2}", field.label()),
            None => format!("{}: n/a", field.label()),
        };
        SharedString::from(format!(
            "{} | {} | {}",
            fmt(Field::DewPoint),
            fmt(Field::Humidity),
            fmt(Field::CloudCover)
        ))
    }
}
