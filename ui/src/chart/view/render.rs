use dewplot_core::Viewport;
use gpui::{
    Bounds, Context, MouseMoveEvent, Pixels, Render, SharedString, Window, div, prelude::*, px,
    rgb,
};

use super::ScatterView;
use super::super::{axis::axis_labels, canvas::scatter_canvas, header::chart_header};

impl Render for ScatterView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let viewport = window.viewport_size();
        self.sync_viewport(Viewport::new(
            f32::from(viewport.width) as f64,
            f32::from(viewport.height) as f64,
        ));

        let header = chart_header(&self.source, self.dataset.len(), self.extents_text());

        let body = match self.scene.clone() {
            Some(scene) => {
                let width = scene.width as f32;
                let height = scene.height as f32;
                let labels = axis_labels(&scene);
                let tooltip = self.tooltip_overlay();

                let track_chart_bounds =
                    cx.processor(|this: &mut Self, bounds: Vec<Bounds<Pixels>>, _, _| {
                        if let Some(canvas_bounds) = bounds.first() {
                            this.chart_bounds = Some(*canvas_bounds);
                        }
                    });

                let handle_mouse_move =
                    cx.listener(|this: &mut Self, event: &MouseMoveEvent, window, _| {
                        if this.handle_hover(event) {
                            window.refresh();
                        }
                    });

                let mut chart = div()
                    .relative()
                    .w(px(width))
                    .h(px(height))
                    .on_children_prepainted(track_chart_bounds)
                    .on_mouse_move(handle_mouse_move)
                    .child(
                        scatter_canvas(scene, self.hover_index)
                            .w(px(width))
                            .h(px(height)),
                    )
                    .children(labels);
                if let Some(tip) = tooltip {
                    chart = chart.child(tip);
                }
                chart
            }
            None => {
                let message = self
                    .scene_error
                    .clone()
                    .unwrap_or_else(|| "waiting for window size".to_string());
                div()
                    .text_sm()
                    .text_color(rgb(0x991b1b))
                    .child(SharedString::from(message))
            }
        };

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0xffffff))
            .text_color(rgb(0x111827))
            .child(header)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .w_full()
                    .child(body),
            )
    }
}
