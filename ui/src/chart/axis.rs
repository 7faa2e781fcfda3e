use dewplot_core::{Axis, AxisLabel, AxisOrient, ScatterScene};
use gpui::{Div, div, prelude::*, px};

use super::canvas::color;

const TICK_LABEL_BOX: f32 = 64.0;

/// Tick labels and axis titles, absolutely positioned over the canvas.
pub(super) fn axis_labels(scene: &ScatterScene) -> Vec<Div> {
    let mut labels = Vec::new();
    for axis in [&scene.x_axis, &scene.y_axis] {
        labels.extend(tick_labels(scene, axis));
        labels.push(axis_title(scene, &axis.label));
    }
    labels
}

fn tick_labels(scene: &ScatterScene, axis: &Axis) -> Vec<Div> {
    let font = axis.tick_font_size as f32;
    axis.ticks
        .iter()
        .map(|tick| {
            let (x, y) = scene.to_chart(axis.tick_label_anchor(tick));
            let (x, y) = (x as f32, y as f32);
            let label = div()
                .absolute()
                .w(px(TICK_LABEL_BOX))
                .text_size(px(font))
                .text_color(color(axis.color))
                .child(tick.label.clone());
            match axis.orient {
                AxisOrient::Bottom => label
                    .left(px(x - TICK_LABEL_BOX * 0.5))
                    .top(px(y))
                    .text_center(),
                AxisOrient::Left => label
                    .left(px(x - TICK_LABEL_BOX))
                    .top(px(y - font * 0.6))
                    .flex()
                    .justify_end(),
            }
        })
        .collect()
}

fn axis_title(scene: &ScatterScene, label: &AxisLabel) -> Div {
    let (x, y) = scene.to_chart((label.x, label.y));
    let (x, y) = (x as f32, y as f32);
    let text_color = color(label.color);

    if label.rotation == 0.0 {
        let box_width = scene.bounded_width as f32;
        let font = label.font_size as f32;
        return div()
            .absolute()
            .left(px(x - box_width * 0.5))
            .top(px(y - font))
            .w(px(box_width))
            .text_center()
            .text_size(px(font))
            .text_color(text_color)
            .child(label.text.clone());
    }

    // no rotated text in the element tree: stack the glyphs top to bottom
    let glyphs: Vec<char> = label.text.chars().collect();
    let available = scene.bounded_height as f32;
    let glyph = (label.font_size as f32).min(available / glyphs.len().max(1) as f32);
    let column_height = glyph * glyphs.len() as f32;

    div()
        .absolute()
        .left(px(x - glyph * 0.5))
        .top(px(y - column_height * 0.5))
        .w(px(glyph))
        .flex()
        .flex_col()
        .items_center()
        .text_size(px(glyph * 0.8))
        .line_height(px(glyph))
        .text_color(text_color)
        .children(
            glyphs
                .into_iter()
                .map(|ch| div().h(px(glyph)).child(ch.to_string())),
        )
}
