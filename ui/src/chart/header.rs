use gpui::{SharedString, div, prelude::*, rgb};

pub(super) fn chart_header(
    source: &str,
    point_count: usize,
    extents_text: SharedString,
) -> impl IntoElement {
    div()
        .flex()
        .justify_between()
        .items_center()
        .w_full()
        .p_3()
        .bg(rgb(0xf3f4f6))
        .border_b_1()
        .border_color(rgb(0xe5e7eb))
        .child(div().text_xl().child("Scatterplot"))
        .child(
            div()
                .flex()
                .gap_3()
                .text_sm()
                .text_color(rgb(0x4b5563))
                .child(SharedString::from(source.to_string()))
                .child(format!("points: {point_count}"))
                .child(extents_text),
        )
}
