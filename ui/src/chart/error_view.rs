use gpui::{Render, SharedString, Window, div, prelude::*, px, rgb};

/// Stands in for the chart when the dataset could not be loaded.
pub(super) struct ErrorView {
    source: String,
    message: String,
}

impl ErrorView {
    pub(super) fn new(source: String, message: String) -> Self {
        Self { source, message }
    }
}

impl Render for ErrorView {
    fn render(&mut self, _window: &mut Window, _cx: &mut gpui::Context<Self>) -> impl IntoElement {
        let source = SharedString::from(self.source.clone());
        let message = SharedString::from(self.message.clone());

        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .p_8()
            .size_full()
            .bg(rgb(0xffffff))
            .text_color(rgb(0x111827))
            .text_center()
            .child(div().text_lg().child("Could not load weather data"))
            .child(div().text_sm().text_color(rgb(0x6b7280)).child(source))
            .child(
                div()
                    .max_w(px(640.))
                    .p_4()
                    .rounded_md()
                    .bg(rgb(0xfef2f2))
                    .border_1()
                    .border_color(rgb(0xfecaca))
                    .text_color(rgb(0x991b1b))
                    .child(message),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(0x6b7280))
                    .child("Expected records with dewPoint, humidity and cloudCover fields."),
            )
    }
}
