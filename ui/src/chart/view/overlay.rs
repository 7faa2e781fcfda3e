use gpui::{Div, div, prelude::*, px, rgb};
use time::macros::format_description;

use super::ScatterView;

impl ScatterView {
    pub(super) fn tooltip_overlay(&self) -> Option<Div> {
        let (idx, (mx, my)) = (self.hover_index?, self.hover_position?);
        let scene = self.scene.as_ref()?;
        let obs = self.dataset.get(idx)?;

        let max_x = scene.width as f32;
        let max_y = scene.height as f32;
        let tip_width = 170.0;
        let tip_height = 100.0;
        let mut x = mx + 12.0;
        let mut y = my + 12.0;
        if x + tip_width > max_x {
            x = (mx - 12.0 - tip_width).max(0.0);
        }
        if y + tip_height > max_y {
            y = (max_y - tip_height).max(0.0);
        }

        let (bx, by) = scene.to_bounds((mx as f64, my as f64));
        let cursor_line = format!(
            "Cursor: {:.1} \u{b0}F, {:.0}%",
            scene.x_scale.invert(bx),
            scene.y_scale.invert(by) * 100.0
        );

        let date_fmt = format_description!("[year]-[month]-[day]");
        let date_line = obs
            .date
            .and_then(|d| d.format(&date_fmt).ok())
            .unwrap_or_else(|| format!("#{idx}"));

        Some(
            div()
                .absolute()
                .left(px(x))
                .top(px(y))
                .w(px(tip_width))
                .bg(rgb(0x111827))
                .text_color(gpui::white())
                .border_1()
                .border_color(rgb(0x1f2937))
                .rounded_md()
                .shadow_lg()
                .p_2()
                .text_xs()
                .flex()
                .flex_col()
                .gap_1()
                .child(date_line)
                .child(format!("Dew point: {:.1} \u{b0}F", obs.dew_point))
                .child(format!("Humidity: {:.0}%", obs.humidity * 100.0))
                .child(format!("Cloud cover: {:.0}%", obs.cloud_cover * 100.0))
                .child(div().text_color(rgb(0x9ca3af)).child(cursor_line)),
        )
    }
}
