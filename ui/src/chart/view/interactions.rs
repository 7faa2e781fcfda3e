use gpui::MouseMoveEvent;

use super::ScatterView;

/// Pointer distance, in pixels, within which a dot counts as hovered.
const HOVER_RADIUS: f64 = 12.0;

impl ScatterView {
    /// Updates hover state; returns whether anything changed.
    pub(super) fn handle_hover(&mut self, event: &MouseMoveEvent) -> bool {
        let previous = (self.hover_index, self.hover_position);

        match (self.chart_bounds, self.scene.as_ref()) {
            (Some(bounds), Some(scene)) => {
                let local_x = f32::from(event.position.x) - f32::from(bounds.origin.x);
                let local_y = f32::from(event.position.y) - f32::from(bounds.origin.y);
                let inside = local_x >= 0.0
                    && local_y >= 0.0
                    && local_x <= f32::from(bounds.size.width)
                    && local_y <= f32::from(bounds.size.height);

                let (bx, by) = scene.to_bounds((local_x as f64, local_y as f64));
                let hit = if inside {
                    scene.nearest_dot(bx, by, HOVER_RADIUS).map(|dot| dot.index)
                } else {
                    None
                };
                self.hover_index = hit;
                self.hover_position = hit.map(|_| (local_x, local_y));
            }
            _ => {
                self.hover_index = None;
                self.hover_position = None;
            }
        }

        previous != (self.hover_index, self.hover_position)
    }
}
