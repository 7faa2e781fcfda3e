use serde::{Deserialize, Serialize};

pub const DEFAULT_VIEWPORT_FRACTION: f64 = 0.9;

/// Inner size of the hosting window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 50.0,
            left: 50.0,
        }
    }
}

/// Outer chart size plus the margins reserved for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Dimensions {
    /// Square chart sized to `fraction` of the smaller viewport side.
    pub fn responsive(viewport: Viewport, fraction: f64, margin: Margin) -> Self {
        let side = (viewport.width * fraction)
            .min(viewport.height * fraction)
            .max(0.0);
        Self {
            width: side,
            height: side,
            margin,
        }
    }

    pub fn bounded_width(&self) -> f64 {
        (self.width - (self.margin.left + self.margin.right)).max(0.0)
    }

    pub fn bounded_height(&self) -> f64 {
        (self.height - (self.margin.top + self.margin.bottom)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_from_smaller_side() {
        let dims = Dimensions::responsive(
            Viewport::new(1200.0, 800.0),
            DEFAULT_VIEWPORT_FRACTION,
            Margin::default(),
        );
        assert_eq!(dims.width, 720.0);
        assert_eq!(dims.height, 720.0);
        assert_eq!(dims.bounded_width(), 660.0);
        assert_eq!(dims.bounded_height(), 660.0);

        let tall = Dimensions::responsive(Viewport::new(500.0, 900.0), 0.9, Margin::default());
        assert_eq!(tall.width, 450.0);
    }

    #[test]
    fn tiny_viewport_clamps_bounds() {
        let dims = Dimensions::responsive(Viewport::new(40.0, 40.0), 0.9, Margin::default());
        assert_eq!(dims.width, 36.0);
        assert_eq!(dims.bounded_width(), 0.0);
        assert_eq!(dims.bounded_height(), 0.0);
    }
}
