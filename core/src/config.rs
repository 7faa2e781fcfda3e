use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    ConfigError, Margin,
    color::Rgb,
    layout::DEFAULT_VIEWPORT_FRACTION,
    scale::DEFAULT_TICK_COUNT,
};

pub const DEFAULT_TITLE: &str = "Scatter Plot plotting dew point on the x-axis and humidity on the y-axis, \
cloud cover for color scales, for New York City temperatures across 2018";

/// Styling and sizing knobs for the scatter chart. Every field has a default,
/// so a TOML file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub viewport_fraction: f64,
    pub margin: Margin,
    /// Circle radius in pixels. SVG export rounds it to a whole pixel.
    pub dot_radius: f64,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub color_from: String,
    pub color_to: String,
    pub label_color: String,
    pub axis_color: String,
    pub background: String,
    pub label_font_size: f64,
    pub tick_font_size: f64,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            viewport_fraction: DEFAULT_VIEWPORT_FRACTION,
            margin: Margin::default(),
            dot_radius: 5.0,
            x_ticks: DEFAULT_TICK_COUNT,
            y_ticks: 4,
            color_from: "skyblue".into(),
            color_to: "darkslategrey".into(),
            label_color: "blue".into(),
            axis_color: "black".into(),
            background: "white".into(),
            // 1.4rem against a 16px root
            label_font_size: 22.4,
            tick_font_size: 10.0,
            x_label: "Dew point (\u{b0}F)".into(),
            y_label: "Relative humidity".into(),
        }
    }
}

/// `ChartConfig` with every color resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color_from: Rgb,
    pub color_to: Rgb,
    pub label: Rgb,
    pub axis: Rgb,
    pub background: Rgb,
}

impl ChartConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_fraction > 0.0 && self.viewport_fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport_fraction must be in (0, 1], got {}",
                self.viewport_fraction
            )));
        }
        if !(self.dot_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "dot_radius must be positive, got {}",
                self.dot_radius
            )));
        }
        let margin = self.margin;
        if [margin.top, margin.right, margin.bottom, margin.left]
            .iter()
            .any(|m| !(*m >= 0.0))
        {
            return Err(ConfigError::Invalid("margins must be non-negative".into()));
        }
        self.palette().map(|_| ())
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let resolve = |key: &str, value: &str| {
            Rgb::parse(value)
                .ok_or_else(|| ConfigError::Invalid(format!("unknown color for {key}: '{value}'")))
        };
        Ok(Palette {
            color_from: resolve("color_from", &self.color_from)?,
            color_to: resolve("color_to", &self.color_to)?,
            label: resolve("label_color", &self.label_color)?,
            axis: resolve("axis_color", &self.axis_color)?,
            background: resolve("background", &self.background)?,
        })
    }
}
