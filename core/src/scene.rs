//! Scatter chart construction: extent, scale, join, axis.
//!
//! A [`ScatterScene`] is a complete description of one drawing. Hosts clear
//! their surface and paint the whole scene, so a rebuilt scene fully replaces
//! whatever was drawn before.

use crate::{
    ChartConfig, ConfigError, Dataset, Dimensions, Field,
    color::Rgb,
    scale::{ColorScale, DEFAULT_TICK_COUNT, LinearScale},
};
use tracing::debug;

pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
/// Length of the end caps on each domain line.
pub const TICK_SIZE_OUTER: f64 = 6.0;

const UNIT_DOMAIN: (f64, f64) = (0.0, 1.0);

/// One circle per observation, positioned in bounds coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis, in bounds coordinates.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    /// Text anchor point in bounds coordinates; the text is centered on it.
    pub x: f64,
    pub y: f64,
    /// Degrees, counter-clockwise negative.
    pub rotation: f64,
    pub font_size: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Translation of the axis group inside the bounds.
    pub translate: (f64, f64),
    /// Pixel extent of the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub tick_font_size: f64,
    pub color: Rgb,
    pub label: AxisLabel,
}

impl Axis {
    /// Domain path in bounds coordinates: an outer tick, the axis line, then
    /// the closing outer tick.
    pub fn domain_path(&self) -> [(f64, f64); 4] {
        let (tx, ty) = self.translate;
        let (r0, r1) = self.range;
        match self.orient {
            AxisOrient::Bottom => {
                let cap = ty + TICK_SIZE_OUTER;
                [(tx + r0, cap), (tx + r0, ty), (tx + r1, ty), (tx + r1, cap)]
            }
            AxisOrient::Left => {
                let cap = tx - TICK_SIZE_OUTER;
                [(cap, ty + r0), (tx, ty + r0), (tx, ty + r1), (cap, ty + r1)]
            }
        }
    }

    /// Tick mark segment for `tick`, from the axis line outward.
    pub fn tick_mark(&self, tick: &Tick) -> ((f64, f64), (f64, f64)) {
        let (tx, ty) = self.translate;
        match self.orient {
            AxisOrient::Bottom => (
                (tx + tick.offset, ty),
                (tx + tick.offset, ty + self.tick_size),
            ),
            AxisOrient::Left => (
                (tx, ty + tick.offset),
                (tx - self.tick_size, ty + tick.offset),
            ),
        }
    }

    /// Where the tick label's anchor sits: below the mark for a bottom axis,
    /// left of it for a left axis.
    pub fn tick_label_anchor(&self, tick: &Tick) -> (f64, f64) {
        let (tx, ty) = self.translate;
        let gap = self.tick_size + self.tick_padding;
        match self.orient {
            AxisOrient::Bottom => (tx + tick.offset, ty + gap),
            AxisOrient::Left => (tx - gap, ty + tick.offset),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterScene {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Offset of the bounds inside the chart (left and top margin).
    pub origin: (f64, f64),
    pub bounded_width: f64,
    pub bounded_height: f64,
    pub background: Rgb,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub color_scale: ColorScale,
    pub dots: Vec<Dot>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl ScatterScene {
    pub fn build(
        dataset: &Dataset,
        dimensions: Dimensions,
        config: &ChartConfig,
    ) -> Result<Self, ConfigError> {
        let palette = config.palette()?;
        let bounded_width = dimensions.bounded_width();
        let bounded_height = dimensions.bounded_height();
        let margin = dimensions.margin;

        let dew_point_extent = dataset.extent(Field::DewPoint).unwrap_or(UNIT_DOMAIN);
        let humidity_extent = dataset.extent(Field::Humidity).unwrap_or(UNIT_DOMAIN);
        let cloud_cover_extent = dataset.extent(Field::CloudCover).unwrap_or(UNIT_DOMAIN);

        let x_scale =
            LinearScale::new(dew_point_extent, (0.0, bounded_width)).nice(DEFAULT_TICK_COUNT);
        // y grows upward, so the range runs from the bottom edge to the top
        let y_scale =
            LinearScale::new(humidity_extent, (bounded_height, 0.0)).nice(DEFAULT_TICK_COUNT);
        let color_scale = ColorScale::new(cloud_cover_extent, palette.color_from, palette.color_to);

        let dots: Vec<Dot> = dataset
            .iter()
            .enumerate()
            .map(|(index, obs)| Dot {
                index,
                cx: x_scale.map(Field::DewPoint.value(obs)),
                cy: y_scale.map(Field::Humidity.value(obs)),
                r: config.dot_radius,
                fill: color_scale.map(Field::CloudCover.value(obs)),
            })
            .collect();

        let x_axis = Axis {
            orient: AxisOrient::Bottom,
            translate: (0.0, bounded_height),
            range: x_scale.range(),
            ticks: build_ticks(&x_scale, config.x_ticks),
            tick_size: TICK_SIZE,
            tick_padding: TICK_PADDING,
            tick_font_size: config.tick_font_size,
            color: palette.axis,
            label: AxisLabel {
                text: config.x_label.clone(),
                x: bounded_width / 2.0,
                y: bounded_height + margin.bottom - 10.0,
                rotation: 0.0,
                font_size: config.label_font_size,
                color: palette.label,
            },
        };

        // rotate(-90) maps (-h/2, -left + 20) onto (-left + 20, h/2)
        let y_axis = Axis {
            orient: AxisOrient::Left,
            translate: (0.0, 0.0),
            range: y_scale.range(),
            ticks: build_ticks(&y_scale, config.y_ticks),
            tick_size: TICK_SIZE,
            tick_padding: TICK_PADDING,
            tick_font_size: config.tick_font_size,
            color: palette.axis,
            label: AxisLabel {
                text: config.y_label.clone(),
                x: -margin.left + 20.0,
                y: bounded_height / 2.0,
                rotation: -90.0,
                font_size: config.label_font_size,
                color: palette.label,
            },
        };

        debug!(
            dots = dots.len(),
            bounded_width,
            bounded_height,
            color_from = %palette.color_from.to_css(),
            color_to = %palette.color_to.to_css(),
            "built scatter scene"
        );

        Ok(Self {
            title: config.title.clone(),
            width: dimensions.width,
            height: dimensions.height,
            origin: (margin.left, margin.top),
            bounded_width,
            bounded_height,
            background: palette.background,
            x_scale,
            y_scale,
            color_scale,
            dots,
            x_axis,
            y_axis,
        })
    }

    /// Converts a bounds-relative point to chart coordinates.
    pub fn to_chart(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x + self.origin.0, y + self.origin.1)
    }

    /// Converts a chart-relative point to bounds coordinates.
    pub fn to_bounds(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x - self.origin.0, y - self.origin.1)
    }

    /// Closest dot to a bounds-relative point, if within `max_distance`.
    /// Later dots win ties since they are painted on top.
    pub fn nearest_dot(&self, x: f64, y: f64, max_distance: f64) -> Option<&Dot> {
        let limit = max_distance * max_distance;
        let mut best: Option<(&Dot, f64)> = None;
        for dot in &self.dots {
            let dist = (dot.cx - x).powi(2) + (dot.cy - y).powi(2);
            if dist > limit {
                continue;
            }
            if best.is_none_or(|(_, d)| dist <= d) {
                best = Some((dot, dist));
            }
        }
        best.map(|(dot, _)| dot)
    }
}

fn build_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let format = scale.tick_format(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick {
            value,
            offset: scale.map(value),
            label: format.format(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Margin, Viewport, WeatherObservation};

    fn obs(dew_point: f64, humidity: f64, cloud_cover: f64) -> WeatherObservation {
        WeatherObservation {
            date: None,
            dew_point,
            humidity,
            cloud_cover,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            obs(-9.3, 0.27, 0.0),
            obs(40.0, 0.6, 0.5),
            obs(74.2, 0.97, 1.0),
        ])
    }

    fn dims() -> Dimensions {
        // 1000 x 800 viewport -> 720 px square, 660 px bounds
        Dimensions::responsive(Viewport::new(1000.0, 800.0), 0.9, Margin::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn one_dot_per_observation_in_order() {
        let scene = ScatterScene::build(&sample(), dims(), &ChartConfig::default()).unwrap();
        assert_eq!(scene.dots.len(), 3);
        let indices: Vec<_> = scene.dots.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(scene.dots.iter().all(|d| d.r == 5.0));
    }

    #[test]
    fn scales_are_niced_and_y_points_up() {
        let scene = ScatterScene::build(&sample(), dims(), &ChartConfig::default()).unwrap();
        assert_eq!(scene.x_scale.domain(), (-10.0, 80.0));
        assert_eq!(scene.y_scale.domain(), (0.2, 1.0));
        assert_eq!(scene.y_scale.range(), (660.0, 0.0));

        // dew point 40 sits at 50/90 of the niced domain
        assert!(approx(scene.dots[1].cx, 660.0 * 50.0 / 90.0));
        // the most humid observation is nearest the top
        assert!(scene.dots[2].cy < scene.dots[0].cy);
    }

    #[test]
    fn color_follows_cloud_cover() {
        let scene = ScatterScene::build(&sample(), dims(), &ChartConfig::default()).unwrap();
        assert_eq!(scene.dots[0].fill, Rgb::new(135, 206, 235));
        assert_eq!(scene.dots[1].fill, Rgb::new(91, 143, 157));
        assert_eq!(scene.dots[2].fill, Rgb::new(47, 79, 79));
    }

    #[test]
    fn axes_and_labels() {
        let scene = ScatterScene::build(&sample(), dims(), &ChartConfig::default()).unwrap();

        let x_labels: Vec<_> = scene.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            x_labels,
            vec!["\u{2212}10", "0", "10", "20", "30", "40", "50", "60", "70", "80"]
        );
        assert_eq!(scene.x_axis.translate, (0.0, 660.0));
        assert_eq!(scene.x_axis.label.x, 330.0);
        assert_eq!(scene.x_axis.label.y, 700.0);

        let y_labels: Vec<_> = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(y_labels, vec!["0.2", "0.4", "0.6", "0.8", "1.0"]);
        assert_eq!(scene.y_axis.label.rotation, -90.0);
        assert_eq!(scene.y_axis.label.x, -30.0);
        assert_eq!(scene.y_axis.label.y, 330.0);
        assert_eq!(scene.origin, (50.0, 10.0));
    }

    #[test]
    fn tick_geometry() {
        let scene = ScatterScene::build(&sample(), dims(), &ChartConfig::default()).unwrap();
        let tick = &scene.y_axis.ticks[0];
        assert_eq!(scene.y_axis.tick_mark(tick), ((0.0, 660.0), (-6.0, 660.0)));
        assert_eq!(scene.y_axis.tick_label_anchor(tick), (-9.0, 660.0));
        assert_eq!(
            scene.x_axis.domain_path(),
            [(0.0, 666.0), (0.0, 660.0), (660.0, 660.0), (660.0, 666.0)]
        );
        assert_eq!(
            scene.y_axis.domain_path(),
            [(-6.0, 660.0), (0.0, 660.0), (0.0, 0.0), (-6.0, 0.0)]
        );
    }

    #[test]
    fn rebuild_for_new_viewport_replaces_geometry() {
        let config = ChartConfig::default();
        let small = Dimensions::responsive(Viewport::new(400.0, 400.0), 0.9, Margin::default());
        let a = ScatterScene::build(&sample(), dims(), &config).unwrap();
        let b = ScatterScene::build(&sample(), small, &config).unwrap();

        assert_eq!(b.width, 360.0);
        assert_eq!(b.dots.len(), a.dots.len());
        assert!(b.dots[2].cx < a.dots[2].cx);
    }

    #[test]
    fn empty_dataset_draws_axes_only() {
        let scene = ScatterScene::build(&Dataset::new(Vec::new()), dims(), &ChartConfig::default())
            .unwrap();
        assert!(scene.dots.is_empty());
        assert_eq!(scene.x_scale.domain(), (0.0, 1.0));
        assert!(!scene.x_axis.ticks.is_empty());
    }

    #[test]
    fn nearest_dot_hit_test() {
        let scene = ScatterScene::build(&sample(), dims(), &ChartConfig::default()).unwrap();
        let target = scene.dots[1];
        let hit = scene.nearest_dot(target.cx + 3.0, target.cy - 2.0, 12.0).unwrap();
        assert_eq!(hit.index, 1);
        assert!(scene.nearest_dot(-500.0, -500.0, 12.0).is_none());
    }

    #[test]
    fn invalid_palette_is_an_error() {
        let config = ChartConfig {
            color_from: "nope".into(),
            ..ChartConfig::default()
        };
        assert!(ScatterScene::build(&sample(), dims(), &config).is_err());
    }
}
