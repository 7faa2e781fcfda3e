use std::path::Path;

use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::{
    ExportError,
    color::Rgb,
    scene::{Axis, AxisLabel, AxisOrient, ScatterScene},
};

const FONT_FAMILY: &str = "sans-serif";
/// The SVG backend writes `font-size` as the requested size divided by this
/// factor, so requested sizes are scaled up by it.
const SVG_FONT_SCALE: f64 = 1.24;

pub fn render_svg(scene: &ScatterScene) -> Result<String, ExportError> {
    let size = (
        scene.width.round().max(1.0) as u32,
        scene.height.round().max(1.0) as u32,
    );
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        root.fill(&color(scene.background)).map_err(draw_err)?;

        for dot in &scene.dots {
            let center = px(scene.to_chart((dot.cx, dot.cy)));
            let radius = dot.r.round().max(1.0) as i32;
            root.draw(&Circle::new(center, radius, color(dot.fill).filled()))
                .map_err(draw_err)?;
        }

        draw_axis(&root, scene, &scene.x_axis)?;
        draw_axis(&root, scene, &scene.y_axis)?;

        root.present().map_err(draw_err)?;
    }
    Ok(with_title(buf, &scene.title))
}

pub fn export_svg(scene: &ScatterScene, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let svg = render_svg(scene)?;
    std::fs::write(path.as_ref(), svg)?;
    info!(
        path = %path.as_ref().display(),
        dots = scene.dots.len(),
        width = scene.width,
        height = scene.height,
        "exported scatter plot"
    );
    Ok(())
}

fn draw_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    scene: &ScatterScene,
    axis: &Axis,
) -> Result<(), ExportError> {
    let stroke = color(axis.color).stroke_width(1);
    let domain: Vec<_> = axis
        .domain_path()
        .into_iter()
        .map(|point| px(scene.to_chart(point)))
        .collect();
    root.draw(&PathElement::new(domain, stroke)).map_err(draw_err)?;

    let anchor = match axis.orient {
        AxisOrient::Bottom => Pos::new(HPos::Center, VPos::Top),
        AxisOrient::Left => Pos::new(HPos::Right, VPos::Center),
    };
    let tick_color = color(axis.color);
    for tick in &axis.ticks {
        let (from, to) = axis.tick_mark(tick);
        root.draw(&PathElement::new(
            vec![px(scene.to_chart(from)), px(scene.to_chart(to))],
            stroke,
        ))
        .map_err(draw_err)?;

        let style = (FONT_FAMILY, font_size(axis.tick_font_size))
            .into_font()
            .color(&tick_color)
            .pos(anchor);
        let at = px(scene.to_chart(axis.tick_label_anchor(tick)));
        root.draw(&Text::new(tick.label.as_str(), at, style))
            .map_err(draw_err)?;
    }

    draw_label(root, scene, &axis.label)
}

fn draw_label<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    scene: &ScatterScene,
    label: &AxisLabel,
) -> Result<(), ExportError> {
    let font = (FONT_FAMILY, font_size(label.font_size)).into_font();
    let font = if label.rotation == 0.0 {
        font
    } else {
        font.transform(rotation(label.rotation))
    };
    let style = font
        .color(&color(label.color))
        .pos(Pos::new(HPos::Center, VPos::Center));
    let at = px(scene.to_chart((label.x, label.y)));
    root.draw(&Text::new(label.text.as_str(), at, style))
        .map_err(draw_err)
}

fn font_size(css_px: f64) -> f64 {
    css_px * SVG_FONT_SCALE
}

fn rotation(degrees: f64) -> FontTransform {
    match degrees.rem_euclid(360.0).round() as i32 {
        90 => FontTransform::Rotate90,
        180 => FontTransform::Rotate180,
        270 => FontTransform::Rotate270,
        _ => FontTransform::None,
    }
}

fn with_title(mut svg: String, title: &str) -> String {
    if title.is_empty() {
        return svg;
    }
    let Some(open) = svg.find("<svg") else {
        return svg;
    };
    let Some(close) = svg[open..].find('>') else {
        return svg;
    };
    let at = open + close + 1;
    svg.insert_str(at, &format!("\n<title>{}</title>", escape_xml(title)));
    svg
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.r, rgb.g, rgb.b)
}

/// The backend addresses whole pixels, so positions and radii are rounded.
fn px((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn draw_err(err: impl std::fmt::Display) -> ExportError {
    ExportError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChartConfig, Dataset, Dimensions, Margin, Viewport, WeatherObservation};
    use std::fs;

    fn scene() -> ScatterScene {
        let data = Dataset::new(
            [(-9.3, 0.27, 0.0), (40.0, 0.6, 0.5), (74.2, 0.97, 1.0), (55.0, 0.8, 0.3)]
                .into_iter()
                .map(|(dew_point, humidity, cloud_cover)| WeatherObservation {
                    date: None,
                    dew_point,
                    humidity,
                    cloud_cover,
                })
                .collect(),
        );
        let dims = Dimensions::responsive(Viewport::new(1000.0, 800.0), 0.9, Margin::default());
        ScatterScene::build(&data, dims, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn svg_contains_every_dot_and_label() {
        let svg = render_svg(&scene()).unwrap();

        assert!(svg.contains(r#"width="720""#));
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.contains("Dew point (\u{b0}F)"));
        assert!(svg.contains("Relative humidity"));
        assert!(svg.contains("rotate("));
        assert!(svg.contains("<title>Scatter Plot plotting dew point"));

        let sizes = font_sizes(&svg);
        assert!(sizes.iter().any(|s| (s - 22.4).abs() < 1e-6), "{sizes:?}");
        assert!(sizes.iter().any(|s| (s - 10.0).abs() < 1e-6), "{sizes:?}");
        assert!(sizes.iter().all(|s| (s - 22.4).abs() < 1e-6 || (s - 10.0).abs() < 1e-6));
    }

    fn font_sizes(svg: &str) -> Vec<f64> {
        svg.split("font-size=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next()?.parse().ok())
            .collect()
    }

    #[test]
    fn fractional_radius_snaps_to_whole_pixels() {
        let config = ChartConfig {
            dot_radius: 3.5,
            ..ChartConfig::default()
        };
        let dims = Dimensions::responsive(Viewport::new(1000.0, 800.0), 0.9, Margin::default());
        let data = Dataset::new(vec![WeatherObservation {
            date: None,
            dew_point: 20.0,
            humidity: 0.5,
            cloud_cover: 0.5,
        }]);
        let scene = ScatterScene::build(&data, dims, &config).unwrap();
        assert_eq!(scene.dots[0].r, 3.5);

        let svg = render_svg(&scene).unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains(r#"r="4""#));
    }

    #[test]
    fn export_writes_file() {
        let path = std::env::temp_dir().join(format!("dewplot-export-{}.svg", std::process::id()));
        export_svg(&scene(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(written.starts_with("<svg") || written.contains("<svg"));
        assert_eq!(written.matches("<circle").count(), 4);
    }

    #[test]
    fn title_is_escaped() {
        let out = with_title("<svg a=\"1\">\n</svg>".into(), "a < b & c");
        assert!(out.contains("<title>a &lt; b &amp; c</title>"));
    }
}
