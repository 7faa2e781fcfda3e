use dewplot_core::{Rgb, ScatterScene};
use gpui::{
    BorderStyle, Bounds, Canvas, PathBuilder, Pixels, Point, Window, canvas, point, px, quad, rgb,
    size, transparent_black,
};

/// Paints background, dots and axis strokes. Text is laid out separately as
/// positioned elements (see `axis.rs`).
pub(super) fn scatter_canvas(scene: ScatterScene, hover: Option<usize>) -> Canvas<ScatterScene> {
    canvas(
        move |_, _, _| scene.clone(),
        move |bounds, scene, window, _| {
            // the whole surface is repainted, nothing from the previous scene survives
            window.paint_quad(quad(
                bounds,
                px(0.),
                color(scene.background),
                px(0.),
                transparent_black(),
                BorderStyle::default(),
            ));

            let width = f32::from(bounds.size.width);
            let height = f32::from(bounds.size.height);
            if width <= 0.0 || height <= 0.0 {
                return;
            }

            let ox = f32::from(bounds.origin.x);
            let oy = f32::from(bounds.origin.y);
            let at = |(x, y): (f64, f64)| -> Point<Pixels> {
                let (cx, cy) = scene.to_chart((x, y));
                point(px(ox + cx as f32), px(oy + cy as f32))
            };

            for dot in &scene.dots {
                let center = at((dot.cx, dot.cy));
                let r = dot.r as f32;
                let fill = color(dot.fill);
                window.paint_quad(quad(
                    Bounds {
                        origin: point(center.x - px(r), center.y - px(r)),
                        size: size(px(r * 2.0), px(r * 2.0)),
                    },
                    px(r),
                    fill,
                    px(0.),
                    fill,
                    BorderStyle::default(),
                ));
            }

            if let Some(dot) = hover.and_then(|idx| scene.dots.get(idx)) {
                let center = at((dot.cx, dot.cy));
                let r = dot.r as f32 + 2.0;
                window.paint_quad(quad(
                    Bounds {
                        origin: point(center.x - px(r), center.y - px(r)),
                        size: size(px(r * 2.0), px(r * 2.0)),
                    },
                    px(r),
                    transparent_black(),
                    px(1.5),
                    rgb(0xf59e0b),
                    BorderStyle::default(),
                ));
            }

            for axis in [&scene.x_axis, &scene.y_axis] {
                let stroke = color(axis.color);
                let domain = axis.domain_path().map(at);
                stroke_path(window, &domain, stroke);
                for tick in &axis.ticks {
                    let (from, to) = axis.tick_mark(tick);
                    stroke_path(window, &[at(from), at(to)], stroke);
                }
            }
        },
    )
}

fn stroke_path(window: &mut Window, points: &[Point<Pixels>], color: gpui::Rgba) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    let mut builder = PathBuilder::stroke(px(1.));
    builder.move_to(*first);
    for point in rest {
        builder.line_to(*point);
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

pub(super) fn color(c: Rgb) -> gpui::Rgba {
    rgb(c.to_hex_u32())
}
