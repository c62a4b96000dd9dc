// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Paints a frame of draw commands onto a ratatui braille canvas.
//!
//! Store space has `y` pointing down; the canvas has it pointing up, so every `y` is flipped.
//! Alpha is flattened against the map background because terminal cells have no blending.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points, Rectangle},
        Widget,
    },
};

use crate::model::{Rgb, Waypoint, STORE_HEIGHT, STORE_WIDTH};
use crate::render::{DrawCommand, Rgba, Stroke};

const GLOW_BANDS: usize = 4;

/// Store units covered by one braille dot and one terminal cell.
#[derive(Debug, Clone, Copy)]
struct Raster {
    dot_x: f64,
    dot_y: f64,
    cell_width: f64,
}

impl Raster {
    fn for_area(area: Rect) -> Self {
        let cols = f64::from(area.width.max(1));
        let rows = f64::from(area.height.max(1));
        Self {
            dot_x: STORE_WIDTH / (cols * 2.0),
            dot_y: STORE_HEIGHT / (rows * 4.0),
            cell_width: STORE_WIDTH / cols,
        }
    }
}

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Canvas widget showing `commands`, sized for `area` (the area it will be rendered into).
pub(crate) fn map_canvas<'a>(
    commands: &'a [DrawCommand],
    background: Rgb,
    area: Rect,
) -> impl Widget + 'a {
    let raster = Raster::for_area(area);
    Canvas::default()
        .marker(Marker::Braille)
        .background_color(to_color(background))
        .x_bounds([0.0, STORE_WIDTH])
        .y_bounds([0.0, STORE_HEIGHT])
        .paint(move |ctx| {
            for command in commands {
                paint(ctx, command, background, raster);
            }
        })
}

fn flip(y: f64) -> f64 {
    STORE_HEIGHT - y
}

fn paint(ctx: &mut Context<'_>, command: &DrawCommand, background: Rgb, raster: Raster) {
    let flat = |color: Rgba| to_color(color.over(background));

    match command {
        DrawCommand::Clear { .. } => {}
        DrawCommand::FillRect { bounds, color } => {
            let color = flat(*color);
            let mut y = bounds.y;
            while y <= bounds.bottom() {
                ctx.draw(&CanvasLine::new(bounds.x, flip(y), bounds.right(), flip(y), color));
                y += raster.dot_y;
            }
            ctx.layer();
        }
        DrawCommand::StrokeRect { bounds, stroke } => {
            let color = flat(stroke.color);
            ctx.draw(&Rectangle {
                x: bounds.x,
                y: flip(bounds.bottom()),
                width: bounds.width,
                height: bounds.height,
                color,
            });
            if stroke.width >= 2.0 {
                ctx.draw(&Rectangle {
                    x: bounds.x + raster.dot_x,
                    y: flip(bounds.bottom()) + raster.dot_y,
                    width: bounds.width - 2.0 * raster.dot_x,
                    height: bounds.height - 2.0 * raster.dot_y,
                    color,
                });
            }
        }
        DrawCommand::Line { from, to, stroke } => paint_polyline(ctx, &[*from, *to], stroke, background),
        DrawCommand::Polyline { points, stroke } => paint_polyline(ctx, points, stroke, background),
        DrawCommand::Glow {
            center,
            radius_x,
            radius_y,
            color,
        } => {
            // Concentric bands fading towards the rim.
            for band in 0..GLOW_BANDS {
                let outer = 1.0 - band as f64 / GLOW_BANDS as f64;
                let band_color = color.with_alpha(color.alpha * (1.0 - outer * 0.75));
                let coords = ellipse_dots(*center, radius_x * outer, radius_y * outer, raster);
                ctx.draw(&Points {
                    coords: &coords,
                    color: flat(band_color),
                });
            }
            ctx.layer();
        }
        DrawCommand::Disc {
            center,
            radius,
            color,
        } => {
            let coords = ellipse_dots(*center, *radius, *radius, raster);
            ctx.draw(&Points {
                coords: &coords,
                color: flat(*color),
            });
            ctx.layer();
        }
        DrawCommand::Arrow {
            at,
            heading_degrees,
            size,
            color,
        } => {
            let color = flat(*color);
            let heading = heading_degrees.to_radians();
            let tip = Waypoint::new(at.x + heading.cos() * size / 2.0, at.y + heading.sin() * size / 2.0);
            for wing in [heading + 2.6, heading - 2.6] {
                let end = Waypoint::new(tip.x + wing.cos() * size, tip.y + wing.sin() * size);
                ctx.draw(&CanvasLine::new(tip.x, flip(tip.y), end.x, flip(end.y), color));
            }
        }
        DrawCommand::Text {
            at,
            text,
            font,
            color,
        } => {
            let mut style = Style::default().fg(flat(*color));
            if font.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            let half_width = text.chars().count() as f64 * raster.cell_width / 2.0;
            ctx.print(at.x - half_width, flip(at.y), Line::styled(text.clone(), style));
        }
    }
}

fn paint_polyline(ctx: &mut Context<'_>, points: &[Waypoint], stroke: &Stroke, background: Rgb) {
    let color = to_color(stroke.color.over(background));
    let segments = match stroke.dash {
        Some((on, off)) => dash_segments(points, on, off),
        None => points.windows(2).map(|pair| (pair[0], pair[1])).collect(),
    };
    for (from, to) in segments {
        ctx.draw(&CanvasLine::new(from.x, flip(from.y), to.x, flip(to.y), color));
    }
}

/// Splits a polyline into the "on" pieces of an `(on, off)` dash pattern.
///
/// The pattern phase carries across vertices, so corners do not restart the dash.
fn dash_segments(points: &[Waypoint], on: f64, off: f64) -> Vec<(Waypoint, Waypoint)> {
    if on <= 0.0 {
        return Vec::new();
    }
    let period = on + off.max(0.0);
    let mut out = Vec::new();
    let mut phase = 0.0;

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let length = from.distance_to(to);
        if length <= f64::EPSILON {
            continue;
        }
        let mut t = 0.0;
        while t < length {
            let within = phase % period;
            let (drawing, remaining) = if within < on {
                (true, on - within)
            } else {
                (false, period - within)
            };
            let step = remaining.min(length - t);
            if drawing {
                out.push((from.lerp(to, t / length), from.lerp(to, (t + step) / length)));
            }
            t += step;
            phase += step;
        }
    }
    out
}

/// Canvas coordinates of braille dots inside an axis-aligned ellipse.
fn ellipse_dots(center: Waypoint, radius_x: f64, radius_y: f64, raster: Raster) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    if radius_x <= 0.0 || radius_y <= 0.0 {
        return coords;
    }
    let mut y = center.y - radius_y;
    while y <= center.y + radius_y {
        let ny = (y - center.y) / radius_y;
        let half = radius_x * (1.0 - ny * ny).max(0.0).sqrt();
        let mut x = center.x - half;
        while x <= center.x + half {
            coords.push((x, flip(y)));
            x += raster.dot_x;
        }
        y += raster.dot_y;
    }
    coords
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{dash_segments, ellipse_dots, Raster};
    use crate::model::Waypoint;

    fn close(a: Waypoint, b: Waypoint) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn dashes_alternate_along_a_straight_line() {
        let dashes = dash_segments(&[Waypoint::new(0.0, 0.0), Waypoint::new(45.0, 0.0)], 10.0, 10.0);
        let expected = [(0.0, 10.0), (20.0, 30.0), (40.0, 45.0)];
        assert_eq!(dashes.len(), expected.len());
        for ((from, to), (x0, x1)) in dashes.iter().zip(expected) {
            assert!(close(*from, Waypoint::new(x0, 0.0)));
            assert!(close(*to, Waypoint::new(x1, 0.0)));
        }
    }

    #[test]
    fn dash_phase_carries_across_corners() {
        let dashes = dash_segments(
            &[
                Waypoint::new(0.0, 0.0),
                Waypoint::new(15.0, 0.0),
                Waypoint::new(15.0, 30.0),
            ],
            10.0,
            10.0,
        );
        assert_eq!(dashes.len(), 3);
        // Second leg starts in the gap left over from the first.
        assert!(close(dashes[1].0, Waypoint::new(15.0, 5.0)));
    }

    #[test]
    fn ellipse_dots_stay_inside_radius() {
        let raster = Raster::for_area(Rect::new(0, 0, 100, 30));
        let center = Waypoint::new(500.0, 300.0);
        let dots = ellipse_dots(center, 40.0, 20.0, raster);
        assert!(!dots.is_empty());
        for (x, y) in dots {
            let dy = 600.0 - y - center.y;
            let dx = x - center.x;
            assert!((dx / 40.0).powi(2) + (dy / 20.0).powi(2) <= 1.0 + 1e-9);
        }
        assert!(ellipse_dots(center, 0.0, 10.0, raster).is_empty());
    }
}
