// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text adapter: rasterizes a frame of [`DrawCommand`]s into a Unicode character grid.
//!
//! Colors are dropped. Shapes fainter than [`MIN_VISIBLE_ALPHA`] (the background grid) are
//! skipped so the map stays readable at terminal resolution.

use std::ops::RangeInclusive;

use super::canvas::{Canvas, CanvasError};
use super::command::{DrawCommand, Stroke};
use super::text::{canvas_to_string_trimmed, truncate_with_ellipsis};
use crate::model::{Waypoint, STORE_HEIGHT, STORE_WIDTH};

pub const MIN_VISIBLE_ALPHA: f64 = 0.1;

/// Text frame sizes accepted by the print mode and `map.render_text`.
pub const TEXT_COLS_RANGE: RangeInclusive<usize> = 20..=400;
pub const TEXT_ROWS_RANGE: RangeInclusive<usize> = 8..=200;

const GLOW_CHAR: char = '░';
const PATH_GLOW_CHAR: char = '·';
const PATH_CHAR: char = '•';
const DISC_CHAR: char = '●';
const ARROWS: [char; 8] = ['→', '↘', '↓', '↙', '←', '↖', '↑', '↗'];

/// Maps store coordinates onto a `cols` x `rows` grid.
#[derive(Debug, Clone, Copy)]
struct CellMapper {
    cols: usize,
    rows: usize,
}

impl CellMapper {
    fn cell(&self, point: Waypoint) -> (i64, i64) {
        (
            scale(point.x, STORE_WIDTH, self.cols),
            scale(point.y, STORE_HEIGHT, self.rows),
        )
    }

    fn span_x(&self, length: f64) -> f64 {
        length / STORE_WIDTH * self.cols.saturating_sub(1) as f64
    }

    fn span_y(&self, length: f64) -> f64 {
        length / STORE_HEIGHT * self.rows.saturating_sub(1) as f64
    }
}

fn scale(value: f64, extent: f64, cells: usize) -> i64 {
    let last = cells.saturating_sub(1) as f64;
    (value / extent * last).round() as i64
}

/// Rasterizes one frame into a `cols` x `rows` grid and returns the trimmed text.
pub fn render_text(commands: &[DrawCommand], cols: usize, rows: usize) -> Result<String, CanvasError> {
    let mut canvas = Canvas::new(cols, rows)?;
    let mapper = CellMapper { cols, rows };

    for command in commands {
        paint(&mut canvas, mapper, command);
    }
    Ok(canvas_to_string_trimmed(&canvas))
}

fn paint(canvas: &mut Canvas, mapper: CellMapper, command: &DrawCommand) {
    match command {
        DrawCommand::Clear { .. } => canvas.fill(' '),
        // Fills would bury every label at this resolution.
        DrawCommand::FillRect { .. } => {}
        DrawCommand::StrokeRect { bounds, stroke } => {
            if stroke.color.alpha < MIN_VISIBLE_ALPHA {
                return;
            }
            let top_left = mapper.cell(Waypoint::new(bounds.x, bounds.y));
            let bottom_right = mapper.cell(Waypoint::new(bounds.right(), bounds.bottom()));
            canvas.draw_box(top_left, bottom_right, stroke.width >= 2.0);
        }
        DrawCommand::Line { from, to, stroke } => {
            paint_polyline(canvas, mapper, &[*from, *to], stroke);
        }
        DrawCommand::Polyline { points, stroke } => {
            paint_polyline(canvas, mapper, points, stroke);
        }
        DrawCommand::Glow {
            center,
            radius_x,
            radius_y,
            color,
        } => {
            if color.alpha < MIN_VISIBLE_ALPHA {
                return;
            }
            let (cx, cy) = mapper.cell(*center);
            canvas.fill_ellipse_blank(
                (cx as f64, cy as f64),
                (mapper.span_x(*radius_x), mapper.span_y(*radius_y)),
                GLOW_CHAR,
            );
        }
        DrawCommand::Disc { center, .. } => {
            let (x, y) = mapper.cell(*center);
            canvas.plot(x, y, DISC_CHAR);
        }
        DrawCommand::Arrow {
            at,
            heading_degrees,
            ..
        } => {
            let (x, y) = mapper.cell(*at);
            canvas.plot(x, y, arrow_glyph(*heading_degrees));
        }
        DrawCommand::Text { at, text, .. } => {
            let (x, y) = mapper.cell(*at);
            canvas.write_centered(x, y, &truncate_with_ellipsis(text, mapper.cols));
        }
    }
}

fn paint_polyline(canvas: &mut Canvas, mapper: CellMapper, points: &[Waypoint], stroke: &Stroke) {
    if stroke.color.alpha < MIN_VISIBLE_ALPHA {
        return;
    }
    // Faint wide strokes are glows; they go under the solid path glyphs.
    let glyph = if stroke.color.alpha < 0.5 {
        PATH_GLOW_CHAR
    } else {
        PATH_CHAR
    };
    let dash_cells = stroke
        .dash
        .map(|(on, _)| mapper.span_x(on).round().max(1.0) as usize);

    for pair in points.windows(2) {
        let from = mapper.cell(pair[0]);
        let to = mapper.cell(pair[1]);
        canvas.draw_segment(from, to, |step| match dash_cells {
            Some(on) if glyph == PATH_CHAR && (step / on) % 2 == 1 => None,
            _ => Some(glyph),
        });
    }
}

/// Eight-way arrow glyph for a screen-space heading (`0` = right, `90` = down).
pub fn arrow_glyph(heading_degrees: f64) -> char {
    let normalized = heading_degrees.rem_euclid(360.0);
    let octant = ((normalized + 22.5) / 45.0).floor() as usize % ARROWS.len();
    ARROWS[octant]
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{arrow_glyph, render_text};
    use crate::map::AnimationState;
    use crate::model::{section_id, Store, Waypoint};
    use crate::render::scene::{render_scene, Scene};
    use crate::render::style::MapStyle;

    #[rstest]
    #[case(0.0, '→')]
    #[case(90.0, '↓')]
    #[case(180.0, '←')]
    #[case(-90.0, '↑')]
    #[case(45.0, '↘')]
    #[case(350.0, '→')]
    fn arrow_glyph_picks_nearest_octant(#[case] heading: f64, #[case] expected: char) {
        assert_eq!(arrow_glyph(heading), expected);
    }

    #[test]
    fn idle_map_shows_labels_without_grid_or_route() {
        let store = Store::builtin();
        let scene = Scene {
            sections: store.sections(),
            highlight: None,
            path: &[],
            destination_label: None,
            animation: AnimationState::default(),
            user_location: Waypoint::new(100.0, 250.0),
        };
        let text = render_text(&render_scene(&scene, &MapStyle::default()), 120, 36)
            .expect("render");

        assert!(text.contains("Produce"));
        assert!(text.contains("Entrance"));
        assert!(text.contains("You are here"));
        assert!(text.contains('●'));
        assert!(!text.contains('•'));
        assert!(!text.contains('·'));
        assert!(text.lines().count() <= 36);
        assert!(text.lines().all(|line| line.chars().count() <= 120));
    }

    #[test]
    fn highlighted_route_shows_path_and_heavy_border() {
        let store = Store::builtin();
        let highlight = section_id("Produce");
        let path = [
            Waypoint::new(100.0, 250.0),
            Waypoint::new(40.0, 510.0),
            Waypoint::new(150.0, 150.0),
        ];
        let scene = Scene {
            sections: store.sections(),
            highlight: Some(&highlight),
            path: &path,
            destination_label: Some("Organic Apples"),
            animation: AnimationState::at(45),
            user_location: path[0],
        };
        let text = render_text(&render_scene(&scene, &MapStyle::default()), 120, 36)
            .expect("render");

        assert!(text.contains('•'));
        assert!(text.contains('┏'));
        assert!(text.contains("Organic Apples"));
    }

    #[test]
    fn empty_canvas_renders_empty_text() {
        assert_eq!(render_text(&[], 0, 0).expect("render"), "");
    }
}
