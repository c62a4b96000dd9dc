// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';
pub const BOX_TOP_LEFT: char = '┌';
pub const BOX_TOP_RIGHT: char = '┐';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_BOTTOM_RIGHT: char = '┘';

const HEAVY_HORIZONTAL: char = '━';
const HEAVY_VERTICAL: char = '┃';
const HEAVY_CORNERS: [char; 4] = ['┏', '┓', '┗', '┛'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        BOX_TOP_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::DOWN)),
        BOX_TOP_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::DOWN)),
        BOX_BOTTOM_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::UP)),
        BOX_BOTTOM_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::UP)),
        _ => None,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        1..=3 => BOX_HORIZONTAL,
        4 | 8 | 12 => BOX_VERTICAL,
        10 => BOX_TOP_LEFT,
        9 => BOX_TOP_RIGHT,
        6 => BOX_BOTTOM_LEFT,
        5 => BOX_BOTTOM_RIGHT,
        14 => '├',
        13 => '┤',
        11 => '┬',
        7 => '┴',
        _ => '┼',
    }
}

/// A fixed-size character grid the text adapter rasterizes map frames into.
///
/// Box-drawing characters written on top of each other merge into junctions, so adjacent
/// section outlines share borders instead of overwriting them. Any other character overwrites.
/// Shape helpers take signed coordinates and clip silently; only the single-cell accessors
/// report out-of-bounds positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    box_edges: Vec<BoxEdges>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![' '; len],
            box_edges: vec![BoxEdges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        let edges = self.box_edges[idx];
        Ok(if edges.is_empty() {
            self.cells[idx]
        } else {
            box_char_from_edges(edges)
        })
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        match box_edges_from_char(ch) {
            Some(edges) => self.box_edges[idx] = self.box_edges[idx].union(edges),
            None => {
                self.cells[idx] = ch;
                self.box_edges[idx] = BoxEdges::NONE;
            }
        }
        Ok(())
    }

    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
        self.box_edges.fill(BoxEdges::NONE);
    }

    /// Sets a cell if it lies on the canvas.
    pub fn plot(&mut self, x: i64, y: i64, ch: char) {
        if let Some((x, y)) = self.clip(x, y) {
            let _ = self.set(x, y, ch);
        }
    }

    /// Sets a cell only if nothing has been drawn there yet.
    pub fn plot_if_blank(&mut self, x: i64, y: i64, ch: char) {
        if let Some((x, y)) = self.clip(x, y) {
            if self.get(x, y) == Ok(' ') {
                let _ = self.set(x, y, ch);
            }
        }
    }

    /// Writes `text` with its middle character at column `cx`, clipping at both edges.
    pub fn write_centered(&mut self, cx: i64, y: i64, text: &str) {
        let len = text.chars().count() as i64;
        let start = cx - len / 2;
        for (offset, ch) in text.chars().enumerate() {
            self.plot(start + offset as i64, y, ch);
        }
    }

    /// Rasterizes a straight segment, calling `pick` with the step index to choose each glyph.
    ///
    /// Returning `None` from `pick` leaves that cell untouched, which is how dashes are drawn.
    pub fn draw_segment(
        &mut self,
        (x0, y0): (i64, i64),
        (x1, y1): (i64, i64),
        mut pick: impl FnMut(usize) -> Option<char>,
    ) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        let mut step = 0usize;

        loop {
            if let Some(ch) = pick(step) {
                self.plot(x, y, ch);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            step += 1;
        }
    }

    /// Outlines the rectangle spanning both corners (inclusive), clipped to the canvas.
    ///
    /// `heavy` boxes use thick glyphs that overwrite instead of merging.
    pub fn draw_box(&mut self, (x0, y0): (i64, i64), (x1, y1): (i64, i64), heavy: bool) {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        let (h, v, corners) = if heavy {
            (HEAVY_HORIZONTAL, HEAVY_VERTICAL, HEAVY_CORNERS)
        } else {
            (
                BOX_HORIZONTAL,
                BOX_VERTICAL,
                [BOX_TOP_LEFT, BOX_TOP_RIGHT, BOX_BOTTOM_LEFT, BOX_BOTTOM_RIGHT],
            )
        };

        if min_x == max_x || min_y == max_y {
            self.draw_segment((min_x, min_y), (max_x, max_y), |_| {
                Some(if min_y == max_y { h } else { v })
            });
            return;
        }

        for x in (min_x + 1)..max_x {
            self.plot(x, min_y, h);
            self.plot(x, max_y, h);
        }
        for y in (min_y + 1)..max_y {
            self.plot(min_x, y, v);
            self.plot(max_x, y, v);
        }
        self.plot(min_x, min_y, corners[0]);
        self.plot(max_x, min_y, corners[1]);
        self.plot(min_x, max_y, corners[2]);
        self.plot(max_x, max_y, corners[3]);
    }

    /// Fills blank cells inside an axis-aligned ellipse.
    pub fn fill_ellipse_blank(&mut self, (cx, cy): (f64, f64), (rx, ry): (f64, f64), ch: char) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let y_range = ((cy - ry).floor() as i64)..=((cy + ry).ceil() as i64);
        for y in y_range {
            let ny = (y as f64 - cy) / ry;
            if ny.abs() > 1.0 {
                continue;
            }
            let half = rx * (1.0 - ny * ny).sqrt();
            for x in ((cx - half).round() as i64)..=((cx + half).round() as i64) {
                self.plot_if_blank(x, y, ch);
            }
        }
    }

    fn clip(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y * self.width) + x)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                let ch = self.get(x, y).map_err(|_| fmt::Error)?;
                f.write_char(ch)?;
            }
            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas"),
        }
    }
}

impl std::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError};

    #[test]
    fn set_and_get_report_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2).expect("canvas");
        assert_eq!(
            canvas.set(2, 0, 'X'),
            Err(CanvasError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            })
        );
        canvas.set(1, 1, 'X').expect("set");
        assert_eq!(canvas.get(1, 1), Ok('X'));
    }

    #[test]
    fn rejects_area_overflow() {
        assert_eq!(
            Canvas::new(usize::MAX, 2).unwrap_err(),
            CanvasError::AreaOverflow {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn adjacent_boxes_merge_shared_border() {
        let mut canvas = Canvas::new(7, 3).expect("canvas");
        canvas.draw_box((0, 0), (3, 2), false);
        canvas.draw_box((3, 0), (6, 2), false);
        assert_eq!(canvas.to_string(), "┌──┬──┐\n│  │  │\n└──┴──┘");
    }

    #[test]
    fn heavy_box_overwrites() {
        let mut canvas = Canvas::new(4, 3).expect("canvas");
        canvas.draw_box((0, 0), (3, 2), true);
        assert_eq!(canvas.to_string(), "┏━━┓\n┃  ┃\n┗━━┛");
    }

    #[test]
    fn shapes_clip_instead_of_failing() {
        let mut canvas = Canvas::new(4, 2).expect("canvas");
        canvas.draw_box((-2, -1), (1, 1), false);
        canvas.write_centered(0, 0, "abc");
        canvas.write_centered(3, 1, "xyz");
        assert_eq!(canvas.to_string(), "bc│ \n──┘x");
    }

    #[test]
    fn draw_segment_can_skip_cells_for_dashes() {
        let mut canvas = Canvas::new(6, 1).expect("canvas");
        canvas.draw_segment((0, 0), (5, 0), |step| (step % 2 == 0).then_some('*'));
        assert_eq!(canvas.to_string(), "* * * ");
    }

    #[test]
    fn ellipse_fill_keeps_existing_cells() {
        let mut canvas = Canvas::new(5, 3).expect("canvas");
        canvas.plot(2, 1, 'X');
        canvas.fill_ellipse_blank((2.0, 1.0), (2.0, 1.0), '░');
        assert_eq!(canvas.get(2, 1), Ok('X'));
        assert_eq!(canvas.get(0, 1), Ok('░'));
        assert_eq!(canvas.get(0, 0), Ok(' '));
    }
}
