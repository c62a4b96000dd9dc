// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{Bounds, Rgb, Waypoint};

/// Color with straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub const fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            rgb: self.rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Flattens this color over an opaque background.
    pub fn over(self, background: Rgb) -> Rgb {
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = f64::from(fg) * self.alpha + f64::from(bg) * (1.0 - self.alpha);
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(self.rgb.r, background.r),
            mix(self.rgb.g, background.g),
            mix(self.rgb.b, background.b),
        )
    }
}

impl From<Rgb> for Rgba {
    fn from(value: Rgb) -> Self {
        Self::opaque(value)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:.2}", self.rgb, self.alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    /// `(on, off)` lengths in store units; `None` draws a solid line.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size: u16,
    pub bold: bool,
}

/// One immediate-mode drawing operation in store-space coordinates.
///
/// A frame is an ordered list of these; later commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipes the surface and paints the background.
    Clear { background: Rgb },
    FillRect { bounds: Bounds, color: Rgba },
    StrokeRect { bounds: Bounds, stroke: Stroke },
    Line {
        from: Waypoint,
        to: Waypoint,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Waypoint>,
        stroke: Stroke,
    },
    /// Soft elliptical glow that fades from `color` at the center to transparent at the rim.
    Glow {
        center: Waypoint,
        radius_x: f64,
        radius_y: f64,
        color: Rgba,
    },
    Disc {
        center: Waypoint,
        radius: f64,
        color: Rgba,
    },
    /// Arrowhead pointing along `heading_degrees` (screen space, `0` = +x).
    Arrow {
        at: Waypoint,
        heading_degrees: f64,
        size: f64,
        color: Rgba,
    },
    /// Text centered horizontally on `at`.
    Text {
        at: Waypoint,
        text: String,
        font: Font,
        color: Rgba,
    },
}

#[cfg(test)]
mod tests {
    use super::Rgba;
    use crate::model::Rgb;

    #[test]
    fn over_blends_against_background() {
        let white = Rgba::opaque(Rgb::new(255, 255, 255));
        let black = Rgb::new(0, 0, 0);
        assert_eq!(white.over(black), Rgb::new(255, 255, 255));
        assert_eq!(white.with_alpha(0.5).over(black), Rgb::new(128, 128, 128));
        assert_eq!(white.with_alpha(0.0).over(black), black);
    }

    #[test]
    fn with_alpha_clamps() {
        let color = Rgba::opaque(Rgb::new(1, 2, 3));
        assert_eq!(color.with_alpha(2.0).alpha, 1.0);
        assert_eq!(color.with_alpha(-1.0).alpha, 0.0);
    }
}
