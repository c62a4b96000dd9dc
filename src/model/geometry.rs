// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Store-space geometry.
//!
//! Every layout rectangle and waypoint lives in a fixed logical space of
//! [`STORE_WIDTH`] × [`STORE_HEIGHT`] units, independent of the physical display size.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const STORE_WIDTH: f64 = 1000.0;
pub const STORE_HEIGHT: f64 = 600.0;

/// A point in store space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
}

impl Waypoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Screen-space heading towards `other` in degrees, in `(-180, 180]`.
    ///
    /// `y` grows downwards, so a positive heading points "down" on the map.
    pub fn heading_degrees_to(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }

    /// Point at fraction `t` of the way to `other` (`t` is not clamped).
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }
}

/// Axis-aligned rectangle in store space; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn centroid(&self) -> Waypoint {
        Waypoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, point: Waypoint) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Closed range the shopper position is kept inside so the marker stays on the drawable interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkArea {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl WalkArea {
    pub const INTERIOR: Self = Self {
        min_x: 50.0,
        max_x: 950.0,
        min_y: 50.0,
        max_y: 550.0,
    };

    pub fn clamp(&self, point: Waypoint) -> Waypoint {
        Waypoint::new(
            point.x.clamp(self.min_x, self.max_x),
            point.y.clamp(self.min_y, self.max_y),
        )
    }

    pub fn contains(&self, point: Waypoint) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

impl Default for WalkArea {
    fn default() -> Self {
        Self::INTERIOR
    }
}

/// Where the shopper starts before any simulated movement.
pub const DEFAULT_USER_LOCATION: Waypoint = Waypoint::new(100.0, 250.0);
