// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Product, Waypoint};

/// Store-space units per meter.
pub const UNITS_PER_METER: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Forward,
    Destination,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Forward => "forward",
            Self::Destination => "destination",
        }
    }

    pub const fn arrow(self) -> char {
        match self {
            Self::Left => '←',
            Self::Right => '→',
            Self::Forward => '↑',
            Self::Destination => '◎',
        }
    }

    /// Classifies a screen-space heading in degrees.
    ///
    /// This is not compass-relative: "forward" covers both vertical directions and the bands are
    /// fixed regardless of the previous heading.
    pub fn from_heading(degrees: f64) -> Self {
        if degrees > -45.0 && degrees < 45.0 {
            Self::Right
        } else if (45.0..135.0).contains(&degrees) || (-135.0..=-45.0).contains(&degrees) {
            Self::Forward
        } else {
            Self::Left
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NavigationStep {
    pub instruction: String,
    pub distance_meters: u32,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Turns a waypoint sequence into one instruction per segment.
///
/// Every segment but the last reads "Turn {direction} and continue for {n}m"; the last one
/// points at the product's shelf. Paths with fewer than two waypoints yield no steps.
pub fn build_steps(path: &[Waypoint], product: &Product) -> Vec<NavigationStep> {
    if path.len() < 2 {
        return Vec::new();
    }

    let last_segment = path.len() - 1;
    path.windows(2)
        .enumerate()
        .map(|(idx, pair)| {
            let (prev, curr) = (pair[0], pair[1]);
            let distance_meters = to_meters(prev.distance_to(curr));

            if idx + 1 == last_segment {
                return NavigationStep {
                    instruction: format!("Look for {}", product.name()),
                    distance_meters,
                    direction: Direction::Destination,
                    location: Some(product.location().to_string()),
                };
            }

            let direction = Direction::from_heading(prev.heading_degrees_to(curr));
            NavigationStep {
                instruction: format!("Turn {direction} and continue for {distance_meters}m"),
                distance_meters,
                direction,
                location: None,
            }
        })
        .collect()
}

pub fn total_distance_meters(steps: &[NavigationStep]) -> u32 {
    steps
        .iter()
        .map(|step| step.distance_meters)
        .fold(0u32, u32::saturating_add)
}

fn to_meters(units: f64) -> u32 {
    (units / UNITS_PER_METER).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{build_steps, total_distance_meters, Direction};
    use crate::model::{Store, Waypoint};
    use crate::query::find_product_by_id;

    #[rstest]
    #[case(0.0, Direction::Right)]
    #[case(44.9, Direction::Right)]
    #[case(-44.9, Direction::Right)]
    #[case(45.0, Direction::Forward)]
    #[case(90.0, Direction::Forward)]
    #[case(134.9, Direction::Forward)]
    #[case(135.0, Direction::Left)]
    #[case(180.0, Direction::Left)]
    #[case(-45.0, Direction::Forward)]
    #[case(-135.0, Direction::Forward)]
    #[case(-135.1, Direction::Left)]
    fn classifies_heading_bands(#[case] degrees: f64, #[case] expected: Direction) {
        assert_eq!(Direction::from_heading(degrees), expected);
    }

    #[rstest]
    #[case((1.0, 0.0), Direction::Right)]
    #[case((0.0, 1.0), Direction::Forward)]
    #[case((-1.0, 0.0), Direction::Left)]
    fn classifies_unit_segments(#[case] vector: (f64, f64), #[case] expected: Direction) {
        let product = find_product_by_id(Store::builtin(), "P002").expect("product");
        let origin = Waypoint::new(100.0, 100.0);
        let turn = Waypoint::new(origin.x + vector.0, origin.y + vector.1);
        let path = [origin, turn, Waypoint::new(500.0, 500.0)];

        let steps = build_steps(&path, product);
        assert_eq!(steps[0].direction, expected);
    }

    #[test]
    fn two_point_path_is_a_single_destination_step() {
        let product = find_product_by_id(Store::builtin(), "P004").expect("product");
        let path = [Waypoint::new(100.0, 250.0), Waypoint::new(840.0, 125.0)];

        let steps = build_steps(&path, product);
        assert_eq!(steps.len(), 1);
        let step = &steps[0];
        assert_eq!(step.direction, Direction::Destination);
        assert_eq!(step.instruction, "Look for Organic Milk");
        assert_eq!(step.distance_meters, 75);
        let location = step.location.as_deref().expect("location");
        assert_eq!(location, "Aisle 4, Rack A, Shelf Middle");
    }

    #[test]
    fn turn_steps_carry_distance_in_instruction() {
        let product = find_product_by_id(Store::builtin(), "P001").expect("product");
        let path = [
            Waypoint::new(100.0, 250.0),
            Waypoint::new(40.0, 510.0),
            Waypoint::new(150.0, 150.0),
        ];

        let steps = build_steps(&path, product);
        assert_eq!(steps.len(), path.len() - 1);
        assert_eq!(steps[0].direction, Direction::Forward);
        assert_eq!(steps[0].distance_meters, 27);
        assert_eq!(steps[0].instruction, "Turn forward and continue for 27m");
        assert_eq!(steps[0].location, None);
        assert_eq!(steps[1].direction, Direction::Destination);
        assert_eq!(total_distance_meters(&steps), 27 + 38);
    }

    #[test]
    fn short_paths_have_no_steps() {
        let product = find_product_by_id(Store::builtin(), "P001").expect("product");
        assert!(build_steps(&[], product).is_empty());
        assert!(build_steps(&[Waypoint::new(1.0, 1.0)], product).is_empty());
    }

    #[test]
    fn far_away_origins_saturate_instead_of_overflowing() {
        let product = find_product_by_id(Store::builtin(), "P001").expect("product");
        let path = [
            Waypoint::new(1.0e12, 0.0),
            Waypoint::new(40.0, 510.0),
            Waypoint::new(150.0, 150.0),
        ];

        let steps = build_steps(&path, product);
        assert_eq!(steps[0].distance_meters, u32::MAX);
        assert_eq!(total_distance_meters(&steps), u32::MAX);
    }
}
