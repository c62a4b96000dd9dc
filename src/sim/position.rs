// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{WalkArea, Waypoint, DEFAULT_USER_LOCATION};

pub const POSITION_PERIOD: Duration = Duration::from_secs(15);
/// Largest per-axis displacement of one simulated step, in store units.
pub const MAX_STEP: f64 = 30.0;

/// Stand-in for indoor positioning: a bounded random walk.
#[derive(Debug, Clone)]
pub struct PositionSimulator<R> {
    rng: R,
    area: WalkArea,
    location: Waypoint,
}

impl PositionSimulator<StdRng> {
    /// Seeded walks are reproducible; `None` seeds from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, DEFAULT_USER_LOCATION)
    }
}

impl<R: Rng> PositionSimulator<R> {
    pub fn new(rng: R, start: Waypoint) -> Self {
        let area = WalkArea::INTERIOR;
        Self {
            rng,
            area,
            location: area.clamp(start),
        }
    }

    pub fn location(&self) -> Waypoint {
        self.location
    }

    /// Moves by a uniform offset in `[-MAX_STEP, MAX_STEP)` per axis, clamped to the interior.
    pub fn step(&mut self) -> Waypoint {
        let dx = self.rng.random_range(-MAX_STEP..MAX_STEP);
        let dy = self.rng.random_range(-MAX_STEP..MAX_STEP);
        let next = Waypoint::new(self.location.x + dx, self.location.y + dy);
        self.location = self.area.clamp(next);
        log::debug!(
            "simulated position ({:.1}, {:.1})",
            self.location.x,
            self.location.y
        );
        self.location
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use super::{PositionSimulator, MAX_STEP};
    use crate::model::{WalkArea, Waypoint};

    #[test]
    fn same_seed_walks_the_same_path() {
        let mut a = PositionSimulator::from_seed(Some(7));
        let mut b = PositionSimulator::from_seed(Some(7));
        for _ in 0..50 {
            assert_eq!(a.step(), b.step());
        }
    }

    #[test]
    fn steps_stay_within_max_displacement() {
        let mut sim = PositionSimulator::new(StdRng::seed_from_u64(1), Waypoint::new(500.0, 300.0));
        for _ in 0..200 {
            let before = sim.location();
            let after = sim.step();
            assert!((after.x - before.x).abs() <= MAX_STEP);
            assert!((after.y - before.y).abs() <= MAX_STEP);
        }
    }

    #[rstest]
    #[case(Waypoint::new(50.0, 50.0))]
    #[case(Waypoint::new(950.0, 550.0))]
    #[case(Waypoint::new(-100.0, 900.0))]
    fn walk_never_leaves_the_interior(#[case] start: Waypoint) {
        let mut sim = PositionSimulator::new(StdRng::seed_from_u64(42), start);
        assert!(WalkArea::INTERIOR.contains(sim.location()));
        for _ in 0..1_000 {
            assert!(WalkArea::INTERIOR.contains(sim.step()));
        }
    }
}
