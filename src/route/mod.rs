// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Route generation: waypoint paths and the turn-by-turn steps derived from them.
//!
//! Step derivation only assumes "an ordered list of waypoints", so the path generator can be
//! swapped for real graph search without touching the rest.

pub mod path;
pub mod steps;

pub use path::{build_path, Path, RouteOptions};
pub use steps::{build_steps, total_distance_meters, Direction, NavigationStep, UNITS_PER_METER};
