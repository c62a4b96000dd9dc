// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

/// Frames in one animation cycle; the counter wraps back to zero after this.
pub const CYCLE_FRAMES: u32 = 60;
/// Frames the first path leg takes to draw in.
pub const DRAW_IN_FRAMES: u32 = 30;
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

/// Free-running frame counter driving every pulse and draw-in effect.
///
/// It only resets when a new route is set, so the draw-in restarts for that route and otherwise
/// keeps cycling "draw, hold, redraw".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    frame: u32,
}

impl AnimationState {
    pub fn at(frame: u32) -> Self {
        Self {
            frame: frame % CYCLE_FRAMES,
        }
    }

    pub fn frame(self) -> u32 {
        self.frame
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % CYCLE_FRAMES;
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    /// Fraction of the first path leg drawn so far, in `[0, 1]`.
    pub fn path_progress(self) -> f64 {
        (f64::from(self.frame) / f64::from(DRAW_IN_FRAMES)).min(1.0)
    }

    pub fn path_complete(self) -> bool {
        self.path_progress() >= 1.0
    }

    /// Glow intensity for the highlighted section, in `[0.6, 1.0]`.
    pub fn section_pulse(self) -> f64 {
        (f64::from(self.frame) * 0.1).sin() * 0.2 + 0.8
    }

    /// Marker radius pulsing ±5 units around `base`.
    pub fn marker_radius(self, base: f64) -> f64 {
        (f64::from(self.frame) * 0.2).sin() * 5.0 + base
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationState, CYCLE_FRAMES};

    #[test]
    fn wraps_after_a_full_cycle() {
        let mut state = AnimationState::default();
        for _ in 0..CYCLE_FRAMES {
            state.tick();
        }
        assert_eq!(state.frame(), 0);
    }

    #[test]
    fn path_progress_holds_at_one_for_second_half() {
        let mut state = AnimationState::default();
        assert_eq!(state.path_progress(), 0.0);

        for frame in 1..CYCLE_FRAMES {
            state.tick();
            let expected = if frame >= 30 {
                1.0
            } else {
                f64::from(frame) / 30.0
            };
            assert_eq!(state.path_progress(), expected, "frame {frame}");
            assert_eq!(state.path_complete(), frame >= 30);
        }

        state.tick();
        assert_eq!(state.path_progress(), 0.0);
    }

    #[test]
    fn reset_restarts_draw_in() {
        let mut state = AnimationState::at(45);
        assert!(state.path_complete());
        state.reset();
        assert_eq!(state.frame(), 0);
        assert!(!state.path_complete());
    }

    #[test]
    fn pulses_stay_in_range() {
        for frame in 0..CYCLE_FRAMES {
            let state = AnimationState::at(frame);
            let pulse = state.section_pulse();
            assert!((0.6..=1.0).contains(&pulse), "pulse {pulse} at {frame}");
            let radius = state.marker_radius(10.0);
            assert!((5.0..=15.0).contains(&radius), "radius {radius} at {frame}");
        }
    }
}
