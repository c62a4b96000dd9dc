// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Map state: the animation clock, the timers that drive it, and the reducer that owns the
//! selection, highlight and route.

pub mod animation;
pub mod state;
pub mod timers;

pub use animation::{AnimationState, CYCLE_FRAMES, DRAW_IN_FRAMES, TICK_PERIOD};
pub use state::{render_still, MapEvent, MapState};
pub use timers::{SubscriptionId, Subscriptions, TimerKind};
