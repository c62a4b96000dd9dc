// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Periodic timers as explicit subscriptions.
//!
//! The event loop asks [`Subscriptions::next_deadline`] how long it may block and collects the
//! timers that fired with [`Subscriptions::due`]. Dropping the `Subscriptions` releases every
//! timer, so nothing fires after the map is torn down.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Animation,
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone)]
struct Interval {
    id: SubscriptionId,
    kind: TimerKind,
    period: Duration,
    next_due: Instant,
}

#[derive(Debug, Default)]
pub struct Subscriptions {
    intervals: Vec<Interval>,
    next_id: u64,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a timer whose first firing is one `period` after `now`.
    pub fn subscribe(&mut self, kind: TimerKind, period: Duration, now: Instant) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.intervals.push(Interval {
            id,
            kind,
            period,
            next_due: now + period,
        });
        log::debug!("subscribed {kind:?} timer every {period:?}");
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|interval| interval.id != id);
        before != self.intervals.len()
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.intervals.iter().map(|interval| interval.next_due).min()
    }

    /// Time the event loop may wait before the next timer fires, capped at `max`.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(max),
            None => max,
        }
    }

    /// Timers due at `now`, each reported once.
    ///
    /// A timer that fell several periods behind fires once and is rescheduled from `now`, so a
    /// stalled loop does not replay a burst of stale ticks.
    pub fn due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut fired = Vec::new();
        for interval in &mut self.intervals {
            if interval.next_due > now {
                continue;
            }
            fired.push(interval.kind);
            let next = interval.next_due + interval.period;
            interval.next_due = if next > now { next } else { now + interval.period };
        }
        fired
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        if !self.intervals.is_empty() {
            log::debug!("releasing {} timer subscription(s)", self.intervals.len());
        }
        self.intervals.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Subscriptions, TimerKind};

    #[test]
    fn fires_each_timer_on_its_own_period() {
        let start = Instant::now();
        let mut subs = Subscriptions::new();
        subs.subscribe(TimerKind::Animation, Duration::from_millis(50), start);
        subs.subscribe(TimerKind::Position, Duration::from_secs(15), start);

        assert!(subs.due(start).is_empty());
        assert_eq!(subs.due(start + Duration::from_millis(50)), [TimerKind::Animation]);
        assert!(subs.due(start + Duration::from_millis(60)).is_empty());
        assert_eq!(
            subs.due(start + Duration::from_secs(15)),
            [TimerKind::Animation, TimerKind::Position]
        );
    }

    #[test]
    fn stalled_timer_fires_once_then_reschedules() {
        let start = Instant::now();
        let mut subs = Subscriptions::new();
        subs.subscribe(TimerKind::Animation, Duration::from_millis(50), start);

        let late = start + Duration::from_millis(500);
        assert_eq!(subs.due(late), [TimerKind::Animation]);
        assert!(subs.due(late + Duration::from_millis(10)).is_empty());
        assert_eq!(subs.next_deadline(), Some(late + Duration::from_millis(50)));
    }

    #[test]
    fn unsubscribe_stops_a_timer() {
        let start = Instant::now();
        let mut subs = Subscriptions::new();
        let id = subs.subscribe(TimerKind::Animation, Duration::from_millis(50), start);
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.is_empty());
        assert!(subs.due(start + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn poll_timeout_is_capped_and_tracks_deadline() {
        let start = Instant::now();
        let mut subs = Subscriptions::new();
        let cap = Duration::from_millis(250);
        assert_eq!(subs.poll_timeout(start, cap), cap);

        subs.subscribe(TimerKind::Animation, Duration::from_millis(50), start);
        assert_eq!(subs.poll_timeout(start, cap), Duration::from_millis(50));
        assert_eq!(
            subs.poll_timeout(start + Duration::from_millis(80), cap),
            Duration::ZERO
        );
    }
}
