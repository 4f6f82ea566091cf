//! Virtual time clock for deterministic page behavior.
//!
//! `VirtualClock` stands in for the browser's `setTimeout`/`setInterval`.
//! Time only advances when asked to, so typing and form-reset sequences can
//! be stepped through without real waiting.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Handle of a scheduled timer, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    /// When the timer should fire (virtual time in ms)
    fire_at_ms: u64,
    /// Tie-breaker so timers due at the same time fire in scheduling order
    seq: u64,
    id: TimerId,
    /// Re-scheduling period for repeating timers
    interval_ms: Option<u64>,
    task: T,
}

impl<T> PartialEq for TimerEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at_ms == other.fire_at_ms && self.seq == other.seq
    }
}

impl<T> Eq for TimerEntry<T> {}

impl<T> PartialOrd for TimerEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TimerEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: earliest (fire_at_ms, seq) comes first
        (other.fire_at_ms, other.seq).cmp(&(self.fire_at_ms, self.seq))
    }
}

pub struct VirtualClock<T> {
    current_time_ms: u64,
    next_id: u64,
    next_seq: u64,
    pending_timers: BinaryHeap<TimerEntry<T>>,
}

impl<T: Clone> VirtualClock<T> {
    pub fn new() -> Self {
        Self {
            current_time_ms: 0,
            next_id: 0,
            next_seq: 0,
            pending_timers: BinaryHeap::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time_ms
    }

    fn push(&mut self, id: TimerId, fire_at_ms: u64, interval_ms: Option<u64>, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending_timers.push(TimerEntry {
            fire_at_ms,
            seq,
            id,
            interval_ms,
            task,
        });
    }

    fn next_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Schedule `task` to fire once after `delay_ms`.
    pub fn set_timeout(&mut self, delay_ms: u64, task: T) -> TimerId {
        let id = self.next_id();
        self.push(id, self.current_time_ms.saturating_add(delay_ms), None, task);
        id
    }

    /// Schedule `task` to fire every `interval_ms` until cleared.
    /// A zero interval is treated as 1ms so time keeps moving.
    pub fn set_interval(&mut self, interval_ms: u64, task: T) -> TimerId {
        let interval_ms = interval_ms.max(1);
        let id = self.next_id();
        self.push(
            id,
            self.current_time_ms.saturating_add(interval_ms),
            Some(interval_ms),
            task,
        );
        id
    }

    /// Cancel a timer. Unknown or already fired one-shot ids are ignored.
    pub fn clear(&mut self, id: TimerId) {
        self.pending_timers.retain(|entry| entry.id != id);
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending_timers.iter().any(|entry| entry.id == id)
    }

    /// Pop the earliest timer due at or before `until_ms` and move time to
    /// its deadline. Repeating timers are re-scheduled immediately so they
    /// can fire again within the same advance; one whose next deadline is
    /// past `u64::MAX` is dropped.
    pub fn fire_next(&mut self, until_ms: u64) -> Option<(TimerId, T)> {
        if self.pending_timers.peek()?.fire_at_ms > until_ms {
            return None;
        }
        let entry = self.pending_timers.pop()?;
        self.current_time_ms = self.current_time_ms.max(entry.fire_at_ms);
        if let Some(interval_ms) = entry.interval_ms {
            if let Some(next_fire_ms) = entry.fire_at_ms.checked_add(interval_ms) {
                self.push(entry.id, next_fire_ms, Some(interval_ms), entry.task.clone());
            }
        }
        Some((entry.id, entry.task))
    }

    /// Move time forward without firing anything. Never moves backwards.
    pub fn advance_to(&mut self, target_ms: u64) {
        self.current_time_ms = self.current_time_ms.max(target_ms);
    }

    /// Advance virtual time by `ms`, returning every timer that fired, in
    /// firing order.
    pub fn advance_by(&mut self, ms: u64) -> Vec<(TimerId, T)> {
        let target_time = self.current_time_ms.saturating_add(ms);
        let mut fired = Vec::new();
        while let Some(entry) = self.fire_next(target_time) {
            fired.push(entry);
        }
        self.advance_to(target_time);
        fired
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.pending_timers.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending_timers.len()
    }

    /// Time until the next timer fires (if any).
    pub fn time_to_next_timer(&self) -> Option<u64> {
        self.pending_timers
            .peek()
            .map(|entry| entry.fire_at_ms.saturating_sub(self.current_time_ms))
    }
}

impl<T: Clone> Default for VirtualClock<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let clock = VirtualClock::<()>::new();
        assert_eq!(clock.now_ms(), 0);
        assert!(!clock.has_pending_timers());
    }

    #[test]
    fn timeout_fires_once_at_deadline() {
        let mut clock = VirtualClock::new();
        let id = clock.set_timeout(1000, "reset");

        assert!(clock.advance_by(999).is_empty());
        assert_eq!(clock.advance_by(1), vec![(id, "reset")]);
        assert!(clock.advance_by(5000).is_empty());
        assert!(!clock.has_pending_timers());
    }

    #[test]
    fn interval_fires_repeatedly_in_single_advance() {
        let mut clock = VirtualClock::new();
        clock.set_interval(100, "tick");

        // Fires at 100, 200, 300
        assert_eq!(clock.advance_by(350).len(), 3);
        assert_eq!(clock.time_to_next_timer(), Some(50));
    }

    #[test]
    fn cleared_interval_stops_firing() {
        let mut clock = VirtualClock::new();
        let id = clock.set_interval(100, "tick");
        clock.advance_by(100);
        clock.clear(id);
        assert!(!clock.is_pending(id));
        assert!(clock.advance_by(1000).is_empty());
    }

    #[test]
    fn same_deadline_fires_in_scheduling_order() {
        let mut clock = VirtualClock::new();
        clock.set_timeout(100, "first");
        clock.set_timeout(100, "second");
        clock.set_timeout(50, "earliest");

        let order: Vec<&str> = clock.advance_by(100).into_iter().map(|(_, task)| task).collect();
        assert_eq!(order, ["earliest", "first", "second"]);
    }

    #[test]
    fn fire_next_moves_time_to_deadline() {
        let mut clock = VirtualClock::new();
        clock.set_timeout(300, 1);
        assert!(clock.fire_next(200).is_none());
        assert_eq!(clock.now_ms(), 0);
        assert!(clock.fire_next(1000).is_some());
        assert_eq!(clock.now_ms(), 300);
    }

    #[test]
    fn huge_delays_saturate_instead_of_overflowing() {
        let mut clock = VirtualClock::new();
        clock.advance_by(10);
        let timeout = clock.set_timeout(u64::MAX, "late");
        let interval = clock.set_interval(u64::MAX, "rare");

        assert!(clock.advance_by(1000).is_empty());
        assert_eq!(clock.time_to_next_timer(), Some(u64::MAX - 1010));

        let fired = clock.advance_by(u64::MAX);
        assert_eq!(fired, vec![(timeout, "late"), (interval, "rare")]);
        assert_eq!(clock.now_ms(), u64::MAX);
        assert!(!clock.is_pending(interval));
    }
}
