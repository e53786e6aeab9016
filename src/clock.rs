//! Drop clock: tells the host when the next gravity tick is due.
//!
//! The engine owns no timer. A host keeps a `DropClock`, waits at most
//! [`DropClock::time_until_due`] for input, and ticks the session whenever
//! [`DropClock::poll`] fires. Deadlines advance by whole intervals from the
//! previous deadline, so slow frames do not make the game drift; a host that
//! stalled for several intervals gets one tick and a fresh deadline rather
//! than a burst.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct DropClock {
    interval: Duration,
    next_due: Instant,
}

impl DropClock {
    /// A clock whose first tick is due one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// How long the host may wait before the next tick.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Returns true when a tick is due and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }

    /// Restart the interval from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut clock = DropClock::new(500 * MS, t0);

        assert!(!clock.poll(t0));
        assert!(!clock.poll(t0 + 499 * MS));
        assert!(clock.poll(t0 + 500 * MS));
        assert!(!clock.poll(t0 + 501 * MS));
        assert!(clock.poll(t0 + 1000 * MS));
    }

    #[test]
    fn late_poll_keeps_the_schedule() {
        let t0 = Instant::now();
        let mut clock = DropClock::new(500 * MS, t0);

        assert!(clock.poll(t0 + 620 * MS));
        assert_eq!(clock.time_until_due(t0 + 620 * MS), 380 * MS);
    }

    #[test]
    fn long_stall_fires_once_then_rearms() {
        let t0 = Instant::now();
        let mut clock = DropClock::new(500 * MS, t0);

        assert!(clock.poll(t0 + 5000 * MS));
        assert!(!clock.poll(t0 + 5000 * MS));
        assert_eq!(clock.time_until_due(t0 + 5000 * MS), 500 * MS);
    }

    #[test]
    fn time_until_due_saturates() {
        let t0 = Instant::now();
        let clock = DropClock::new(500 * MS, t0);
        assert_eq!(clock.time_until_due(t0 + 900 * MS), Duration::ZERO);
    }

    #[test]
    fn reset_restarts_the_interval() {
        let t0 = Instant::now();
        let mut clock = DropClock::new(500 * MS, t0);
        clock.reset(t0 + 400 * MS);
        assert!(!clock.poll(t0 + 500 * MS));
        assert!(clock.poll(t0 + 900 * MS));
    }
}
