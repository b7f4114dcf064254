//! Wall-clock tick source for the step timer.
//!
//! The clock is polled from the UI event loop rather than firing callbacks,
//! so ticks are naturally serialized with key events: the loop drains due
//! ticks into the sequencer, and any step-changing operation stops the
//! clock first. A stopped or cancelled clock reports zero due ticks no
//! matter how much wall time has passed, and stopping twice is harmless.

use std::time::{Duration, Instant};

/// Converts elapsed wall time into discrete timer ticks.
///
/// One tick represents one second of step time; `interval` decides how much
/// real time that second takes (10 ms for accelerated demo playback,
/// 1000 ms for real cooking).
#[derive(Debug)]
pub struct StepClock {
    interval: Duration,
    next_due: Option<Instant>,
}

impl StepClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Begin producing ticks, with the first due one interval from `now`.
    /// Starting an already-running clock restarts its schedule.
    pub fn start_at(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Stop producing ticks. Idempotent; once stopped, no tick already
    /// "due" will ever be reported.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks that became due since the last poll. Advances the
    /// schedule, so each due tick is reported exactly once.
    pub fn due_ticks_at(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_due else {
            return 0;
        };
        let mut ticks = 0;
        while now >= next {
            ticks += 1;
            next += self.interval;
        }
        self.next_due = Some(next);
        ticks
    }

    pub fn due_ticks(&mut self) -> u32 {
        self.due_ticks_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(10);

    #[test]
    fn test_stopped_clock_reports_no_ticks() {
        let mut clock = StepClock::new(TICK);
        assert!(!clock.is_running());
        assert_eq!(clock.due_ticks_at(Instant::now()), 0);
    }

    #[test]
    fn test_ticks_accumulate_with_elapsed_time() {
        let mut clock = StepClock::new(TICK);
        let t0 = Instant::now();
        clock.start_at(t0);

        assert_eq!(clock.due_ticks_at(t0), 0);
        assert_eq!(clock.due_ticks_at(t0 + TICK), 1);
        assert_eq!(clock.due_ticks_at(t0 + TICK * 4), 3);
    }

    #[test]
    fn test_each_tick_reported_once() {
        let mut clock = StepClock::new(TICK);
        let t0 = Instant::now();
        clock.start_at(t0);

        let later = t0 + TICK * 5;
        assert_eq!(clock.due_ticks_at(later), 5);
        assert_eq!(clock.due_ticks_at(later), 0);
    }

    #[test]
    fn test_stop_discards_pending_ticks() {
        let mut clock = StepClock::new(TICK);
        let t0 = Instant::now();
        clock.start_at(t0);

        clock.stop();
        // Time passed while "running", but the stop already happened
        assert_eq!(clock.due_ticks_at(t0 + TICK * 10), 0);

        // Stopping again is fine
        clock.stop();
        assert!(!clock.is_running());
    }

    #[test]
    fn test_restart_resets_schedule() {
        let mut clock = StepClock::new(TICK);
        let t0 = Instant::now();
        clock.start_at(t0);
        assert_eq!(clock.due_ticks_at(t0 + TICK * 3), 3);

        let t1 = t0 + TICK * 10;
        clock.start_at(t1);
        assert_eq!(clock.due_ticks_at(t1), 0);
        assert_eq!(clock.due_ticks_at(t1 + TICK), 1);
    }
}
