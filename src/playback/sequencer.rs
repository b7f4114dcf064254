//! The step sequencer: a small state machine that walks a cook through an
//! ordered list of steps with per-step timing.
//!
//! The sequencer owns all session state and mutates it only in response to
//! discrete operations (user intents or clock ticks) delivered on one
//! thread. Every successful mutation returns a [`Snapshot`] so the
//! presenter can re-render without reaching into the machine; failed
//! operations leave the state untouched and are safe to ignore.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::types::Step;

/// Session-level phase of a playback run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not playing; the recipe overview is shown
    Overview,
    /// Playback in progress
    Active,
    /// Playback ran to completion; loops back to the overview
    Finished,
}

/// Non-fatal sequencer errors. State is unchanged when any of these is
/// returned, so callers may drop them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequencerError {
    #[error("step index {0} is out of range")]
    InvalidStepIndex(usize),
    #[error("operation is not valid in the current playback phase")]
    InvalidTransition,
    #[error("cannot start playback with no steps")]
    EmptyStepList,
}

/// Read-only view of the session state, emitted after every successful
/// mutation. This is the sequencer's entire external surface for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub current: usize,
    pub step_count: usize,
    pub completed: Vec<usize>,
    pub step_started: bool,
    pub elapsed_secs: u32,
    pub duration_secs: u32,
    pub threshold_reached: bool,
}

impl Snapshot {
    /// Whether the current step is the last one
    pub fn on_last_step(&self) -> bool {
        self.step_count > 0 && self.current == self.step_count - 1
    }
}

/// Drives a user through an ordered list of cooking steps.
///
/// Steps arrive from the gateway already sorted by order position; the
/// sequencer never re-sorts or validates ordering.
pub struct Sequencer {
    steps: Vec<Step>,
    phase: Phase,
    current: usize,
    completed: BTreeSet<usize>,
    step_started: bool,
    elapsed_secs: u32,
    threshold_reached: bool,
}

impl Sequencer {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            phase: Phase::Overview,
            current: 0,
            completed: BTreeSet::new(),
            step_started: false,
            elapsed_secs: 0,
            threshold_reached: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The step under the cursor, if any
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            current: self.current,
            step_count: self.steps.len(),
            completed: self.completed.iter().copied().collect(),
            step_started: self.step_started,
            elapsed_secs: self.elapsed_secs,
            duration_secs: self.current_duration_secs(),
            threshold_reached: self.threshold_reached,
        }
    }

    /// Begin a playback session from the overview. Clears any completion
    /// state from a previous run and places the cursor on the first step.
    pub fn start(&mut self) -> Result<Snapshot, SequencerError> {
        match self.phase {
            Phase::Overview | Phase::Finished => {}
            Phase::Active => return Err(SequencerError::InvalidTransition),
        }
        if self.steps.is_empty() {
            return Err(SequencerError::EmptyStepList);
        }
        self.phase = Phase::Active;
        self.completed.clear();
        self.enter_step(0);
        Ok(self.snapshot())
    }

    /// Start the current step's timer. Errors if playback is not active or
    /// the timer is already counting.
    pub fn begin_step_timer(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        if self.step_started {
            return Err(SequencerError::InvalidTransition);
        }
        self.step_started = true;
        Ok(self.snapshot())
    }

    /// Pause the timer, keeping elapsed progress so it can resume.
    pub fn pause_step_timer(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        self.step_started = false;
        Ok(self.snapshot())
    }

    /// Stop the timer and wind it back to zero. Only allowed before the
    /// step's threshold is reached.
    pub fn reset_step_timer(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        if self.threshold_reached {
            return Err(SequencerError::InvalidTransition);
        }
        self.step_started = false;
        self.elapsed_secs = 0;
        Ok(self.snapshot())
    }

    /// Advance the timer by one second of step time. Ticks delivered while
    /// the timer is stopped, or after the threshold, change nothing; the
    /// elapsed time is clamped to the step duration.
    pub fn tick(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        if self.step_started && !self.threshold_reached {
            let duration = self.current_duration_secs();
            self.elapsed_secs = (self.elapsed_secs + 1).min(duration);
            if self.elapsed_secs >= duration {
                self.threshold_reached = true;
            }
        }
        Ok(self.snapshot())
    }

    /// Move to the next step. Requires the current step's threshold and a
    /// step to move to; marks the current step completed.
    pub fn advance(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        if !self.threshold_reached || self.current + 1 >= self.steps.len() {
            return Err(SequencerError::InvalidTransition);
        }
        self.completed.insert(self.current);
        self.enter_step(self.current + 1);
        Ok(self.snapshot())
    }

    /// Move back one step. A no-op on the first step. Never removes
    /// completion marks.
    pub fn previous(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        if self.current > 0 {
            self.enter_step(self.current - 1);
        }
        Ok(self.snapshot())
    }

    /// Force-complete the current step without waiting for its timer. On
    /// the last step this finishes the session.
    pub fn skip(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        self.completed.insert(self.current);
        if self.current + 1 < self.steps.len() {
            self.enter_step(self.current + 1);
        } else {
            self.finish_session();
        }
        Ok(self.snapshot())
    }

    /// Jump directly to an arbitrary step (dot navigation). Does not mark
    /// intervening steps completed.
    pub fn go_to(&mut self, index: usize) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        if index >= self.steps.len() {
            return Err(SequencerError::InvalidStepIndex(index));
        }
        self.enter_step(index);
        Ok(self.snapshot())
    }

    /// Complete the run from the last step. Requires its threshold.
    pub fn finish(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        if !self.threshold_reached || self.current + 1 != self.steps.len() {
            return Err(SequencerError::InvalidTransition);
        }
        self.completed.insert(self.current);
        self.finish_session();
        Ok(self.snapshot())
    }

    /// Abandon the session. Nothing new is marked completed; completion
    /// marks from this run survive until the next `start`.
    pub fn exit(&mut self) -> Result<Snapshot, SequencerError> {
        self.require_active()?;
        self.phase = Phase::Overview;
        self.current = 0;
        self.reset_timer_state(0);
        self.threshold_reached = false;
        Ok(self.snapshot())
    }

    fn require_active(&self) -> Result<(), SequencerError> {
        if self.phase == Phase::Active {
            Ok(())
        } else {
            Err(SequencerError::InvalidTransition)
        }
    }

    /// Place the cursor on `index` and reset per-step timer state. A step
    /// with no duration is at its threshold the moment it becomes current.
    fn enter_step(&mut self, index: usize) {
        self.current = index;
        self.reset_timer_state(self.current_duration_secs());
    }

    fn reset_timer_state(&mut self, duration_secs: u32) {
        self.step_started = false;
        self.elapsed_secs = 0;
        self.threshold_reached = duration_secs == 0;
    }

    fn finish_session(&mut self) {
        self.phase = Phase::Finished;
        self.current = 0;
        self.reset_timer_state(0);
        // Finished shows the overview again; threshold state is meaningless there
        self.threshold_reached = false;
    }

    fn current_duration_secs(&self) -> u32 {
        self.current_step().map_or(0, Step::duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionKind;

    fn steps(durations_min: &[u32]) -> Vec<Step> {
        durations_min
            .iter()
            .enumerate()
            .map(|(i, d)| Step {
                order_number: (i + 1) as u32,
                action: ActionKind::Cook,
                description: format!("step {}", i + 1),
                temperature: 100,
                speed: 1,
                duration: *d,
            })
            .collect()
    }

    fn active(durations_min: &[u32]) -> Sequencer {
        let mut seq = Sequencer::new(steps(durations_min));
        seq.start().unwrap();
        seq
    }

    /// Run enough ticks to reach the current step's threshold
    fn run_to_threshold(seq: &mut Sequencer) {
        seq.begin_step_timer().unwrap();
        let duration = seq.snapshot().duration_secs;
        for _ in 0..duration {
            seq.tick().unwrap();
        }
        assert!(seq.snapshot().threshold_reached);
    }

    #[test]
    fn test_start_requires_steps() {
        let mut seq = Sequencer::new(Vec::new());
        assert_eq!(seq.start(), Err(SequencerError::EmptyStepList));
        assert_eq!(seq.phase(), Phase::Overview);
    }

    #[test]
    fn test_start_resets_session() {
        let mut seq = active(&[1, 1]);
        run_to_threshold(&mut seq);
        seq.advance().unwrap();
        seq.exit().unwrap();

        let snap = seq.start().unwrap();
        assert_eq!(snap.current, 0);
        assert!(snap.completed.is_empty());
        assert!(!snap.step_started);
    }

    #[test]
    fn test_start_while_active_is_rejected() {
        let mut seq = active(&[1]);
        assert_eq!(seq.start(), Err(SequencerError::InvalidTransition));
    }

    #[test]
    fn test_timer_only_advances_when_started() {
        let mut seq = active(&[1]);
        seq.tick().unwrap();
        assert_eq!(seq.snapshot().elapsed_secs, 0);

        seq.begin_step_timer().unwrap();
        seq.tick().unwrap();
        assert_eq!(seq.snapshot().elapsed_secs, 1);
    }

    #[test]
    fn test_begin_twice_is_rejected() {
        let mut seq = active(&[1]);
        seq.begin_step_timer().unwrap();
        assert_eq!(
            seq.begin_step_timer(),
            Err(SequencerError::InvalidTransition)
        );
    }

    #[test]
    fn test_pause_keeps_elapsed_for_resume() {
        let mut seq = active(&[1]);
        seq.begin_step_timer().unwrap();
        seq.tick().unwrap();
        seq.tick().unwrap();

        let snap = seq.pause_step_timer().unwrap();
        assert!(!snap.step_started);
        assert_eq!(snap.elapsed_secs, 2);

        // Ticks while paused change nothing
        seq.tick().unwrap();
        assert_eq!(seq.snapshot().elapsed_secs, 2);

        seq.begin_step_timer().unwrap();
        seq.tick().unwrap();
        assert_eq!(seq.snapshot().elapsed_secs, 3);
    }

    #[test]
    fn test_reset_winds_back_to_zero() {
        let mut seq = active(&[1]);
        seq.begin_step_timer().unwrap();
        seq.tick().unwrap();

        let snap = seq.reset_step_timer().unwrap();
        assert_eq!(snap.elapsed_secs, 0);
        assert!(!snap.step_started);
        assert!(!snap.threshold_reached);
    }

    #[test]
    fn test_reset_after_threshold_is_rejected() {
        let mut seq = active(&[1]);
        run_to_threshold(&mut seq);
        assert_eq!(
            seq.reset_step_timer(),
            Err(SequencerError::InvalidTransition)
        );
    }

    #[test]
    fn test_elapsed_never_exceeds_duration() {
        let mut seq = active(&[1]);
        seq.begin_step_timer().unwrap();
        // Far more ticks than the 60-second duration
        for _ in 0..500 {
            seq.tick().unwrap();
        }
        let snap = seq.snapshot();
        assert_eq!(snap.elapsed_secs, 60);
        assert!(snap.threshold_reached);
    }

    #[test]
    fn test_advance_requires_threshold() {
        let mut seq = active(&[1, 1]);
        assert_eq!(seq.advance(), Err(SequencerError::InvalidTransition));

        run_to_threshold(&mut seq);
        let snap = seq.advance().unwrap();
        assert_eq!(snap.current, 1);
        assert_eq!(snap.completed, vec![0]);
        assert_eq!(snap.elapsed_secs, 0);
        assert!(!snap.step_started);
        assert!(!snap.threshold_reached);
    }

    #[test]
    fn test_advance_on_last_step_is_rejected() {
        let mut seq = active(&[1]);
        run_to_threshold(&mut seq);
        assert_eq!(seq.advance(), Err(SequencerError::InvalidTransition));
    }

    #[test]
    fn test_previous_is_noop_on_first_step() {
        let mut seq = active(&[1, 1]);
        let snap = seq.previous().unwrap();
        assert_eq!(snap.current, 0);
    }

    #[test]
    fn test_previous_does_not_unmark_completed() {
        let mut seq = active(&[1, 1]);
        run_to_threshold(&mut seq);
        seq.advance().unwrap();

        let snap = seq.previous().unwrap();
        assert_eq!(snap.current, 0);
        assert_eq!(snap.completed, vec![0]);
    }

    #[test]
    fn test_skip_completes_without_timer() {
        let mut seq = active(&[5, 5]);
        let snap = seq.skip().unwrap();
        assert_eq!(snap.current, 1);
        assert_eq!(snap.completed, vec![0]);
        assert_eq!(snap.phase, Phase::Active);
    }

    #[test]
    fn test_skip_on_last_step_finishes() {
        let mut seq = active(&[5]);
        let snap = seq.skip().unwrap();
        assert_eq!(snap.phase, Phase::Finished);
        assert_eq!(snap.completed, vec![0]);
        assert_eq!(snap.current, 0);
    }

    #[test]
    fn test_go_to_resets_timer_state() {
        let mut seq = active(&[1, 1, 1]);
        seq.begin_step_timer().unwrap();
        seq.tick().unwrap();

        let snap = seq.go_to(2).unwrap();
        assert_eq!(snap.current, 2);
        assert_eq!(snap.elapsed_secs, 0);
        assert!(!snap.step_started);
        // Jumping over steps does not complete them
        assert!(snap.completed.is_empty());
    }

    #[test]
    fn test_go_to_out_of_range_leaves_state_unchanged() {
        let mut seq = active(&[1, 1]);
        seq.begin_step_timer().unwrap();
        seq.tick().unwrap();
        let before = seq.snapshot();

        assert_eq!(seq.go_to(7), Err(SequencerError::InvalidStepIndex(7)));
        assert_eq!(seq.snapshot(), before);
    }

    #[test]
    fn test_finish_requires_last_step_threshold() {
        let mut seq = active(&[1, 1]);
        run_to_threshold(&mut seq);
        // Threshold reached but not on the last step
        assert_eq!(seq.finish(), Err(SequencerError::InvalidTransition));

        seq.advance().unwrap();
        assert_eq!(seq.finish(), Err(SequencerError::InvalidTransition));

        run_to_threshold(&mut seq);
        let snap = seq.finish().unwrap();
        assert_eq!(snap.phase, Phase::Finished);
        assert_eq!(snap.completed, vec![0, 1]);
    }

    #[test]
    fn test_exit_abandons_current_step() {
        let mut seq = active(&[1, 1]);
        run_to_threshold(&mut seq);
        seq.advance().unwrap();
        seq.begin_step_timer().unwrap();
        seq.tick().unwrap();

        let snap = seq.exit().unwrap();
        assert_eq!(snap.phase, Phase::Overview);
        // Step 1 was in progress but is not marked completed
        assert_eq!(snap.completed, vec![0]);
    }

    #[test]
    fn test_zero_duration_step_is_immediately_at_threshold() {
        let mut seq = active(&[0, 1]);
        let snap = seq.snapshot();
        assert!(snap.threshold_reached);
        assert_eq!(snap.duration_secs, 0);

        // No start press needed to move on
        let snap = seq.advance().unwrap();
        assert_eq!(snap.current, 1);
        assert!(!snap.threshold_reached);
    }

    #[test]
    fn test_operations_rejected_outside_active_phase() {
        let mut seq = Sequencer::new(steps(&[1]));
        assert_eq!(seq.tick(), Err(SequencerError::InvalidTransition));
        assert_eq!(
            seq.begin_step_timer(),
            Err(SequencerError::InvalidTransition)
        );
        assert_eq!(seq.skip(), Err(SequencerError::InvalidTransition));
        assert_eq!(seq.go_to(0), Err(SequencerError::InvalidTransition));
        assert_eq!(seq.exit(), Err(SequencerError::InvalidTransition));
    }

    #[test]
    fn test_restart_after_finish() {
        let mut seq = active(&[1]);
        seq.skip().unwrap();
        assert_eq!(seq.phase(), Phase::Finished);

        let snap = seq.start().unwrap();
        assert_eq!(snap.phase, Phase::Active);
        assert_eq!(snap.current, 0);
        assert!(snap.completed.is_empty());
    }
}
