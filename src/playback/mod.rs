//! Guided playback: the step sequencer, its tick clock, and progress helpers.

pub mod clock;
pub mod progress;
pub mod sequencer;

pub use clock::StepClock;
pub use sequencer::{Phase, Sequencer, SequencerError, Snapshot};
