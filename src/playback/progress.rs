//! Progress statistics and display helpers for a playback session.

use crate::playback::Snapshot;
use crate::types::Step;

/// Aggregate progress for the whole run, derived from a snapshot plus the
/// step list. Everything here is for display; the sequencer itself never
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookingProgress {
    /// 1-based step number under the cursor
    pub current_step: usize,
    pub total_steps: usize,
    pub completed_count: usize,
    pub progress_percentage: u8,
    pub remaining_steps: usize,
    /// Minutes left from the current step onward
    pub remaining_minutes: u32,
    pub total_cooking_minutes: u32,
    pub is_complete: bool,
}

pub fn cooking_progress(snapshot: &Snapshot, steps: &[Step]) -> CookingProgress {
    let total_steps = steps.len();
    let completed_count = snapshot.completed.len();

    // The step in flight counts toward the bar; a revisited completed step
    // would otherwise push past 100, so cap it
    let in_flight = usize::from(snapshot.current < total_steps);
    let progress_percentage = if total_steps == 0 {
        100
    } else {
        (((completed_count + in_flight) as f32 / total_steps as f32) * 100.0)
            .round()
            .min(100.0) as u8
    };

    let remaining_minutes = steps
        .iter()
        .skip(snapshot.current)
        .map(|s| s.duration)
        .sum();
    let total_cooking_minutes = steps.iter().map(|s| s.duration).sum();

    CookingProgress {
        current_step: snapshot.current + 1,
        total_steps,
        completed_count,
        progress_percentage,
        remaining_steps: total_steps - snapshot.current,
        remaining_minutes,
        total_cooking_minutes,
        is_complete: completed_count == total_steps,
    }
}

/// Human-friendly duration like "45 min" or "1h 15m"
pub fn format_duration(minutes: u32) -> String {
    if minutes < 1 {
        return "< 1 min".to_string();
    }
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        if hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{} hours", hours)
        }
    } else {
        format!("{}h {}m", hours, rest)
    }
}

/// Timer readout like "2:05"
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Contextual tips for the current step, derived from its action and
/// parameters.
pub fn tips_for(step: &Step) -> Vec<&'static str> {
    use crate::actions::ActionKind;

    let mut tips = vec![step.action.profile().tip];

    if step.action == ActionKind::Cook && step.temperature > 90 {
        tips.push("Keep the heat at medium-high to avoid burning");
    }
    if step.action == ActionKind::Fry {
        tips.push("Let the pan heat up before adding ingredients");
    }
    if step.duration > 10 {
        tips.push("This step takes a while - perfect time to prep the next step");
    }
    if step.requires_heat() {
        tips.push("Monitor temperature to avoid overcooking");
    }

    tips
}

/// Temperature display band, matching the appliance's color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBand {
    /// 0°: no heat involved
    Off,
    /// Up to 40°
    Cool,
    /// Up to 80°
    Warm,
    /// Above 80°
    Hot,
}

pub fn temperature_band(temperature: u16) -> TempBand {
    match temperature {
        0 => TempBand::Off,
        1..=40 => TempBand::Cool,
        41..=80 => TempBand::Warm,
        _ => TempBand::Hot,
    }
}
