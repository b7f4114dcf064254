//! Active cooking screen: overall progress, step navigation dots, the
//! current step's parameters and timer, and context-sensitive controls.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::playback::progress::{
    cooking_progress, format_clock, format_duration, temperature_band, tips_for, TempBand,
};
use crate::playback::Snapshot;
use crate::types::Recipe;

pub struct CookingScreen<'a> {
    pub recipe: &'a Recipe,
    pub snapshot: &'a Snapshot,
    pub show_tips: bool,
}

impl CookingScreen<'_> {
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress header
                Constraint::Length(1), // Step dots
                Constraint::Min(8),    // Step detail
                Constraint::Length(3), // Timer
                Constraint::Length(2), // Controls
            ])
            .split(frame.area());

        self.render_progress(frame, chunks[0]);
        self.render_dots(frame, chunks[1]);
        self.render_step(frame, chunks[2]);
        self.render_timer(frame, chunks[3]);
        self.render_controls(frame, chunks[4]);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let progress = cooking_progress(self.snapshot, &self.recipe.steps);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "{} | Step {} of {} | {} left",
                self.recipe.title,
                progress.current_step,
                progress.total_steps,
                format_duration(progress.remaining_minutes)
            )))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(f64::from(progress.progress_percentage).min(100.0) / 100.0);
        frame.render_widget(gauge, area);
    }

    fn render_dots(&self, frame: &mut Frame, area: Rect) {
        let snap = self.snapshot;
        let mut spans = vec![Span::raw(" ")];
        for index in 0..snap.step_count {
            let completed = snap.completed.contains(&index);
            let (symbol, style) = if index == snap.current {
                (
                    format!("({})", index + 1),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else if completed {
                ("✓".to_string(), Style::default().fg(Color::Green))
            } else {
                ((index + 1).to_string(), Style::default().fg(Color::Gray))
            };
            spans.push(Span::styled(symbol, style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_step(&self, frame: &mut Frame, area: Rect) {
        let Some(step) = self.recipe.steps.get(self.snapshot.current) else {
            return;
        };
        let profile = step.action.profile();

        let temp_color = match temperature_band(step.temperature) {
            TempBand::Off => Color::DarkGray,
            TempBand::Cool => Color::Cyan,
            TempBand::Warm => Color::Yellow,
            TempBand::Hot => Color::Red,
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", profile.icon)),
                Span::styled(
                    format!("Step {}: {}", step.order_number, profile.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Temperature ", Style::default().fg(Color::Gray)),
                Span::styled(format!("{}°C", step.temperature), Style::default().fg(temp_color)),
                Span::styled("   Speed ", Style::default().fg(Color::Gray)),
                Span::raw(step.speed.to_string()),
                Span::styled("   Duration ", Style::default().fg(Color::Gray)),
                Span::raw(format!("{} min", step.duration)),
            ]),
            Line::default(),
            Line::from(step.description.as_str()),
            Line::default(),
            Line::from(Span::styled(
                summary_line(step),
                Style::default().fg(Color::Gray),
            )),
        ];

        if self.show_tips {
            lines.push(Line::default());
            for tip in tips_for(step) {
                lines.push(Line::from(Span::styled(
                    format!("💡 {}", tip),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Instructions"));
        frame.render_widget(paragraph, area);
    }

    fn render_timer(&self, frame: &mut Frame, area: Rect) {
        let snap = self.snapshot;
        let label = format!(
            "{} / {}",
            format_clock(snap.elapsed_secs),
            format_clock(snap.duration_secs)
        );
        let ratio = if snap.duration_secs == 0 {
            1.0
        } else {
            f64::from(snap.elapsed_secs) / f64::from(snap.duration_secs)
        };
        let color = if snap.threshold_reached {
            Color::Green
        } else if snap.step_started {
            Color::Cyan
        } else {
            Color::Gray
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Step timer"))
            .gauge_style(Style::default().fg(color))
            .label(label)
            .ratio(ratio.clamp(0.0, 1.0));
        frame.render_widget(gauge, area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let snap = self.snapshot;
        // Mirror the appliance's buttons: only show what is pressable now
        let hint = if snap.threshold_reached {
            if snap.on_last_step() {
                "n: finish cooking 🎉   p: previous   Esc: exit   ?: help"
            } else {
                "n: next step   p: previous   k: skip   Esc: exit   ?: help"
            }
        } else if snap.step_started {
            "Space: pause   r: reset   k: skip   Esc: exit   ?: help"
        } else if snap.elapsed_secs > 0 {
            "Space: resume   r: reset   k: skip   Esc: exit   ?: help"
        } else {
            "Space: start step   p: previous   k: skip   1-9: jump   Esc: exit   ?: help"
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
            area,
        );
    }
}

fn summary_line(step: &crate::types::Step) -> String {
    let profile = step.action.profile();
    let mut summary = profile.label.to_string();
    if step.temperature > 0 {
        summary.push_str(&format!(" at {}°C", step.temperature));
    }
    if step.speed > 0 {
        summary.push_str(&format!(" with speed {}", step.speed));
    }
    if step.duration > 0 {
        summary.push_str(&format!(" for {} minutes", step.duration));
    }
    format!("{} — {}", summary, profile.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionKind;
    use crate::types::Step;

    #[test]
    fn test_summary_line_omits_inactive_params() {
        let step = Step {
            order_number: 1,
            action: ActionKind::Knead,
            description: String::new(),
            temperature: 0,
            speed: 0,
            duration: 3,
        };
        assert_eq!(
            summary_line(&step),
            "Knead for 3 minutes — Kneading dough"
        );
    }

    #[test]
    fn test_summary_line_with_all_params() {
        let step = Step {
            order_number: 2,
            action: ActionKind::Cook,
            description: String::new(),
            temperature: 100,
            speed: 2,
            duration: 10,
        };
        assert_eq!(
            summary_line(&step),
            "Cook at 100°C with speed 2 for 10 minutes — Cooking with stirring"
        );
    }
}
