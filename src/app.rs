//! TUI application: owns the sequencer, the tick clock, and the event loop.
//!
//! All session mutation happens here, on one thread, in response to key
//! events and due clock ticks. The clock is stopped before any operation
//! that moves the step cursor, so a pending tick can never land on the
//! wrong step.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::playback::{Phase, Sequencer, StepClock};
use crate::types::Recipe;
use crate::ui::{CookingScreen, HelpOverlay, OverviewScreen, TerminalGuard};

pub struct App {
    config: Config,
    recipe: Recipe,
    sequencer: Sequencer,
    clock: StepClock,
    help: HelpOverlay,
    should_quit: bool,
    /// Status line for the overview screen (demo fallback notice etc.)
    notice: Option<String>,
}

impl App {
    pub fn new(config: Config, recipe: Recipe, notice: Option<String>) -> Self {
        let sequencer = Sequencer::new(recipe.steps.clone());
        let clock = StepClock::new(Duration::from_millis(config.playback.tick_interval_ms));
        Self {
            config,
            recipe,
            sequencer,
            clock,
            help: HelpOverlay::new(),
            should_quit: false,
            notice,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let poll_timeout = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            self.apply_due_ticks();

            terminal.draw(|frame| {
                let snapshot = self.sequencer.snapshot();
                match snapshot.phase {
                    Phase::Active => CookingScreen {
                        recipe: &self.recipe,
                        snapshot: &snapshot,
                        show_tips: self.config.ui.show_tips,
                    }
                    .render(frame),
                    Phase::Overview | Phase::Finished => OverviewScreen {
                        recipe: &self.recipe,
                        finished: snapshot.phase == Phase::Finished,
                        notice: self.notice.as_deref(),
                    }
                    .render(frame),
                }
                self.help.render(frame);
            })?;

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Drain ticks that became due since the last pass into the sequencer.
    /// Stops the clock once the step's threshold is reached.
    fn apply_due_ticks(&mut self) {
        let due = self.clock.due_ticks();
        for _ in 0..due {
            match self.sequencer.tick() {
                Ok(snapshot) => {
                    if snapshot.threshold_reached {
                        self.clock.stop();
                        tracing::info!(step = snapshot.current + 1, "step timer complete");
                        break;
                    }
                }
                Err(err) => {
                    // A tick raced a phase change; the clock should
                    // already be stopped
                    tracing::debug!(%err, "tick dropped");
                    self.clock.stop();
                    break;
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        // Help overlay swallows the next key
        if self.help.visible {
            self.help.visible = false;
            return;
        }
        if key == KeyCode::Char('?') {
            self.help.toggle();
            return;
        }

        match self.sequencer.phase() {
            Phase::Overview | Phase::Finished => self.handle_overview_key(key),
            Phase::Active => self.handle_cooking_key(key),
        }
    }

    fn handle_overview_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('s') => match self.sequencer.start() {
                Ok(_) => {
                    self.notice = None;
                    tracing::info!(recipe = %self.recipe.title, "playback started");
                }
                Err(err) => {
                    tracing::warn!(%err, "could not start playback");
                    self.notice = Some(err.to_string());
                }
            },
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_cooking_key(&mut self, key: KeyCode) {
        let snapshot = self.sequencer.snapshot();
        match key {
            KeyCode::Char(' ') => {
                if snapshot.threshold_reached {
                    // Timer already done; nothing to start or pause
                } else if snapshot.step_started {
                    self.clock.stop();
                    let _ = self.sequencer.pause_step_timer();
                } else if self.sequencer.begin_step_timer().is_ok() {
                    self.clock.start();
                }
            }
            KeyCode::Char('r') => {
                if !snapshot.threshold_reached {
                    self.clock.stop();
                    let _ = self.sequencer.reset_step_timer();
                }
            }
            KeyCode::Char('n') | KeyCode::Right => {
                // Clock is already stopped whenever the threshold is
                // reached, which is the only state where these succeed
                if snapshot.on_last_step() {
                    let _ = self.sequencer.finish();
                } else {
                    let _ = self.sequencer.advance();
                }
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.clock.stop();
                let _ = self.sequencer.previous();
            }
            KeyCode::Char('k') => {
                self.clock.stop();
                let _ = self.sequencer.skip();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < snapshot.step_count {
                    self.clock.stop();
                    let _ = self.sequencer.go_to(index);
                }
            }
            KeyCode::Esc => {
                self.clock.stop();
                let _ = self.sequencer.exit();
                tracing::info!("playback exited");
            }
            KeyCode::Char('q') => {
                self.clock.stop();
                self.should_quit = true;
            }
            _ => {}
        }
    }
}
