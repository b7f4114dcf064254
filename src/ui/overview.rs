//! Recipe overview screen, shown before playback starts and again after a
//! finished run.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::playback::progress::format_duration;
use crate::types::Recipe;

pub struct OverviewScreen<'a> {
    pub recipe: &'a Recipe,
    /// Whether the previous run completed (shows the finished banner)
    pub finished: bool,
    /// Status line, e.g. the demo-data fallback notice
    pub notice: Option<&'a str>,
}

impl OverviewScreen<'_> {
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),  // Header: title, description, meta
                Constraint::Min(8),     // Steps + ingredients
                Constraint::Length(2),  // Footer
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        self.render_steps(frame, columns[0]);
        self.render_ingredients(frame, columns[1]);

        self.render_footer(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = if self.finished {
            format!("{} — cooking complete 🎉", self.recipe.title)
        } else {
            self.recipe.title.clone()
        };

        let meta = Line::from(vec![
            Span::styled("Servings: ", Style::default().fg(Color::Gray)),
            Span::raw(self.recipe.servings.to_string()),
            Span::raw("   "),
            Span::styled("Prep: ", Style::default().fg(Color::Gray)),
            Span::raw(format_duration(self.recipe.preparation_time)),
            Span::raw("   "),
            Span::styled("Cook: ", Style::default().fg(Color::Gray)),
            Span::raw(format_duration(self.recipe.cooking_time)),
            Span::raw("   "),
            Span::styled("Steps: ", Style::default().fg(Color::Gray)),
            Span::raw(self.recipe.steps.len().to_string()),
        ]);

        let lines = vec![
            Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(self.recipe.description.as_str()),
            meta,
        ];

        let block = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Recipe"));
        frame.render_widget(block, area);
    }

    fn render_steps(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .recipe
            .steps
            .iter()
            .map(|step| {
                let profile = step.action.profile();
                let header = Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", step.order_number),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw(format!("{} ", profile.icon)),
                    Span::styled(
                        profile.label.to_uppercase(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", format_duration(step.duration)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                let body = Line::from(Span::styled(
                    format!("    {}", step.description),
                    Style::default().fg(Color::Gray),
                ));
                ListItem::new(vec![header, body])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Steps ({})", self.recipe.steps.len())),
        );
        frame.render_widget(list, area);
    }

    fn render_ingredients(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .recipe
            .ingredients
            .iter()
            .map(|i| ListItem::new(Line::from(format!("• {}", i.display()))))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Ingredients ({})", self.recipe.ingredients.len())),
        );
        frame.render_widget(list, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hint = match self.notice {
            Some(notice) => Line::from(vec![
                Span::styled(notice, Style::default().fg(Color::Yellow)),
                Span::raw("   Enter: start cooking   q: quit   ?: help"),
            ]),
            None => Line::from("Enter: start cooking   q: quit   ?: help"),
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
            area,
        );
    }
}
