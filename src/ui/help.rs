//! Help overlay listing the keyboard shortcuts for each screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::keybindings::{shortcuts_for_context, ShortcutContext};

pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn render(&self, frame: &mut Frame) {
        if !self.visible {
            return;
        }

        let mut lines = Vec::new();
        for context in ShortcutContext::all() {
            lines.push(Line::from(Span::styled(
                context.display_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for shortcut in shortcuts_for_context(*context) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<9}", shortcut.key_display()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(shortcut.description),
                ]));
            }
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::Gray),
        )));

        let area = centered_rect(50, lines.len() as u16 + 2, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Help")),
            area,
        );
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

/// Center a fixed-size rect within `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut help = HelpOverlay::new();
        assert!(!help.visible);
        help.toggle();
        assert!(help.visible);
        help.toggle();
        assert!(!help.visible);
    }

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 10);
        assert!(rect.x + rect.width <= area.width);

        // Oversized requests are clamped
        let rect = centered_rect(200, 100, area);
        assert_eq!(rect.width, 80);
        assert_eq!(rect.height, 24);
    }
}
