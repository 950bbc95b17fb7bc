//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let margin = 4.min(area.width / 4).min(area.height / 4);
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(theme::accent_bold())
                    .border_style(Style::default().fg(theme::LIME))
                    .style(Style::default().bg(theme::SURFACE)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            theme::accent_bold(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(theme::SUBTLE),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(theme::CYAN).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(theme::TEXT)),
        ]));
    };

    add_section(&mut lines, "Tabs");
    add_shortcut(&mut lines, "1 / 2 / 3", "Feed / My PRs / Leaderboard");
    add_shortcut(&mut lines, "Tab", "Next tab");
    add_shortcut(&mut lines, "Shift+Tab", "Previous tab");

    add_section(&mut lines, "Feed");
    add_shortcut(&mut lines, "j / ↓", "Focus next workout");
    add_shortcut(&mut lines, "k / ↑", "Focus previous workout");
    add_shortcut(&mut lines, "Space / l", "Like or unlike the focused workout");

    add_section(&mut lines, "Log Workout");
    add_shortcut(&mut lines, "n / +", "Open the log form");
    add_shortcut(&mut lines, "Tab", "Next field");
    add_shortcut(&mut lines, "← → / h l", "Change workout type");
    add_shortcut(&mut lines, "Enter", "Post workout (on the button)");
    add_shortcut(&mut lines, "Esc", "Close the form");

    add_section(&mut lines, "Mouse");
    add_shortcut(&mut lines, "Click tab", "Switch tab");
    add_shortcut(&mut lines, "Click card", "Focus it, click again to like");
    add_shortcut(&mut lines, "Click outside", "Close the form");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(theme::MUTED),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(dialog: &mut HelpDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert_eq!(press(&mut dialog, code), Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let mut dialog = HelpDialog::default();
        for _ in 0..200 {
            press(&mut dialog, KeyCode::Down);
        }
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();
        assert!(dialog.scroll_offset < build_help_content().len());
        press(&mut dialog, KeyCode::PageUp);
        press(&mut dialog, KeyCode::PageUp);
        press(&mut dialog, KeyCode::PageUp);
        press(&mut dialog, KeyCode::PageUp);
        assert_eq!(dialog.scroll_offset, 0);
    }

    #[test]
    fn test_lists_log_shortcut() {
        let text: String = build_help_content()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Open the log form"));
        assert!(text.contains("Ctrl+c"));
    }
}
