//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
#[derive(Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 42, 8);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Leave WODTRACK?",
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Likes are not kept between sessions.",
                Style::default().fg(theme::MUTED),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", theme::key_hint()),
                Span::styled(" Yes, quit  ", Style::default().fg(theme::TEXT)),
                Span::styled(
                    " n/Esc ",
                    Style::default()
                        .fg(theme::TEXT)
                        .bg(theme::ROSE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" Stay", Style::default().fg(theme::TEXT)),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::LIME))
                    .title(" Quit? ")
                    .title_style(theme::accent_bold())
                    .style(Style::default().bg(theme::SURFACE)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> Option<Action> {
        QuitDialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_yes_confirms() {
        assert_eq!(press(KeyCode::Char('y')), Some(Action::ConfirmModal));
        assert_eq!(press(KeyCode::Enter), Some(Action::ConfirmModal));
    }

    #[test]
    fn test_no_and_escape_cancel() {
        assert_eq!(press(KeyCode::Char('n')), Some(Action::CloseModal));
        assert_eq!(press(KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(press(KeyCode::Char('x')), None);
    }
}
