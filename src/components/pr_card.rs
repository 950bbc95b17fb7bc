//! Personal-record row

use crate::model::PersonalRecord;
use crate::theme::{self, fade, pad_left};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

pub const ROW_HEIGHT: u16 = 4;

pub fn entrance_delay(index: usize) -> Duration {
    Duration::from_millis(300) + Duration::from_millis(100) * index as u32
}

/// Draw one record; rows slide in from the left while they fade in
pub fn render_pr_card(frame: &mut Frame, area: Rect, record: &PersonalRecord, opacity: f32) {
    let shift = ((1.0 - opacity.clamp(0.0, 1.0)) * 2.0).round() as u16;
    let area = Rect {
        x: area.x + shift.min(area.width),
        width: area.width.saturating_sub(shift),
        ..area
    };
    let inner = area.width.saturating_sub(2) as usize;

    let movement = record.movement.to_uppercase();
    let top_gap = inner.saturating_sub(movement.width());
    let bottom_gap = inner.saturating_sub(record.date_label.width());

    let lines = vec![
        Line::from(vec![
            Span::styled(
                movement,
                Style::default()
                    .fg(fade(theme::TEXT, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                pad_left(&record.value, top_gap),
                Style::default()
                    .fg(fade(theme::TEXT, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                record.date_label.clone(),
                Style::default().fg(fade(theme::MUTED, opacity)),
            ),
            Span::styled(
                pad_left(&record.improvement, bottom_gap),
                Style::default()
                    .fg(fade(theme::LIME, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .padding(Padding::vertical(1))
        .border_style(Style::default().fg(fade(theme::LIME, opacity)))
        .style(Style::default().bg(fade(theme::SURFACE, opacity)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SampleData;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_entrance_delay() {
        assert_eq!(entrance_delay(0), Duration::from_millis(300));
        assert_eq!(entrance_delay(2), Duration::from_millis(500));
    }

    #[test]
    fn test_render_record_fields() {
        let record = SampleData::new().records[0].clone();
        let mut terminal = Terminal::new(TestBackend::new(40, ROW_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render_pr_card(frame, frame.area(), &record, 1.0))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(1).contains("BACK SQUAT"));
        assert!(row(1).trim_end().ends_with("315 lbs"));
        assert!(row(2).contains("This week"));
        assert!(row(2).trim_end().ends_with("+15 lbs"));
    }
}
