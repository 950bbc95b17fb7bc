//! Leaderboard tab

use crate::model::LeaderboardEntry;
use crate::motion::{ElementId, Motion};
use crate::theme::{self, fade, fade_style, pad_left};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

pub const ROW_HEIGHT: u16 = 4;

pub fn entrance_delay(index: usize) -> Duration {
    Duration::from_millis(100) * index as u32
}

/// Border colour that marks the viewer's own row
pub fn row_border(entry: &LeaderboardEntry) -> Color {
    if entry.is_current_user {
        theme::LIME
    } else {
        theme::BORDER
    }
}

fn name_style(entry: &LeaderboardEntry) -> Style {
    let color = if entry.is_current_user {
        theme::LIME
    } else {
        theme::TEXT
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn render_leaderboard_row(frame: &mut Frame, area: Rect, entry: &LeaderboardEntry, opacity: f32) {
    let shift = ((1.0 - opacity.clamp(0.0, 1.0)) * 2.0).round() as u16;
    let area = Rect {
        x: area.x + shift.min(area.width),
        width: area.width.saturating_sub(shift),
        ..area
    };
    let inner = area.width.saturating_sub(2) as usize;

    let (badge_fg, badge_bg) = theme::rank_colors(entry.rank);
    let badge = format!(" {:>2} ", entry.rank);
    let badge_style = Style::default()
        .fg(badge_fg)
        .bg(badge_bg)
        .add_modifier(Modifier::BOLD);
    let points = entry.points.to_string();
    let name_gap = inner.saturating_sub(badge.width() + 1 + entry.name.width());
    let sub = format!("{} workouts", entry.workouts);
    let sub_gap = inner.saturating_sub(badge.width() + 1 + sub.width());

    let lines = vec![
        Line::from(vec![
            Span::styled(badge.clone(), fade_style(badge_style, opacity)),
            Span::raw(" "),
            Span::styled(entry.name.clone(), fade_style(name_style(entry), opacity)),
            Span::styled(
                pad_left(&points, name_gap),
                Style::default()
                    .fg(fade(theme::TEXT, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" ".repeat(badge.width()), fade_style(badge_style, opacity)),
            Span::raw(" "),
            Span::styled(sub, Style::default().fg(fade(theme::MUTED, opacity))),
            Span::styled(
                pad_left("PTS", sub_gap),
                Style::default().fg(fade(theme::MUTED, opacity)),
            ),
        ]),
    ];

    let background = if entry.is_current_user {
        Style::default().bg(fade(theme::HIGHLIGHT, opacity))
    } else {
        Style::default().bg(fade(theme::SURFACE, opacity))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fade(row_border(entry), opacity)))
        .style(background);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the full leaderboard tab: heading plus one row per entry, in input order
pub fn draw_leaderboard(
    frame: &mut Frame,
    area: Rect,
    entries: &[LeaderboardEntry],
    motion: &dyn Motion,
    content_opacity: f32,
) {
    let heading = Line::from(vec![
        Span::styled("⚡ ", Style::default().fg(fade(theme::LIME, content_opacity))),
        Span::styled(
            "BOX LEADERBOARD",
            Style::default()
                .fg(fade(theme::TEXT, content_opacity))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(heading), Rect { height: 1.min(area.height), ..area });

    let mut y = area.y + 2;
    for (i, entry) in entries.iter().enumerate() {
        if y >= area.bottom() {
            break;
        }
        let height = ROW_HEIGHT.min(area.bottom() - y);
        let row = Rect::new(area.x, y, area.width, height);
        let opacity = motion.progress(ElementId::LeaderRow(i)) * content_opacity;
        render_leaderboard_row(frame, row, entry, opacity);
        y += ROW_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SampleData;
    use crate::motion::Timeline;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    #[test]
    fn test_only_current_user_is_highlighted() {
        let data = SampleData::new();
        let highlighted: Vec<&str> = data
            .leaderboard
            .iter()
            .filter(|e| row_border(e) == theme::LIME)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(highlighted, vec!["You"]);
    }

    #[test]
    fn test_render_preserves_order_and_ranks() {
        let data = SampleData::new();
        let timeline = Timeline::new(Instant::now());
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|frame| draw_leaderboard(frame, frame.area(), &data.leaderboard, &timeline, 1.0))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }

        assert!(text.contains("BOX LEADERBOARD"));
        let positions: Vec<usize> = data
            .leaderboard
            .iter()
            .map(|e| text.find(&e.name).expect("name rendered"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(text.contains("  1 "));
        assert!(text.contains("  5 "));
        assert!(text.contains("2290"));
        assert!(text.contains("21 workouts"));
    }

    #[test]
    fn test_current_user_row_border_color() {
        let data = SampleData::new();
        let you = &data.leaderboard[2];
        let mut terminal = Terminal::new(TestBackend::new(40, ROW_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render_leaderboard_row(frame, frame.area(), you, 1.0))
            .unwrap();
        let corner = &terminal.backend().buffer()[(0, 0)];
        assert_eq!(corner.fg, theme::LIME);
    }
}
