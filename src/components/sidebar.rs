//! Sidebar widgets shown on wide terminals

use crate::model::{PersonalRecord, SampleData, UpcomingWod, WeeklyChallenge};
use crate::motion::{ElementId, Motion};
use crate::theme::{self, fade, pad_left};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Recent PRs, Tomorrow's WOD, Weekly Challenge
pub const WIDGET_COUNT: usize = 3;
pub const ENTRANCE: Duration = Duration::from_millis(400);

pub fn entrance_delay(index: usize) -> Duration {
    Duration::from_millis(200) + Duration::from_millis(100) * index as u32
}

fn section(title: &str, opacity: f32) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fade(theme::BORDER, opacity)))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(fade(theme::TEXT, opacity))
                .add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(fade(theme::SURFACE, opacity)))
}

fn recent_prs_height(records: &[PersonalRecord]) -> u16 {
    2 + 2 * records.len() as u16
}

fn draw_recent_prs(frame: &mut Frame, area: Rect, records: &[PersonalRecord], opacity: f32) {
    let inner = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for record in records {
        let gap = inner.saturating_sub(record.movement.width());
        lines.push(Line::from(vec![
            Span::styled(
                record.movement.clone(),
                Style::default().fg(fade(theme::TEXT, opacity)),
            ),
            Span::styled(
                pad_left(&record.value, gap),
                Style::default()
                    .fg(fade(theme::LIME, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            record.date_label.clone(),
            Style::default().fg(fade(theme::MUTED, opacity)),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(section("★ RECENT PRs", opacity)),
        area,
    );
}

fn upcoming_height(wod: &UpcomingWod) -> u16 {
    // borders, strip, title, movements, blank, note
    2 + 1 + 1 + wod.movements.len() as u16 + 1 + 1
}

fn draw_upcoming(frame: &mut Frame, area: Rect, wod: &UpcomingWod, opacity: f32) {
    let inner = area.width.saturating_sub(4) as usize;
    let strip = format!("{:<width$}", " TOMORROW'S WOD", width = inner);
    let mut lines = vec![
        Line::from(Span::styled(
            strip,
            Style::default()
                .fg(fade(theme::BLACK, opacity))
                .bg(fade(theme::LIME, opacity))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            wod.title.clone(),
            Style::default()
                .fg(fade(theme::TEXT, opacity))
                .add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(wod.movements.iter().map(|m| {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(fade(theme::LIME, opacity))),
            Span::styled(m.clone(), Style::default().fg(fade(theme::TEXT_DIM, opacity))),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        theme::truncate(&wod.note, inner),
        Style::default().fg(fade(theme::MUTED, opacity)),
    )));
    frame.render_widget(
        Paragraph::new(lines).block(section("UP NEXT", opacity)),
        area,
    );
}

const CHALLENGE_HEIGHT: u16 = 5;

fn draw_challenge(frame: &mut Frame, area: Rect, challenge: &WeeklyChallenge, opacity: f32) {
    let block = section("WEEKLY CHALLENGE", opacity);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let title = Line::from(Span::styled(
        challenge.title.clone(),
        Style::default().fg(fade(theme::TEXT, opacity)),
    ));
    frame.render_widget(Paragraph::new(title), Rect { height: 1, ..inner });

    if inner.height >= 2 {
        let gauge = Gauge::default()
            .ratio(challenge.fraction())
            .label("")
            .use_unicode(true)
            .gauge_style(
                Style::default()
                    .fg(fade(theme::LIME, opacity))
                    .bg(fade(theme::SURFACE_RAISED, opacity)),
            );
        frame.render_widget(gauge, Rect::new(inner.x, inner.y + 1, inner.width, 1));
    }

    if inner.height >= 3 {
        let progress = Line::from(Span::styled(
            format!("{}/{} completed", challenge.completed, challenge.target),
            Style::default().fg(fade(theme::MUTED, opacity)),
        ));
        frame.render_widget(
            Paragraph::new(progress),
            Rect::new(inner.x, inner.y + 2, inner.width, 1),
        );
    }
}

/// Draw the three widgets top to bottom, clipping whatever does not fit
pub fn draw_sidebar(frame: &mut Frame, area: Rect, data: &SampleData, motion: &dyn Motion) {
    let heights = [
        recent_prs_height(data.recent_records()),
        upcoming_height(&data.upcoming),
        CHALLENGE_HEIGHT,
    ];

    let mut y = area.y;
    for (i, height) in heights.into_iter().enumerate() {
        if y >= area.bottom() {
            break;
        }
        let rect = Rect::new(area.x, y, area.width, height.min(area.bottom() - y));
        let opacity = motion.progress(ElementId::Sidebar(i));
        match i {
            0 => draw_recent_prs(frame, rect, data.recent_records(), opacity),
            1 => draw_upcoming(frame, rect, &data.upcoming, opacity),
            _ => draw_challenge(frame, rect, &data.challenge, opacity),
        }
        y = y.saturating_add(height + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Timeline;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn rendered(width: u16, height: u16) -> String {
        let data = SampleData::new();
        let timeline = Timeline::new(Instant::now());
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw_sidebar(frame, frame.area(), &data, &timeline))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_sidebar_shows_first_three_records() {
        let text = rendered(40, 40);
        assert!(text.contains("Back Squat"));
        assert!(text.contains("Snatch"));
        assert!(text.contains("Fran"));
        assert!(!text.contains("Clean & Jerk"));
    }

    #[test]
    fn test_sidebar_shows_upcoming_and_challenge() {
        let text = rendered(40, 40);
        assert!(text.contains("TOMORROW'S WOD"));
        assert!(text.contains("MURPH"));
        assert!(text.contains("300 Squats"));
        assert!(text.contains("Complete 5 WODs"));
        assert!(text.contains("3/5 completed"));
    }

    #[test]
    fn test_short_sidebar_clips_without_panicking() {
        let text = rendered(40, 6);
        assert!(text.contains("RECENT PRs"));
        assert!(!text.contains("MURPH"));
    }
}
