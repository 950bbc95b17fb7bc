//! Content region of the shell
//!
//! Exactly one tab's content is mounted at a time. Mounting builds fresh
//! view state (new feed cards, cursor on the first card).

use crate::components::feed::FeedView;
use crate::components::{leaderboard, pr_card};
use crate::model::{PersonalRecord, SampleData, Tab};
use crate::motion::{ElementId, Motion, TransitionSpec};
use crate::theme::{self, fade};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

/// Cross-fade duration of the content region
pub const CONTENT_FADE: Duration = Duration::from_millis(180);
const ROW_ENTRANCE: Duration = Duration::from_millis(300);

pub enum TabContent {
    Feed(FeedView),
    PersonalRecords,
    Leaderboard,
}

impl TabContent {
    /// Build the content for `tab` and start its entrance transitions
    pub fn mount(tab: Tab, data: &SampleData, motion: &mut dyn Motion) -> Self {
        motion.begin(ElementId::Content(tab), TransitionSpec::fade_in(CONTENT_FADE));
        match tab {
            Tab::Feed => {
                let view = FeedView::new(&data.workouts);
                for card in view.cards() {
                    motion.begin(
                        ElementId::FeedCard(card.index()),
                        TransitionSpec::fade_in(crate::components::workout_card::ENTRANCE)
                            .with_delay(card.entrance_delay()),
                    );
                    motion.forget(ElementId::LikePop(card.index()));
                }
                TabContent::Feed(view)
            }
            Tab::PersonalRecords => {
                for i in 0..data.records.len() {
                    motion.begin(
                        ElementId::RecordRow(i),
                        TransitionSpec::fade_in(ROW_ENTRANCE).with_delay(pr_card::entrance_delay(i)),
                    );
                }
                TabContent::PersonalRecords
            }
            Tab::Leaderboard => {
                for i in 0..data.leaderboard.len() {
                    motion.begin(
                        ElementId::LeaderRow(i),
                        TransitionSpec::fade_in(ROW_ENTRANCE)
                            .with_delay(leaderboard::entrance_delay(i)),
                    );
                }
                TabContent::Leaderboard
            }
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            TabContent::Feed(_) => Tab::Feed,
            TabContent::PersonalRecords => Tab::PersonalRecords,
            TabContent::Leaderboard => Tab::Leaderboard,
        }
    }

    pub fn feed(&self) -> Option<&FeedView> {
        match self {
            TabContent::Feed(view) => Some(view),
            _ => None,
        }
    }

    pub fn feed_mut(&mut self) -> Option<&mut FeedView> {
        match self {
            TabContent::Feed(view) => Some(view),
            _ => None,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, data: &SampleData, motion: &dyn Motion) {
        let opacity = motion.progress(ElementId::Content(self.tab()));
        match self {
            TabContent::Feed(view) => view.draw(frame, area, motion, opacity),
            TabContent::PersonalRecords => draw_records(frame, area, &data.records, motion, opacity),
            TabContent::Leaderboard => {
                leaderboard::draw_leaderboard(frame, area, &data.leaderboard, motion, opacity)
            }
        }
    }
}

fn draw_records(
    frame: &mut Frame,
    area: Rect,
    records: &[PersonalRecord],
    motion: &dyn Motion,
    content_opacity: f32,
) {
    let heading = Line::from(vec![
        Span::styled("★ ", Style::default().fg(fade(theme::LIME, content_opacity))),
        Span::styled(
            "PERSONAL RECORDS",
            Style::default()
                .fg(fade(theme::TEXT, content_opacity))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(heading), Rect { height: 1.min(area.height), ..area });

    let mut y = area.y + 2;
    for (i, record) in records.iter().enumerate() {
        if y >= area.bottom() {
            return;
        }
        let height = pr_card::ROW_HEIGHT.min(area.bottom() - y);
        let opacity = motion.progress(ElementId::RecordRow(i)) * content_opacity;
        pr_card::render_pr_card(frame, Rect::new(area.x, y, area.width, height), record, opacity);
        y += pr_card::ROW_HEIGHT + 1;
    }

    y += 1;
    if y + 3 <= area.bottom() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Track more movements to see your progress",
            Style::default().fg(fade(theme::MUTED, content_opacity)),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_set(ratatui::symbols::border::Set {
                    top_left: "┌",
                    top_right: "┐",
                    bottom_left: "└",
                    bottom_right: "┘",
                    vertical_left: "┆",
                    vertical_right: "┆",
                    horizontal_top: "┄",
                    horizontal_bottom: "┄",
                })
                .border_style(Style::default().fg(fade(theme::BORDER, content_opacity))),
        );
        frame.render_widget(hint, Rect::new(area.x, y, area.width, 3));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Timeline;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn rendered(content: &mut TabContent, data: &SampleData, motion: &Timeline) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 40)).unwrap();
        terminal
            .draw(|frame| content.draw(frame, frame.area(), data, motion))
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
    fn test_mount_reports_its_tab() {
        let data = SampleData::new();
        let mut timeline = Timeline::new(Instant::now()).with_enabled(false);
        for tab in Tab::all() {
            let content = TabContent::mount(tab, &data, &mut timeline);
            assert_eq!(content.tab(), tab);
            assert_eq!(content.feed().is_some(), tab == Tab::Feed);
        }
    }

    #[test]
    fn test_mount_staggers_feed_cards() {
        let data = SampleData::new();
        let start = Instant::now();
        let mut timeline = Timeline::new(start);
        TabContent::mount(Tab::Feed, &data, &mut timeline);

        timeline.advance(start + Duration::from_millis(150));
        assert!(timeline.progress(ElementId::FeedCard(0)) > 0.0);
        assert_eq!(timeline.progress(ElementId::FeedCard(2)), 0.0);
    }

    #[test]
    fn test_records_tab_renders_every_record() {
        let data = SampleData::new();
        let mut timeline = Timeline::new(Instant::now()).with_enabled(false);
        let mut content = TabContent::mount(Tab::PersonalRecords, &data, &mut timeline);
        let text = rendered(&mut content, &data, &timeline);

        assert!(text.contains("PERSONAL RECORDS"));
        for record in &data.records {
            assert!(text.contains(&record.movement.to_uppercase()));
            assert!(text.contains(&record.improvement));
        }
        assert!(text.contains("Track more movements to see your progress"));
        assert!(!text.contains("BOX LEADERBOARD"));
    }

    #[test]
    fn test_feed_tab_renders_only_workouts() {
        let data = SampleData::new();
        let mut timeline = Timeline::new(Instant::now()).with_enabled(false);
        let mut content = TabContent::mount(Tab::Feed, &data, &mut timeline);
        let text = rendered(&mut content, &data, &timeline);

        assert!(text.contains("FRAN"));
        assert!(!text.contains("PERSONAL RECORDS"));
        assert!(!text.contains("BOX LEADERBOARD"));
    }
}
