//! Workout card - one feed entry with a like toggle

use crate::action::Action;
use crate::component::Component;
use crate::model::WorkoutEntry;
use crate::theme::{self, fade, fade_style, pad_left, truncate};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Entrance delay step between consecutive cards
pub const STAGGER: Duration = Duration::from_millis(100);
pub const ENTRANCE: Duration = Duration::from_millis(400);

/// Visual parameters supplied by the feed for one frame
#[derive(Debug, Clone, Copy)]
pub struct CardFrame {
    pub opacity: f32,
    pub focused: bool,
    /// The star is mid-"pop" after being liked
    pub popping: bool,
}

impl Default for CardFrame {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            focused: false,
            popping: false,
        }
    }
}

pub struct WorkoutCard {
    workout: WorkoutEntry,
    /// Position in the feed; only drives the entrance delay
    index: usize,
    liked: bool,
}

impl WorkoutCard {
    pub fn new(workout: WorkoutEntry, index: usize) -> Self {
        Self {
            workout,
            index,
            liked: false,
        }
    }

    pub fn workout(&self) -> &WorkoutEntry {
        &self.workout
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn displayed_likes(&self) -> u32 {
        self.workout.display_likes(self.liked)
    }

    pub fn like_glyph(&self) -> &'static str {
        if self.liked {
            "★"
        } else {
            "☆"
        }
    }

    pub fn entrance_delay(&self) -> Duration {
        STAGGER * self.index as u32
    }

    /// Rows needed to draw the card at `width` columns, borders included
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2) as usize;
        let tags = self.movement_lines(inner).len() as u16;
        2 + 4 + tags + 2
    }

    /// Movement tags packed into lines of at most `width` columns
    fn movement_lines(&self, width: usize) -> Vec<Vec<String>> {
        let mut lines: Vec<Vec<String>> = Vec::new();
        let mut used = 0;
        for movement in &self.workout.movements {
            let tag = truncate(&format!(" {} ", movement), width.max(1));
            let tag_width = tag.width();
            let needs_gap = used > 0;
            let required = tag_width + usize::from(needs_gap);
            match lines.last_mut() {
                Some(line) if used + required <= width => {
                    line.push(tag);
                    used += required;
                }
                _ => {
                    lines.push(vec![tag]);
                    used = tag_width;
                }
            }
        }
        lines
    }

    pub fn draw_with_frame(&self, frame: &mut Frame, area: Rect, card: CardFrame) {
        let o = card.opacity;
        let inner_width = area.width.saturating_sub(2) as usize;
        let workout = &self.workout;

        let border = if card.focused { theme::LIME } else { theme::BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(fade(border, o)))
            .style(Style::default().bg(fade(theme::SURFACE, o)));

        let mut lines = Vec::new();

        // Athlete row with the category badge pushed to the right edge
        let avatar = format!(" {} ", workout.initials);
        let badge = format!(" {} ", workout.category.label().to_uppercase());
        let left_width = avatar.width() + 1 + workout.athlete.width();
        let gap = inner_width.saturating_sub(left_width + badge.width()).max(1);
        lines.push(Line::from(vec![
            Span::styled(
                avatar.clone(),
                fade_style(
                    Style::default()
                        .fg(theme::LIME)
                        .bg(theme::SURFACE_RAISED)
                        .add_modifier(Modifier::BOLD),
                    o,
                ),
            ),
            Span::raw(" "),
            Span::styled(
                workout.athlete.clone(),
                Style::default()
                    .fg(fade(theme::TEXT, o))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
            Span::styled(badge, fade_style(theme::category_badge(workout.category), o)),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(avatar.width() + 1)),
            Span::styled(
                workout.date_label.clone(),
                Style::default().fg(fade(theme::MUTED, o)),
            ),
        ]));

        let mut title = vec![Span::styled(
            workout.name.to_uppercase(),
            Style::default()
                .fg(fade(theme::TEXT, o))
                .add_modifier(Modifier::BOLD),
        )];
        if workout.rx {
            title.push(Span::raw(" "));
            title.push(Span::styled(
                " RX ",
                fade_style(theme::key_hint(), o),
            ));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(Span::styled(
            workout.result.clone(),
            fade_style(theme::accent_bold(), o),
        )));

        for tags in self.movement_lines(inner_width) {
            let mut spans = Vec::new();
            for (i, tag) in tags.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    tag,
                    Style::default()
                        .fg(fade(theme::TEXT_DIM, o))
                        .bg(fade(theme::SURFACE_RAISED, o)),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(Span::styled(
            "─".repeat(inner_width),
            Style::default().fg(fade(theme::SURFACE_RAISED, o)),
        )));

        let like_color = if self.liked { theme::LIME } else { theme::MUTED };
        let mut like_style = Style::default().fg(fade(like_color, o));
        if card.popping {
            like_style = like_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        let likes = format!("{} {}", self.like_glyph(), self.displayed_likes());
        let comments = format!("💬 {}", workout.comments);
        let share = "⤴ share";
        let used = likes.width() + 3 + comments.width();
        lines.push(Line::from(vec![
            Span::styled(likes, like_style),
            Span::raw("   "),
            Span::styled(comments, Style::default().fg(fade(theme::MUTED, o))),
            Span::styled(
                pad_left(share, inner_width.saturating_sub(used)),
                Style::default().fg(fade(theme::SUBTLE, o)),
            ),
        ]));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for WorkoutCard {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::ToggleLike {
            self.toggle_like();
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_with_frame(frame, area, CardFrame::default());
        Ok(())
    }
}
