//! Feed tab - the stack of workout cards
//!
//! Owns the card instances, so like flags live exactly as long as the
//! feed stays mounted.

use crate::components::layout::hit;
use crate::components::workout_card::{CardFrame, WorkoutCard};
use crate::model::WorkoutEntry;
use crate::motion::{ElementId, Motion};
use ratatui::{layout::Rect, Frame};

/// Gap between stacked cards
const CARD_GAP: u16 = 1;

pub struct FeedView {
    cards: Vec<WorkoutCard>,
    focused: usize,
    /// First card drawn at the top of the viewport
    first_visible: usize,
    /// Card rectangles from the last draw, for mouse hits
    card_areas: Vec<(usize, Rect)>,
}

impl FeedView {
    pub fn new(workouts: &[WorkoutEntry]) -> Self {
        Self {
            cards: workouts
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, w)| WorkoutCard::new(w, i))
                .collect(),
            focused: 0,
            first_visible: 0,
            card_areas: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[WorkoutCard] {
        &self.cards
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_card_mut(&mut self) -> Option<&mut WorkoutCard> {
        self.cards.get_mut(self.focused)
    }

    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.cards.len() {
            self.focused += 1;
        }
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.cards.len() {
            self.focused = index;
        }
    }

    /// Card under the given cell in the last drawn frame
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .find(|(_, rect)| hit(*rect, column, row))
            .map(|(i, _)| *i)
    }

    /// Scroll so that the focused card fits below `first_visible`
    fn scroll_to_focus(&mut self, width: u16, height: u16) {
        if self.focused < self.first_visible {
            self.first_visible = self.focused;
        }
        while self.first_visible < self.focused {
            let needed: u16 = self.cards[self.first_visible..=self.focused]
                .iter()
                .map(|c| c.height(width) + CARD_GAP)
                .sum();
            if needed <= height + CARD_GAP {
                break;
            }
            self.first_visible += 1;
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, motion: &dyn Motion, content_opacity: f32) {
        self.card_areas.clear();
        if self.cards.is_empty() || area.height == 0 {
            return;
        }
        self.scroll_to_focus(area.width, area.height);

        let mut y = area.y;
        for card in &self.cards[self.first_visible..] {
            if y >= area.bottom() {
                break;
            }
            let height = card.height(area.width).min(area.bottom() - y);
            let rect = Rect::new(area.x, y, area.width, height);
            let index = card.index();
            let card_frame = CardFrame {
                opacity: motion.progress(ElementId::FeedCard(index)) * content_opacity,
                focused: index == self.focused,
                popping: !motion.is_settled(ElementId::LikePop(index)),
            };
            card.draw_with_frame(frame, rect, card_frame);
            self.card_areas.push((index, rect));
            y = y.saturating_add(height + CARD_GAP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SampleData;
    use crate::motion::Timeline;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn feed() -> FeedView {
        FeedView::new(&SampleData::new().workouts)
    }

    #[test]
    fn test_one_card_per_workout_in_order() {
        let data = SampleData::new();
        let view = FeedView::new(&data.workouts);
        assert_eq!(view.cards().len(), data.workouts.len());
        for (card, workout) in view.cards().iter().zip(&data.workouts) {
            assert_eq!(card.workout().name, workout.name);
            assert_eq!(card.workout().result, workout.result);
            assert_eq!(card.workout().category, workout.category);
        }
    }

    #[test]
    fn test_focus_is_clamped() {
        let mut view = feed();
        view.focus_previous();
        assert_eq!(view.focused(), 0);
        for _ in 0..10 {
            view.focus_next();
        }
        assert_eq!(view.focused(), 3);
        view.focus(9);
        assert_eq!(view.focused(), 3);
    }

    #[test]
    fn test_likes_are_per_card() {
        let mut view = feed();
        view.focus(2);
        view.focused_card_mut().unwrap().toggle_like();
        let liked: Vec<bool> = view.cards().iter().map(|c| c.is_liked()).collect();
        assert_eq!(liked, vec![false, false, true, false]);
    }

    #[test]
    fn test_scroll_follows_focus() {
        let mut view = feed();
        let timeline = Timeline::new(Instant::now());
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

        view.focus(3);
        terminal
            .draw(|frame| view.draw(frame, frame.area(), &timeline, 1.0))
            .unwrap();
        assert_eq!(view.first_visible, 3);
        assert_eq!(view.card_at(5, 1), Some(3));

        view.focus(0);
        terminal
            .draw(|frame| view.draw(frame, frame.area(), &timeline, 1.0))
            .unwrap();
        assert_eq!(view.first_visible, 0);
        assert_eq!(view.card_at(5, 1), Some(0));
    }

    #[test]
    fn test_tall_viewport_draws_every_card() {
        let mut view = feed();
        let timeline = Timeline::new(Instant::now());
        let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();
        terminal
            .draw(|frame| view.draw(frame, frame.area(), &timeline, 1.0))
            .unwrap();
        let drawn: Vec<usize> = view.card_areas.iter().map(|(i, _)| *i).collect();
        assert_eq!(drawn, vec![0, 1, 2, 3]);
    }
}
