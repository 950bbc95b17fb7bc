//! Component trait
//!
//! Every screen element that owns state (cards, the log form, dialogs)
//! implements this. Events go in, Actions come out; state only changes in
//! `update` or in the component's own setters.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Map a key press to an Action. Components that own text buffers may
    /// edit them here directly.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Map a mouse event to an Action. `area` is where the component was
    /// last drawn.
    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> Result<Option<Action>> {
        let _ = (mouse, area);
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
