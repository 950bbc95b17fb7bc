//! Modal overlays
//!
//! Overlays live on a stack; only the top one receives input and the
//! ones below it are still drawn.

/// An overlay drawn on top of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// The log-workout form
    LogWorkout,
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
}

#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn contains(&self, modal: Modal) -> bool {
        self.stack.contains(&modal)
    }

    /// Drop `modal` wherever it sits in the stack
    pub fn remove(&mut self, modal: Modal) -> bool {
        let before = self.stack.len();
        self.stack.retain(|m| *m != modal);
        self.stack.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}
