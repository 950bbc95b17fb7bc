//! Action enum - every state transition the shell knows about
//!
//! Components translate key and mouse events into Actions; the App applies
//! them and may answer with a follow-up Action.

use crate::model::Tab;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Advance transitions
    Tick,
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────────────────────
    SelectTab(Tab),
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Feed
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the feed focus to the next card
    NextCard,
    PrevCard,
    /// Move the feed focus to a card by index
    FocusCard(usize),
    /// Flip the like flag of the focused card
    ToggleLike,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the log-workout form
    OpenLogWorkout,
    /// "Post Workout" pressed in the form
    SubmitWorkout,
    OpenQuitDialog,
    OpenHelp,
    /// Close the top modal
    CloseModal,
    /// Confirm the top modal
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::SelectTab(tab) => write!(f, "SelectTab({})", tab.name()),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::NextCard => write!(f, "NextCard"),
            Action::PrevCard => write!(f, "PrevCard"),
            Action::FocusCard(i) => write!(f, "FocusCard({})", i),
            Action::ToggleLike => write!(f, "ToggleLike"),
            Action::OpenLogWorkout => write!(f, "OpenLogWorkout"),
            Action::SubmitWorkout => write!(f, "SubmitWorkout"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
