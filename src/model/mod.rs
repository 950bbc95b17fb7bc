//! Model layer
//!
//! - `workout` / `record` - fixture record types
//! - `sample_data` - the immutable store holding every fixture
//! - `ui` - tab and mode enums
//! - `modal` - overlay stack

pub mod modal;
pub mod record;
pub mod sample_data;
pub mod ui;
pub mod workout;

pub use record::{LeaderboardEntry, PersonalRecord, StatTile, UpcomingWod, WeeklyChallenge};
pub use sample_data::SampleData;
pub use ui::Tab;
pub use workout::{WorkoutCategory, WorkoutEntry};
