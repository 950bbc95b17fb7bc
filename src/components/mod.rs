//! UI Components
//!
//! Stateful pieces (cards, feed, dialogs) own their state and turn events
//! into Actions. Stateless pieces are plain draw functions fed from the
//! sample data.

pub mod feed;
pub mod help_dialog;
pub mod layout;
pub mod leaderboard;
pub mod log_workout_dialog;
pub mod pr_card;
pub mod quit_dialog;
pub mod shell;
pub mod sidebar;
pub mod splash;
pub mod tab_content;
pub mod workout_card;

pub use help_dialog::HelpDialog;
pub use layout::{calculate_shell_layout, centered_popup, ShellLayout};
pub use log_workout_dialog::LogWorkoutDialog;
pub use quit_dialog::QuitDialog;
pub use shell::ShellHitboxes;
pub use splash::SplashComponent;
pub use tab_content::TabContent;
pub use workout_card::WorkoutCard;
