//! Personal records and the box leaderboard

/// Best result for a movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalRecord {
    pub movement: String,
    pub value: String,
    pub date_label: String,
    /// Signed delta against the previous best, e.g. "+15 lbs" or "-18 sec"
    pub improvement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: u32,
    pub name: String,
    pub points: u32,
    pub workouts: u32,
    pub is_current_user: bool,
}

/// Stats-bar tile on top of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    pub unit: String,
}

/// Programmed workout for the next day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingWod {
    pub title: String,
    pub movements: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyChallenge {
    pub title: String,
    pub completed: u32,
    pub target: u32,
}

impl WeeklyChallenge {
    /// Completion ratio in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.target == 0 {
            return 1.0;
        }
        (f64::from(self.completed) / f64::from(self.target)).clamp(0.0, 1.0)
    }
}
