//! UI state enums shared by the shell and its components

/// Tab selection in the main content region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Feed,
    PersonalRecords,
    Leaderboard,
}

impl Tab {
    pub fn all() -> [Tab; 3] {
        [Tab::Feed, Tab::PersonalRecords, Tab::Leaderboard]
    }

    /// Label used by the desktop tab bar
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::PersonalRecords => "My PRs",
            Tab::Leaderboard => "Leaderboard",
        }
    }

    /// Shorter label used by the bottom navigation
    pub fn short_name(&self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::PersonalRecords => "PRs",
            Tab::Leaderboard => "Board",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Feed => "☰",
            Tab::PersonalRecords => "★",
            Tab::Leaderboard => "⚡",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Feed => 0,
            Tab::PersonalRecords => 1,
            Tab::Leaderboard => 2,
        }
    }

    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}
