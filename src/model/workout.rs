//! Workout feed entries

/// Scoring style of a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkoutCategory {
    Amrap,
    #[default]
    ForTime,
    Emom,
    Strength,
}

impl WorkoutCategory {
    /// Categories in the order the log form lays out its buttons
    pub fn all() -> [WorkoutCategory; 4] {
        [
            WorkoutCategory::ForTime,
            WorkoutCategory::Amrap,
            WorkoutCategory::Emom,
            WorkoutCategory::Strength,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutCategory::Amrap => "AMRAP",
            WorkoutCategory::ForTime => "For Time",
            WorkoutCategory::Emom => "EMOM",
            WorkoutCategory::Strength => "Strength",
        }
    }

    /// Example shown in the empty result field of the log form
    pub fn result_placeholder(&self) -> &'static str {
        match self {
            WorkoutCategory::Amrap => "e.g., 8 rounds + 5 reps",
            _ => "e.g., 5:30",
        }
    }
}

/// A logged workout as it appears in the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutEntry {
    pub id: String,
    pub name: String,
    pub category: WorkoutCategory,
    pub result: String,
    /// Performed as prescribed
    pub rx: bool,
    /// Relative label such as "2 hours ago"
    pub date_label: String,
    pub athlete: String,
    pub initials: String,
    pub likes: u32,
    pub comments: u32,
    pub movements: Vec<String>,
}

impl WorkoutEntry {
    /// Like count to display, given whether the viewer has liked the entry
    pub fn display_likes(&self, liked: bool) -> u32 {
        if liked {
            self.likes.saturating_add(1)
        } else {
            self.likes
        }
    }
}
