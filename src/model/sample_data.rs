//! Built-in sample data shown by the feed
//!
//! Everything here is constructed once at startup and never mutated.

use super::record::{LeaderboardEntry, PersonalRecord, StatTile, UpcomingWod, WeeklyChallenge};
use super::workout::{WorkoutCategory, WorkoutEntry};
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Fixture collections for every panel of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    pub workouts: Vec<WorkoutEntry>,
    pub records: Vec<PersonalRecord>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub stats: Vec<StatTile>,
    pub upcoming: UpcomingWod,
    pub challenge: WeeklyChallenge,
}

impl Default for SampleData {
    fn default() -> Self {
        Self::new()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn workout(
    id: &str,
    name: &str,
    category: WorkoutCategory,
    result: &str,
    rx: bool,
    date_label: &str,
    athlete: &str,
    initials: &str,
    likes: u32,
    comments: u32,
    movements: &[&str],
) -> WorkoutEntry {
    WorkoutEntry {
        id: id.to_string(),
        name: name.to_string(),
        category,
        result: result.to_string(),
        rx,
        date_label: date_label.to_string(),
        athlete: athlete.to_string(),
        initials: initials.to_string(),
        likes,
        comments,
        movements: strings(movements),
    }
}

fn record(movement: &str, value: &str, date_label: &str, improvement: &str) -> PersonalRecord {
    PersonalRecord {
        movement: movement.to_string(),
        value: value.to_string(),
        date_label: date_label.to_string(),
        improvement: improvement.to_string(),
    }
}

fn ranked(rank: u32, name: &str, points: u32, workouts: u32, is_current_user: bool) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        name: name.to_string(),
        points,
        workouts,
        is_current_user,
    }
}

fn stat(label: &str, value: &str, unit: &str) -> StatTile {
    StatTile {
        label: label.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
    }
}

impl SampleData {
    pub fn new() -> Self {
        use WorkoutCategory::*;

        Self {
            workouts: vec![
                workout(
                    "1", "Fran", ForTime, "3:42", true, "2 hours ago", "Sarah Chen", "SC", 24, 8,
                    &["Thrusters 95/65", "Pull-ups", "21-15-9"],
                ),
                workout(
                    "2", "Morning Grind", Amrap, "8 rounds + 12 reps", false, "5 hours ago",
                    "Mike Torres", "MT", 18, 3,
                    &["12 Wall Balls", "10 Box Jumps", "8 Burpees"],
                ),
                workout(
                    "3", "Deadlift Day", Strength, "405 lbs", true, "Yesterday", "Jake Wilson",
                    "JW", 45, 12,
                    &["5x3 Deadlift", "Build to heavy single"],
                ),
                workout(
                    "4", "Death by Thrusters", Emom, "14 minutes", true, "Yesterday",
                    "Emma Davis", "ED", 31, 6,
                    &["Min 1: 1 Thruster", "Min 2: 2 Thrusters", "...until failure"],
                ),
            ],
            records: vec![
                record("Back Squat", "315 lbs", "This week", "+15 lbs"),
                record("Snatch", "185 lbs", "2 weeks ago", "+10 lbs"),
                record("Fran", "3:42", "Today", "-18 sec"),
                record("Clean & Jerk", "225 lbs", "This month", "+20 lbs"),
            ],
            leaderboard: vec![
                ranked(1, "Sarah Chen", 2450, 24, false),
                ranked(2, "Jake Wilson", 2380, 22, false),
                ranked(3, "You", 2290, 21, true),
                ranked(4, "Emma Davis", 2180, 20, false),
                ranked(5, "Mike Torres", 2050, 18, false),
            ],
            stats: vec![
                stat("This Week", "5", "WODs"),
                stat("Streak", "12", "Days"),
                stat("New PRs", "3", "This Month"),
            ],
            upcoming: UpcomingWod {
                title: "MURPH".to_string(),
                movements: strings(&[
                    "1 Mile Run",
                    "100 Pull-ups",
                    "200 Push-ups",
                    "300 Squats",
                    "1 Mile Run",
                ]),
                note: "Partition as needed • Wear vest for RX+".to_string(),
            },
            challenge: WeeklyChallenge {
                title: "Complete 5 WODs".to_string(),
                completed: 3,
                target: 5,
            },
        }
    }

    /// Records shown in the sidebar
    pub fn recent_records(&self) -> &[PersonalRecord] {
        &self.records[..self.records.len().min(3)]
    }

    /// Check the invariants the renderers rely on
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for workout in &self.workouts {
            if !ids.insert(workout.id.as_str()) {
                bail!("duplicate workout id '{}'", workout.id);
            }
        }

        let mut movements = HashSet::new();
        for record in &self.records {
            if !movements.insert(record.movement.as_str()) {
                bail!("duplicate personal record for '{}'", record.movement);
            }
        }

        for (position, entry) in self.leaderboard.iter().enumerate() {
            let expected = position as u32 + 1;
            if entry.rank != expected {
                bail!(
                    "leaderboard rank {} for '{}' at position {}, expected {}",
                    entry.rank,
                    entry.name,
                    position,
                    expected
                );
            }
        }

        let current_users = self.leaderboard.iter().filter(|e| e.is_current_user).count();
        if current_users > 1 {
            bail!("{} leaderboard entries marked as current user", current_users);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixtures_validate() {
        let data = SampleData::new();
        assert!(data.validate().is_ok());
        assert_eq!(data.workouts.len(), 4);
        assert_eq!(data.records.len(), 4);
        assert_eq!(data.leaderboard.len(), 5);
    }

    #[test]
    fn test_recent_records_takes_first_three() {
        let data = SampleData::new();
        let recent: Vec<&str> = data.recent_records().iter().map(|r| r.movement.as_str()).collect();
        assert_eq!(recent, vec!["Back Squat", "Snatch", "Fran"]);
    }

    #[test]
    fn test_recent_records_with_short_list() {
        let mut data = SampleData::new();
        data.records.truncate(1);
        assert_eq!(data.recent_records().len(), 1);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut data = SampleData::new();
        data.workouts[1].id = "1".to_string();
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate workout id"));
    }

    #[test]
    fn test_validate_rejects_sparse_ranks() {
        let mut data = SampleData::new();
        data.leaderboard.remove(1);
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_two_current_users() {
        let mut data = SampleData::new();
        data.leaderboard[0].is_current_user = true;
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_exactly_one_current_user() {
        let data = SampleData::new();
        let users: Vec<&str> = data
            .leaderboard
            .iter()
            .filter(|e| e.is_current_user)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(users, vec!["You"]);
    }
}
