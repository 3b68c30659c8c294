//! Dashboard Models
//!
//! Plain data structures backing the dashboard views.

use serde::{Deserialize, Serialize};

/// Streak length at which a habit earns its medal
pub const MEDAL_STREAK: u32 = 5;

/// A tracked recurring activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    pub name: String,
    /// Consecutive completion days up to the present
    pub streak: u32,
    pub completed: u32,
    pub total: u32,
}

impl Habit {
    /// Completion percentage formatted to one decimal digit, e.g. 15/20 -> "75.0".
    /// A habit with `total == 0` has no meaningful percentage and displays "—".
    pub fn completion_label(&self) -> String {
        if self.total == 0 {
            return "—".to_string();
        }
        format!("{:.1}", self.completed as f64 / self.total as f64 * 100.0)
    }

    pub fn has_medal(&self) -> bool {
        self.streak >= MEDAL_STREAK
    }
}

/// One day of the weekly progress series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressDay {
    /// Short weekday label, "Mon".."Sun"
    pub day: String,
    /// One mark per habit name for this day
    pub marks: Vec<HabitMark>,
}

/// Binary completion mark for a single habit on a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitMark {
    pub habit: String,
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_habit(streak: u32, completed: u32, total: u32) -> Habit {
        Habit {
            id: 1,
            name: "Exercise".to_string(),
            streak,
            completed,
            total,
        }
    }

    #[test]
    fn test_completion_label() {
        assert_eq!(make_habit(0, 15, 20).completion_label(), "75.0");
        assert_eq!(make_habit(0, 19, 20).completion_label(), "95.0");
        assert_eq!(make_habit(0, 18, 20).completion_label(), "90.0");
        // Thirds round to one decimal place
        assert_eq!(make_habit(0, 1, 3).completion_label(), "33.3");
    }

    #[test]
    fn test_completion_label_zero_total() {
        assert_eq!(make_habit(0, 5, 0).completion_label(), "—");
    }

    #[test]
    fn test_medal_boundary() {
        assert!(!make_habit(4, 0, 1).has_medal());
        assert!(make_habit(5, 0, 1).has_medal());
        assert!(make_habit(7, 0, 1).has_medal());
    }
}
