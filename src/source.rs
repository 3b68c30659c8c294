//! Habit Data Source
//!
//! Abstraction over where habit data comes from, so the views stay
//! independent of any particular dataset. The shipped implementation
//! serves a fixed in-memory sample.

use crate::models::{Habit, HabitMark, ProgressDay};

/// Provides the current habits and the weekly progress series on demand
pub trait HabitSource {
    fn habits(&self) -> Vec<Habit>;
    fn weekly_progress(&self) -> Vec<ProgressDay>;
}

/// Built-in sample dataset
pub struct SampleSource;

/// Habit names in display order, shared by both fixture tables
const SAMPLE_NAMES: [&str; 3] = ["Exercise", "Read", "Meditate"];

/// (day, one done-flag per habit in `SAMPLE_NAMES` order)
const SAMPLE_WEEK: [(&str, [bool; 3]); 7] = [
    ("Mon", [true, true, true]),
    ("Tue", [true, true, true]),
    ("Wed", [false, true, true]),
    ("Thu", [true, false, true]),
    ("Fri", [true, true, true]),
    ("Sat", [true, true, false]),
    ("Sun", [false, true, true]),
];

impl HabitSource for SampleSource {
    fn habits(&self) -> Vec<Habit> {
        vec![
            Habit { id: 1, name: "Exercise".to_string(), streak: 5, completed: 15, total: 20 },
            Habit { id: 2, name: "Read".to_string(), streak: 3, completed: 18, total: 20 },
            Habit { id: 3, name: "Meditate".to_string(), streak: 7, completed: 19, total: 20 },
        ]
    }

    fn weekly_progress(&self) -> Vec<ProgressDay> {
        SAMPLE_WEEK
            .iter()
            .map(|(day, done)| ProgressDay {
                day: day.to_string(),
                marks: SAMPLE_NAMES
                    .iter()
                    .zip(done.iter())
                    .map(|(habit, done)| HabitMark {
                        habit: habit.to_string(),
                        done: *done,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_habits() {
        let habits = SampleSource.habits();

        let names: Vec<&str> = habits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Exercise", "Read", "Meditate"]);

        // IDs are unique and every total is nonzero
        for habit in &habits {
            assert!(habit.total > 0);
            assert!(habit.completed <= habit.total);
            assert_eq!(habits.iter().filter(|h| h.id == habit.id).count(), 1);
        }
    }

    #[test]
    fn test_sample_week_shape() {
        let week = SampleSource.weekly_progress();

        let days: Vec<&str> = week.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

        // Every day carries a mark for every habit
        for day in &week {
            let marks: Vec<&str> = day.marks.iter().map(|m| m.habit.as_str()).collect();
            assert_eq!(marks, ["Exercise", "Read", "Meditate"]);
        }
    }
}
