//! UI Components
//!
//! Leptos components making up the dashboard.

mod daily_checklist;
mod habit_card;
mod header_bar;
mod progress_chart;

pub use daily_checklist::DailyChecklist;
pub use habit_card::HabitCard;
pub use header_bar::HeaderBar;
pub use progress_chart::ProgressChart;
