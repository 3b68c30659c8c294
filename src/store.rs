//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Habit, ProgressDay};
use crate::source::HabitSource;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Habit collection, in display order
    pub habits: Vec<Habit>,
    /// Weekly progress series, ordered Mon..Sun
    pub progress: Vec<ProgressDay>,
}

impl DashboardState {
    /// Populate the state from a data source once at startup
    pub fn from_source(source: &impl HabitSource) -> Self {
        Self {
            habits: source.habits(),
            progress: source.weekly_progress(),
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}
