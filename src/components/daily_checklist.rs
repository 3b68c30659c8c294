//! Daily Checklist Component
//!
//! Lists each habit with a Complete button for the current day.

use leptos::prelude::*;

use crate::models::Habit;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Checklist card for today's habits
#[component]
pub fn DailyChecklist() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">"📅 Today's Habits"</h2>
            </div>
            <div class="card-body checklist">
                <For
                    each=move || store.habits().get()
                    key=|habit| habit.id
                    children=move |habit: Habit| {
                        view! {
                            <div class="checklist-row">
                                <span>{habit.name.clone()}</span>
                                // Visually present but not wired to any completion flow in this version
                                <button class="btn small">"Complete"</button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
