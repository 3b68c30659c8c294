//! Habit Card Component
//!
//! Summary card for a single habit: name, streak, completion percentage,
//! and a medal once the streak reaches five days.

use leptos::prelude::*;

use crate::models::Habit;

/// Summary card for one habit
#[component]
pub fn HabitCard(habit: Habit) -> impl IntoView {
    let percent = habit.completion_label();
    let has_medal = habit.has_medal();

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{habit.name.clone()}</h2>
                <p class="card-description">"Current streak: " {habit.streak} " days"</p>
            </div>
            <div class="card-body">
                <div class="completion-row">
                    <span>
                        <span class="completion-check">"✓"</span>
                        {percent} "% Complete"
                    </span>
                    <Show when=move || has_medal>
                        <span class="medal" title="Streak of 5 days or more">"🏅"</span>
                    </Show>
                </div>
            </div>
        </div>
    }
}
