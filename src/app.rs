//! Habit Tracker App
//!
//! Root component: provides the theme context and dashboard store,
//! injects the stylesheet, and lays out header, cards, chart, checklist.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DailyChecklist, HabitCard, HeaderBar, ProgressChart};
use crate::context::{sync_root_class, ThemeContext};
use crate::models::Habit;
use crate::source::SampleSource;
use crate::store::{DashboardState, DashboardStateStoreFields};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (is_dark, set_is_dark) = signal(false);
    let store = Store::new(DashboardState::from_source(&SampleSource));

    // Provide context to all children
    provide_context(ThemeContext::new((is_dark, set_is_dark)));
    provide_context(store);

    web_sys::console::log_1(
        &format!(
            "[APP] Loaded {} habits, {} day samples",
            store.habits().get_untracked().len(),
            store.progress().get_untracked().len()
        )
        .into(),
    );

    // Keep the document root's `dark` class in sync with the theme signal
    Effect::new(move |_| {
        sync_root_class(is_dark.get());
    });

    let shell_class = move || {
        if is_dark.get() {
            "dashboard dark"
        } else {
            "dashboard"
        }
    };

    view! {
        <style>{theme::GLOBAL_CSS}</style>
        <div class=shell_class>
            <div class="dashboard-inner">
                <HeaderBar />

                <div class="card-grid">
                    <For
                        each=move || store.habits().get()
                        key=|habit| habit.id
                        children=move |habit: Habit| view! { <HabitCard habit=habit /> }
                    />
                </div>

                <ProgressChart />

                <DailyChecklist />
            </div>
        </div>
    }
}
