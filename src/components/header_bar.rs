//! Header Bar Component
//!
//! Page title with the dark-mode toggle and the Add Habit button.

use leptos::prelude::*;

use crate::context::use_theme;

/// Header bar with title and actions
#[component]
pub fn HeaderBar() -> impl IntoView {
    let theme = use_theme();

    let toggle_dark_mode = move |_| theme.toggle();

    view! {
        <header class="header-bar">
            <h1 class="header-title">"Habit Tracker"</h1>
            <div class="header-actions">
                <button
                    class="btn"
                    title=move || if theme.is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
                    on:click=toggle_dark_mode
                >
                    {move || if theme.is_dark.get() { "☀" } else { "🌙" }}
                </button>
                // Visually present but not wired to any create flow in this version
                <button class="btn primary">"+ Add Habit"</button>
            </div>
        </header>
    }
}
