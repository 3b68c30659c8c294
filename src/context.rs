//! Theme Context
//!
//! Dark-mode state provided via Leptos Context API. Components emit a
//! toggle intent through the context; the provider in `App` mirrors the
//! flag onto the document root so page-level `.dark` rules apply.

use leptos::prelude::*;

/// Theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Whether dark mode is active - read
    pub is_dark: ReadSignal<bool>,
    /// Whether dark mode is active - write
    set_is_dark: WriteSignal<bool>,
}

impl ThemeContext {
    pub fn new(is_dark: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            is_dark: is_dark.0,
            set_is_dark: is_dark.1,
        }
    }

    /// Flip dark mode; two toggles restore the original state
    pub fn toggle(&self) {
        self.set_is_dark.update(|v| *v = !*v);
    }
}

/// Get the theme context
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Mirror the dark flag onto the `dark` class of `document.documentElement`.
/// This is the one effect outside the component subtree: the stylesheet's
/// `.dark` overrides are the contract with the rest of the page.
pub fn sync_root_class(dark: bool) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = doc.document_element() else {
        return;
    };
    let _ = root.class_list().toggle_with_force("dark", dark);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_restores() {
        let theme = ThemeContext::new(signal(false));

        theme.toggle();
        assert!(theme.is_dark.get_untracked());

        theme.toggle();
        assert!(!theme.is_dark.get_untracked());
    }
}
