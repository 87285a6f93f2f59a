//! # Theme context — the one piece of persisted client state
//!
//! The theme is a boolean flag (`true` = dark) held in a context-provided
//! signal and mirrored to the preference store, so it survives page reloads.
//! [`ThemeProvider`] wraps the app root, [`use_theme`] reads the signal from
//! any component, and [`ThemeToggle`] is the floating sun/moon button.
//!
//! Applying a theme means toggling a `dark` class on `<body>`; the stylesheet
//! does the rest.

use dioxus::prelude::*;

use crate::icons::{FaMoon, FaSun};
use crate::Icon;
use store::{PrefStore, Preferences, Settings};

/// Context signal holding the dark-mode flag.
pub type ThemeSignal = Signal<bool>;

/// Get the current theme signal.
pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

fn make_settings() -> Settings<impl PrefStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Settings::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Settings::new(store::MemoryStore::new())
    }
}

/// Toggle the `dark` class on `<body>` to match the flag.
pub fn apply_theme(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.class_list().toggle_with_force("dark", dark);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dark;
    }
}

/// Provider component that owns the theme signal.
/// Wrap the app root with this component before the router.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut theme: ThemeSignal =
        use_context_provider(|| Signal::new(Preferences::default().dark_mode));

    // Seed from storage on mount
    use_effect(move || {
        spawn(async move {
            let prefs = make_settings().load().await;
            tracing::debug!("loaded preferences: dark_mode={}", prefs.dark_mode);
            theme.set(prefs.dark_mode);
            apply_theme(prefs.dark_mode);
        });
    });

    rsx! {
        {children}
    }
}

/// Floating button that flips and persists the theme flag.
#[component]
pub fn ThemeToggle(#[props(default = "theme-toggle".to_string())] class: String) -> Element {
    let mut theme = use_theme();

    let onclick = move |_| async move {
        let dark = make_settings().toggle_dark_mode().await;
        theme.set(dark);
        apply_theme(dark);
    };

    rsx! {
        button {
            class: "{class}",
            title: if theme() { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: onclick,
            if theme() {
                Icon { icon: FaSun, width: 20, height: 20 }
            } else {
                Icon { icon: FaMoon, width: 20, height: 20 }
            }
        }
    }
}
