//! Theme initialization and persistence.
//!
//! Reads the stored preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element; toggling writes the new
//! token back. Requires a browser environment: native builds no-op so the
//! rest of the crate stays testable without one.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

#[cfg(feature = "web")]
const STORAGE_KEY: &str = "vpnet_console_theme";

/// Read the stored theme preference.
///
/// Falls back to the `prefers-color-scheme` media query when nothing is
/// stored, and to light when no browser is available.
pub fn read_preference() -> Theme {
    #[cfg(feature = "web")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&token) {
                    return theme;
                }
            }
        }

        // Fall back to system preference.
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "web"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "web")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}

/// Persist the theme token to localStorage.
pub fn persist(theme: Theme) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}
