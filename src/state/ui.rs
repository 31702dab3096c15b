//! Console chrome state: color theme and the active page.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the data slots so the
//! dispatcher can reason about navigation without touching record state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::dispatch::PageId;

/// Color theme, persisted as a single localStorage key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage/attribute token (`"light"` / `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a storage token. Unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme. Toggling twice restores the original.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Shared chrome state provided to all components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub active_page: PageId,
}
