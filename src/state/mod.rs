//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs provided to components as context `RwSignal`s by the
//! dispatcher. Keeping them signal-free makes every transition unit-testable
//! without a browser.

pub mod modal;
pub mod remote;
pub mod toast;
pub mod ui;
