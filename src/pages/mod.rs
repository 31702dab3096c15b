//! Page modules for the five console views.
//!
//! ARCHITECTURE
//! ============
//! Each page renders one data slot and emits intents for its actions; the
//! dispatcher owns loading, so pages stay free of backend calls.

pub mod dashboard;
pub mod devices;
pub mod logs;
pub mod nodes;
pub mod routes;
