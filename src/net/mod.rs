//! Networking modules for the management API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the injectable backend capability and wire errors, `types`
//! the shared record schema, `mock` the deterministic default backend, and
//! `rest` the live-server substitute.

pub mod api;
pub mod mock;
pub mod rest;
pub mod types;
