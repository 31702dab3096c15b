//! Network boundary: resources, mutations, and the injectable backend trait.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so boundary failures
//! degrade to a stale view plus a toast, never a crash.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Future type returned by [`Backend`] methods.
///
/// Boxed and non-`Send`: the console is single-threaded and backends run on
/// the browser event loop.
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

/// One of the five read-only resources the console polls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Stats,
    Nodes,
    Devices,
    Routes,
    Logs,
}

impl Resource {
    /// Endpoint path. All resources have GET semantics.
    pub fn path(self) -> &'static str {
        match self {
            Self::Stats => "/api/stats",
            Self::Nodes => "/api/nodes",
            Self::Devices => "/api/devices",
            Self::Routes => "/api/routes",
            Self::Logs => "/api/logs",
        }
    }
}

/// A state-changing operation submitted from a console form.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    AddNode { name: String, virtual_ip: String },
    DeleteNode { id: String },
    RestartDevice { id: String },
    AddRoute { network: String, mask: String, gateway: String, metric: u32 },
    DeleteRoute { id: String },
}

impl Mutation {
    /// Endpoint path for this operation.
    pub fn path(&self) -> String {
        match self {
            Self::AddNode { .. } => "/api/nodes".to_owned(),
            Self::DeleteNode { id } => format!("/api/nodes/{id}"),
            Self::RestartDevice { id } => format!("/api/devices/{id}/restart"),
            Self::AddRoute { .. } => "/api/routes".to_owned(),
            Self::DeleteRoute { id } => format!("/api/routes/{id}"),
        }
    }

    /// HTTP method for this operation.
    pub fn method(&self) -> &'static str {
        match self {
            Self::AddNode { .. } | Self::RestartDevice { .. } | Self::AddRoute { .. } => "POST",
            Self::DeleteNode { .. } | Self::DeleteRoute { .. } => "DELETE",
        }
    }

    /// JSON request body, if the operation carries one.
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::AddNode { name, virtual_ip } => Some(serde_json::json!({
                "name": name,
                "virtualIp": virtual_ip,
            })),
            Self::AddRoute { network, mask, gateway, metric } => Some(serde_json::json!({
                "network": network,
                "mask": mask,
                "gateway": gateway,
                "metric": metric,
            })),
            Self::DeleteNode { .. } | Self::RestartDevice { .. } | Self::DeleteRoute { .. } => None,
        }
    }
}

/// Errors produced at the network boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested path is not part of the management API.
    #[error("unknown endpoint: {path}")]
    UnknownEndpoint { path: String },
    /// The server answered with a non-OK status.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// The payload did not match the expected record shape.
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// A mutation referenced a record that does not exist.
    #[error("no such record: {id}")]
    NotFound { id: String },
    /// The request never reached the server.
    #[error("network unreachable: {0}")]
    Transport(String),
}

/// Capability boundary over the management API.
///
/// The dispatcher owns one `Rc<dyn Backend>`; the deterministic
/// [`MockBackend`](super::mock::MockBackend) is the default and the
/// [`RestBackend`](super::rest::RestBackend) substitutes a live server.
pub trait Backend {
    /// Fetch the JSON payload for one resource.
    fn fetch(&self, resource: Resource) -> ApiFuture<Value>;
    /// Apply one mutation and return the JSON response payload.
    fn submit(&self, mutation: Mutation) -> ApiFuture<Value>;
}

/// Decode a JSON array payload into typed rows.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the payload is not an array of the
/// expected record shape.
pub fn decode_rows<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    Ok(serde_json::from_value(value)?)
}

/// Decode a JSON object payload into a single typed record.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the payload does not match the record.
pub fn decode_record<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}
