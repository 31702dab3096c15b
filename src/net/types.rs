//! Shared wire DTOs for the console/backend boundary.
//!
//! DESIGN
//! ======
//! Records mirror the management API payloads so serde round-trips stay
//! lossless and table rendering can remain schema-driven. Everything here is
//! display data: fetched fresh on each load and replaced wholesale, with no
//! invariants spanning record sets.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reachability of a node as reported by the management API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Online,
    Offline,
    Connecting,
}

impl NodeStatus {
    /// Wire token. Table cells render this text verbatim.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Connecting => "connecting",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational state of a virtual device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Up,
    Down,
}

impl DeviceStatus {
    /// Wire token. Table cells render this text verbatim.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Wire token. Table cells render this text verbatim.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A peer node in the virtual network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique node identifier (e.g. `node-001`).
    pub id: String,
    /// Human-readable node name.
    pub name: String,
    /// Current reachability.
    pub status: NodeStatus,
    /// Address assigned inside the virtual network.
    pub virtual_ip: String,
    /// Underlay address the node connects from.
    pub physical_ip: String,
    /// Uptime as a preformatted display string (e.g. `2h 15m`).
    pub online_time: String,
}

/// A virtual network device on the local host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique device identifier.
    pub id: String,
    /// Interface name (e.g. `vpnet0`).
    pub name: String,
    /// Operational state.
    pub status: DeviceStatus,
    /// Address bound to the interface.
    pub ip: String,
    /// Maximum transmission unit in bytes.
    pub mtu: u32,
}

/// A route table entry pushed to the virtual device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    /// Unique route identifier.
    pub id: String,
    /// Destination network address.
    pub network: String,
    /// Destination netmask.
    pub mask: String,
    /// Next-hop gateway address.
    pub gateway: String,
    /// Route preference; lower wins.
    pub metric: u32,
}

/// One line from the service log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Timestamp as a preformatted display string (`HH:MM:SS`).
    pub time: String,
    /// Severity of the line.
    pub level: LogLevel,
    /// Message text.
    pub message: String,
}

/// Aggregate counters shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of known nodes.
    pub total_nodes: u32,
    /// Number of virtual devices.
    pub total_devices: u32,
    /// Number of route entries.
    pub total_routes: u32,
    /// Cumulative traffic as a preformatted display string (e.g. `1.2 GB`).
    pub total_traffic: String,
}
