//! Deterministic in-memory backend simulating the management API.
//!
//! DESIGN
//! ======
//! Serves the five GET resources from seeded tables and applies mutations in
//! place, so a console can be exercised end to end without a server. Browser
//! builds add ~300 ms of artificial latency per call; native builds (tests)
//! answer immediately. Any path outside the endpoint set fails with a
//! deterministic unknown-endpoint error.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use uuid::Uuid;

use super::api::{ApiError, ApiFuture, Backend, Mutation, Resource};
use super::types::{Device, DeviceStatus, LogEntry, LogLevel, Node, NodeStatus, RouteEntry, Stats};

/// Artificial round-trip latency applied in browser builds.
#[cfg(feature = "web")]
const LATENCY_MS: u64 = 300;

/// In-memory record tables behind the mock endpoints.
struct Tables {
    nodes: Vec<Node>,
    devices: Vec<Device>,
    routes: Vec<RouteEntry>,
    logs: Vec<LogEntry>,
}

impl Tables {
    fn stats(&self) -> Stats {
        Stats {
            total_nodes: u32::try_from(self.nodes.len()).unwrap_or(u32::MAX),
            total_devices: u32::try_from(self.devices.len()).unwrap_or(u32::MAX),
            total_routes: u32::try_from(self.routes.len()).unwrap_or(u32::MAX),
            total_traffic: "3.4 GB".to_owned(),
        }
    }
}

/// Backend double serving deterministic fixtures from memory.
#[derive(Clone)]
pub struct MockBackend {
    tables: Rc<RefCell<Tables>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a mock seeded with the standard fixture tables.
    pub fn new() -> Self {
        Self {
            tables: Rc::new(RefCell::new(seed_tables())),
        }
    }

    /// Resolve a GET path against the endpoint table.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnknownEndpoint`] for any path outside the five
    /// management endpoints.
    pub fn serve(&self, path: &str) -> Result<Value, ApiError> {
        let tables = self.tables.borrow();
        match path {
            "/api/stats" => Ok(serde_json::to_value(tables.stats())?),
            "/api/nodes" => Ok(serde_json::to_value(&tables.nodes)?),
            "/api/devices" => Ok(serde_json::to_value(&tables.devices)?),
            "/api/routes" => Ok(serde_json::to_value(&tables.routes)?),
            "/api/logs" => Ok(serde_json::to_value(&tables.logs)?),
            other => Err(ApiError::UnknownEndpoint { path: other.to_owned() }),
        }
    }

    fn apply(&self, mutation: &Mutation) -> Result<Value, ApiError> {
        let mut tables = self.tables.borrow_mut();
        match mutation {
            Mutation::AddNode { name, virtual_ip } => {
                let node = Node {
                    id: format!("node-{}", Uuid::new_v4()),
                    name: name.clone(),
                    status: NodeStatus::Connecting,
                    virtual_ip: virtual_ip.clone(),
                    physical_ip: "-".to_owned(),
                    online_time: "0m".to_owned(),
                };
                tables.nodes.push(node.clone());
                Ok(serde_json::to_value(node)?)
            }
            Mutation::DeleteNode { id } => {
                let before = tables.nodes.len();
                tables.nodes.retain(|n| n.id != *id);
                if tables.nodes.len() == before {
                    return Err(ApiError::NotFound { id: id.clone() });
                }
                Ok(serde_json::json!({ "ok": true }))
            }
            Mutation::RestartDevice { id } => {
                let device = tables
                    .devices
                    .iter_mut()
                    .find(|d| d.id == *id)
                    .ok_or_else(|| ApiError::NotFound { id: id.clone() })?;
                device.status = DeviceStatus::Up;
                Ok(serde_json::to_value(device.clone())?)
            }
            Mutation::AddRoute { network, mask, gateway, metric } => {
                let route = RouteEntry {
                    id: format!("route-{}", Uuid::new_v4()),
                    network: network.clone(),
                    mask: mask.clone(),
                    gateway: gateway.clone(),
                    metric: *metric,
                };
                tables.routes.push(route.clone());
                Ok(serde_json::to_value(route)?)
            }
            Mutation::DeleteRoute { id } => {
                let before = tables.routes.len();
                tables.routes.retain(|r| r.id != *id);
                if tables.routes.len() == before {
                    return Err(ApiError::NotFound { id: id.clone() });
                }
                Ok(serde_json::json!({ "ok": true }))
            }
        }
    }
}

impl Backend for MockBackend {
    fn fetch(&self, resource: Resource) -> ApiFuture<Value> {
        let backend = self.clone();
        Box::pin(async move {
            simulate_latency().await;
            backend.serve(resource.path())
        })
    }

    fn submit(&self, mutation: Mutation) -> ApiFuture<Value> {
        let backend = self.clone();
        Box::pin(async move {
            simulate_latency().await;
            backend.apply(&mutation)
        })
    }
}

async fn simulate_latency() {
    #[cfg(feature = "web")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(LATENCY_MS)).await;
}

fn seed_tables() -> Tables {
    let nodes = vec![
        node("node-001", "gateway-1", NodeStatus::Online, "10.8.0.1", "203.0.113.10", "72h 14m"),
        node("node-002", "relay-fra", NodeStatus::Online, "10.8.0.2", "198.51.100.23", "31h 02m"),
        node("node-003", "edge-nyc", NodeStatus::Connecting, "10.8.0.3", "192.0.2.41", "0m"),
        node("node-004", "edge-sgp", NodeStatus::Offline, "10.8.0.4", "203.0.113.77", "-"),
        node("node-005", "lab-bench", NodeStatus::Online, "10.8.0.5", "198.51.100.8", "6h 47m"),
    ];
    let devices = vec![
        Device {
            id: "dev-001".to_owned(),
            name: "vpnet0".to_owned(),
            status: DeviceStatus::Up,
            ip: "10.8.0.1".to_owned(),
            mtu: 1420,
        },
        Device {
            id: "dev-002".to_owned(),
            name: "vpnet1".to_owned(),
            status: DeviceStatus::Down,
            ip: "10.9.0.1".to_owned(),
            mtu: 1380,
        },
    ];
    let routes = vec![
        route("route-001", "10.8.0.0", "255.255.255.0", "10.8.0.1", 1),
        route("route-002", "192.168.10.0", "255.255.255.0", "10.8.0.2", 10),
        route("route-003", "0.0.0.0", "0.0.0.0", "10.8.0.1", 100),
    ];
    let logs = vec![
        log("14:01:52", LogLevel::Info, "listening on udp 51820"),
        log("14:01:53", LogLevel::Info, "node-002 handshake complete"),
        log("14:02:11", LogLevel::Info, "node-003 connecting from 192.0.2.41"),
        log("14:05:40", LogLevel::Warn, "node-004 missed 3 keepalives"),
        log("14:06:10", LogLevel::Error, "node-004 marked offline: handshake timeout"),
        log("14:06:12", LogLevel::Info, "route table replaced (3 entries)"),
        log("14:09:27", LogLevel::Warn, "mtu probe fell back to 1380 on vpnet1"),
        log("14:10:00", LogLevel::Info, "stats snapshot written"),
    ];
    Tables { nodes, devices, routes, logs }
}

fn node(id: &str, name: &str, status: NodeStatus, virtual_ip: &str, physical_ip: &str, online_time: &str) -> Node {
    Node {
        id: id.to_owned(),
        name: name.to_owned(),
        status,
        virtual_ip: virtual_ip.to_owned(),
        physical_ip: physical_ip.to_owned(),
        online_time: online_time.to_owned(),
    }
}

fn route(id: &str, network: &str, mask: &str, gateway: &str, metric: u32) -> RouteEntry {
    RouteEntry {
        id: id.to_owned(),
        network: network.to_owned(),
        mask: mask.to_owned(),
        gateway: gateway.to_owned(),
        metric,
    }
}

fn log(time: &str, level: LogLevel, message: &str) -> LogEntry {
    LogEntry {
        time: time.to_owned(),
        level,
        message: message.to_owned(),
    }
}
