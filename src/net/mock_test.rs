#![cfg(not(feature = "web"))]

use futures::executor::block_on;

use super::*;
use crate::net::api::decode_rows;

#[test]
fn nodes_fixture_has_five_sequential_ids() {
    let backend = MockBackend::new();
    let payload = block_on(backend.fetch(Resource::Nodes)).unwrap();
    let rows: Vec<Node> = decode_rows(payload).unwrap();
    assert_eq!(rows.len(), 5);
    let ids: Vec<&str> = rows.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["node-001", "node-002", "node-003", "node-004", "node-005"]);
}

#[test]
fn every_resource_serves_a_payload() {
    let backend = MockBackend::new();
    for resource in [Resource::Stats, Resource::Nodes, Resource::Devices, Resource::Routes, Resource::Logs] {
        assert!(block_on(backend.fetch(resource)).is_ok(), "no payload for {resource:?}");
    }
}

#[test]
fn unknown_path_fails_deterministically() {
    let backend = MockBackend::new();
    let err = backend.serve("/api/unknown").unwrap_err();
    assert_eq!(err.to_string(), "unknown endpoint: /api/unknown");
}

#[test]
fn stats_reflect_table_sizes() {
    let backend = MockBackend::new();
    let payload = block_on(backend.fetch(Resource::Stats)).unwrap();
    assert_eq!(payload["totalNodes"], 5);
    assert_eq!(payload["totalDevices"], 2);
    assert_eq!(payload["totalRoutes"], 3);
    assert_eq!(payload["totalTraffic"], "3.4 GB");
}

#[test]
fn add_node_is_visible_to_the_next_fetch() {
    let backend = MockBackend::new();
    let created = block_on(backend.submit(Mutation::AddNode {
        name: "edge-syd".to_owned(),
        virtual_ip: "10.8.0.6".to_owned(),
    }))
    .unwrap();
    assert_eq!(created["status"], "connecting");

    let payload = block_on(backend.fetch(Resource::Nodes)).unwrap();
    let rows: Vec<Node> = decode_rows(payload).unwrap();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().any(|n| n.name == "edge-syd" && n.virtual_ip == "10.8.0.6"));
}

#[test]
fn delete_node_removes_the_row_and_rejects_unknown_ids() {
    let backend = MockBackend::new();
    block_on(backend.submit(Mutation::DeleteNode { id: "node-003".to_owned() })).unwrap();
    let payload = block_on(backend.fetch(Resource::Nodes)).unwrap();
    let rows: Vec<Node> = decode_rows(payload).unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|n| n.id != "node-003"));

    let err = block_on(backend.submit(Mutation::DeleteNode { id: "node-999".to_owned() })).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { id } if id == "node-999"));
}

#[test]
fn restart_device_brings_it_up() {
    let backend = MockBackend::new();
    let updated = block_on(backend.submit(Mutation::RestartDevice { id: "dev-002".to_owned() })).unwrap();
    assert_eq!(updated["status"], "up");

    let payload = block_on(backend.fetch(Resource::Devices)).unwrap();
    let rows: Vec<Device> = decode_rows(payload).unwrap();
    assert!(rows.iter().all(|d| d.status == DeviceStatus::Up));
}

#[test]
fn route_mutations_update_the_table() {
    let backend = MockBackend::new();
    let created = block_on(backend.submit(Mutation::AddRoute {
        network: "172.16.0.0".to_owned(),
        mask: "255.240.0.0".to_owned(),
        gateway: "10.8.0.3".to_owned(),
        metric: 50,
    }))
    .unwrap();
    let id = created["id"].as_str().unwrap().to_owned();

    block_on(backend.submit(Mutation::DeleteRoute { id })).unwrap();
    let payload = block_on(backend.fetch(Resource::Routes)).unwrap();
    let rows: Vec<RouteEntry> = decode_rows(payload).unwrap();
    assert_eq!(rows.len(), 3);
}
