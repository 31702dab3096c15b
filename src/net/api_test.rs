use super::*;
use crate::net::types::{Node, Stats};

#[test]
fn every_resource_maps_to_its_api_path() {
    assert_eq!(Resource::Stats.path(), "/api/stats");
    assert_eq!(Resource::Nodes.path(), "/api/nodes");
    assert_eq!(Resource::Devices.path(), "/api/devices");
    assert_eq!(Resource::Routes.path(), "/api/routes");
    assert_eq!(Resource::Logs.path(), "/api/logs");
}

#[test]
fn mutation_paths_and_methods() {
    let add = Mutation::AddNode {
        name: "edge-6".to_owned(),
        virtual_ip: "10.8.0.6".to_owned(),
    };
    assert_eq!(add.path(), "/api/nodes");
    assert_eq!(add.method(), "POST");
    let body = add.body().unwrap();
    assert_eq!(body["name"], "edge-6");
    assert_eq!(body["virtualIp"], "10.8.0.6");

    let del = Mutation::DeleteRoute { id: "route-002".to_owned() };
    assert_eq!(del.path(), "/api/routes/route-002");
    assert_eq!(del.method(), "DELETE");
    assert!(del.body().is_none());

    let restart = Mutation::RestartDevice { id: "dev-001".to_owned() };
    assert_eq!(restart.path(), "/api/devices/dev-001/restart");
    assert_eq!(restart.method(), "POST");
}

#[test]
fn decode_rows_rejects_mismatched_payloads() {
    let err = decode_rows::<Node>(serde_json::json!({ "not": "an array" })).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_record_reads_a_stats_object() {
    let stats: Stats = decode_record(serde_json::json!({
        "totalNodes": 1,
        "totalDevices": 1,
        "totalRoutes": 0,
        "totalTraffic": "0 B",
    }))
    .unwrap();
    assert_eq!(stats.total_nodes, 1);
}

#[test]
fn unknown_endpoint_error_names_the_path() {
    let err = ApiError::UnknownEndpoint { path: "/api/unknown".to_owned() };
    assert_eq!(err.to_string(), "unknown endpoint: /api/unknown");
}
