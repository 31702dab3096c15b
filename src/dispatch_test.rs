use super::*;
use crate::state::modal::{AddNodeDraft, AddRouteDraft};

#[test]
fn every_page_maps_to_exactly_one_resource() {
    assert_eq!(PageId::Dashboard.resource(), Resource::Stats);
    assert_eq!(PageId::Nodes.resource(), Resource::Nodes);
    assert_eq!(PageId::Devices.resource(), Resource::Devices);
    assert_eq!(PageId::Routes.resource(), Resource::Routes);
    assert_eq!(PageId::Logs.resource(), Resource::Logs);
}

#[test]
fn hash_tokens_round_trip_through_the_parser() {
    for page in PageId::ALL {
        assert_eq!(PageId::from_hash(page.slug()), Some(page));
        assert_eq!(PageId::from_hash(&format!("#{}", page.slug())), Some(page));
    }
}

#[test]
fn empty_hash_selects_the_dashboard() {
    assert_eq!(PageId::from_hash(""), Some(PageId::Dashboard));
    assert_eq!(PageId::from_hash("#"), Some(PageId::Dashboard));
}

#[test]
fn unknown_hash_tokens_are_rejected() {
    assert_eq!(PageId::from_hash("#settings"), None);
    assert_eq!(PageId::from_hash("nodes/extra"), None);
}

#[test]
fn load_error_messages_are_fixed_per_page() {
    let messages: Vec<&str> = PageId::ALL.iter().map(|p| p.load_error_message()).collect();
    let mut deduped = messages.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(messages.len(), deduped.len());
    assert!(messages.iter().all(|m| m.starts_with("Failed to load")));
}

#[test]
fn mutations_refresh_the_page_they_affect() {
    let add = Mutation::AddNode { name: String::new(), virtual_ip: String::new() };
    assert_eq!(affected_page(&add), PageId::Nodes);
    let restart = Mutation::RestartDevice { id: "dev-001".to_owned() };
    assert_eq!(affected_page(&restart), PageId::Devices);
    let del = Mutation::DeleteRoute { id: "route-001".to_owned() };
    assert_eq!(affected_page(&del), PageId::Routes);
}

#[test]
fn only_the_add_node_failure_embeds_the_error_text() {
    let err = ApiError::UnknownEndpoint { path: "/api/unknown".to_owned() };
    let add = Mutation::AddNode { name: "x".to_owned(), virtual_ip: String::new() };
    assert_eq!(failure_message(&add, &err), "Failed to add node: unknown endpoint: /api/unknown");

    let del = Mutation::DeleteNode { id: "node-001".to_owned() };
    assert_eq!(failure_message(&del, &err), "Failed to delete node");
}

#[test]
fn confirming_an_add_node_form_submits_trimmed_fields() {
    let body = ModalBody::AddNode(AddNodeDraft {
        name: "  edge-syd  ".to_owned(),
        virtual_ip: " 10.8.0.6 ".to_owned(),
    });
    let intent = confirm_intent(&body).unwrap();
    assert_eq!(
        intent,
        Intent::Submit(Mutation::AddNode {
            name: "edge-syd".to_owned(),
            virtual_ip: "10.8.0.6".to_owned(),
        })
    );
}

#[test]
fn confirming_an_add_route_form_parses_the_metric() {
    let body = ModalBody::AddRoute(AddRouteDraft {
        network: "172.16.0.0".to_owned(),
        mask: "255.240.0.0".to_owned(),
        gateway: "10.8.0.3".to_owned(),
        metric: "50".to_owned(),
    });
    let Some(Intent::Submit(Mutation::AddRoute { metric, .. })) = confirm_intent(&body) else {
        panic!("expected an add-route submit");
    };
    assert_eq!(metric, 50);

    let body = ModalBody::AddRoute(AddRouteDraft {
        metric: "not a number".to_owned(),
        ..AddRouteDraft::default()
    });
    let Some(Intent::Submit(Mutation::AddRoute { metric, .. })) = confirm_intent(&body) else {
        panic!("expected an add-route submit");
    };
    assert_eq!(metric, 0);
}

#[test]
fn confirming_delete_bodies_targets_the_record() {
    let body = ModalBody::ConfirmDeleteNode {
        id: "node-004".to_owned(),
        name: "edge-sgp".to_owned(),
    };
    assert_eq!(
        confirm_intent(&body),
        Some(Intent::Submit(Mutation::DeleteNode { id: "node-004".to_owned() }))
    );
}

#[test]
fn text_and_empty_bodies_have_no_submit_action() {
    assert_eq!(confirm_intent(&ModalBody::Empty), None);
    assert_eq!(confirm_intent(&ModalBody::Text("About".to_owned())), None);
}

#[test]
fn poll_periods_match_the_console_contract() {
    assert_eq!(DASHBOARD_REFRESH_MS, 30_000);
    assert_eq!(NODES_REFRESH_MS, 60_000);
}
