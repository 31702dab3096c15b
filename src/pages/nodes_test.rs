use super::*;
use crate::state::modal::ModalFooter;

#[test]
fn status_cell_text_is_the_wire_token_verbatim() {
    for status in [NodeStatus::Online, NodeStatus::Offline, NodeStatus::Connecting] {
        let (text, _) = status_label(status);
        assert_eq!(text, status.as_str());
    }
}

#[test]
fn status_css_modifiers_are_distinct() {
    let (_, online) = status_label(NodeStatus::Online);
    let (_, offline) = status_label(NodeStatus::Offline);
    let (_, connecting) = status_label(NodeStatus::Connecting);
    assert_ne!(online, offline);
    assert_ne!(online, connecting);
    assert_ne!(offline, connecting);
}

#[test]
fn add_node_modal_uses_the_default_footer() {
    let options = add_node_options();
    assert_eq!(options.title.as_deref(), Some("Add Node"));
    assert!(matches!(options.body, Some(ModalBody::AddNode(_))));
    assert!(options.footer.is_none());
}

#[test]
fn delete_modal_names_the_node_and_carries_its_id() {
    let node = Node {
        id: "node-004".to_owned(),
        name: "edge-sgp".to_owned(),
        status: NodeStatus::Offline,
        virtual_ip: "10.8.0.4".to_owned(),
        physical_ip: "203.0.113.77".to_owned(),
        online_time: "-".to_owned(),
    };
    let options = delete_node_options(&node);
    assert_eq!(options.title.as_deref(), Some("Delete edge-sgp?"));
    let Some(ModalBody::ConfirmDeleteNode { id, .. }) = options.body else {
        panic!("expected a confirm-delete body");
    };
    assert_eq!(id, "node-004");
    assert_ne!(options.footer, Some(ModalFooter::CloseOnly));
}
