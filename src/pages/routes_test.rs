use super::*;
use crate::state::modal::ModalFooter;

#[test]
fn add_route_modal_uses_the_default_footer() {
    let options = add_route_options();
    assert_eq!(options.title.as_deref(), Some("Add Route"));
    assert!(matches!(options.body, Some(ModalBody::AddRoute(_))));
    assert!(options.footer.is_none());
}

#[test]
fn delete_modal_names_the_network_and_carries_the_id() {
    let route = RouteEntry {
        id: "route-002".to_owned(),
        network: "192.168.10.0".to_owned(),
        mask: "255.255.255.0".to_owned(),
        gateway: "10.8.0.2".to_owned(),
        metric: 10,
    };
    let options = delete_route_options(&route);
    assert_eq!(options.title.as_deref(), Some("Delete route to 192.168.10.0?"));
    let Some(ModalBody::ConfirmDeleteRoute { id, network }) = options.body else {
        panic!("expected a confirm-delete body");
    };
    assert_eq!(id, "route-002");
    assert_eq!(network, "192.168.10.0");
    assert_ne!(options.footer, Some(ModalFooter::CloseOnly));
}
