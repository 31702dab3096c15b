use super::*;

#[test]
fn open_with_defaults_then_close_leaves_it_inactive() {
    let mut modal = ModalState::default();
    modal.open(ModalOptions::default());
    assert!(modal.is_open);
    assert_eq!(modal.footer, ModalFooter::CancelConfirm);
    modal.close();
    assert!(!modal.is_open);
    modal.close();
    assert!(!modal.is_open);
}

#[test]
fn omitted_title_and_body_keep_prior_content() {
    let mut modal = ModalState::default();
    modal.open(ModalOptions {
        title: Some("Add Node".to_owned()),
        body: Some(ModalBody::AddNode(AddNodeDraft::default())),
        footer: None,
    });
    modal.close();

    modal.open(ModalOptions::default());
    assert_eq!(modal.title, "Add Node");
    assert!(matches!(modal.body, ModalBody::AddNode(_)));
}

#[test]
fn omitted_footer_substitutes_cancel_confirm() {
    let mut modal = ModalState::default();
    modal.open(ModalOptions {
        footer: Some(ModalFooter::CloseOnly),
        ..ModalOptions::default()
    });
    assert_eq!(modal.footer, ModalFooter::CloseOnly);

    modal.open(ModalOptions::default());
    assert_eq!(modal.footer, ModalFooter::CancelConfirm);
}

#[test]
fn reopening_overwrites_content_in_place() {
    let mut modal = ModalState::default();
    modal.open(ModalOptions {
        title: Some("Add Node".to_owned()),
        body: Some(ModalBody::AddNode(AddNodeDraft::default())),
        footer: None,
    });
    modal.open(ModalOptions {
        title: Some("Delete node-001?".to_owned()),
        body: Some(ModalBody::ConfirmDeleteNode {
            id: "node-001".to_owned(),
            name: "gateway-1".to_owned(),
        }),
        footer: None,
    });
    assert!(modal.is_open);
    assert_eq!(modal.title, "Delete node-001?");
    assert!(matches!(modal.body, ModalBody::ConfirmDeleteNode { .. }));
}
