//! Single-instance modal state.
//!
//! DESIGN
//! ======
//! Exactly one modal exists process-wide. Opening while already open
//! overwrites content in place rather than stacking. Bodies are typed
//! console forms, keeping the surface decoupled from markup; form drafts
//! live in the body variants so the whole dialog is plain state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Draft fields for the add-node form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddNodeDraft {
    pub name: String,
    pub virtual_ip: String,
}

/// Draft fields for the add-route form. Metric stays text until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddRouteDraft {
    pub network: String,
    pub mask: String,
    pub gateway: String,
    pub metric: String,
}

/// Content shown inside the modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalBody {
    #[default]
    Empty,
    Text(String),
    AddNode(AddNodeDraft),
    AddRoute(AddRouteDraft),
    ConfirmDeleteNode { id: String, name: String },
    ConfirmDeleteRoute { id: String, network: String },
}

/// Button row at the bottom of the modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalFooter {
    /// Cancel plus Confirm. Substituted whenever `open` omits a footer.
    #[default]
    CancelConfirm,
    /// A single Close button.
    CloseOnly,
}

/// Configuration for opening the modal. Omitted fields keep the prior
/// content, except `footer`, whose omission selects the default pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalOptions {
    pub title: Option<String>,
    pub body: Option<ModalBody>,
    pub footer: Option<ModalFooter>,
}

/// The one modal instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub title: String,
    pub body: ModalBody,
    pub footer: ModalFooter,
}

impl ModalState {
    /// Open (or re-open) the modal with `options`, merging per the rules
    /// above.
    pub fn open(&mut self, options: ModalOptions) {
        self.is_open = true;
        if let Some(title) = options.title {
            self.title = title;
        }
        if let Some(body) = options.body {
            self.body = body;
        }
        self.footer = options.footer.unwrap_or_default();
    }

    /// Close the modal. Idempotent: closing an already-closed modal is a
    /// no-op.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}
