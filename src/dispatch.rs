//! Page dispatcher: typed page ids, UI intents, and the loader table.
//!
//! ARCHITECTURE
//! ============
//! Components never touch the backend directly. They emit [`Intent`] values
//! and the [`Dispatcher`] maps each intent to an operation against the
//! injected [`Backend`]: switching pages, loading resources, toggling the
//! theme, driving the modal, and submitting mutations. Each data slot is a
//! sequence-checked [`Remote`], so overlapping loads resolve in issue order
//! regardless of arrival order.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::rc::Rc;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::api::{ApiError, Backend, Mutation, Resource, decode_record, decode_rows};
use crate::net::types::{Device, LogEntry, Node, RouteEntry, Stats};
use crate::state::modal::{ModalBody, ModalOptions, ModalState};
use crate::state::remote::Remote;
use crate::state::toast::{ToastKind, ToastStack};
use crate::state::ui::UiState;
use crate::util::theme;

/// Dashboard poll period.
pub const DASHBOARD_REFRESH_MS: u32 = 30_000;
/// Nodes poll period.
pub const NODES_REFRESH_MS: u32 = 60_000;

/// One of the five console pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageId {
    #[default]
    Dashboard,
    Nodes,
    Devices,
    Routes,
    Logs,
}

impl PageId {
    /// Every page, in sidebar order.
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Nodes, Self::Devices, Self::Routes, Self::Logs];

    /// Parse a location hash (`"#nodes"`, `"nodes"`). An empty hash selects
    /// the dashboard; unknown tokens yield `None` and callers log and ignore
    /// them.
    pub fn from_hash(hash: &str) -> Option<Self> {
        match hash.trim_start_matches('#') {
            "" | "dashboard" => Some(Self::Dashboard),
            "nodes" => Some(Self::Nodes),
            "devices" => Some(Self::Devices),
            "routes" => Some(Self::Routes),
            "logs" => Some(Self::Logs),
            _ => None,
        }
    }

    /// Hash token identifying this page.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Nodes => "nodes",
            Self::Devices => "devices",
            Self::Routes => "routes",
            Self::Logs => "logs",
        }
    }

    /// Sidebar / document title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Nodes => "Nodes",
            Self::Devices => "Devices",
            Self::Routes => "Routes",
            Self::Logs => "Logs",
        }
    }

    /// The one resource this page loads.
    pub fn resource(self) -> Resource {
        match self {
            Self::Dashboard => Resource::Stats,
            Self::Nodes => Resource::Nodes,
            Self::Devices => Resource::Devices,
            Self::Routes => Resource::Routes,
            Self::Logs => Resource::Logs,
        }
    }

    /// Fixed toast message when this page's load fails. The underlying error
    /// is logged, not shown.
    pub fn load_error_message(self) -> &'static str {
        match self {
            Self::Dashboard => "Failed to load dashboard stats",
            Self::Nodes => "Failed to load node list",
            Self::Devices => "Failed to load device list",
            Self::Routes => "Failed to load route table",
            Self::Logs => "Failed to load logs",
        }
    }
}

/// A UI command, emitted by components and resolved by the dispatcher.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Navigate(PageId),
    Refresh(PageId),
    ToggleTheme,
    OpenModal(ModalOptions),
    CloseModal,
    ConfirmModal,
    Submit(Mutation),
}

/// The page the console should refresh after `mutation` succeeds.
pub fn affected_page(mutation: &Mutation) -> PageId {
    match mutation {
        Mutation::AddNode { .. } | Mutation::DeleteNode { .. } => PageId::Nodes,
        Mutation::RestartDevice { .. } => PageId::Devices,
        Mutation::AddRoute { .. } | Mutation::DeleteRoute { .. } => PageId::Routes,
    }
}

/// Fixed success toast per mutation.
pub fn success_message(mutation: &Mutation) -> &'static str {
    match mutation {
        Mutation::AddNode { .. } => "Node added",
        Mutation::DeleteNode { .. } => "Node deleted",
        Mutation::RestartDevice { .. } => "Device restarted",
        Mutation::AddRoute { .. } => "Route added",
        Mutation::DeleteRoute { .. } => "Route deleted",
    }
}

/// Failure toast per mutation. Only the add-node flow embeds the underlying
/// error text; everything else stays fixed and the error goes to the log.
pub fn failure_message(mutation: &Mutation, err: &ApiError) -> String {
    match mutation {
        Mutation::AddNode { .. } => format!("Failed to add node: {err}"),
        Mutation::DeleteNode { .. } => "Failed to delete node".to_owned(),
        Mutation::RestartDevice { .. } => "Failed to restart device".to_owned(),
        Mutation::AddRoute { .. } => "Failed to add route".to_owned(),
        Mutation::DeleteRoute { .. } => "Failed to delete route".to_owned(),
    }
}

/// Map a confirmed modal body to the mutation it submits. Bodies without a
/// submit action (text, empty) yield `None` and the confirm just closes.
pub fn confirm_intent(body: &ModalBody) -> Option<Intent> {
    match body {
        ModalBody::Empty | ModalBody::Text(_) => None,
        ModalBody::AddNode(draft) => Some(Intent::Submit(Mutation::AddNode {
            name: draft.name.trim().to_owned(),
            virtual_ip: draft.virtual_ip.trim().to_owned(),
        })),
        ModalBody::AddRoute(draft) => Some(Intent::Submit(Mutation::AddRoute {
            network: draft.network.trim().to_owned(),
            mask: draft.mask.trim().to_owned(),
            gateway: draft.gateway.trim().to_owned(),
            // No form validation layer; an unparsable metric becomes 0.
            metric: draft.metric.trim().parse().unwrap_or_default(),
        })),
        ModalBody::ConfirmDeleteNode { id, .. } => {
            Some(Intent::Submit(Mutation::DeleteNode { id: id.clone() }))
        }
        ModalBody::ConfirmDeleteRoute { id, .. } => {
            Some(Intent::Submit(Mutation::DeleteRoute { id: id.clone() }))
        }
    }
}

/// Owns the application state and the injected backend.
///
/// Created once at startup and provided via context; `RwSignal` handles are
/// `Copy`, so cloning the dispatcher is cheap.
#[derive(Clone)]
pub struct Dispatcher {
    backend: Rc<dyn Backend>,
    pub ui: RwSignal<UiState>,
    pub stats: RwSignal<Remote<Stats>>,
    pub nodes: RwSignal<Remote<Vec<Node>>>,
    pub devices: RwSignal<Remote<Vec<Device>>>,
    pub routes: RwSignal<Remote<Vec<RouteEntry>>>,
    pub logs: RwSignal<Remote<Vec<LogEntry>>>,
    pub toasts: RwSignal<ToastStack>,
    pub modal: RwSignal<ModalState>,
}

impl Dispatcher {
    pub fn new(backend: Rc<dyn Backend>) -> Self {
        Self {
            backend,
            ui: RwSignal::new(UiState::default()),
            stats: RwSignal::new(Remote::default()),
            nodes: RwSignal::new(Remote::default()),
            devices: RwSignal::new(Remote::default()),
            routes: RwSignal::new(Remote::default()),
            logs: RwSignal::new(Remote::default()),
            toasts: RwSignal::new(ToastStack::default()),
            modal: RwSignal::new(ModalState::default()),
        }
    }

    /// Resolve one intent. The single entry point for every UI action.
    pub fn dispatch(&self, intent: Intent) {
        match intent {
            Intent::Navigate(page) => self.switch_page(page),
            Intent::Refresh(page) => self.load_page(page),
            Intent::ToggleTheme => self.toggle_theme(),
            Intent::OpenModal(options) => self.modal.update(|m| m.open(options)),
            Intent::CloseModal => self.modal.update(|m| m.close()),
            Intent::ConfirmModal => self.confirm_modal(),
            Intent::Submit(mutation) => self.submit(mutation),
        }
    }

    /// Activate `page`, reflect it into the location hash, and load its data.
    pub fn switch_page(&self, page: PageId) {
        self.ui.update(|u| u.active_page = page);
        #[cfg(feature = "web")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(page.slug());
        }
        self.load_page(page);
    }

    /// Fetch the page's one resource and replace its slot on success. On
    /// failure the previous rows stay and a fixed error toast is pushed,
    /// unless a newer load has superseded this one.
    pub fn load_page(&self, page: PageId) {
        match page {
            PageId::Dashboard => self.load_slot(page, self.stats, decode_record::<Stats>),
            PageId::Nodes => self.load_slot(page, self.nodes, decode_rows::<Node>),
            PageId::Devices => self.load_slot(page, self.devices, decode_rows::<Device>),
            PageId::Routes => self.load_slot(page, self.routes, decode_rows::<RouteEntry>),
            PageId::Logs => self.load_slot(page, self.logs, decode_rows::<LogEntry>),
        }
    }

    fn load_slot<T, F>(&self, page: PageId, slot: RwSignal<Remote<T>>, decode: F)
    where
        T: Send + Sync + 'static,
        F: FnOnce(Value) -> Result<T, ApiError> + 'static,
    {
        let Some(ticket) = slot.try_update(Remote::begin) else {
            return;
        };
        let backend = Rc::clone(&self.backend);
        let toasts = self.toasts;
        spawn(async move {
            match backend.fetch(page.resource()).await.and_then(decode) {
                Ok(value) => {
                    slot.update(|s| {
                        s.apply(ticket, value);
                    });
                }
                Err(err) => {
                    leptos::logging::warn!("load {} failed: {err}", page.slug());
                    let current = slot.try_update(|s| s.fail(ticket)).unwrap_or(false);
                    if current {
                        toasts.update(|t| {
                            t.push(ToastKind::Error, page.load_error_message().to_owned());
                        });
                    }
                }
            }
        });
    }

    fn toggle_theme(&self) {
        let Some(next) = self.ui.try_update(|u| {
            u.theme = u.theme.toggled();
            u.theme
        }) else {
            return;
        };
        theme::apply(next);
        theme::persist(next);
    }

    fn confirm_modal(&self) {
        let body = self.modal.with_untracked(|m| m.body.clone());
        self.modal.update(|m| m.close());
        if let Some(intent) = confirm_intent(&body) {
            self.dispatch(intent);
        }
    }

    fn submit(&self, mutation: Mutation) {
        let backend = Rc::clone(&self.backend);
        let this = self.clone();
        spawn(async move {
            match backend.submit(mutation.clone()).await {
                Ok(_) => {
                    this.toasts.update(|t| {
                        t.push(ToastKind::Success, success_message(&mutation).to_owned());
                    });
                    this.load_page(affected_page(&mutation));
                }
                Err(err) => {
                    leptos::logging::warn!("{} {} failed: {err}", mutation.method(), mutation.path());
                    let message = failure_message(&mutation, &err);
                    this.toasts.update(|t| {
                        t.push(ToastKind::Error, message);
                    });
                }
            }
        });
    }
}

#[cfg(feature = "web")]
fn spawn(fut: impl std::future::Future<Output = ()> + 'static) {
    leptos::task::spawn_local(fut);
}

/// Native builds have no event loop; boundary futures are driven directly in
/// tests instead.
#[cfg(not(feature = "web"))]
fn spawn(fut: impl std::future::Future<Output = ()> + 'static) {
    drop(fut);
}
