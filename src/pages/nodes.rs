//! Nodes page: the peer table with add and delete actions.

#[cfg(test)]
#[path = "nodes_test.rs"]
mod nodes_test;

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, Intent, PageId};
use crate::net::types::{Node, NodeStatus};
use crate::state::modal::{AddNodeDraft, ModalBody, ModalOptions};

/// Status cell text and CSS modifier. The text is the wire token verbatim.
fn status_label(status: NodeStatus) -> (&'static str, &'static str) {
    match status {
        NodeStatus::Online => ("online", "online"),
        NodeStatus::Offline => ("offline", "offline"),
        NodeStatus::Connecting => ("connecting", "connecting"),
    }
}

/// Modal configuration for the add-node form.
fn add_node_options() -> ModalOptions {
    ModalOptions {
        title: Some("Add Node".to_owned()),
        body: Some(ModalBody::AddNode(AddNodeDraft::default())),
        footer: None,
    }
}

/// Modal configuration confirming a node deletion.
fn delete_node_options(node: &Node) -> ModalOptions {
    ModalOptions {
        title: Some(format!("Delete {}?", node.name)),
        body: Some(ModalBody::ConfirmDeleteNode {
            id: node.id.clone(),
            name: node.name.clone(),
        }),
        footer: None,
    }
}

/// Nodes page. Polled every 60 s while active.
#[component]
pub fn NodesPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let nodes = dispatcher.nodes;

    let refresh = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Intent::Refresh(PageId::Nodes))
    };
    let open_add = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Intent::OpenModal(add_node_options()))
    };
    let rows_dispatcher = dispatcher.clone();

    view! {
        <section class="page page--nodes">
            <header class="page__header">
                <h1>"Nodes"</h1>
                <span class="page__spacer"></span>
                {move || nodes.get().loading.then(|| view! { <span class="page__loading">"Refreshing..."</span> })}
                <button class="btn" on:click=refresh>"Refresh"</button>
                <button class="btn btn--primary" on:click=open_add>"+ Add Node"</button>
            </header>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Status"</th>
                        <th>"Virtual IP"</th>
                        <th>"Physical IP"</th>
                        <th>"Online Time"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = nodes.get();
                        if state.value.is_empty() {
                            let text = if state.loading { "Loading nodes..." } else { "No nodes registered." };
                            return view! {
                                <tr class="data-table__empty">
                                    <td colspan="7">{text}</td>
                                </tr>
                            }
                            .into_any();
                        }
                        state
                            .value
                            .iter()
                            .map(|node| {
                                let (text, modifier) = status_label(node.status);
                                let on_delete = {
                                    let dispatcher = rows_dispatcher.clone();
                                    let options = delete_node_options(node);
                                    move |_| dispatcher.dispatch(Intent::OpenModal(options.clone()))
                                };
                                view! {
                                    <tr>
                                        <td class="data-table__mono">{node.id.clone()}</td>
                                        <td>{node.name.clone()}</td>
                                        <td>
                                            <span class=format!("status-pill status-pill--{modifier}")>{text}</span>
                                        </td>
                                        <td class="data-table__mono">{node.virtual_ip.clone()}</td>
                                        <td class="data-table__mono">{node.physical_ip.clone()}</td>
                                        <td>{node.online_time.clone()}</td>
                                        <td class="data-table__actions">
                                            <button class="btn btn--danger" on:click=on_delete>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </section>
    }
}
