//! Routes page: the route table with add and delete actions.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, Intent, PageId};
use crate::net::types::RouteEntry;
use crate::state::modal::{AddRouteDraft, ModalBody, ModalOptions};

/// Modal configuration for the add-route form.
fn add_route_options() -> ModalOptions {
    ModalOptions {
        title: Some("Add Route".to_owned()),
        body: Some(ModalBody::AddRoute(AddRouteDraft::default())),
        footer: None,
    }
}

/// Modal configuration confirming a route deletion.
fn delete_route_options(route: &RouteEntry) -> ModalOptions {
    ModalOptions {
        title: Some(format!("Delete route to {}?", route.network)),
        body: Some(ModalBody::ConfirmDeleteRoute {
            id: route.id.clone(),
            network: route.network.clone(),
        }),
        footer: None,
    }
}

/// Routes page.
#[component]
pub fn RoutesPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let routes = dispatcher.routes;

    let refresh = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Intent::Refresh(PageId::Routes))
    };
    let open_add = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Intent::OpenModal(add_route_options()))
    };
    let rows_dispatcher = dispatcher.clone();

    view! {
        <section class="page page--routes">
            <header class="page__header">
                <h1>"Routes"</h1>
                <span class="page__spacer"></span>
                {move || routes.get().loading.then(|| view! { <span class="page__loading">"Refreshing..."</span> })}
                <button class="btn" on:click=refresh>"Refresh"</button>
                <button class="btn btn--primary" on:click=open_add>"+ Add Route"</button>
            </header>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Network"</th>
                        <th>"Mask"</th>
                        <th>"Gateway"</th>
                        <th>"Metric"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = routes.get();
                        if state.value.is_empty() {
                            let text = if state.loading { "Loading routes..." } else { "Route table is empty." };
                            return view! {
                                <tr class="data-table__empty">
                                    <td colspan="5">{text}</td>
                                </tr>
                            }
                            .into_any();
                        }
                        state
                            .value
                            .iter()
                            .map(|route| {
                                let on_delete = {
                                    let dispatcher = rows_dispatcher.clone();
                                    let options = delete_route_options(route);
                                    move |_| dispatcher.dispatch(Intent::OpenModal(options.clone()))
                                };
                                view! {
                                    <tr>
                                        <td class="data-table__mono">{route.network.clone()}</td>
                                        <td class="data-table__mono">{route.mask.clone()}</td>
                                        <td class="data-table__mono">{route.gateway.clone()}</td>
                                        <td>{route.metric}</td>
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
