//! Devices page: virtual device table with a restart action.

#[cfg(test)]
#[path = "devices_test.rs"]
mod devices_test;

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, Intent, PageId};
use crate::net::api::Mutation;
use crate::net::types::DeviceStatus;

/// Status cell text and CSS modifier. The text is the wire token verbatim.
fn status_label(status: DeviceStatus) -> (&'static str, &'static str) {
    match status {
        DeviceStatus::Up => ("up", "up"),
        DeviceStatus::Down => ("down", "down"),
    }
}

/// Devices page.
#[component]
pub fn DevicesPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let devices = dispatcher.devices;

    let refresh = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Intent::Refresh(PageId::Devices))
    };
    let rows_dispatcher = dispatcher.clone();

    view! {
        <section class="page page--devices">
            <header class="page__header">
                <h1>"Devices"</h1>
                <span class="page__spacer"></span>
                {move || devices.get().loading.then(|| view! { <span class="page__loading">"Refreshing..."</span> })}
                <button class="btn" on:click=refresh>"Refresh"</button>
            </header>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Status"</th>
                        <th>"IP"</th>
                        <th>"MTU"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = devices.get();
                        if state.value.is_empty() {
                            let text = if state.loading { "Loading devices..." } else { "No virtual devices." };
                            return view! {
                                <tr class="data-table__empty">
                                    <td colspan="6">{text}</td>
                                </tr>
                            }
                            .into_any();
                        }
                        state
                            .value
                            .iter()
                            .map(|device| {
                                let (text, modifier) = status_label(device.status);
                                let on_restart = {
                                    let dispatcher = rows_dispatcher.clone();
                                    let id = device.id.clone();
                                    move |_| {
                                        dispatcher.dispatch(Intent::Submit(Mutation::RestartDevice {
                                            id: id.clone(),
                                        }));
                                    }
                                };
                                view! {
                                    <tr>
                                        <td class="data-table__mono">{device.id.clone()}</td>
                                        <td>{device.name.clone()}</td>
                                        <td>
                                            <span class=format!("status-pill status-pill--{modifier}")>{text}</span>
                                        </td>
                                        <td class="data-table__mono">{device.ip.clone()}</td>
                                        <td>{device.mtu}</td>
                                        <td class="data-table__actions">
                                            <button class="btn" on:click=on_restart>"Restart"</button>
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
