//! Dashboard page with aggregate stat cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, Intent, PageId};
use crate::net::types::Stats;

/// Label/value pairs for the stat card grid, in display order.
fn stat_cards(stats: &Stats) -> Vec<(&'static str, String)> {
    vec![
        ("Total Nodes", stats.total_nodes.to_string()),
        ("Total Devices", stats.total_devices.to_string()),
        ("Total Routes", stats.total_routes.to_string()),
        ("Total Traffic", stats.total_traffic.clone()),
    ]
}

/// Dashboard page. Polled every 30 s while active; the Refresh button loads
/// on demand.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let stats = dispatcher.stats;

    let refresh = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Intent::Refresh(PageId::Dashboard))
    };

    view! {
        <section class="page page--dashboard">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <span class="page__spacer"></span>
                {move || stats.get().loading.then(|| view! { <span class="page__loading">"Refreshing..."</span> })}
                <button class="btn" on:click=refresh>"Refresh"</button>
            </header>
            <div class="stat-grid">
                {move || {
                    stat_cards(&stats.get().value)
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="stat-card">
                                    <span class="stat-card__value">{value}</span>
                                    <span class="stat-card__label">{label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
