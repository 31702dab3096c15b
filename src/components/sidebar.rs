//! Sidebar navigation listing the five console pages.

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, Intent, PageId};

/// Left navigation rail. The active entry tracks the dispatcher state, so
/// hash navigation and link clicks stay in sync.
#[component]
pub fn Sidebar() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let ui = dispatcher.ui;

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"VPNet"</div>
            {PageId::ALL
                .into_iter()
                .map(|page| {
                    let dispatcher = dispatcher.clone();
                    let is_active = move || ui.get().active_page == page;
                    view! {
                        <button
                            class="sidebar__link"
                            class:sidebar__link--active=is_active
                            on:click=move |_| dispatcher.dispatch(Intent::Navigate(page))
                        >
                            {page.title()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
