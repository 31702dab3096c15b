//! Root application component wiring chrome, pages, and shared surfaces.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::modal_host::ModalHost;
use crate::components::sidebar::Sidebar;
use crate::components::toast_host::ToastHost;
use crate::components::topbar::TopBar;
use crate::dispatch::{Dispatcher, PageId};
use crate::pages::dashboard::DashboardPage;
use crate::pages::devices::DevicesPage;
use crate::pages::logs::LogsPage;
use crate::pages::nodes::NodesPage;
use crate::pages::routes::RoutesPage;
use crate::util::theme;

/// Root component.
///
/// Applies the stored theme, activates the page named by the location hash,
/// starts the poll timers, and provides the dispatcher to every child.
#[component]
pub fn App(dispatcher: Dispatcher) -> impl IntoView {
    provide_meta_context();
    provide_context(dispatcher.clone());

    let ui = dispatcher.ui;

    let initial_theme = theme::read_preference();
    dispatcher.ui.update(|u| u.theme = initial_theme);
    theme::apply(initial_theme);

    dispatcher.switch_page(initial_page());

    #[cfg(feature = "web")]
    {
        start_refresh_timers(&dispatcher);
        listen_for_hash_changes(&dispatcher);
    }

    view! {
        <Title text=move || format!("{} - VPNet Console", ui.get().active_page.title())/>
        <div class="console">
            <Sidebar/>
            <div class="console__main">
                <TopBar/>
                <main class="console__content">
                    {move || match ui.get().active_page {
                        PageId::Dashboard => view! { <DashboardPage/> }.into_any(),
                        PageId::Nodes => view! { <NodesPage/> }.into_any(),
                        PageId::Devices => view! { <DevicesPage/> }.into_any(),
                        PageId::Routes => view! { <RoutesPage/> }.into_any(),
                        PageId::Logs => view! { <LogsPage/> }.into_any(),
                    }}
                </main>
            </div>
            <ToastHost/>
            <ModalHost/>
        </div>
    }
}

/// Page named by the location hash at startup. Unknown tokens are logged and
/// fall back to the dashboard.
fn initial_page() -> PageId {
    #[cfg(feature = "web")]
    {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        match PageId::from_hash(&hash) {
            Some(page) => page,
            None => {
                leptos::logging::warn!("ignoring unknown page hash: {hash}");
                PageId::default()
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        PageId::default()
    }
}

/// Two independent poll timers, alive for the process lifetime. Each tick
/// refreshes its page only while that page is active; ticks during an
/// in-flight load are resolved by the slot's sequence check.
#[cfg(feature = "web")]
fn start_refresh_timers(dispatcher: &Dispatcher) {
    use gloo_timers::callback::Interval;

    use crate::dispatch::{DASHBOARD_REFRESH_MS, Intent, NODES_REFRESH_MS};

    let d = dispatcher.clone();
    Interval::new(DASHBOARD_REFRESH_MS, move || {
        if d.ui.get_untracked().active_page == PageId::Dashboard {
            d.dispatch(Intent::Refresh(PageId::Dashboard));
        }
    })
    .forget();

    let d = dispatcher.clone();
    Interval::new(NODES_REFRESH_MS, move || {
        if d.ui.get_untracked().active_page == PageId::Nodes {
            d.dispatch(Intent::Refresh(PageId::Nodes));
        }
    })
    .forget();
}

/// Keep the active page in sync with manual hash edits and history
/// navigation. Unknown tokens leave the active section untouched.
#[cfg(feature = "web")]
fn listen_for_hash_changes(dispatcher: &Dispatcher) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let d = dispatcher.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        match PageId::from_hash(&hash) {
            Some(page) => {
                // switch_page writes the hash back, so skip the echo.
                if page != d.ui.get_untracked().active_page {
                    d.switch_page(page);
                }
            }
            None => leptos::logging::warn!("ignoring unknown page hash: {hash}"),
        }
    });
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("hashchange", handler.as_ref().unchecked_ref());
    }
    handler.forget();
}
