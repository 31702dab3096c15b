//! # vpnet-console
//!
//! Leptos + WASM management console for a VPNet deployment: dashboard
//! stats, node/device/route tables, and the service log, behind an
//! injectable network boundary.
//!
//! The default backend is a deterministic in-memory mock, so the console
//! runs standalone; `?api=live` switches to the REST adapter. Browser-only
//! dependencies sit behind the `web` feature, and the default native build
//! exists for the unit-test suite.

pub mod app;
pub mod components;
pub mod dispatch;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: picks a backend, builds the dispatcher, and mounts
/// the console.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::rc::Rc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::dispatch::Dispatcher;
    use crate::net::api::Backend;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let live = live_api_requested();
    let backend: Rc<dyn Backend> = if live {
        Rc::new(crate::net::rest::RestBackend::new())
    } else {
        Rc::new(crate::net::mock::MockBackend::new())
    };
    let dispatcher = Dispatcher::new(backend);
    if live {
        dispatcher.toasts.update(|t| {
            t.push(crate::state::toast::ToastKind::Info, "Using live management API".to_owned());
        });
    }

    leptos::mount::mount_to_body(move || view! { <App dispatcher=dispatcher/> });
}

/// `?api=live` selects the REST adapter instead of the mock.
#[cfg(feature = "web")]
fn live_api_requested() -> bool {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|s| web_sys::UrlSearchParams::new_with_str(&s).ok())
        .and_then(|p| p.get("api"))
        .is_some_and(|v| v == "live")
}
