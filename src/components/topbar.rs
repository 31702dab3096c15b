//! Top bar showing the active page title and the theme toggle.

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, Intent};
use crate::state::ui::Theme;

/// Header bar above the page content.
#[component]
pub fn TopBar() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let ui = dispatcher.ui;

    let toggle = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Intent::ToggleTheme)
    };
    let toggle_label = move || match ui.get().theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    view! {
        <header class="topbar">
            <span class="topbar__page">{move || ui.get().active_page.title()}</span>
            <span class="topbar__spacer"></span>
            <button class="btn topbar__theme" on:click=toggle title="Toggle theme">
                {toggle_label}
            </button>
        </header>
    }
}
