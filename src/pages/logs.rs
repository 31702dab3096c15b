//! Logs page: flat chronological service log.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, Intent, PageId};
use crate::net::types::LogLevel;

/// Level badge text and CSS modifier. The text is the wire token verbatim.
fn level_label(level: LogLevel) -> (&'static str, &'static str) {
    match level {
        LogLevel::Info => ("info", "info"),
        LogLevel::Warn => ("warn", "warn"),
        LogLevel::Error => ("error", "error"),
    }
}

/// Logs page.
#[component]
pub fn LogsPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let logs = dispatcher.logs;

    let refresh = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Intent::Refresh(PageId::Logs))
    };

    view! {
        <section class="page page--logs">
            <header class="page__header">
                <h1>"Logs"</h1>
                <span class="page__spacer"></span>
                {move || logs.get().loading.then(|| view! { <span class="page__loading">"Refreshing..."</span> })}
                <button class="btn" on:click=refresh>"Refresh"</button>
            </header>
            <div class="log-list">
                {move || {
                    let state = logs.get();
                    if state.value.is_empty() {
                        let text = if state.loading { "Loading logs..." } else { "No log entries." };
                        return view! { <div class="log-list__empty">{text}</div> }.into_any();
                    }
                    state
                        .value
                        .iter()
                        .map(|entry| {
                            let (text, modifier) = level_label(entry.level);
                            view! {
                                <div class="log-list__row">
                                    <span class="log-list__time">{entry.time.clone()}</span>
                                    <span class=format!("log-list__level log-list__level--{modifier}")>{text}</span>
                                    <span class="log-list__message">{entry.message.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </section>
    }
}
