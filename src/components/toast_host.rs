//! Toast host rendering the notification stack.
//!
//! Phase transitions are pure state changes in [`ToastStack`]; this
//! component schedules them on browser timers when a toast first appears.
//! Timers are per-toast and fire-and-forget, so concurrent toasts run their
//! lifecycles independently.

use leptos::prelude::*;

use crate::dispatch::Dispatcher;

#[cfg(feature = "web")]
use crate::state::toast::{DISMISS_MS, EXIT_MS, SLIDE_IN_MS};

/// Fixed-position stack of live toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let toasts = dispatcher.toasts;

    #[cfg(feature = "web")]
    {
        use std::cell::RefCell;
        use std::collections::HashSet;
        use std::rc::Rc;

        use gloo_timers::callback::Timeout;

        let scheduled = Rc::new(RefCell::new(HashSet::<u64>::new()));
        Effect::new(move || {
            let ids: Vec<u64> = toasts.with(|t| t.items().iter().map(|toast| toast.id).collect());
            for id in ids {
                if !scheduled.borrow_mut().insert(id) {
                    continue;
                }
                Timeout::new(SLIDE_IN_MS, move || {
                    toasts.update(|t| t.show(id));
                })
                .forget();
                Timeout::new(SLIDE_IN_MS + DISMISS_MS, move || {
                    toasts.update(|t| t.begin_dismiss(id));
                })
                .forget();
                Timeout::new(SLIDE_IN_MS + DISMISS_MS + EXIT_MS, move || {
                    toasts.update(|t| t.remove(id));
                })
                .forget();
            }
        });
    }

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .items()
                    .iter()
                    .map(|toast| {
                        let class = format!(
                            "toast toast--{} toast--{}",
                            toast.kind.css_mod(),
                            toast.phase.css_mod()
                        );
                        view! { <div class=class>{toast.message.clone()}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
