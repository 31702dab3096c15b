//! Modal host rendering the single console dialog.
//!
//! DESIGN
//! ======
//! The dialog is fully state-driven: the body is a typed form variant and
//! its draft fields live in [`ModalState`], so every keystroke is an
//! ordinary signal update. The body view is rebuilt only when the variant
//! changes, not per keystroke, which keeps input focus stable.

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, Intent};
use crate::state::modal::{ModalBody, ModalFooter, ModalState};

/// Discriminant of [`ModalBody`] used to key body-view rebuilds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyKind {
    Empty,
    Text,
    AddNode,
    AddRoute,
    ConfirmDelete,
}

fn body_kind(body: &ModalBody) -> BodyKind {
    match body {
        ModalBody::Empty => BodyKind::Empty,
        ModalBody::Text(_) => BodyKind::Text,
        ModalBody::AddNode(_) => BodyKind::AddNode,
        ModalBody::AddRoute(_) => BodyKind::AddRoute,
        ModalBody::ConfirmDeleteNode { .. } | ModalBody::ConfirmDeleteRoute { .. } => {
            BodyKind::ConfirmDelete
        }
    }
}

fn text_content(body: &ModalBody) -> String {
    match body {
        ModalBody::Text(text) => text.clone(),
        _ => String::new(),
    }
}

fn confirm_text(body: &ModalBody) -> String {
    match body {
        ModalBody::ConfirmDeleteNode { name, .. } => {
            format!("Remove node {name} from the network? The next refresh will no longer include it.")
        }
        ModalBody::ConfirmDeleteRoute { network, .. } => {
            format!("Remove the route to {network}?")
        }
        _ => String::new(),
    }
}

/// The one modal instance. Backdrop click and Escape close it.
#[component]
pub fn ModalHost() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let modal = dispatcher.modal;

    let on_close = Callback::new({
        let dispatcher = dispatcher.clone();
        move |()| dispatcher.dispatch(Intent::CloseModal)
    });
    let on_confirm = Callback::new({
        let dispatcher = dispatcher.clone();
        move |()| dispatcher.dispatch(Intent::ConfirmModal)
    });

    let kind = Memo::new(move |_| modal.with(|m| body_kind(&m.body)));

    view! {
        <Show when=move || modal.get().is_open>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.run(());
                        }
                    }
                    tabindex="0"
                >
                    <h2>{move || modal.get().title.clone()}</h2>
                    <div class="dialog__body">
                        {move || match kind.get() {
                            BodyKind::Empty => ().into_any(),
                            BodyKind::Text => {
                                view! {
                                    <p class="dialog__text">{move || modal.with(|m| text_content(&m.body))}</p>
                                }
                                    .into_any()
                            }
                            BodyKind::AddNode => view! { <AddNodeForm modal=modal on_confirm=on_confirm/> }.into_any(),
                            BodyKind::AddRoute => view! { <AddRouteForm modal=modal/> }.into_any(),
                            BodyKind::ConfirmDelete => {
                                view! {
                                    <p class="dialog__text">{move || modal.with(|m| confirm_text(&m.body))}</p>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                    <div class="dialog__actions">
                        {move || match modal.get().footer {
                            ModalFooter::CancelConfirm => {
                                view! {
                                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                                        "Confirm"
                                    </button>
                                }
                                    .into_any()
                            }
                            ModalFooter::CloseOnly => {
                                view! {
                                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                                        "Close"
                                    </button>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Add-node form bound to the draft inside the modal body.
#[component]
fn AddNodeForm(modal: RwSignal<ModalState>, on_confirm: Callback<()>) -> impl IntoView {
    let name = move || {
        modal.with(|m| match &m.body {
            ModalBody::AddNode(draft) => draft.name.clone(),
            _ => String::new(),
        })
    };
    let virtual_ip = move || {
        modal.with(|m| match &m.body {
            ModalBody::AddNode(draft) => draft.virtual_ip.clone(),
            _ => String::new(),
        })
    };

    view! {
        <label class="dialog__label">
            "Name"
            <input
                class="dialog__input"
                type="text"
                prop:value=name
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| {
                        if let ModalBody::AddNode(draft) = &mut m.body {
                            draft.name = value;
                        }
                    });
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        on_confirm.run(());
                    }
                }
            />
        </label>
        <label class="dialog__label">
            "Virtual IP"
            <input
                class="dialog__input"
                type="text"
                placeholder="10.8.0.6"
                prop:value=virtual_ip
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| {
                        if let ModalBody::AddNode(draft) = &mut m.body {
                            draft.virtual_ip = value;
                        }
                    });
                }
            />
        </label>
    }
}

/// Add-route form bound to the draft inside the modal body.
#[component]
fn AddRouteForm(modal: RwSignal<ModalState>) -> impl IntoView {
    let network = move || {
        modal.with(|m| match &m.body {
            ModalBody::AddRoute(draft) => draft.network.clone(),
            _ => String::new(),
        })
    };
    let mask = move || {
        modal.with(|m| match &m.body {
            ModalBody::AddRoute(draft) => draft.mask.clone(),
            _ => String::new(),
        })
    };
    let gateway = move || {
        modal.with(|m| match &m.body {
            ModalBody::AddRoute(draft) => draft.gateway.clone(),
            _ => String::new(),
        })
    };
    let metric = move || {
        modal.with(|m| match &m.body {
            ModalBody::AddRoute(draft) => draft.metric.clone(),
            _ => String::new(),
        })
    };

    view! {
        <label class="dialog__label">
            "Network"
            <input
                class="dialog__input"
                type="text"
                placeholder="172.16.0.0"
                prop:value=network
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| {
                        if let ModalBody::AddRoute(draft) = &mut m.body {
                            draft.network = value;
                        }
                    });
                }
            />
        </label>
        <label class="dialog__label">
            "Mask"
            <input
                class="dialog__input"
                type="text"
                placeholder="255.255.255.0"
                prop:value=mask
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| {
                        if let ModalBody::AddRoute(draft) = &mut m.body {
                            draft.mask = value;
                        }
                    });
                }
            />
        </label>
        <label class="dialog__label">
            "Gateway"
            <input
                class="dialog__input"
                type="text"
                placeholder="10.8.0.1"
                prop:value=gateway
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| {
                        if let ModalBody::AddRoute(draft) = &mut m.body {
                            draft.gateway = value;
                        }
                    });
                }
            />
        </label>
        <label class="dialog__label">
            "Metric"
            <input
                class="dialog__input"
                type="text"
                placeholder="1"
                prop:value=metric
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| {
                        if let ModalBody::AddRoute(draft) = &mut m.body {
                            draft.metric = value;
                        }
                    });
                }
            />
        </label>
    }
}
