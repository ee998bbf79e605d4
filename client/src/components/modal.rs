//! Dismissable result dialog.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Success,
    Error,
}

impl ModalKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "dialog__title dialog__title--success",
            Self::Error => "dialog__title dialog__title--error",
        }
    }
}

/// Content of a result dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ModalKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: ModalKind::Success, title: title.into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: ModalKind::Error, title: title.into(), message: message.into() }
    }
}

#[component]
pub fn Modal(notice: Notice, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let Notice { kind, title, message } = notice;
    let body = (!message.is_empty()).then(|| view! { <p class="dialog__message">{message}</p> });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h3 class=kind.class()>{title}</h3>
                {body}
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
