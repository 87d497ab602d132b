//! Session-local toast notices, the app's only error surface besides logs.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastStack {
    fn push(&mut self, kind: ToastKind, text: String) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            text,
        });
        self.next_id
    }

    fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

pub type Toasts = Signal<ToastStack>;

pub fn provide_toasts() -> Toasts {
    use_context_provider(|| Signal::new(ToastStack::default()))
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

pub fn success(toasts: Toasts, text: impl Into<String>) {
    show(toasts, ToastKind::Success, text.into());
}

pub fn error(toasts: Toasts, text: impl Into<String>) {
    show(toasts, ToastKind::Error, text.into());
}

fn show(mut toasts: Toasts, kind: ToastKind, text: String) {
    let id = toasts.write().push(kind, text);
    spawn(async move {
        TimeoutFuture::new(DISMISS_AFTER_MS).await;
        toasts.write().dismiss(id);
    });
}

/// Renders the toast stack; mounted once in the app shell.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx!(
        div { class: "fixed top-4 right-4 z-[100] flex flex-col gap-2",
            for toast in toasts.read().toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "bg-green-600 text-white px-4 py-3 rounded-lg shadow-lg",
                        ToastKind::Error => "bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg",
                    },
                    "{toast.text}"
                }
            }
        }
    )
}
