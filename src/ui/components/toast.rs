use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::{AppState, ThemeMode};
use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }

    fn class(&self, theme: ThemeMode) -> &'static str {
        match (self, theme) {
            (ToastKind::Info, ThemeMode::Light) => "border-sky-300 bg-sky-50 text-sky-900",
            (ToastKind::Info, ThemeMode::Dark) => "border-sky-500/40 bg-sky-950/80 text-sky-100",
            (ToastKind::Success, ThemeMode::Light) => "border-emerald-300 bg-emerald-50 text-emerald-900",
            (ToastKind::Success, ThemeMode::Dark) => "border-emerald-500/40 bg-emerald-950/80 text-emerald-100",
            (ToastKind::Warning, ThemeMode::Light) => "border-amber-300 bg-amber-50 text-amber-900",
            (ToastKind::Warning, ThemeMode::Dark) => "border-amber-500/40 bg-amber-950/80 text-amber-100",
            (ToastKind::Error, ThemeMode::Light) => "border-rose-300 bg-rose-50 text-rose-900",
            (ToastKind::Error, ThemeMode::Dark) => "border-rose-500/40 bg-rose-950/80 text-rose-100",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Queues a toast, dropping the oldest one when the stack is full.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let toast = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, toast));
}

fn enqueue(entries: &mut Vec<ToastMessage>, toast: ToastMessage) {
    // identical text already on screen
    if entries
        .iter()
        .any(|entry| entry.kind == toast.kind && entry.text == toast.text)
    {
        return;
    }
    if entries.len() >= MAX_VISIBLE {
        entries.remove(0);
    }
    entries.push(toast);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let state = use_context::<Signal<AppState>>();
    let theme = state.with(|st| st.theme);
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 z-50 flex justify-center",
            ul {
                class: "space-y-3",
                for toast in entries {
                    ToastCard { key: "{toast.id}", toast: toast.clone(), theme, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(toast: ToastMessage, theme: ThemeMode, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = toast.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|item| item.id != id));
        }
    });

    let class = format!(
        "pointer-events-auto flex max-w-xl items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {}",
        toast.kind.class(theme)
    );
    let dismiss_id = toast.id.clone();
    let mut toasts = toasts;
    rsx! {
        li {
            class: class,
            role: "status",
            span { class: "text-lg", "{toast.kind.icon()}" }
            p { class: "text-sm font-medium", "{toast.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide opacity-70 hover:opacity-100",
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|item| item.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drops_oldest_when_full() {
        let mut entries = Vec::new();
        for index in 0..=MAX_VISIBLE {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("message {index}")));
        }
        assert_eq!(entries.len(), MAX_VISIBLE);
        assert_eq!(entries[0].text, "message 1");
    }

    #[test]
    fn duplicate_messages_are_collapsed() {
        let mut entries = Vec::new();
        enqueue(&mut entries, ToastMessage::new(ToastKind::Warning, "Rates exceed 100%"));
        enqueue(&mut entries, ToastMessage::new(ToastKind::Warning, "Rates exceed 100%"));
        enqueue(&mut entries, ToastMessage::new(ToastKind::Error, "Rates exceed 100%"));
        assert_eq!(entries.len(), 2);
    }
}
