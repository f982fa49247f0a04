use dioxus::prelude::*;

use crate::app::{require_client, SharedLookupClient};
use crate::domain::{is_plausible_cert, AppState, CardData, Listing, ThemeMode};
use crate::infra::lookup::CertLookup;
use crate::ui::components::{
    copy_button::CopyButton,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;

#[component]
pub fn PsaLookupPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<SharedLookupClient>();
    let theme = state.with(|st| st.theme);

    let mut cert_input = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut outcome = use_signal(|| None::<CertLookup>);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let cert = cert_input().trim().to_string();
        if cert.is_empty() {
            error.set(Some("Please enter a certificate number.".to_string()));
            return;
        }
        if loading() {
            return;
        }
        let Some(client) = require_client(&client, toasts) else {
            return;
        };

        loading.set(true);
        error.set(None);
        outcome.set(None);
        spawn(async move {
            match client.lookup_cert(&cert).await {
                Ok(found) => {
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        format!("Found certificate #{}.", found.card_data.cert_number),
                    );
                    outcome.set(Some(found));
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    let typed = cert_input();
    let shape_hint = !typed.trim().is_empty() && !is_plausible_cert(&typed);

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold", "PSA Certificate Lookup" }
                p { class: "text-sm {theme::text_muted(theme)}",
                    "Fetch the graded card behind a certification number and get a listing you can paste straight into a marketplace."
                }
            }

            form {
                class: "{theme::panel(theme)} flex flex-wrap items-end gap-4",
                onsubmit: on_submit,
                label { class: "min-w-[240px] flex-1",
                    span { class: "{theme::label_class(theme)}", "Certificate Number" }
                    input {
                        class: "mt-1 {theme::input_class(theme)}",
                        inputmode: "numeric",
                        placeholder: "e.g. 12345678",
                        value: "{typed}",
                        oninput: move |evt| cert_input.set(evt.value()),
                    }
                }
                button {
                    class: "{theme::btn_primary(theme)}",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Looking up..." } else { "Look Up" }
                }
                if shape_hint {
                    p { class: "w-full text-xs {theme::text_muted(theme)}",
                        "PSA certificate numbers are usually 8 or 9 digits."
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "{theme::alert_error(theme)}", role: "alert", "{message}" }
            }

            if let Some(found) = outcome() {
                CardDetails { card: found.card_data.clone(), theme }
                ListingPanel { listing: found.listing.clone(), theme }
            }
        }
    }
}

#[component]
pub fn CardDetails(card: CardData, theme: ThemeMode) -> Element {
    let raw = serde_json::to_string_pretty(&card).unwrap_or_default();
    let rows = card.display_rows();
    rsx! {
        section { class: "{theme::panel(theme)} space-y-4",
            h2 { class: "text-lg font-semibold", "Card Details" }
            dl { class: "grid gap-x-6 gap-y-2 sm:grid-cols-2",
                for (label, value) in rows {
                    div { key: "{label}", class: "flex justify-between gap-4 text-sm",
                        dt { class: "{theme::text_muted(theme)}", "{label}" }
                        dd { class: "font-medium text-right", "{value}" }
                    }
                }
            }
            details {
                summary { class: "cursor-pointer text-xs {theme::text_muted(theme)}", "Raw card data" }
                pre { class: "mt-2 {theme::code_block(theme)}", "{raw}" }
            }
        }
    }
}

#[component]
pub fn ListingPanel(listing: Listing, theme: ThemeMode) -> Element {
    if listing.title.trim().is_empty() && listing.description.trim().is_empty() {
        return rsx! { Fragment {} };
    }
    rsx! {
        section { class: "{theme::panel(theme)} space-y-4",
            div { class: "flex flex-wrap items-center justify-between gap-3",
                h2 { class: "text-lg font-semibold", "Listing" }
                div { class: "flex gap-2",
                    CopyButton { text: listing.title.clone(), label: "Copy title".to_string(), theme }
                    CopyButton { text: listing.description.clone(), label: "Copy description".to_string(), theme }
                }
            }
            p { class: "font-medium", "{listing.title}" }
            pre { class: "{theme::code_block(theme)}", "{listing.description}" }
        }
    }
}
