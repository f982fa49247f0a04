use dioxus::prelude::*;

use crate::app::{require_client, SharedLookupClient};
use crate::domain::{AppState, QuoteForm, ThemeMode};
use crate::ui::components::{
    kpi_card::KpiCard,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;

#[derive(Clone, Copy, PartialEq)]
enum QuoteField {
    FirstName,
    LastName,
    Email,
    Phone,
    CollectionLink,
}

impl QuoteField {
    fn slot(self, form: &mut QuoteForm) -> &mut String {
        match self {
            Self::FirstName => &mut form.first_name,
            Self::LastName => &mut form.last_name,
            Self::Email => &mut form.email,
            Self::Phone => &mut form.phone,
            Self::CollectionLink => &mut form.collection_link,
        }
    }
}

#[component]
pub fn QuotePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<SharedLookupClient>();
    let theme = state.with(|st| st.theme);

    let mut form = use_signal(QuoteForm::default);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let request = match form.with(QuoteForm::to_submission) {
            Ok(request) => request,
            Err(err) => {
                push_toast(toasts, ToastKind::Warning, err.to_string());
                return;
            }
        };
        let Some(client) = require_client(&client, toasts) else {
            return;
        };

        submitting.set(true);
        spawn(async move {
            match client.submit(&request).await {
                Ok(response) => {
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        format!(
                            "Thanks! We'll be in touch within 24 hours. Your tracking number is: {}",
                            response.tracking_number
                        ),
                    );
                    form.set(QuoteForm::default());
                }
                Err(err) => push_toast(
                    toasts,
                    ToastKind::Error,
                    format!("Failed to submit: {}", err.user_message()),
                ),
            }
            submitting.set(false);
        });
    };

    let current = form();

    rsx! {
        div { class: "space-y-8",
            section { class: "text-center space-y-2",
                h1 { class: "text-3xl font-bold", "Sell Your Card Collection" }
                p { class: "text-sm {theme::text_muted(theme)}",
                    "Tell us about your cards and get a quote within 24 hours."
                }
            }

            section { class: "grid gap-4 sm:grid-cols-3",
                KpiCard { title: "Collections purchased".to_string(), value: "10k+".to_string(), description: None, theme }
                KpiCard { title: "Average response time".to_string(), value: "24hrs".to_string(), description: None, theme }
                KpiCard { title: "Secure payment guarantee".to_string(), value: "100%".to_string(), description: None, theme, highlight: true }
            }

            form { class: "{theme::panel(theme)} mx-auto max-w-2xl space-y-4", onsubmit: on_submit,
                h2 { class: "text-lg font-semibold", "Get Your Quote" }
                div { class: "grid gap-4 sm:grid-cols-2",
                    TextInput { label: "First name", value: current.first_name.clone(), field: QuoteField::FirstName, form, theme }
                    TextInput { label: "Last name", value: current.last_name.clone(), field: QuoteField::LastName, form, theme }
                }
                TextInput { label: "Email", value: current.email.clone(), field: QuoteField::Email, form, theme, kind: "email" }
                TextInput { label: "Phone (optional)", value: current.phone.clone(), field: QuoteField::Phone, form, theme, kind: "tel" }
                label { class: "block",
                    span { class: "{theme::label_class(theme)}", "About your collection" }
                    textarea {
                        class: "mt-1 h-28 {theme::input_class(theme)}",
                        placeholder: "Sports, years, rough card count, notable graded cards...",
                        value: "{current.description}",
                        oninput: move |evt| form.with_mut(|f| f.description = evt.value()),
                    }
                }
                TextInput { label: "Link to photos or a spreadsheet (optional)", value: current.collection_link.clone(), field: QuoteField::CollectionLink, form, theme, kind: "url" }
                button {
                    class: "w-full {theme::btn_primary(theme)}",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Sending..." } else { "Request Quote" }
                }
                p { class: "text-xs {theme::text_muted(theme)}",
                    "We never share your details. Quotes are free and carry no obligation to sell."
                }
            }
        }
    }
}

#[component]
fn TextInput(
    label: &'static str,
    value: String,
    field: QuoteField,
    form: Signal<QuoteForm>,
    theme: ThemeMode,
    #[props(default = "text")] kind: &'static str,
) -> Element {
    rsx! {
        label { class: "block",
            span { class: "{theme::label_class(theme)}", "{label}" }
            input {
                class: "mt-1 {theme::input_class(theme)}",
                r#type: kind,
                value: "{value}",
                oninput: move |evt| form.with_mut(|f| *field.slot(f) = evt.value()),
            }
        }
    }
}
