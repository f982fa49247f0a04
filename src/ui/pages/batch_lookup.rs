use std::path::PathBuf;

use dioxus::prelude::*;

use crate::app::{require_client, SharedLookupClient};
use crate::domain::{
    AppState, BatchLookupResponse, CertQuery, ReviewForm, ThemeMode, MAX_BATCH_CERTS,
};
use crate::infra::{export, lookup::LookupError};
use crate::ui::components::{
    copy_button::CopyButton,
    kpi_card::KpiCard,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::pages::psa_lookup::{CardDetails, ListingPanel};
use crate::ui::theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BatchMode {
    Numbers,
    Image,
}

/// One-line preview of what the typed input would send.
fn query_preview(input: &str) -> Option<Result<String, String>> {
    if input.trim().is_empty() {
        return None;
    }
    Some(match CertQuery::parse(input) {
        Ok(query) if query.len() == 1 => Ok("1 certificate".to_string()),
        Ok(query) => Ok(format!("{} certificates", query.len())),
        Err(err) => Err(LookupError::from(err).user_message()),
    })
}

#[component]
pub fn PsaBatchPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<SharedLookupClient>();
    let theme = state.with(|st| st.theme);

    let mut mode = use_signal(|| BatchMode::Numbers);
    let mut cert_input = use_signal(String::new);
    let mut image_path = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut results = use_signal(|| None::<BatchLookupResponse>);
    let mut error = use_signal(|| None::<String>);
    let mut show_review = use_signal(|| false);

    let finish = move |outcome: Result<BatchLookupResponse, LookupError>| {
        let (mut results, mut error, mut loading) = (results, error, loading);
        match outcome {
            Ok(batch) => {
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!(
                        "Looked up {} certificates: {} found, {} failed.",
                        batch.total_processed, batch.successful, batch.failed
                    ),
                );
                results.set(Some(batch));
            }
            Err(err) => error.set(Some(err.user_message())),
        }
        loading.set(false);
    };

    let start = move || -> bool {
        if loading() {
            return false;
        }
        loading.set(true);
        error.set(None);
        results.set(None);
        show_review.set(false);
        true
    };

    let on_lookup_numbers = {
        let client = client.clone();
        let mut start = start;
        move |evt: FormEvent| {
            evt.prevent_default();
            let query = match CertQuery::parse(&cert_input()) {
                Ok(query) => query,
                Err(err) => {
                    error.set(Some(LookupError::from(err).user_message()));
                    return;
                }
            };
            let Some(client) = require_client(&client, toasts) else {
                return;
            };
            if !start() {
                return;
            }
            spawn(async move {
                finish(client.lookup_batch(&query).await);
            });
        }
    };

    let on_lookup_image = {
        let client = client.clone();
        let mut start = start;
        move |evt: FormEvent| {
            evt.prevent_default();
            let path = image_path().trim().to_string();
            if path.is_empty() {
                error.set(Some("Enter the path of an image file.".to_string()));
                return;
            }
            let Some(client) = require_client(&client, toasts) else {
                return;
            };
            if !start() {
                return;
            }
            let path = PathBuf::from(path);
            spawn(async move {
                finish(client.lookup_image(&path).await);
            });
        }
    };

    let preview = query_preview(&cert_input());
    let placeholder = format!("12345678, 87654321 or 12345678-12345690 (max {MAX_BATCH_CERTS})");

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold", "Batch PSA Lookup" }
                p { class: "text-sm {theme::text_muted(theme)}",
                    "Look up to {MAX_BATCH_CERTS} certificates at once from a list, a range or a photo of your slabs."
                }
            }

            section { class: "{theme::panel(theme)} space-y-4",
                div { class: "flex gap-2 border-b border-slate-500/20",
                    button {
                        class: "{theme::btn_tab(theme, mode() == BatchMode::Numbers)}",
                        onclick: move |_| mode.set(BatchMode::Numbers),
                        "Cert Numbers"
                    }
                    button {
                        class: "{theme::btn_tab(theme, mode() == BatchMode::Image)}",
                        onclick: move |_| mode.set(BatchMode::Image),
                        "From Image"
                    }
                }

                match mode() {
                    BatchMode::Numbers => rsx! {
                        form { class: "space-y-3", onsubmit: on_lookup_numbers,
                            label { class: "block",
                                span { class: "{theme::label_class(theme)}", "Certificate numbers or ranges" }
                                textarea {
                                    class: "mt-1 h-24 {theme::input_class(theme)}",
                                    placeholder: "{placeholder}",
                                    value: "{cert_input}",
                                    oninput: move |evt| cert_input.set(evt.value()),
                                }
                            }
                            match preview {
                                Some(Ok(summary)) => rsx! { p { class: "text-xs {theme::text_muted(theme)}", "{summary}" } },
                                Some(Err(problem)) => rsx! { p { class: "text-xs text-red-500", "{problem}" } },
                                None => rsx! {},
                            }
                            button {
                                class: "{theme::btn_primary(theme)}",
                                r#type: "submit",
                                disabled: loading(),
                                if loading() { "Looking up..." } else { "Look Up All" }
                            }
                        }
                    },
                    BatchMode::Image => rsx! {
                        form { class: "space-y-3", onsubmit: on_lookup_image,
                            label { class: "block",
                                span { class: "{theme::label_class(theme)}", "Image file" }
                                input {
                                    class: "mt-1 {theme::input_class(theme)}",
                                    placeholder: "/home/me/Pictures/slabs.jpg",
                                    value: "{image_path}",
                                    oninput: move |evt| image_path.set(evt.value()),
                                }
                            }
                            p { class: "text-xs {theme::text_muted(theme)}",
                                "Certificate numbers are read from the photo, then looked up like a batch. Larger batches take a while because lookups are paced."
                            }
                            button {
                                class: "{theme::btn_primary(theme)}",
                                r#type: "submit",
                                disabled: loading(),
                                if loading() { "Processing image..." } else { "Detect & Look Up" }
                            }
                        }
                    },
                }
            }

            if let Some(message) = error() {
                div { class: "{theme::alert_error(theme)}", role: "alert", "{message}" }
            }

            if let Some(batch) = results() {
                BatchResults { batch: batch.clone(), theme }
                div { class: "flex flex-wrap gap-3",
                    CopyButton { text: batch.summary_text(), label: "Copy summary".to_string(), theme }
                    SaveReportButton { batch: batch.clone(), theme }
                    button {
                        class: "{theme::btn_primary(theme)}",
                        onclick: move |_| show_review.set(!show_review()),
                        "Submit for Review"
                    }
                }
                if show_review() {
                    ReviewDialog {
                        batch: batch.clone(),
                        theme,
                        on_close: move |_| show_review.set(false),
                    }
                }
            }
        }
    }
}

#[component]
fn BatchResults(batch: BatchLookupResponse, theme: ThemeMode) -> Element {
    rsx! {
        section { class: "grid gap-4 sm:grid-cols-3",
            KpiCard { title: "Processed".to_string(), value: batch.total_processed.to_string(), description: None, theme }
            KpiCard { title: "Successful".to_string(), value: batch.successful.to_string(), description: None, theme, highlight: batch.successful > 0 }
            KpiCard { title: "Failed".to_string(), value: batch.failed.to_string(), description: None, theme }
        }
        for result in batch.results.iter().cloned() {
            div { key: "{result.cert_number}", class: "space-y-3",
                h2 { class: "text-sm font-semibold uppercase {theme::accent_text(theme)}", "Certificate #{result.cert_number}" }
                if let Some(card) = result.card_data.clone() {
                    CardDetails { card, theme }
                }
                if let Some(listing) = result.listing.clone() {
                    ListingPanel { listing, theme }
                }
            }
        }
        if !batch.errors.is_empty() {
            section { class: "{theme::alert_error(theme)} space-y-1",
                h2 { class: "font-semibold", "Failed lookups" }
                ul {
                    for failure in batch.errors.iter().cloned() {
                        li { key: "{failure.cert_number}", "#{failure.cert_number}: {failure.error}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SaveReportButton(batch: BatchLookupResponse, theme: ThemeMode) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut saving = use_signal(|| false);

    let on_save = move |_| {
        if saving() {
            return;
        }
        saving.set(true);
        let batch = batch.clone();
        spawn(async move {
            match export::save_report(&export::default_export_dir(), &batch).await {
                Ok(path) => push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Saved report to {}", path.display()),
                ),
                Err(err) => {
                    tracing::warn!(%err, "failed to save batch report");
                    push_toast(toasts, ToastKind::Error, format!("Could not save report: {err}"));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        button {
            class: "{theme::btn_secondary(theme)}",
            disabled: saving(),
            onclick: on_save,
            "Save report"
        }
    }
}

#[component]
fn ReviewDialog(
    batch: BatchLookupResponse,
    theme: ThemeMode,
    on_close: EventHandler<()>,
) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<SharedLookupClient>();
    let mut form = use_signal(ReviewForm::default);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let request = match form.with(|f| f.to_submission(&batch)) {
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
                            "Submission successful! Your tracking number is: {}",
                            response.tracking_number
                        ),
                    );
                    on_close.call(());
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
        form { class: "{theme::panel(theme)} space-y-4", onsubmit: on_submit,
            h2 { class: "text-lg font-semibold", "Submit for Review" }
            p { class: "text-sm {theme::text_muted(theme)}",
                "Send these results to our team. You'll get a tracking number back."
            }
            label { class: "block",
                span { class: "{theme::label_class(theme)}", "Name" }
                input {
                    class: "mt-1 {theme::input_class(theme)}",
                    value: "{current.name}",
                    oninput: move |evt| form.with_mut(|f| f.name = evt.value()),
                }
            }
            label { class: "block",
                span { class: "{theme::label_class(theme)}", "Email" }
                input {
                    class: "mt-1 {theme::input_class(theme)}",
                    r#type: "email",
                    value: "{current.email}",
                    oninput: move |evt| form.with_mut(|f| f.email = evt.value()),
                }
            }
            label { class: "block",
                span { class: "{theme::label_class(theme)}", "Notes" }
                textarea {
                    class: "mt-1 h-20 {theme::input_class(theme)}",
                    value: "{current.notes}",
                    oninput: move |evt| form.with_mut(|f| f.notes = evt.value()),
                }
            }
            div { class: "flex gap-3",
                button {
                    class: "{theme::btn_secondary(theme)}",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "{theme::btn_primary(theme)}",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_counts_certificates() {
        assert_eq!(query_preview("   "), None);
        assert_eq!(query_preview("12345678"), Some(Ok("1 certificate".to_string())));
        assert_eq!(
            query_preview("12345678-12345680, 99999999"),
            Some(Ok("4 certificates".to_string()))
        );
    }

    #[test]
    fn preview_reports_problems() {
        assert_eq!(
            query_preview("20-10"),
            Some(Err("End number must be greater than start number (20-10)".to_string()))
        );
    }
}
