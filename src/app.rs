use dioxus::prelude::*;
use tracing::error;

use crate::{
    config::AppConfig,
    domain::AppState,
    infra::lookup::LookupClient,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{
            BestMethodPage, CalculatorPage, HomePage, PsaBatchPage, PsaLookupPage, QuotePage,
        },
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/calculator")]
    Calculator {},
    #[route("/best-method")]
    BestMethod {},
    #[route("/psa-lookup")]
    PsaLookup {},
    #[route("/psa-batch")]
    PsaBatch {},
    #[route("/quote")]
    Quote {},
}

/// Shared lookup client; `None` when it could not be built at startup.
pub type SharedLookupClient = Option<LookupClient>;

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let config = use_context::<AppConfig>();
    let client: SharedLookupClient = use_hook(|| match LookupClient::new(&config) {
        Ok(client) => Some(client),
        Err(err) => {
            error!(%err, api_url = %config.api_url, "failed to build lookup client");
            push_toast(
                toasts,
                ToastKind::Error,
                "Certificate lookups are unavailable: the lookup client could not start.",
            );
            None
        }
    });
    use_context_provider(|| client.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Client from context, or a toast explaining why lookups are off.
pub fn require_client(
    client: &SharedLookupClient,
    toasts: Signal<Vec<ToastMessage>>,
) -> Option<LookupClient> {
    if client.is_none() {
        push_toast(
            toasts,
            ToastKind::Error,
            "The lookup service is not configured. Check SLAB_SCOUT_API_URL and restart.",
        );
    }
    client.clone()
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn BestMethod() -> Element {
    rsx! { Shell { BestMethodPage {} } }
}

#[component]
pub fn PsaLookup() -> Element {
    rsx! { Shell { PsaLookupPage {} } }
}

#[component]
pub fn PsaBatch() -> Element {
    rsx! { Shell { PsaBatchPage {} } }
}

#[component]
pub fn Quote() -> Element {
    rsx! { Shell { QuotePage {} } }
}
