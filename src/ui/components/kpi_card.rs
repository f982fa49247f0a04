use dioxus::prelude::*;

use crate::domain::ThemeMode;
use crate::ui::theme;

/// Headline figure with an optional caption underneath.
#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    theme: ThemeMode,
    #[props(default)] highlight: bool,
) -> Element {
    let container = if highlight {
        theme::panel_highlight(theme)
    } else {
        theme::panel(theme)
    };
    rsx! {
        div {
            class: "{container}",
            h3 { class: "{theme::label_class(theme)}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted(theme)}", "{desc}" }
            }
        }
    }
}
