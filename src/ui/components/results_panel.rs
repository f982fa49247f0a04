use dioxus::prelude::*;

use crate::domain::{GradingResult, ThemeMode};
use crate::ui::theme;
use crate::util::format_currency;

#[component]
pub fn ResultsPanel(result: GradingResult, theme: ThemeMode) -> Element {
    let rows = [
        ("PSA 10 EV", result.psa10_ev),
        ("PSA 9 EV", result.psa9_ev),
        ("PSA 8 EV", result.psa8_ev),
    ];
    let net_label = format!("Net Expected Value ({})", result.selected_method.display());

    rsx! {
        div { class: "space-y-4",
            div { class: "grid grid-cols-3 gap-3 text-sm {theme::text_muted(theme)}",
                for (label, value) in rows {
                    div { key: "{label}",
                        div { "{label}" }
                        div { class: "font-medium", "{format_currency(value)}" }
                    }
                }
            }
            ResultRow { label: "Expected Value (before fees)".to_string(), value: result.total_ev, theme }
            ResultRow { label: "Total Costs (Raw + Grading + Shipping)".to_string(), value: result.total_costs, theme }
            ResultRow { label: net_label, value: result.net_ev, theme, emphasize: true }
        }
    }
}

#[component]
fn ResultRow(label: String, value: f64, theme: ThemeMode, #[props(default)] emphasize: bool) -> Element {
    let value_class = if emphasize {
        format!("text-lg font-semibold {}", theme::value_text(theme, value))
    } else {
        "font-medium".to_string()
    };
    rsx! {
        div { class: "flex items-center justify-between",
            span { "{label}" }
            span { class: "{value_class}", "{format_currency(value)}" }
        }
    }
}
