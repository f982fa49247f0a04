use dioxus::prelude::*;
use tracing::debug;

use crate::domain::{inputs::MAX_RATE_TOTAL, AppState, EditOutcome, InputField};
use crate::ui::components::{
    fee_structure::FeeStructure,
    kpi_card::KpiCard,
    method_picker::MethodPicker,
    number_field::NumberField,
    results_panel::ResultsPanel,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;
use crate::util::format_currency;

const PRICE_FIELDS: [InputField; 5] = [
    InputField::RawPrice,
    InputField::GradingFee,
    InputField::Psa10Price,
    InputField::Psa9Price,
    InputField::Psa8Price,
];

const RATE_FIELDS: [InputField; 3] = [
    InputField::Psa10Rate,
    InputField::Psa9Rate,
    InputField::Psa8Rate,
];

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (theme, inputs, selected) = state.with(|st| (st.theme, st.inputs.clone(), st.selected_method));
    let result = state.with(|st| st.result());
    let best = result.best_channel();
    let rate_summary = format!(
        "Combined: {:.0}% of {MAX_RATE_TOTAL:.0}%",
        inputs.rate_total()
    );

    let price_fields = PRICE_FIELDS.iter().copied().map(|field| {
        rsx! {
            NumberField {
                key: "{field.key()}",
                label: field.label().to_string(),
                value: inputs.get(field),
                theme,
                step: "0.01".to_string(),
                on_change: move |value| apply_edit(state, toasts, field, value),
            }
        }
    });
    let rate_fields = RATE_FIELDS.iter().copied().map(|field| {
        rsx! {
            NumberField {
                key: "{field.key()}",
                label: field.label().to_string(),
                value: inputs.get(field),
                theme,
                step: "1".to_string(),
                on_change: move |value| apply_edit(state, toasts, field, value),
            }
        }
    });

    rsx! {
        div { class: "space-y-6",
            header { class: "flex flex-wrap items-start justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-semibold", "Grading Calculator" }
                    p { class: "text-sm {theme::text_muted(theme)}",
                        "Expected value of grading a raw card, net of each channel's fees."
                    }
                }
                button {
                    class: "{theme::btn_secondary(theme)}",
                    onclick: move |_| state.with_mut(|st| st.reset_inputs()),
                    "Reset to example"
                }
            }

            section { class: "grid gap-4 md:grid-cols-3",
                KpiCard {
                    title: "Expected Value".to_string(),
                    value: format_currency(result.total_ev),
                    description: Some("Before fees".to_string()),
                    theme,
                }
                KpiCard {
                    title: "Total Costs".to_string(),
                    value: format_currency(result.total_costs),
                    description: Some("Raw + grading + shipping".to_string()),
                    theme,
                }
                KpiCard {
                    title: "Best Channel".to_string(),
                    value: best.display().to_string(),
                    description: Some(format!("Nets {}", format_currency(result.selling_methods.get(best)))),
                    theme,
                    highlight: true,
                }
            }

            section { class: "grid gap-6 lg:grid-cols-2",
                div { class: "{theme::panel(theme)} space-y-6",
                    div {
                        h3 { class: "mb-3 font-medium", "Card Prices" }
                        div { class: "grid gap-4 sm:grid-cols-2", {price_fields} }
                    }
                    div {
                        h3 { class: "mb-3 font-medium", "Grade Probabilities" }
                        div { class: "grid gap-4 sm:grid-cols-3", {rate_fields} }
                        p { class: "mt-2 text-xs {theme::text_muted(theme)}",
                            "{rate_summary}"
                        }
                    }
                }
                div { class: "{theme::panel(theme)} space-y-6",
                    FeeStructure {
                        fees: inputs.clone(),
                        theme,
                        on_change: move |(field, value): (InputField, f64)| apply_edit(state, toasts, field, value),
                    }
                }
            }

            section { class: "{theme::panel(theme)} space-y-6",
                h3 { class: "font-medium", "Selling Method" }
                MethodPicker {
                    methods: result.selling_methods,
                    selected,
                    theme,
                    on_select: move |method| state.with_mut(|st| st.selected_method = method),
                }
                ResultsPanel { result, theme }
            }
        }
    }
}

fn apply_edit(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    field: InputField,
    value: f64,
) {
    let outcome = state.with_mut(|st| st.edit_input(field, value));
    if let EditOutcome::RejectedRateSum { attempted_total } = outcome {
        debug!(field = field.key(), attempted_total, "rate edit rejected");
        push_toast(toasts, ToastKind::Warning, rejected_rate_message(attempted_total));
    }
}

fn rejected_rate_message(attempted_total: f64) -> String {
    format!(
        "Grade probabilities can't exceed {MAX_RATE_TOTAL:.0}% combined (that edit makes {attempted_total:.1}%)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GradingInputs;

    #[test]
    fn rejected_rate_edit_keeps_state_and_explains() {
        let mut inputs = GradingInputs::sample();
        let before = inputs.clone();
        let EditOutcome::RejectedRateSum { attempted_total } =
            inputs.apply_edit(InputField::Psa8Rate, 60.0)
        else {
            panic!("edit should have been rejected");
        };

        assert_eq!(inputs, before);
        assert_eq!(
            rejected_rate_message(attempted_total),
            "Grade probabilities can't exceed 100% combined (that edit makes 135.0%)."
        );
    }
}
