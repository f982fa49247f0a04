use dioxus::prelude::*;

use crate::domain::{
    best_method::{ITEM_PRICE_SLIDER_MAX, ITEM_PRICE_SLIDER_MIN, LOW_VALUE_ITEM_PRICE, LOW_VALUE_SURCHARGE},
    parse_number_text, AppState, InputField,
};
use crate::ui::components::{
    fee_structure::FeeStructure, kpi_card::KpiCard, method_picker::MethodPicker,
    number_field::NumberField,
};
use crate::ui::theme;
use crate::util::format_currency;

#[component]
pub fn BestMethodPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (theme, calc) = state.with(|st| (st.theme, st.best_method.clone()));
    let result = calc.result();
    let best = result.best_channel();
    let low_value_note = format!(
        "Items under {} carry an extra {} consignment fee.",
        format_currency(LOW_VALUE_ITEM_PRICE),
        format_currency(LOW_VALUE_SURCHARGE)
    );
    // the slider cannot show prices outside its track
    let slider_value = calc
        .item_price
        .clamp(ITEM_PRICE_SLIDER_MIN, ITEM_PRICE_SLIDER_MAX);

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold", "Best Selling Method" }
                p { class: "text-sm {theme::text_muted(theme)}",
                    "Assumes the card is already graded and sells at the item price. Shows what each channel pays out."
                }
            }

            section { class: "{theme::panel(theme)} space-y-4",
                div { class: "grid items-end gap-4 sm:grid-cols-[3fr,1fr]",
                    label { class: "block",
                        span { class: "{theme::label_class(theme)}", "Item Price" }
                        input {
                            class: "mt-3 w-full",
                            r#type: "range",
                            min: "{ITEM_PRICE_SLIDER_MIN}",
                            max: "{ITEM_PRICE_SLIDER_MAX}",
                            step: "1",
                            value: "{slider_value}",
                            oninput: move |evt| {
                                let price = parse_number_text(&evt.value());
                                state.with_mut(|st| st.best_method.set_item_price(price));
                            },
                        }
                    }
                    NumberField {
                        label: "Price ($)".to_string(),
                        value: calc.item_price,
                        theme,
                        step: "0.01".to_string(),
                        on_change: move |price| state.with_mut(|st| st.best_method.set_item_price(price)),
                    }
                }
                if calc.shows_low_value_note() {
                    div { class: "{theme::alert_info(theme)}", "{low_value_note}" }
                }
            }

            section { class: "grid gap-6 lg:grid-cols-[2fr,1fr]",
                div { class: "{theme::panel(theme)}",
                    FeeStructure {
                        fees: calc.fees.clone(),
                        theme,
                        on_change: move |(field, value): (InputField, f64)| {
                            state.with_mut(|st| st.best_method.set_fee(field, value));
                        },
                    }
                }
                KpiCard {
                    title: "Best Method".to_string(),
                    value: best.display().to_string(),
                    description: Some(format!(
                        "You receive {} on a {} sale",
                        format_currency(result.selling_methods.get(best)),
                        format_currency(calc.item_price)
                    )),
                    theme,
                    highlight: true,
                }
            }

            section { class: "{theme::panel(theme)} space-y-4",
                h3 { class: "font-medium", "Payout by channel" }
                MethodPicker {
                    methods: result.selling_methods,
                    selected: calc.selected_method,
                    theme,
                    on_select: move |method| state.with_mut(|st| st.best_method.selected_method = method),
                }
            }
        }
    }
}
