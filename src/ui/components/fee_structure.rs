use dioxus::prelude::*;

use crate::domain::{GradingInputs, InputField, SellingMethod, ThemeMode};
use crate::ui::components::number_field::NumberField;
use crate::ui::theme;

/// Fee fields grouped under the channel they belong to.
pub fn channel_fields(method: SellingMethod) -> &'static [InputField] {
    match method {
        SellingMethod::Ebay => &[InputField::EbayFee, InputField::EbayShipping],
        SellingMethod::Reseller => &[InputField::ResellerPercent, InputField::ResellerShipping],
        SellingMethod::Consigner => &[
            InputField::ConsignerHighPercent,
            InputField::ConsignerLowExtra,
            InputField::ConsignerFlatFee,
        ],
    }
}

#[component]
pub fn FeeStructure(
    fees: GradingInputs,
    theme: ThemeMode,
    on_change: EventHandler<(InputField, f64)>,
) -> Element {
    rsx! {
        div {
            h3 { class: "mb-3 font-medium", "Fee Structure" }
            div { class: "grid gap-4 sm:grid-cols-3",
                for method in SellingMethod::ALL {
                    div { key: "{method.id()}", class: "space-y-2",
                        div { class: "font-medium {theme::accent_text(theme)}", "{method.display()}" }
                        for field in channel_fields(method).iter().copied() {
                            NumberField {
                                key: "{field.key()}",
                                label: field.label().to_string(),
                                value: fees.get(field),
                                theme,
                                on_change: move |value| on_change.call((field, value)),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fee_field_belongs_to_exactly_one_channel() {
        let mut grouped: Vec<InputField> = SellingMethod::ALL
            .into_iter()
            .flat_map(|method| channel_fields(method).iter().copied())
            .collect();
        assert_eq!(grouped.len(), InputField::FEES.len());
        grouped.retain(|field| InputField::FEES.contains(field));
        assert_eq!(grouped.len(), InputField::FEES.len());
    }
}
