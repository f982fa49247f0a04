use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upper bound for the combined PSA 10/9/8 hit rates, in percent.
pub const MAX_RATE_TOTAL: f64 = 100.0;

/// Raw numbers driving a grading scenario.
///
/// Rates and fee percentages are whole percentages (0-100), prices and
/// flat fees are dollars. `Default` is all zeros so a half-filled record
/// still evaluates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradingInputs {
    pub raw_price: f64,
    pub grading_fee: f64,
    pub psa10_price: f64,
    pub psa9_price: f64,
    pub psa8_price: f64,
    pub psa10_rate: f64,
    pub psa9_rate: f64,
    pub psa8_rate: f64,
    pub ebay_fee: f64,
    pub ebay_shipping: f64,
    pub reseller_percent: f64,
    pub reseller_shipping: f64,
    pub consigner_high_percent: f64,
    pub consigner_low_extra: f64,
    pub consigner_flat_fee: f64,
}

/// Every editable field of [`GradingInputs`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    RawPrice,
    GradingFee,
    Psa10Price,
    Psa9Price,
    Psa8Price,
    Psa10Rate,
    Psa9Rate,
    Psa8Rate,
    EbayFee,
    EbayShipping,
    ResellerPercent,
    ResellerShipping,
    ConsignerHighPercent,
    ConsignerLowExtra,
    ConsignerFlatFee,
}

impl InputField {
    pub const ALL: [InputField; 15] = [
        InputField::RawPrice,
        InputField::GradingFee,
        InputField::Psa10Price,
        InputField::Psa9Price,
        InputField::Psa8Price,
        InputField::Psa10Rate,
        InputField::Psa9Rate,
        InputField::Psa8Rate,
        InputField::EbayFee,
        InputField::EbayShipping,
        InputField::ResellerPercent,
        InputField::ResellerShipping,
        InputField::ConsignerHighPercent,
        InputField::ConsignerLowExtra,
        InputField::ConsignerFlatFee,
    ];

    /// Fields that only describe the selling channels.
    pub const FEES: [InputField; 7] = [
        InputField::EbayFee,
        InputField::EbayShipping,
        InputField::ResellerPercent,
        InputField::ResellerShipping,
        InputField::ConsignerHighPercent,
        InputField::ConsignerLowExtra,
        InputField::ConsignerFlatFee,
    ];

    /// camelCase key used by untyped records.
    pub fn key(&self) -> &'static str {
        match self {
            InputField::RawPrice => "rawPrice",
            InputField::GradingFee => "gradingFee",
            InputField::Psa10Price => "psa10Price",
            InputField::Psa9Price => "psa9Price",
            InputField::Psa8Price => "psa8Price",
            InputField::Psa10Rate => "psa10Rate",
            InputField::Psa9Rate => "psa9Rate",
            InputField::Psa8Rate => "psa8Rate",
            InputField::EbayFee => "ebayFee",
            InputField::EbayShipping => "ebayShipping",
            InputField::ResellerPercent => "resellerPercent",
            InputField::ResellerShipping => "resellerShipping",
            InputField::ConsignerHighPercent => "consignerHighPercent",
            InputField::ConsignerLowExtra => "consignerLowExtra",
            InputField::ConsignerFlatFee => "consignerFlatFee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::RawPrice => "Raw Price ($)",
            InputField::GradingFee => "Grading Fee ($)",
            InputField::Psa10Price => "PSA 10 Price ($)",
            InputField::Psa9Price => "PSA 9 Price ($)",
            InputField::Psa8Price => "PSA 8 Price ($)",
            InputField::Psa10Rate => "PSA 10 Rate (%)",
            InputField::Psa9Rate => "PSA 9 Rate (%)",
            InputField::Psa8Rate => "PSA 8 Rate (%)",
            InputField::EbayFee => "Fee (%)",
            InputField::EbayShipping => "Shipping ($)",
            InputField::ResellerPercent => "Payout (%)",
            InputField::ResellerShipping => "Shipping ($)",
            InputField::ConsignerHighPercent => "High % Rate",
            InputField::ConsignerLowExtra => "Low Extra ($)",
            InputField::ConsignerFlatFee => "Flat Fee ($)",
        }
    }

    pub fn is_rate(&self) -> bool {
        matches!(
            self,
            InputField::Psa10Rate | InputField::Psa9Rate | InputField::Psa8Rate
        )
    }
}

/// Result of a guarded edit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditOutcome {
    Applied,
    /// The edit would have pushed the grade rates past 100%; nothing changed.
    RejectedRateSum { attempted_total: f64 },
}

impl GradingInputs {
    /// Calculator preset: a mid-value card with typical marketplace fees.
    pub fn sample() -> Self {
        Self {
            raw_price: 64.42,
            grading_fee: 17.0,
            psa10_price: 175.0,
            psa9_price: 95.0,
            psa8_price: 64.0,
            psa10_rate: 48.0,
            psa9_rate: 27.0,
            psa8_rate: 0.0,
            ebay_fee: 13.25,
            ebay_shipping: 5.0,
            reseller_percent: 75.0,
            reseller_shipping: 0.5,
            consigner_high_percent: 88.0,
            consigner_low_extra: 5.0,
            consigner_flat_fee: 5.99,
        }
    }

    /// Builds inputs from an untyped record, reading each field by its
    /// camelCase key. Missing or non-numeric values become `0`.
    pub fn from_json(raw: &Value) -> Self {
        let mut inputs = Self::default();
        let Some(map) = raw.as_object() else {
            return inputs;
        };
        for field in InputField::ALL {
            let value = map.get(field.key()).map(coerce_number).unwrap_or(0.0);
            inputs.set(field, value);
        }
        inputs
    }

    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::RawPrice => self.raw_price,
            InputField::GradingFee => self.grading_fee,
            InputField::Psa10Price => self.psa10_price,
            InputField::Psa9Price => self.psa9_price,
            InputField::Psa8Price => self.psa8_price,
            InputField::Psa10Rate => self.psa10_rate,
            InputField::Psa9Rate => self.psa9_rate,
            InputField::Psa8Rate => self.psa8_rate,
            InputField::EbayFee => self.ebay_fee,
            InputField::EbayShipping => self.ebay_shipping,
            InputField::ResellerPercent => self.reseller_percent,
            InputField::ResellerShipping => self.reseller_shipping,
            InputField::ConsignerHighPercent => self.consigner_high_percent,
            InputField::ConsignerLowExtra => self.consigner_low_extra,
            InputField::ConsignerFlatFee => self.consigner_flat_fee,
        }
    }

    /// Unguarded write. UI edits go through [`GradingInputs::apply_edit`].
    pub fn set(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::RawPrice => &mut self.raw_price,
            InputField::GradingFee => &mut self.grading_fee,
            InputField::Psa10Price => &mut self.psa10_price,
            InputField::Psa9Price => &mut self.psa9_price,
            InputField::Psa8Price => &mut self.psa8_price,
            InputField::Psa10Rate => &mut self.psa10_rate,
            InputField::Psa9Rate => &mut self.psa9_rate,
            InputField::Psa8Rate => &mut self.psa8_rate,
            InputField::EbayFee => &mut self.ebay_fee,
            InputField::EbayShipping => &mut self.ebay_shipping,
            InputField::ResellerPercent => &mut self.reseller_percent,
            InputField::ResellerShipping => &mut self.reseller_shipping,
            InputField::ConsignerHighPercent => &mut self.consigner_high_percent,
            InputField::ConsignerLowExtra => &mut self.consigner_low_extra,
            InputField::ConsignerFlatFee => &mut self.consigner_flat_fee,
        };
        *slot = value;
    }

    pub fn rate_total(&self) -> f64 {
        self.psa10_rate + self.psa9_rate + self.psa8_rate
    }

    /// Applies an edit unless it would push the grade rates above 100%,
    /// in which case the previous state is kept untouched.
    pub fn apply_edit(&mut self, field: InputField, value: f64) -> EditOutcome {
        if field.is_rate() {
            let rate = |candidate: InputField| {
                if candidate == field {
                    value
                } else {
                    self.get(candidate)
                }
            };
            let attempted_total =
                rate(InputField::Psa10Rate) + rate(InputField::Psa9Rate) + rate(InputField::Psa8Rate);
            if attempted_total > MAX_RATE_TOTAL {
                return EditOutcome::RejectedRateSum { attempted_total };
            }
        }

        self.set(field, value);
        EditOutcome::Applied
    }
}

/// Lenient numeric coercion for untyped values. Anything that is not a
/// finite number after conversion becomes `0`.
pub fn coerce_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => parse_number_text(text),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// Same policy as [`coerce_number`] for text typed into a form field.
pub fn parse_number_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_zero() {
        let inputs = GradingInputs::from_json(&json!({ "rawPrice": 12.5 }));
        assert_eq!(inputs.raw_price, 12.5);
        assert_eq!(inputs.grading_fee, 0.0);
        assert_eq!(inputs.consigner_flat_fee, 0.0);
    }

    #[test]
    fn non_object_records_are_all_zero() {
        assert_eq!(GradingInputs::from_json(&json!(null)), GradingInputs::default());
        assert_eq!(GradingInputs::from_json(&json!([1, 2, 3])), GradingInputs::default());
        assert_eq!(GradingInputs::from_json(&json!("175")), GradingInputs::default());
    }

    #[test]
    fn coercion_accepts_numeric_strings_and_booleans() {
        assert_eq!(coerce_number(&json!("17")), 17.0);
        assert_eq!(coerce_number(&json!("  13.25 ")), 13.25);
        assert_eq!(coerce_number(&json!("")), 0.0);
        assert_eq!(coerce_number(&json!("abc")), 0.0);
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&json!(false)), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!({ "nested": 4 })), 0.0);
    }

    #[test]
    fn text_parsing_rejects_non_finite_values() {
        assert_eq!(parse_number_text("inf"), 0.0);
        assert_eq!(parse_number_text("NaN"), 0.0);
        assert_eq!(parse_number_text("-2.5"), -2.5);
    }

    #[test]
    fn from_json_reads_camel_case_keys() {
        let raw = json!({
            "psa10Price": "175",
            "psa10Rate": 48,
            "consignerLowExtra": "5",
            "ebay_fee": 99
        });
        let inputs = GradingInputs::from_json(&raw);
        assert_eq!(inputs.psa10_price, 175.0);
        assert_eq!(inputs.psa10_rate, 48.0);
        assert_eq!(inputs.consigner_low_extra, 5.0);
        // snake_case keys are not part of the record format
        assert_eq!(inputs.ebay_fee, 0.0);
    }

    #[test]
    fn rate_edit_past_hundred_is_dropped() {
        let mut inputs = GradingInputs::sample();
        let before = inputs.clone();

        let outcome = inputs.apply_edit(InputField::Psa9Rate, 60.0);

        assert_eq!(
            outcome,
            EditOutcome::RejectedRateSum {
                attempted_total: 108.0
            }
        );
        assert_eq!(inputs, before);
    }

    #[test]
    fn rate_edit_up_to_hundred_is_applied() {
        let mut inputs = GradingInputs::sample();
        assert_eq!(inputs.apply_edit(InputField::Psa8Rate, 25.0), EditOutcome::Applied);
        assert_eq!(inputs.rate_total(), 100.0);
        assert_eq!(inputs.psa8_rate, 25.0);
    }

    #[test]
    fn lowering_a_rate_is_always_allowed() {
        let mut inputs = GradingInputs::sample();
        assert_eq!(inputs.apply_edit(InputField::Psa10Rate, 10.0), EditOutcome::Applied);
        assert_eq!(inputs.rate_total(), 37.0);
    }

    #[test]
    fn price_edits_bypass_the_rate_guard() {
        let mut inputs = GradingInputs::sample();
        inputs.psa10_rate = 100.0;
        inputs.psa9_rate = 0.0;
        assert_eq!(inputs.apply_edit(InputField::Psa10Price, 500.0), EditOutcome::Applied);
        assert_eq!(inputs.psa10_price, 500.0);
    }

    #[test]
    fn get_and_set_cover_every_field() {
        let mut inputs = GradingInputs::default();
        for (index, field) in InputField::ALL.iter().enumerate() {
            inputs.set(*field, index as f64 + 1.0);
        }
        for (index, field) in InputField::ALL.iter().enumerate() {
            assert_eq!(inputs.get(*field), index as f64 + 1.0, "{}", field.key());
        }
    }
}
