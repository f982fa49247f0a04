//! Channel comparison for a single sale price.
//!
//! Every grade tier is priced at the item price with a guaranteed top grade
//! and no grading fee, so the scenario reduces to "what does each channel
//! net me for an item worth X".

use super::inputs::{GradingInputs, InputField};
use super::scenario::{compute_grading_scenario, GradingResult, SellingMethod};

pub const DEFAULT_ITEM_PRICE: f64 = 100.0;
pub const ITEM_PRICE_SLIDER_MIN: f64 = 1.0;
pub const ITEM_PRICE_SLIDER_MAX: f64 = 1000.0;

/// Items priced below this pay the consigner's low-value surcharge.
pub const LOW_VALUE_ITEM_PRICE: f64 = 100.0;
pub const LOW_VALUE_SURCHARGE: f64 = 5.0;

/// Surcharge implied by the item price. This looks at the sticker price,
/// not at the expected value the engine tiers on.
pub fn low_value_surcharge(item_price: f64) -> f64 {
    if item_price < LOW_VALUE_ITEM_PRICE {
        LOW_VALUE_SURCHARGE
    } else {
        0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BestMethodState {
    pub item_price: f64,
    /// Only the channel fee fields are read.
    pub fees: GradingInputs,
    pub selected_method: SellingMethod,
}

impl Default for BestMethodState {
    fn default() -> Self {
        let sample = GradingInputs::sample();
        let mut fees = GradingInputs::default();
        for field in InputField::FEES {
            fees.set(field, sample.get(field));
        }
        fees.consigner_low_extra = low_value_surcharge(DEFAULT_ITEM_PRICE);

        Self {
            item_price: DEFAULT_ITEM_PRICE,
            fees,
            selected_method: SellingMethod::default(),
        }
    }
}

impl BestMethodState {
    /// Updates the price and re-derives the consigner surcharge from it.
    pub fn set_item_price(&mut self, price: f64) {
        self.item_price = price;
        self.fees.consigner_low_extra = low_value_surcharge(price);
    }

    /// Free edit of a channel fee. Non-fee fields are ignored.
    pub fn set_fee(&mut self, field: InputField, value: f64) {
        if InputField::FEES.contains(&field) {
            self.fees.set(field, value);
        }
    }

    pub fn scenario_inputs(&self) -> GradingInputs {
        GradingInputs {
            raw_price: self.item_price,
            grading_fee: 0.0,
            psa10_price: self.item_price,
            psa9_price: self.item_price,
            psa8_price: self.item_price,
            psa10_rate: 100.0,
            psa9_rate: 0.0,
            psa8_rate: 0.0,
            ..self.fees.clone()
        }
    }

    pub fn result(&self) -> GradingResult {
        compute_grading_scenario(&self.scenario_inputs(), self.selected_method)
    }

    pub fn best(&self) -> SellingMethod {
        self.result().best_channel()
    }

    pub fn shows_low_value_note(&self) -> bool {
        self.item_price < LOW_VALUE_ITEM_PRICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn defaults_use_sample_fees_without_surcharge() {
        let state = BestMethodState::default();
        assert_eq!(state.item_price, 100.0);
        assert_eq!(state.fees.ebay_fee, 13.25);
        assert_eq!(state.fees.consigner_flat_fee, 5.99);
        assert_eq!(state.fees.consigner_low_extra, 0.0);
        assert_eq!(state.fees.raw_price, 0.0);
        assert!(!state.shows_low_value_note());
    }

    #[test]
    fn cheap_items_pick_up_the_surcharge() {
        let mut state = BestMethodState::default();
        state.set_item_price(50.0);

        assert_eq!(state.fees.consigner_low_extra, 5.0);
        assert!(state.shows_low_value_note());

        let result = state.result();
        assert_close(result.total_ev, 50.0);
        assert_close(result.total_costs, 55.0);
        assert_close(result.selling_methods.consigner, 50.0 * 0.88 - 5.0 - 5.99);
        assert_close(result.selling_methods.ebay, 50.0 - 50.0 * 0.1325 - 5.0);
        assert_close(result.selling_methods.reseller, 37.5 - 0.5);
        assert_eq!(state.best(), SellingMethod::Ebay);
    }

    #[test]
    fn expensive_items_favour_consignment() {
        let mut state = BestMethodState::default();
        state.set_item_price(150.0);

        assert_eq!(state.fees.consigner_low_extra, 0.0);
        let result = state.result();
        assert_close(result.selling_methods.consigner, 150.0 * 0.88 - 5.99);
        assert_eq!(state.best(), SellingMethod::Consigner);
    }

    #[test]
    fn manual_surcharge_survives_until_price_changes() {
        let mut state = BestMethodState::default();
        state.set_fee(InputField::ConsignerLowExtra, 12.0);
        assert_eq!(state.fees.consigner_low_extra, 12.0);

        state.set_item_price(250.0);
        assert_eq!(state.fees.consigner_low_extra, 0.0);
    }

    #[test]
    fn non_fee_fields_are_not_editable_here() {
        let mut state = BestMethodState::default();
        state.set_fee(InputField::Psa10Rate, 5.0);
        assert_eq!(state.scenario_inputs().psa10_rate, 100.0);
    }

    #[test]
    fn scenario_overrides_grade_fields() {
        let mut state = BestMethodState::default();
        state.set_item_price(80.0);
        let inputs = state.scenario_inputs();
        assert_eq!(inputs.raw_price, 80.0);
        assert_eq!(inputs.psa8_price, 80.0);
        assert_eq!(inputs.psa10_rate, 100.0);
        assert_eq!(inputs.grading_fee, 0.0);
        assert_eq!(inputs.reseller_percent, 75.0);
    }
}
