//! Grading economics: expected value across grade tiers and net proceeds
//! per selling channel.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::inputs::GradingInputs;

/// Consignment items at or above this expected value skip the low-value surcharge.
pub const CONSIGNER_HIGH_TIER_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellingMethod {
    #[default]
    Ebay,
    Reseller,
    Consigner,
}

impl SellingMethod {
    /// Fixed enumeration order; also the tie-break order for [`best_channel`].
    pub const ALL: [SellingMethod; 3] = [
        SellingMethod::Ebay,
        SellingMethod::Reseller,
        SellingMethod::Consigner,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SellingMethod::Ebay => "ebay",
            SellingMethod::Reseller => "reseller",
            SellingMethod::Consigner => "consigner",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            SellingMethod::Ebay => "eBay",
            SellingMethod::Reseller => "Reseller",
            SellingMethod::Consigner => "Consigner",
        }
    }

    /// Resolves an optional channel id. Absent or unrecognised ids fall back
    /// to [`SellingMethod::Ebay`].
    pub fn from_id_or_default(id: Option<&str>) -> Self {
        id.and_then(|raw| raw.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for SellingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown selling method: {0}")]
pub struct UnknownSellingMethod(pub String);

impl FromStr for SellingMethod {
    type Err = UnknownSellingMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SellingMethod::ALL
            .into_iter()
            .find(|method| method.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSellingMethod(s.to_string()))
    }
}

/// Net expected value of the card under each selling channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SellingMethods {
    pub ebay: f64,
    pub reseller: f64,
    pub consigner: f64,
}

impl SellingMethods {
    pub fn get(&self, method: SellingMethod) -> f64 {
        match method {
            SellingMethod::Ebay => self.ebay,
            SellingMethod::Reseller => self.reseller,
            SellingMethod::Consigner => self.consigner,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SellingMethod, f64)> + '_ {
        SellingMethod::ALL
            .into_iter()
            .map(move |method| (method, self.get(method)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub psa10_ev: f64,
    pub psa9_ev: f64,
    pub psa8_ev: f64,
    pub total_ev: f64,
    /// Raw price + grading fee + eBay shipping, whichever channel is selected.
    pub total_costs: f64,
    pub selling_methods: SellingMethods,
    pub selected_method: SellingMethod,
    pub net_ev: f64,
}

impl GradingResult {
    pub fn best_channel(&self) -> SellingMethod {
        best_channel(&self.selling_methods)
    }
}

pub fn compute_grading_scenario(inputs: &GradingInputs, selected: SellingMethod) -> GradingResult {
    let psa10_ev = inputs.psa10_price * inputs.psa10_rate / 100.0;
    let psa9_ev = inputs.psa9_price * inputs.psa9_rate / 100.0;
    let psa8_ev = inputs.psa8_price * inputs.psa8_rate / 100.0;

    let total_ev = psa10_ev + psa9_ev + psa8_ev;
    let total_costs = inputs.raw_price + inputs.grading_fee + inputs.ebay_shipping;

    let selling_methods = SellingMethods {
        ebay: total_ev - total_ev * inputs.ebay_fee / 100.0 - inputs.ebay_shipping,
        reseller: total_ev * inputs.reseller_percent / 100.0 - inputs.reseller_shipping,
        consigner: consigner_net(total_ev, inputs),
    };

    GradingResult {
        psa10_ev,
        psa9_ev,
        psa8_ev,
        total_ev,
        total_costs,
        selling_methods,
        selected_method: selected,
        net_ev: selling_methods.get(selected),
    }
}

/// Tier is chosen by expected value; low-value items pay the extra surcharge.
fn consigner_net(total_ev: f64, inputs: &GradingInputs) -> f64 {
    let payout = total_ev * inputs.consigner_high_percent / 100.0;
    if total_ev >= CONSIGNER_HIGH_TIER_THRESHOLD {
        payout - inputs.consigner_flat_fee
    } else {
        payout - inputs.consigner_low_extra - inputs.consigner_flat_fee
    }
}

/// Entry point for untyped records: every field is coerced, never rejected.
pub fn compute_from_raw(raw: &Value, selected: Option<&str>) -> GradingResult {
    let inputs = GradingInputs::from_json(raw);
    compute_grading_scenario(&inputs, SellingMethod::from_id_or_default(selected))
}

/// Channel with the strictly greatest net value; ties keep the earlier
/// channel in [`SellingMethod::ALL`].
pub fn best_channel(methods: &SellingMethods) -> SellingMethod {
    let mut best = SellingMethod::ALL[0];
    let mut best_value = methods.get(best);
    for (method, value) in methods.iter().skip(1) {
        if value > best_value || (best_value.is_nan() && !value.is_nan()) {
            best = method;
            best_value = value;
        }
    }
    best
}
