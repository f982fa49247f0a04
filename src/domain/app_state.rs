use serde::{Deserialize, Serialize};

use super::best_method::BestMethodState;
use super::inputs::{EditOutcome, GradingInputs, InputField};
use super::scenario::{compute_grading_scenario, GradingResult, SellingMethod};

/// Colour scheme for the whole window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Calculator form.
    pub inputs: GradingInputs,
    pub selected_method: SellingMethod,
    pub best_method: BestMethodState,
    pub theme: ThemeMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            inputs: GradingInputs::sample(),
            selected_method: SellingMethod::default(),
            best_method: BestMethodState::default(),
            theme: ThemeMode::default(),
        }
    }
}

impl AppState {
    pub fn result(&self) -> GradingResult {
        compute_grading_scenario(&self.inputs, self.selected_method)
    }

    pub fn edit_input(&mut self, field: InputField, value: f64) -> EditOutcome {
        self.inputs.apply_edit(field, value)
    }

    pub fn reset_inputs(&mut self) {
        self.inputs = GradingInputs::sample();
    }
}
