pub mod copy_button;
pub mod fee_structure;
pub mod kpi_card;
pub mod method_picker;
pub mod number_field;
pub mod results_panel;
pub mod toast;
