//! Grading economics and lookup records live here.

pub mod app_state;
pub mod best_method;
pub mod cert_query;
pub mod contact;
pub mod entities;
pub mod inputs;
pub mod scenario;

#[allow(unused_imports)]
pub use app_state::{AppState, ThemeMode};
#[allow(unused_imports)]
pub use best_method::{low_value_surcharge, BestMethodState};
#[allow(unused_imports)]
pub use cert_query::{is_plausible_cert, CertQuery, CertQueryError, MAX_BATCH_CERTS};
#[allow(unused_imports)]
pub use contact::{looks_like_email, ContactError, QuoteForm, ReviewForm};
#[allow(unused_imports)]
pub use entities::{
    BatchError, BatchLookupResponse, BatchResult, CardData, CertRange, Listing, LookupResponse,
    SubmissionRequest, SubmissionResponse,
};
#[allow(unused_imports)]
pub use inputs::{coerce_number, parse_number_text, EditOutcome, GradingInputs, InputField};
#[allow(unused_imports)]
pub use scenario::{
    best_channel, compute_from_raw, compute_grading_scenario, GradingResult, SellingMethod,
    SellingMethods,
};
