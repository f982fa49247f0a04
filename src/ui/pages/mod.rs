pub mod batch_lookup;
pub mod best_method;
pub mod calculator;
pub mod home;
pub mod psa_lookup;
pub mod quote;

pub use batch_lookup::PsaBatchPage;
pub use best_method::BestMethodPage;
pub use calculator::CalculatorPage;
pub use home::HomePage;
pub use psa_lookup::PsaLookupPage;
pub use quote::QuotePage;
