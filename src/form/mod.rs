//! Benefits form state.
//!
//! This module models the input form without any UI: a fixed-capacity list of
//! dependent name fields and an application state that turns input events
//! into an updated pay-after-benefits total.

mod dependents;
mod state;

pub use dependents::{DEPENDENT_FIELD_LIMIT, DependentFields};
pub use state::{FormEvent, FormState};
