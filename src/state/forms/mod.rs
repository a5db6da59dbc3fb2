//! Form domain layer
//!
//! Field model, cross-field dependencies, validation and the session
//! controller behind the loyalty form.

mod field;
mod form_state;
mod resolver;
mod validation;

pub use field::{Field, FormValues};
pub use form_state::{Form, FormSession, SelectOption, SubmitOutcome, FORM_BUTTONS};

#[cfg(test)]
pub use form_state::BUTTONS_ROW;
