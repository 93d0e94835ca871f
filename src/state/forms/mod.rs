//! Form domain layer
//!
//! Field definitions, validators and the per-screen `FormState` machine. Nothing
//! here knows about the terminal.

mod field;
mod form_state;
mod validation;

pub use field::FieldName;
pub use form_state::{Form, FormPhase, FormState, SubmitOutcome};
