//! Schema-driven form model: field schema types, local form state, and
//! the pre-submit validation protocol.

pub mod schema;
pub mod state;
pub mod validation;

pub use schema::{FieldDef, FieldOption, FieldSchema};
pub use state::{FieldError, FormState};
pub use validation::{resolve_validation, ValidationDecision, ValidationRequest, ValidationResponse};
