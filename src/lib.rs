//! # rxform
//!
//! Schema-driven validation for the forms of a pharmaceutical marketplace.
//!
//! A form hands the engine what the user typed as a [`Payload`]. The engine answers with a
//! [`Validation`]: either the normalized payload, ready for the API client, or an
//! [`ErrorMap`] with one message per failing field, ready to render inline.
//!
//! ## Principles
//!
//! - **Pure**: validation reads an immutable [`Schema`] and its own payload, nothing else.
//!   The only ambient input is "now", and [`Schema::validate_at`] takes it explicitly.
//! - **Declarative**: a schema is an ordered list of fields, each an ordered list of
//!   tagged [`Rule`]s, plus cross-field [`Refinement`]s.
//! - **Failures are data**: user mistakes are an [`ErrorMap`]; only a malformed schema is
//!   a [`SchemaError`].
//!
//! ## Quick Example
//!
//! ```rust
//! use rxform::forms::auth::REGISTRATION;
//! use rxform::payload::Payload;
//!
//! let form = Payload::new()
//!     .with("email", "ops@northside-pharmacy.test")
//!     .with("password", "Abcdef12")
//!     .with("confirmPassword", "Abcdef99");
//!
//! // Whole-form validation: every failing field, one message each.
//! let errors = REGISTRATION.validate(&form).errors().cloned().unwrap();
//! assert_eq!(errors.get("company_name"), Some("Company name is required"));
//!
//! // Per-keystroke feedback for one field.
//! let zip = REGISTRATION.validate_field("zip_code", "1234", Some(&form)).unwrap();
//! assert_eq!(zip.as_deref(), Some("Invalid ZIP code"));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod field;
pub mod form;
pub mod forms;
pub mod limits;
pub mod payload;
pub mod predicate;
pub mod refinement;
pub mod rule;
pub mod schema;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use error::{ApiErrorBody, ErrorMap, SchemaError};
pub use field::Field;
pub use form::Form;
pub use limits::Limits;
pub use payload::Payload;
pub use refinement::Refinement;
pub use rule::Rule;
pub use schema::{validate, validate_field, Schema, SchemaBuilder};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ApiErrorBody, ErrorMap, SchemaError};
    pub use crate::field::Field;
    pub use crate::form::Form;
    pub use crate::limits::Limits;
    pub use crate::payload::Payload;
    pub use crate::refinement::Refinement;
    pub use crate::rule::{CharClass, Rule};
    pub use crate::schema::{Schema, SchemaBuilder};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
