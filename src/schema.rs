//! Schemas and the validation engine
//!
//! A [`Schema`] is an ordered list of [`Field`]s plus whole-object [`Refinement`]s. It is
//! built once through [`SchemaBuilder`], never mutated afterwards, and evaluated as a pure
//! function of the payload and the evaluation instant.
//!
//! # Evaluation order
//!
//! 1. Every field, in declaration order. Each field stops at its first failing rule;
//!    failures from all fields are accumulated.
//! 2. Only if no field failed: every refinement, in declaration order. The first failing
//!    refinement for a path wins.
//!
//! # Example
//!
//! ```rust
//! use rxform::{Field, Refinement, Schema};
//! use rxform::payload::Payload;
//!
//! let schema = Schema::builder("change_password")
//!     .field(Field::required("password", "Password is required").min_len(8, "Too short"))
//!     .field(Field::required("confirm", "Please confirm your password"))
//!     .refine(Refinement::fields_equal("confirm", "password", "Passwords don't match"))
//!     .build()
//!     .unwrap();
//!
//! let payload = Payload::new()
//!     .with("password", "Abcdef12")
//!     .with("confirm", "Abcdef99");
//!
//! let errors = schema.validate(&payload).errors().cloned().unwrap();
//! assert_eq!(errors.get("confirm"), Some("Passwords don't match"));
//! assert!(!errors.contains("password"));
//!
//! assert_eq!(
//!     schema.validate_field("password", "short", Some(&payload)).unwrap(),
//!     Some("Too short".to_string())
//! );
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{ErrorMap, SchemaError};
use crate::field::Field;
use crate::payload::Payload;
use crate::refinement::Refinement;
use crate::validation::Validation;

/// A validated, immutable set of field rules and refinements.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    fields: Vec<Field>,
    refinements: Vec<Refinement>,
}

impl Schema {
    /// Start building a schema called `name`.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// Schema name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in evaluation order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a declared field.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Declared field names in evaluation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::name)
    }

    /// Refinements in evaluation order.
    pub fn refinements(&self) -> &[Refinement] {
        &self.refinements
    }

    /// Validate `payload` against the current time.
    pub fn validate(&self, payload: &Payload) -> Validation<Payload, ErrorMap> {
        self.validate_at(payload, Utc::now())
    }

    /// Validate `payload` as of `now`.
    ///
    /// On success the payload holds only declared fields, in declaration order, with
    /// coercions applied. Skipped optional fields are left out.
    pub fn validate_at(&self, payload: &Payload, now: DateTime<Utc>) -> Validation<Payload, ErrorMap> {
        let outcome = Validation::all_iter(self.fields.iter().map(|f| f.evaluate(payload, now)))
            .map(|entries| entries.into_iter().flatten().collect::<Payload>())
            .and_then(|normalized| self.refine(normalized));

        #[cfg(feature = "tracing")]
        match &outcome {
            Validation::Success(_) => tracing::debug!(schema = %self.name, "payload accepted"),
            Validation::Failure(errors) => tracing::debug!(
                schema = %self.name,
                errors = errors.len(),
                "payload rejected"
            ),
        }

        outcome
    }

    fn refine(&self, normalized: Payload) -> Validation<Payload, ErrorMap> {
        let errors: ErrorMap = self
            .refinements
            .iter()
            .filter(|r| !r.holds(&normalized))
            .map(|r| (r.path(), r.message()))
            .collect();

        if errors.is_empty() {
            Validation::success(normalized)
        } else {
            Validation::failure(errors)
        }
    }

    /// Validate a single field in the context of the rest of the form.
    ///
    /// Merges `value` into a copy of `partial` at `field`, validates the result against
    /// the current time and returns only the message at `field`. Errors on other fields
    /// are ignored.
    pub fn validate_field(
        &self,
        field: &str,
        value: impl Into<Value>,
        partial: Option<&Payload>,
    ) -> Result<Option<String>, SchemaError> {
        self.validate_field_at(field, value, partial, Utc::now())
    }

    /// [`validate_field`](Self::validate_field) as of `now`.
    pub fn validate_field_at(
        &self,
        field: &str,
        value: impl Into<Value>,
        partial: Option<&Payload>,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, SchemaError> {
        if self.field(field).is_none() {
            return Err(SchemaError::UnknownField {
                schema: self.name.clone(),
                field: field.to_string(),
            });
        }

        let mut merged = partial.cloned().unwrap_or_default();
        merged.insert(field, value);

        Ok(match self.validate_at(&merged, now) {
            Validation::Success(_) => None,
            Validation::Failure(mut errors) => errors.take(field),
        })
    }
}

/// Builder for [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<Field>,
    refinements: Vec<Refinement>,
}

impl SchemaBuilder {
    /// Declare the next field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare the next refinement.
    pub fn refine(mut self, refinement: Refinement) -> Self {
        self.refinements.push(refinement);
        self
    }

    /// Finish the schema.
    ///
    /// Fails on a pattern that does not compile, a repeated field name, or a refinement
    /// that names an undeclared field.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let result = self.check();

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::warn!(schema = %self.name, error = %err, "rejected schema definition");
        }

        result.map(|()| Schema {
            name: self.name,
            fields: self.fields,
            refinements: self.refinements,
        })
    }

    fn check(&self) -> Result<(), SchemaError> {
        let mut declared = HashSet::new();
        for field in &self.fields {
            if let Some(reason) = field.bad_pattern() {
                return Err(SchemaError::InvalidPattern {
                    schema: self.name.clone(),
                    field: field.name().to_string(),
                    reason: reason.to_string(),
                });
            }
            if !declared.insert(field.name()) {
                return Err(SchemaError::DuplicateField {
                    schema: self.name.clone(),
                    field: field.name().to_string(),
                });
            }
        }

        for refinement in &self.refinements {
            if let Some(missing) = refinement
                .referenced_fields()
                .into_iter()
                .find(|name| !declared.contains(name))
            {
                return Err(SchemaError::UndeclaredField {
                    schema: self.name.clone(),
                    field: missing.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Validate `payload` against `schema`.
///
/// Free-function form of [`Schema::validate`].
pub fn validate(schema: &Schema, payload: &Payload) -> Validation<Payload, ErrorMap> {
    schema.validate(payload)
}

/// Validate one field of `schema`.
///
/// Free-function form of [`Schema::validate_field`].
pub fn validate_field(
    schema: &Schema,
    field: &str,
    value: impl Into<Value>,
    partial: Option<&Payload>,
) -> Result<Option<String>, SchemaError> {
    schema.validate_field(field, value, partial)
}
