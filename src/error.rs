//! Error types
//!
//! Two classes of error exist and they never mix:
//!
//! - [`ErrorMap`]: expected, user-facing validation failures, returned as data inside
//!   [`Validation::Failure`](crate::Validation::Failure).
//! - [`SchemaError`]: a malformed schema or a record that disagrees with its schema.
//!   These are programming errors, not outcomes of user input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Semigroup;

/// Field-path keyed collection of violation messages.
///
/// Holds at most one message per path. Inserting a second message for a path that
/// already has one is a no-op, so the first violated rule always wins.
///
/// Serializes as a flat JSON object, the same shape the remote API uses for its
/// field-level `details`.
///
/// # Example
///
/// ```rust
/// use rxform::ErrorMap;
///
/// let mut errors = ErrorMap::new();
/// errors.insert("zip_code", "Invalid ZIP code");
/// errors.insert("zip_code", "ZIP code is required");
///
/// assert_eq!(errors.get("zip_code"), Some("Invalid ZIP code"));
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single message.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(path, message);
        map
    }

    /// Record `message` at `path` unless the path already has a message.
    ///
    /// Returns `true` when the message was recorded.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) -> bool {
        let path = path.into();
        if self.0.contains_key(&path) {
            return false;
        }
        self.0.insert(path, message.into());
        true
    }

    /// Message recorded for `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Whether `path` has a message.
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Remove and return the message for `path`.
    pub fn take(&mut self, path: &str) -> Option<String> {
        self.0.remove(path)
    }

    /// Number of failing paths.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no path has a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(path, message)` pairs ordered by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Failing paths ordered by path.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Left-biased merge: a path keeps the message from `self` when both sides have one.
impl Semigroup for ErrorMap {
    fn combine(mut self, other: Self) -> Self {
        for (path, message) in other.0 {
            self.0.entry(path).or_insert(message);
        }
        self
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{path}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl<P: Into<String>, M: Into<String>> FromIterator<(P, M)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (P, M)>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for (path, message) in iter {
            map.insert(path, message);
        }
        map
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Error body returned by the remote API.
///
/// `details` shares the [`ErrorMap`] shape, so server-side field errors render through
/// the same path as client-side ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable summary.
    pub message: String,
    /// Optional field-level errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorMap>,
}

impl ApiErrorBody {
    /// Wrap client-side validation errors in the API error shape.
    pub fn from_errors(message: impl Into<String>, errors: ErrorMap) -> Self {
        Self {
            message: message.into(),
            details: Some(errors),
        }
    }

    /// Field errors for inline rendering, with client-side errors taking precedence.
    pub fn field_errors(&self, client: ErrorMap) -> ErrorMap {
        client.combine(self.details.clone().unwrap_or_default())
    }
}

/// Engine-internal failure: a schema or record definition is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields in one schema share a name.
    DuplicateField {
        /// Schema being built.
        schema: String,
        /// Repeated field name.
        field: String,
    },
    /// A field's pattern rule does not compile.
    InvalidPattern {
        /// Schema being built.
        schema: String,
        /// Field carrying the pattern.
        field: String,
        /// Regex compiler message.
        reason: String,
    },
    /// A refinement names a field the schema does not declare.
    UndeclaredField {
        /// Schema being built.
        schema: String,
        /// Missing field name.
        field: String,
    },
    /// `validate_field` was asked about a field the schema does not declare.
    UnknownField {
        /// Schema queried.
        schema: String,
        /// Requested field name.
        field: String,
    },
    /// A normalized payload could not be read into the schema's typed record.
    RecordMismatch {
        /// Schema whose record failed.
        schema: String,
        /// Deserializer message.
        reason: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateField { schema, field } => {
                write!(f, "schema `{schema}` declares field `{field}` twice")
            }
            SchemaError::InvalidPattern {
                schema,
                field,
                reason,
            } => {
                write!(f, "schema `{schema}` field `{field}` has a bad pattern: {reason}")
            }
            SchemaError::UndeclaredField { schema, field } => {
                write!(f, "schema `{schema}` refines undeclared field `{field}`")
            }
            SchemaError::UnknownField { schema, field } => {
                write!(f, "schema `{schema}` has no field `{field}`")
            }
            SchemaError::RecordMismatch { schema, reason } => {
                write!(f, "record for schema `{schema}` does not match: {reason}")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
