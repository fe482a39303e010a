//! Field declarations
//!
//! A [`Field`] names one payload key, says whether it must be present, and lists its
//! rules in evaluation order.
//!
//! ```rust
//! use rxform::field::Field;
//!
//! let zip = Field::required("zip_code", "ZIP code is required")
//!     .non_empty("ZIP code is required")
//!     .pattern(r"^\d{5}(-\d{4})?$", "Invalid ZIP code");
//!
//! assert_eq!(zip.name(), "zip_code");
//! assert_eq!(zip.rules().len(), 2);
//! ```

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;

use crate::error::ErrorMap;
use crate::payload::{Payload, Presence};
use crate::rule::{CharClass, Rule};
use crate::validation::Validation;

/// Whether a field must appear in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Missing or null fails with `message`.
    Required {
        /// Failure message.
        message: String,
    },
    /// Missing, null or empty-string values skip every rule.
    Optional,
}

/// One declared field of a schema.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    requirement: Requirement,
    rules: Vec<Rule>,
    bad_pattern: Option<String>,
}

impl Field {
    /// Declare a field that must be present.
    pub fn required(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            name,
            Requirement::Required {
                message: message.into(),
            },
        )
    }

    /// Declare a field that may be omitted or left blank.
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, Requirement::Optional)
    }

    fn new(name: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            name: name.into(),
            requirement,
            rules: Vec::new(),
            bad_pattern: None,
        }
    }

    /// Append a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append [`Rule::Text`].
    pub fn text(self) -> Self {
        self.rule(Rule::Text)
    }

    /// Append [`Rule::NonEmpty`].
    pub fn non_empty(self, message: impl Into<String>) -> Self {
        self.rule(Rule::NonEmpty {
            message: message.into(),
        })
    }

    /// Append [`Rule::MinLen`].
    pub fn min_len(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::MinLen {
            min,
            message: message.into(),
        })
    }

    /// Append [`Rule::MaxLen`].
    pub fn max_len(self, max: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::MaxLen {
            max,
            message: message.into(),
        })
    }

    /// Append [`Rule::Email`].
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Email {
            message: message.into(),
        })
    }

    /// Append [`Rule::Pattern`], compiling `pattern`.
    ///
    /// A pattern that does not compile is reported by
    /// [`SchemaBuilder::build`](crate::schema::SchemaBuilder::build).
    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => self.rule(Rule::Pattern {
                regex,
                message: message.into(),
            }),
            Err(err) => {
                self.bad_pattern.get_or_insert(err.to_string());
                self
            }
        }
    }

    /// Append [`Rule::ContainsClass`].
    pub fn contains(self, class: CharClass, message: impl Into<String>) -> Self {
        self.rule(Rule::ContainsClass {
            class,
            message: message.into(),
        })
    }

    /// Append [`Rule::OneOf`].
    pub fn one_of(self, options: &'static [&'static str], message: impl Into<String>) -> Self {
        self.rule(Rule::OneOf {
            options,
            message: message.into(),
        })
    }

    /// Append [`Rule::Integer`].
    pub fn integer(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Integer {
            message: message.into(),
        })
    }

    /// Append [`Rule::AtLeast`].
    pub fn at_least(self, min: i64, message: impl Into<String>) -> Self {
        self.rule(Rule::AtLeast {
            min,
            message: message.into(),
        })
    }

    /// Append [`Rule::AtMost`].
    pub fn at_most(self, max: i64, message: impl Into<String>) -> Self {
        self.rule(Rule::AtMost {
            max,
            message: message.into(),
        })
    }

    /// Append [`Rule::PositiveDecimal`].
    pub fn positive_decimal(self, message: impl Into<String>) -> Self {
        self.rule(Rule::PositiveDecimal {
            message: message.into(),
        })
    }

    /// Append [`Rule::FutureDate`].
    pub fn future_date(self, message: impl Into<String>) -> Self {
        self.rule(Rule::FutureDate {
            message: message.into(),
        })
    }

    /// Payload key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Presence requirement.
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub(crate) fn bad_pattern(&self) -> Option<&str> {
        self.bad_pattern.as_deref()
    }

    /// Evaluate this field against `payload`.
    ///
    /// Success carries the normalized `(name, value)` entry, or `None` for a skipped
    /// optional field. Failure carries exactly one message, at this field's name.
    pub fn evaluate(
        &self,
        payload: &Payload,
        now: DateTime<Utc>,
    ) -> Validation<Option<(String, Value)>, ErrorMap> {
        let value = match (payload.presence(&self.name), &self.requirement) {
            (Presence::Absent | Presence::Blank, Requirement::Optional) => {
                return Validation::success(None);
            }
            (Presence::Absent, Requirement::Required { message }) => {
                return Validation::failure(ErrorMap::single(&self.name, message));
            }
            (Presence::Blank, Requirement::Required { .. }) => Value::String(String::new()),
            (Presence::Present(value), _) => value.clone(),
        };

        let outcome = self
            .rules
            .iter()
            .try_fold(value, |value, rule| rule.apply(value, now));

        match outcome {
            Ok(value) => Validation::success(Some((self.name.clone(), value))),
            Err(message) => Validation::failure(ErrorMap::single(&self.name, message)),
        }
    }
}
