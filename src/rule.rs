//! Field rules
//!
//! A [`Rule`] is one constraint on one field: a tagged variant, its parameters and the
//! message reported when it fails. Fields hold an ordered list of rules and stop at the
//! first failure.
//!
//! Rules receive the raw JSON value and return the value later rules should see. Only
//! [`Rule::Integer`] changes it (numeric strings become JSON integers); every other rule
//! passes the value through untouched.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::predicate::{any_char, ge, gt, le, len_max, len_min, matches, not_empty, one_of};
use crate::predicate::{positive, Predicate, PredicateExt};

/// Message for a text rule applied to a value that is not a string.
pub const EXPECTED_TEXT: &str = "Expected text";

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Character classes a password-style rule can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// An uppercase letter.
    Uppercase,
    /// A lowercase letter.
    Lowercase,
    /// An ASCII digit.
    Digit,
}

impl CharClass {
    fn admits(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::Lowercase => c.is_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
        }
    }
}

/// One constraint on one field.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be a string; any string passes.
    ///
    /// Fails with [`EXPECTED_TEXT`], like every other text rule given a non-string.
    Text,
    /// String must not be empty.
    NonEmpty {
        /// Failure message.
        message: String,
    },
    /// String must have at least `min` characters.
    MinLen {
        /// Inclusive lower bound.
        min: usize,
        /// Failure message.
        message: String,
    },
    /// String must have at most `max` characters.
    MaxLen {
        /// Inclusive upper bound.
        max: usize,
        /// Failure message.
        message: String,
    },
    /// String must look like an email address.
    Email {
        /// Failure message.
        message: String,
    },
    /// String must match `regex`.
    Pattern {
        /// Compiled pattern; anchor it to match whole values.
        regex: Regex,
        /// Failure message.
        message: String,
    },
    /// String must contain a character of `class`.
    ContainsClass {
        /// Required class.
        class: CharClass,
        /// Failure message.
        message: String,
    },
    /// String must equal one of `options`.
    OneOf {
        /// Accepted values.
        options: &'static [&'static str],
        /// Failure message.
        message: String,
    },
    /// Value must be a whole number; numeric strings are coerced.
    Integer {
        /// Failure message.
        message: String,
    },
    /// Whole number must be at least `min`.
    AtLeast {
        /// Inclusive lower bound.
        min: i64,
        /// Failure message.
        message: String,
    },
    /// Whole number must be at most `max`.
    AtMost {
        /// Inclusive upper bound.
        max: i64,
        /// Failure message.
        message: String,
    },
    /// String must parse as a finite number greater than zero.
    ///
    /// Non-strings, non-numeric strings and non-positive numbers share `message`.
    PositiveDecimal {
        /// Failure message.
        message: String,
    },
    /// String must be a date or timestamp strictly after the evaluation instant.
    ///
    /// Unparseable dates fail with `message` too.
    FutureDate {
        /// Failure message.
        message: String,
    },
}

impl Rule {
    /// The message reported when this rule fails.
    pub fn message(&self) -> &str {
        match self {
            Rule::Text => EXPECTED_TEXT,
            Rule::NonEmpty { message }
            | Rule::MinLen { message, .. }
            | Rule::MaxLen { message, .. }
            | Rule::Email { message }
            | Rule::Pattern { message, .. }
            | Rule::ContainsClass { message, .. }
            | Rule::OneOf { message, .. }
            | Rule::Integer { message }
            | Rule::AtLeast { message, .. }
            | Rule::AtMost { message, .. }
            | Rule::PositiveDecimal { message }
            | Rule::FutureDate { message } => message,
        }
    }

    /// Check `value` at evaluation instant `now`.
    ///
    /// Returns the value to hand to the next rule, or the failure message.
    pub fn apply(&self, value: Value, now: DateTime<Utc>) -> Result<Value, &str> {
        let passed = match self {
            Rule::Text => return self.check_text(value, |_: &str| true),
            Rule::NonEmpty { .. } => return self.check_text(value, not_empty()),
            Rule::MinLen { min, .. } => return self.check_text(value, len_min(*min)),
            Rule::MaxLen { max, .. } => return self.check_text(value, len_max(*max)),
            Rule::Email { .. } => return self.check_text(value, matches(&EMAIL)),
            Rule::Pattern { regex, .. } => return self.check_text(value, matches(regex)),
            Rule::ContainsClass { class, .. } => {
                let class = *class;
                return self.check_text(value, any_char(move |c| class.admits(c)));
            }
            Rule::OneOf { options, .. } => return self.check_text(value, one_of(options)),
            Rule::Integer { .. } => {
                return whole_number(&value).map(Value::from).ok_or(self.message());
            }
            Rule::AtLeast { min, .. } => whole_number(&value).is_some_and(|n| ge(*min).check(&n)),
            Rule::AtMost { max, .. } => whole_number(&value).is_some_and(|n| le(*max).check(&n)),
            Rule::PositiveDecimal { .. } => value
                .as_str()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .is_some_and(|n| positive::<f64>().and(|n: &f64| n.is_finite()).check(&n)),
            Rule::FutureDate { .. } => value
                .as_str()
                .and_then(parse_instant)
                .is_some_and(|at| gt(now).check(&at)),
        };

        if passed {
            Ok(value)
        } else {
            Err(self.message())
        }
    }

    fn check_text<P: Predicate<str>>(&self, value: Value, predicate: P) -> Result<Value, &str> {
        match value.as_str() {
            Some(text) if predicate.check(text) => Ok(value),
            Some(_) => Err(self.message()),
            None => Err(EXPECTED_TEXT),
        }
    }
}

/// Read a JSON number or numeric string as a whole number.
///
/// `"3"`, `3`, `"3.0"` and `3.0` all read as 3; `"3.5"`, `""` and `"3 units"` do not.
pub fn whole_number(value: &Value) -> Option<i64> {
    fn from_float(f: f64) -> Option<i64> {
        // i64::MAX as f64 rounds up to 2^63, which is out of range
        if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Some(f as i64)
        } else {
            None
        }
    }

    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(from_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(from_float))
        }
        _ => None,
    }
}

/// Parse the date formats date inputs produce.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM[:SS[.fff]]` read as UTC, and bare
/// `YYYY-MM-DD` dates read as midnight UTC.
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
