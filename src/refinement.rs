//! Whole-object refinements
//!
//! A refinement spans several fields and runs only after every field rule passed, so it
//! always sees a normalized payload. Its failure is reported at its own target path,
//! which need not be the field that is "wrong": a password mismatch is reported at
//! `confirmPassword` even though either side could be the typo.

use crate::payload::Payload;

/// The check a refinement performs.
#[derive(Debug, Clone)]
pub enum Check {
    /// Two fields hold equal values (both absent counts as equal).
    FieldsEqual {
        /// Field compared.
        field: String,
        /// Field it must equal.
        other: String,
    },
    /// Arbitrary predicate over the normalized payload.
    Custom {
        /// Fields the predicate reads.
        reads: Vec<String>,
        /// The predicate.
        holds: fn(&Payload) -> bool,
    },
}

/// A rule spanning multiple fields.
#[derive(Debug, Clone)]
pub struct Refinement {
    path: String,
    message: String,
    check: Check,
}

impl Refinement {
    /// `field` must equal `other`; failures are reported at `field`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rxform::{payload::Payload, refinement::Refinement};
    ///
    /// let matching = Refinement::fields_equal("confirmPassword", "password", "Passwords don't match");
    /// let payload = Payload::new()
    ///     .with("password", "Abcdef12")
    ///     .with("confirmPassword", "Abcdef99");
    ///
    /// assert!(!matching.holds(&payload));
    /// assert_eq!(matching.path(), "confirmPassword");
    /// ```
    pub fn fields_equal(
        field: impl Into<String>,
        other: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let field = field.into();
        Self {
            path: field.clone(),
            message: message.into(),
            check: Check::FieldsEqual {
                field,
                other: other.into(),
            },
        }
    }

    /// Custom check reading `reads`; failures are reported at `path`.
    pub fn custom<I, S>(
        path: impl Into<String>,
        reads: I,
        message: impl Into<String>,
        holds: fn(&Payload) -> bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
            check: Check::Custom {
                reads: reads.into_iter().map(Into::into).collect(),
                holds,
            },
        }
    }

    /// Path the failure is reported at.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The check performed.
    pub fn check(&self) -> &Check {
        &self.check
    }

    /// Every field name this refinement depends on, target path first.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut names = vec![self.path.as_str()];
        match &self.check {
            Check::FieldsEqual { field, other } => {
                names.push(field);
                names.push(other);
            }
            Check::Custom { reads, .. } => names.extend(reads.iter().map(String::as_str)),
        }
        names
    }

    /// Whether `payload` satisfies this refinement.
    pub fn holds(&self, payload: &Payload) -> bool {
        match &self.check {
            Check::FieldsEqual { field, other } => payload.get(field) == payload.get(other),
            Check::Custom { holds, .. } => holds(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_fields_hold() {
        let r = Refinement::fields_equal("confirmPassword", "password", "mismatch");
        let payload = Payload::new()
            .with("password", "Abcdef12")
            .with("confirmPassword", "Abcdef12");
        assert!(r.holds(&payload));
    }

    #[test]
    fn both_absent_counts_as_equal() {
        let r = Refinement::fields_equal("a", "b", "mismatch");
        assert!(r.holds(&Payload::new()));
        assert!(!r.holds(&Payload::new().with("b", "x")));
    }

    #[test]
    fn custom_refinement_reports_at_its_path() {
        fn price_with_quantity(p: &Payload) -> bool {
            p.get("unit_price").is_none() || p.get("quantity").is_some()
        }

        let r = Refinement::custom(
            "quantity",
            ["unit_price"],
            "Quantity is required when a price is set",
            price_with_quantity,
        );
        assert_eq!(r.path(), "quantity");
        assert_eq!(r.referenced_fields(), ["quantity", "unit_price"]);
        assert!(!r.holds(&Payload::new().with("unit_price", "3.00")));
        assert!(r.holds(&Payload::new()));
    }
}
