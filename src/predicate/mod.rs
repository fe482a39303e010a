//! Predicate combinators used by field rules
//!
//! Each [`Rule`](crate::rule::Rule) variant reduces to one of these predicates once the
//! raw payload value has been read as text, an integer, a decimal or a timestamp.
//! Predicates are plain values, so rules can hold them, compose them with `and`,
//! and share them across threads.
//!
//! # Example
//!
//! ```rust
//! use rxform::predicate::*;
//!
//! let company_name = not_empty().and(len_min(2));
//! assert!(company_name.check("Acme Pharma"));
//! assert!(!company_name.check("A"));
//!
//! let quantity = ge(1_i64).and(le(1_000_000_i64));
//! assert!(quantity.check(&250));
//! assert!(!quantity.check(&0));
//! ```

mod combinators;
mod number;
mod string;

pub use combinators::{And, Predicate, PredicateExt};

pub use string::{
    any_char, len_max, len_min, matches, not_empty, one_of, AnyChar, LenBetween, Matches,
    NotEmpty, OneOf,
};

pub use number::{ge, gt, le, positive, Ge, Gt, Le};
