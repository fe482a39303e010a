//! Semigroup trait for merging validation outcomes
//!
//! A Semigroup is a type with an associative binary operation. The engine uses it
//! to fold per-field failures into one [`ErrorMap`](crate::ErrorMap), and callers use it
//! to merge client-side errors with the field details returned by the remote API.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use rxform::Semigroup;
//!
//! let v1 = vec!["email"];
//! let v2 = vec!["zip_code"];
//! assert_eq!(v1.combine(v2), vec!["email", "zip_code"]);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first if the original is still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
