//! Text predicates
//!
//! Lengths are counted in Unicode scalar values, not bytes, so a company name like
//! "Ñu" has length 2.

use regex::Regex;

use super::combinators::Predicate;

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// Whitespace counts as content: `" "` is not empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks the character count is in range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks if a string has at least `min` characters.
///
/// ```rust
/// use rxform::predicate::*;
///
/// assert!(len_min(2).check("ÑA"));
/// assert!(!len_min(2).check("Ñ"));
/// ```
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if a string has at most `max` characters.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Predicate that checks if any character satisfies a condition.
#[derive(Clone, Copy, Debug)]
pub struct AnyChar<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AnyChar<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(&self.0)
    }
}

/// Create a predicate that checks if any character satisfies a condition.
///
/// ```rust
/// use rxform::predicate::*;
///
/// assert!(any_char(|c: char| c.is_ascii_digit()).check("Abcdef12"));
/// assert!(!any_char(|c: char| c.is_ascii_digit()).check("Abcdefgh"));
/// ```
pub fn any_char<F: Fn(char) -> bool + Send + Sync>(f: F) -> AnyChar<F> {
    AnyChar(f)
}

/// Predicate that checks a string against a compiled regex.
#[derive(Clone, Copy, Debug)]
pub struct Matches<'r>(pub &'r Regex);

impl Predicate<str> for Matches<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks a string against `regex`.
///
/// Anchoring is the caller's job: `^\d{5}$` matches whole strings only, `\d{5}` does not.
pub fn matches(regex: &Regex) -> Matches<'_> {
    Matches(regex)
}

/// Predicate that checks a string is one of a fixed set of options.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<'a>(pub &'a [&'a str]);

impl Predicate<str> for OneOf<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.contains(&value)
    }
}

/// Create a predicate that checks a string is exactly one of `options`.
pub fn one_of<'a>(options: &'a [&'a str]) -> OneOf<'a> {
    OneOf(options)
}
