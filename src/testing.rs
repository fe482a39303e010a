//! Assertion macros for validation outcomes
//!
//! # Example
//!
//! ```rust
//! use rxform::{assert_field_error, assert_invalid, assert_no_field_error, assert_valid};
//! use rxform::forms::auth::CREDENTIALS;
//! use rxform::payload::Payload;
//!
//! let ok = Payload::new().with("email", "buyer@clinic.test").with("password", "secret1");
//! assert_valid!(CREDENTIALS.validate(&ok));
//!
//! let bad = ok.clone().with("email", "buyer");
//! assert_invalid!(CREDENTIALS.validate(&bad));
//! assert_field_error!(CREDENTIALS.validate(&bad), "email", "Invalid email address");
//! assert_no_field_error!(CREDENTIALS.validate(&bad), "password");
//! ```

/// Assert that a validation succeeds.
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation failed with `message` at `path`.
#[macro_export]
macro_rules! assert_field_error {
    ($validation:expr, $path:expr, $message:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(
                    errors.get($path),
                    Some($message),
                    "wrong message at `{}` in {:?}",
                    $path,
                    errors
                );
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure at `{}`, got Success: {:?}",
                    $path, v
                );
            }
        }
    };
}

/// Assert that a validation reported nothing at `path` (success counts).
#[macro_export]
macro_rules! assert_no_field_error {
    ($validation:expr, $path:expr) => {
        if let $crate::Validation::Failure(errors) = $validation {
            assert!(
                !errors.contains($path),
                "Expected no error at `{}`, got {:?}",
                $path,
                errors.get($path)
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{ErrorMap, Validation};

    fn failed() -> Validation<i32, ErrorMap> {
        Validation::failure(ErrorMap::single("zip_code", "Invalid ZIP code"))
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Validation::<_, ErrorMap>::success(42));
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(failed());
    }

    #[test]
    fn assert_field_error_macro() {
        assert_field_error!(failed(), "zip_code", "Invalid ZIP code");
        assert_no_field_error!(failed(), "email");
        assert_no_field_error!(Validation::<_, ErrorMap>::success(1), "email");
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_valid_panics_on_failure() {
        assert_valid!(failed());
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_invalid_panics_on_success() {
        assert_invalid!(Validation::<_, ErrorMap>::success(42));
    }

    #[test]
    #[should_panic(expected = "wrong message at `zip_code`")]
    fn assert_field_error_panics_on_other_message() {
        assert_field_error!(failed(), "zip_code", "ZIP code is required");
    }

    #[test]
    #[should_panic(expected = "Expected no error at `zip_code`")]
    fn assert_no_field_error_panics_when_present() {
        assert_no_field_error!(failed(), "zip_code");
    }
}
