//! Tunable bounds for the built-in form schemas
//!
//! None of these values are business rules. `max_quantity` in particular only exists
//! to reject obviously mistyped quantities, so deployments may raise or lower it freely.
//!
//! # Example
//!
//! ```rust
//! use rxform::Limits;
//!
//! let limits: Limits = serde_json::from_str(r#"{ "max_quantity": 5000 }"#).unwrap();
//! assert_eq!(limits.max_quantity, 5000);
//! assert_eq!(limits.password_min, Limits::default().password_min);
//! ```

use serde::{Deserialize, Serialize};

/// Default upper bound on any entered quantity.
pub const DEFAULT_MAX_QUANTITY: i64 = 1_000_000;

/// Numeric bounds used when building the form schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest accepted quantity on inventory forms.
    pub max_quantity: i64,
    /// Minimum password length on the login form.
    pub login_password_min: usize,
    /// Minimum password length on the registration form.
    pub password_min: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_quantity: DEFAULT_MAX_QUANTITY,
            login_password_min: 6,
            password_min: 8,
        }
    }
}
