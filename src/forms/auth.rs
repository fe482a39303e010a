//! Login and company registration

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::field::Field;
use crate::form::Form;
use crate::limits::Limits;
use crate::refinement::Refinement;
use crate::rule::CharClass;
use crate::schema::Schema;

use super::built_in;

/// Company types accepted at registration.
pub const COMPANY_TYPES: &[&str] = &["pharmacy", "hospital", "clinic", "distributor", "manufacturer"];

/// Login form, default limits.
pub static CREDENTIALS: Lazy<Schema> = Lazy::new(|| built_in(credentials_with(&Limits::default())));

/// Registration form, default limits.
pub static REGISTRATION: Lazy<Schema> =
    Lazy::new(|| built_in(registration_with(&Limits::default())));

fn email() -> Field {
    Field::required("email", "Email is required")
        .non_empty("Email is required")
        .email("Invalid email address")
}

fn text(name: &str, label: &str) -> Field {
    let required = format!("{label} is required");
    Field::required(name, required.clone()).non_empty(required)
}

/// Login form: email and password.
pub fn credentials_with(limits: &Limits) -> Result<Schema, SchemaError> {
    let min = limits.login_password_min;
    Schema::builder("credentials")
        .field(email())
        .field(
            Field::required("password", "Password is required")
                .non_empty("Password is required")
                .min_len(min, format!("Password must be at least {min} characters")),
        )
        .build()
}

/// Company registration form.
pub fn registration_with(limits: &Limits) -> Result<Schema, SchemaError> {
    let min = limits.password_min;
    Schema::builder("registration")
        .field(email())
        .field(
            Field::required("password", "Password is required")
                .min_len(min, format!("Password must be at least {min} characters"))
                .contains(
                    CharClass::Uppercase,
                    "Password must contain at least one uppercase letter",
                )
                .contains(
                    CharClass::Lowercase,
                    "Password must contain at least one lowercase letter",
                )
                .contains(CharClass::Digit, "Password must contain at least one number"),
        )
        .field(
            Field::required("confirmPassword", "Please confirm your password")
                .non_empty("Please confirm your password"),
        )
        .field(
            text("company_name", "Company name")
                .min_len(2, "Company name must be at least 2 characters"),
        )
        .field(
            Field::required("company_type", "Please select a company type")
                .one_of(COMPANY_TYPES, "Please select a valid company type"),
        )
        .field(text("license_number", "License number"))
        .field(text("contact_person", "Contact person"))
        .field(
            text("phone", "Phone number").pattern(r"^[0-9+\-().\s]+$", "Invalid phone number"),
        )
        .field(text("address", "Address"))
        .field(text("city", "City"))
        .field(text("state", "State"))
        .field(text("zip_code", "ZIP code").pattern(r"^\d{5}(-\d{4})?$", "Invalid ZIP code"))
        .refine(Refinement::fields_equal(
            "confirmPassword",
            "password",
            "Passwords don't match",
        ))
        .build()
}

/// Validated login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Form for Credentials {
    fn schema() -> &'static Schema {
        &CREDENTIALS
    }
}

/// Kind of company registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    /// Retail pharmacy.
    Pharmacy,
    /// Hospital.
    Hospital,
    /// Clinic.
    Clinic,
    /// Wholesale distributor.
    Distributor,
    /// Manufacturer.
    Manufacturer,
}

/// Validated company registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Repeated password; equal to `password`.
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    /// Legal company name.
    pub company_name: String,
    /// Kind of company.
    pub company_type: CompanyType,
    /// Pharmacy or distribution license number.
    pub license_number: String,
    /// Primary contact.
    pub contact_person: String,
    /// Contact phone.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Five-digit ZIP code, optionally with a four-digit extension.
    pub zip_code: String,
}

impl Form for Registration {
    fn schema() -> &'static Schema {
        &REGISTRATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Payload;
    use crate::Validation;

    fn login(email: &str, password: &str) -> Payload {
        Payload::new().with("email", email).with("password", password)
    }

    #[test]
    fn login_accepts_valid_credentials() {
        let result = Credentials::parse(&login("buyer@clinic.test", "secret1")).unwrap();
        assert_eq!(
            result,
            Validation::success(Credentials {
                email: "buyer@clinic.test".into(),
                password: "secret1".into()
            })
        );
    }

    #[test]
    fn login_messages() {
        let errors = CREDENTIALS
            .validate(&login("", "12345"))
            .errors()
            .cloned()
            .unwrap();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn password_complexity_reports_first_missing_class() {
        let check = |pw: &str| REGISTRATION.validate_field("password", pw, None).unwrap();
        assert_eq!(
            check("Abc1").as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            check("abcdefg1").as_deref(),
            Some("Password must contain at least one uppercase letter")
        );
        assert_eq!(
            check("ABCDEFG1").as_deref(),
            Some("Password must contain at least one lowercase letter")
        );
        assert_eq!(
            check("Abcdefgh").as_deref(),
            Some("Password must contain at least one number")
        );
        assert_eq!(check("Abcdefg1"), None);
    }

    #[test]
    fn phone_allows_common_separators() {
        let check = |phone: &str| REGISTRATION.validate_field("phone", phone, None).unwrap();
        assert_eq!(check("+1 (555) 010-2030"), None);
        assert_eq!(check("555.010.2030"), None);
        assert_eq!(check("555-CALL-NOW").as_deref(), Some("Invalid phone number"));
    }

    #[test]
    fn company_type_is_enumerated() {
        let check = |kind: &str| {
            REGISTRATION
                .validate_field("company_type", kind, None)
                .unwrap()
        };
        for kind in COMPANY_TYPES.iter().copied() {
            assert_eq!(check(kind), None);
        }
        assert_eq!(
            check("spa").as_deref(),
            Some("Please select a valid company type")
        );
    }

    #[test]
    fn custom_limits_change_password_minimum() {
        let limits = Limits {
            password_min: 12,
            ..Limits::default()
        };
        let schema = registration_with(&limits).unwrap();
        assert_eq!(
            schema
                .validate_field("password", "Abcdefg1", None)
                .unwrap()
                .as_deref(),
            Some("Password must be at least 12 characters")
        );
    }
}
