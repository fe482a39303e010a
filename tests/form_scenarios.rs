//! End-to-end behavior of the built-in form schemas

use chrono::{DateTime, Duration, TimeZone, Utc};
use rxform::forms::auth::{CompanyType, Registration, REGISTRATION};
use rxform::forms::catalog::{Pharmaceutical, PHARMACEUTICAL};
use rxform::forms::inventory::{InventoryCreate, INVENTORY_CREATE};
use rxform::forms::marketplace::TRANSACTION;
use rxform::prelude::*;
use rxform::{assert_field_error, assert_invalid, assert_no_field_error, assert_valid};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 15, 30).unwrap()
}

fn registration() -> Payload {
    Payload::new()
        .with("email", "ops@northside-pharmacy.test")
        .with("password", "Abcdef12")
        .with("confirmPassword", "Abcdef12")
        .with("company_name", "Northside Pharmacy")
        .with("company_type", "pharmacy")
        .with("license_number", "PH-55-0192")
        .with("contact_person", "Dana Reyes")
        .with("phone", "(555) 010-2030")
        .with("address", "12 Market St")
        .with("city", "Springfield")
        .with("state", "IL")
        .with("zip_code", "62701")
}

fn pharmaceutical() -> Payload {
    Payload::new()
        .with("brand_name", "Amoxil")
        .with("generic_name", "Amoxicillin")
        .with("manufacturer", "GSK")
        .with("category", "Antibiotic")
}

fn inventory(expiry: String) -> Payload {
    Payload::new()
        .with("pharmaceutical_id", "ph_9")
        .with("batch_number", "B-778")
        .with("quantity", 40)
        .with("expiry_date", expiry)
        .with("unit_price", "2.10")
}

fn transaction(unit_price: &str) -> Payload {
    Payload::new()
        .with("inquiry_id", "inq_31")
        .with("quantity", "2")
        .with("unit_price", unit_price)
}

#[test]
fn registration_accepts_complete_payload() {
    let record = Registration::parse_at(&registration(), now())
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(record.company_type, CompanyType::Pharmacy);
    assert_eq!(record.confirm_password, record.password);
}

#[test]
fn password_mismatch_is_reported_only_at_confirmation() {
    let payload = registration()
        .with("password", "Abcdef12")
        .with("confirmPassword", "Abcdef99");

    let errors = REGISTRATION
        .validate_at(&payload, now())
        .errors()
        .cloned()
        .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("confirmPassword"), Some("Passwords don't match"));
    assert!(!errors.contains("password"));
}

#[test]
fn zip_code_formats() {
    assert_field_error!(
        REGISTRATION.validate_at(&registration().with("zip_code", "1234"), now()),
        "zip_code",
        "Invalid ZIP code"
    );
    assert_valid!(REGISTRATION.validate_at(&registration().with("zip_code", "12345-6789"), now()));
}

#[test]
fn expiry_at_evaluation_instant_fails_and_next_day_passes() {
    assert_field_error!(
        INVENTORY_CREATE.validate_at(&inventory(now().to_rfc3339()), now()),
        "expiry_date",
        "Expiry date must be in the future"
    );

    let tomorrow = (now() + Duration::days(1)).to_rfc3339();
    let record = InventoryCreate::parse_at(&inventory(tomorrow.clone()), now())
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(record.expiry_date, tomorrow);
    assert_eq!(record.quantity, 40);
}

#[test]
fn ndc_code_is_optional_but_formatted() {
    assert_valid!(PHARMACEUTICAL.validate_at(&pharmaceutical(), now()));
    assert_field_error!(
        PHARMACEUTICAL.validate_at(&pharmaceutical().with("ndc_code", "12345-678-90"), now()),
        "ndc_code",
        "NDC code must be in the format 12345-1234-12"
    );
}

#[test]
fn transaction_unit_price_must_be_positive() {
    assert_field_error!(
        TRANSACTION.validate_at(&transaction("-5"), now()),
        "unit_price",
        "Unit price must be a positive number"
    );
    assert_field_error!(
        TRANSACTION.validate_at(&transaction("five"), now()),
        "unit_price",
        "Unit price must be a positive number"
    );
    assert_valid!(TRANSACTION.validate_at(&transaction("5.00"), now()));
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = REGISTRATION
        .validate_at(&Payload::new(), now())
        .errors()
        .cloned()
        .unwrap();
    let declared: Vec<&str> = REGISTRATION.field_names().collect();

    assert_eq!(errors.len(), declared.len());
    for name in declared {
        assert!(errors.contains(name), "missing error for {name}");
    }
}

#[test]
fn unknown_keys_are_stripped() {
    let payload = transaction("5.00").with("csrf_token", "abc");
    let normalized = TRANSACTION
        .validate_at(&payload, now())
        .into_result()
        .unwrap();
    assert!(normalized.get("csrf_token").is_none());
    assert_eq!(normalized.get("quantity"), Some(&serde_json::json!(2)));
}

#[test]
fn incremental_check_ignores_other_fields() {
    let partial = Payload::new().with("email", "not-an-email");
    assert_eq!(
        REGISTRATION.validate_field_at("city", "Springfield", Some(&partial), now()),
        Ok(None)
    );
    assert_eq!(
        REGISTRATION.validate_field_at("email", "still-bad", Some(&partial), now()),
        Ok(Some("Invalid email address".to_string()))
    );
}

#[test]
fn client_and_server_errors_render_together() {
    let client = REGISTRATION
        .validate_at(&registration().with("zip_code", "1"), now())
        .errors()
        .cloned()
        .unwrap();
    let server: ApiErrorBody = serde_json::from_value(serde_json::json!({
        "message": "Registration rejected",
        "details": {
            "license_number": "License number already registered",
            "zip_code": "ZIP code outside service area"
        }
    }))
    .unwrap();

    let shown = server.field_errors(client);
    assert_eq!(shown.get("zip_code"), Some("Invalid ZIP code"));
    assert_eq!(
        shown.get("license_number"),
        Some("License number already registered")
    );
}

#[test]
fn validation_failure_is_never_a_schema_error() {
    let outcome = Registration::parse_at(&Payload::new().with("email", 42), now());
    let validation = outcome.expect("bad input is data, not an engine error");
    assert_invalid!(validation.clone());
    assert_field_error!(validation.clone(), "email", "Expected text");
    assert_no_field_error!(validation, "unrelated");
}

#[test]
fn optional_free_text_rejects_non_strings() {
    for field in ["dosage_form", "strength", "description"] {
        let payload = pharmaceutical().with(field, 5);
        let outcome = Pharmaceutical::parse_at(&payload, now());
        let validation = outcome.expect("bad input is data, not an engine error");
        assert_field_error!(validation, field, "Expected text");
    }

    let with_text = pharmaceutical().with("dosage_form", "tablet").with("strength", "500 mg");
    let parsed = Pharmaceutical::parse_at(&with_text, now()).unwrap();
    assert_valid!(parsed.clone());
    assert_eq!(parsed.value().and_then(|p| p.strength.as_deref()), Some("500 mg"));
}
