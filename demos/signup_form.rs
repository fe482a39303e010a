//! Company signup - validating a registration the way the signup page does
//!
//! Each keystroke re-checks one field against the rest of the form, and submit
//! validates the whole payload before it goes to the API.
//!
//! Run with: cargo run --example signup_form --features tracing

use rxform::forms::auth::{Registration, REGISTRATION};
use rxform::{ApiErrorBody, ErrorMap, Form, Payload, Semigroup, Validation};

fn draft() -> Payload {
    Payload::new()
        .with("email", "orders@eastside-pharmacy.test")
        .with("password", "Str0ngPass")
        .with("confirmPassword", "Str0ngPas")
        .with("company_name", "Eastside Pharmacy")
        .with("company_type", "pharmacy")
        .with("license_number", "PH-20931")
        .with("contact_person", "Sam Ortiz")
        .with("phone", "555-CALL-NOW")
        .with("address", "12 Harbor St")
        .with("city", "Portland")
        .with("state", "OR")
        .with("zip_code", "9720")
}

fn report(errors: &ErrorMap) {
    println!("✗ {} field(s) need attention:", errors.len());
    for (path, message) in errors.iter() {
        println!("  {path}: {message}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Company Signup ===\n");

    // Incremental checks while typing
    println!("Typing the ZIP code:");
    let mut form = draft();
    for typed in ["9", "972", "97204", "97204-12", "97204-1234"] {
        let message = REGISTRATION.validate_field("zip_code", typed, Some(&form))?;
        match message {
            Some(message) => println!("  {typed:<12} {message}"),
            None => println!("  {typed:<12} ok"),
        }
    }

    println!("\n---\n");

    // Phone and ZIP fail their field rules; the password mismatch stays hidden until they pass
    println!("Submit with mistakes:");
    let errors = match REGISTRATION.validate(&form) {
        Validation::Success(_) => ErrorMap::new(),
        Validation::Failure(errors) => {
            report(&errors);
            errors
        }
    };

    // The server can still object to fields the client accepted
    let server = ApiErrorBody::from_errors(
        "Registration rejected",
        ErrorMap::single("license_number", "License number already registered"),
    );
    println!("\nMerged with server response:");
    report(&errors.clone().combine(server.field_errors(ErrorMap::new())));

    println!("\n---\n");

    // With every field rule passing, the confirmation check runs
    println!("Submit after fixing phone and ZIP:");
    form.insert("phone", "(555) 010-2231");
    form.insert("zip_code", "97204");
    if let Validation::Failure(errors) = REGISTRATION.validate(&form) {
        report(&errors);
    }

    println!("\n---\n");

    println!("Submit after fixing the confirmation:");
    form.insert("confirmPassword", "Str0ngPass");
    match Registration::parse(&form)? {
        Validation::Success(registration) => {
            println!("✓ Registered {} as {:?}", registration.company_name, registration.company_type);
            println!("  payload: {}", serde_json::to_string(&registration.to_payload()?)?);
        }
        Validation::Failure(errors) => report(&errors),
    }

    Ok(())
}
