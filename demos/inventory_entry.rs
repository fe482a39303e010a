//! Inventory entry - adding a lot with site-specific limits
//!
//! A distributor that never stocks more than 50 000 units per lot builds its own
//! inventory schema from `Limits` instead of using the built-in one.
//!
//! Run with: cargo run --example inventory_entry

use chrono::{Duration, Utc};
use rxform::forms::inventory::{inventory_create_with, InventoryCreate};
use rxform::{Form, Limits, Payload, Validation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Inventory Entry ===\n");

    let limits: Limits = serde_json::from_str(r#"{ "max_quantity": 50000 }"#)?;
    let schema = inventory_create_with(&limits)?;
    let next_year = (Utc::now() + Duration::days(365)).format("%Y-%m-%d").to_string();

    let lots = [
        ("valid lot", "1200", next_year.as_str(), "4.75"),
        ("fractional quantity", "12.5", next_year.as_str(), "4.75"),
        ("over the site limit", "60000", next_year.as_str(), "4.75"),
        ("expired", "10", "2020-01-01", "4.75"),
        ("free sample", "10", next_year.as_str(), "0"),
    ];

    for (label, quantity, expiry, price) in lots {
        let payload = Payload::new()
            .with("pharmaceutical_id", "ph_amoxicillin_500")
            .with("batch_number", "AMX-2291")
            .with("quantity", quantity)
            .with("expiry_date", expiry)
            .with("unit_price", price);

        print!("{label:<22}");
        match schema.validate(&payload) {
            Validation::Success(normalized) => {
                let lot: InventoryCreate = serde_json::from_value(normalized.into_value())?;
                println!("✓ {} units of batch {}", lot.quantity, lot.batch_number);
            }
            Validation::Failure(errors) => println!("✗ {errors}"),
        }
    }

    println!("\n---\n");

    // The built-in schema uses the default limits
    let payload = Payload::new()
        .with("pharmaceutical_id", "ph_amoxicillin_500")
        .with("batch_number", "AMX-2291")
        .with("quantity", 60000)
        .with("expiry_date", next_year.as_str())
        .with("unit_price", "4.75");
    match InventoryCreate::parse(&payload)? {
        Validation::Success(lot) => println!("Built-in schema accepts {} units", lot.quantity),
        Validation::Failure(errors) => println!("Built-in schema rejects: {errors}"),
    }

    Ok(())
}
