//! Inventory entry and adjustment

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::field::Field;
use crate::form::Form;
use crate::limits::Limits;
use crate::schema::Schema;

use super::built_in;
use super::messages::*;

/// New inventory lot, default limits.
pub static INVENTORY_CREATE: Lazy<Schema> =
    Lazy::new(|| built_in(inventory_create_with(&Limits::default())));

/// Inventory adjustment, default limits.
pub static INVENTORY_UPDATE: Lazy<Schema> =
    Lazy::new(|| built_in(inventory_update_with(&Limits::default())));

fn quantity(min: i64, below_min: &str, limits: &Limits) -> Field {
    Field::required("quantity", QUANTITY_REQUIRED)
        .integer(QUANTITY_WHOLE)
        .at_least(min, below_min)
        .at_most(limits.max_quantity, QUANTITY_TOO_HIGH)
}

fn unit_price() -> Field {
    Field::required("unit_price", UNIT_PRICE_REQUIRED)
        .non_empty(UNIT_PRICE_REQUIRED)
        .positive_decimal(UNIT_PRICE_POSITIVE)
}

/// New inventory lot form.
pub fn inventory_create_with(limits: &Limits) -> Result<Schema, SchemaError> {
    Schema::builder("inventory_create")
        .field(
            Field::required("pharmaceutical_id", "Please select a product")
                .non_empty("Please select a product"),
        )
        .field(
            Field::required("batch_number", "Batch number is required")
                .non_empty("Batch number is required")
                .max_len(50, "Batch number is too long"),
        )
        .field(quantity(1, QUANTITY_POSITIVE, limits))
        .field(
            Field::required("expiry_date", "Expiry date is required")
                .non_empty("Expiry date is required")
                .future_date("Expiry date must be in the future"),
        )
        .field(unit_price())
        .build()
}

/// Inventory adjustment form.
pub fn inventory_update_with(limits: &Limits) -> Result<Schema, SchemaError> {
    Schema::builder("inventory_update")
        .field(quantity(0, "Quantity cannot be negative", limits))
        .field(unit_price())
        .field(
            Field::optional("storage_location")
                .max_len(100, "Storage location must be at most 100 characters"),
        )
        .build()
}

/// Validated new inventory lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryCreate {
    /// Catalog product the lot belongs to.
    pub pharmaceutical_id: String,
    /// Manufacturer batch number.
    pub batch_number: String,
    /// Units in the lot.
    pub quantity: i64,
    /// Expiry date as entered; always after the instant it was validated at.
    pub expiry_date: String,
    /// Unit price as entered, a positive decimal.
    pub unit_price: String,
}

impl Form for InventoryCreate {
    fn schema() -> &'static Schema {
        &INVENTORY_CREATE
    }
}

/// Validated inventory adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    /// Units on hand; zero marks the lot sold out.
    pub quantity: i64,
    /// Unit price as entered, a positive decimal.
    pub unit_price: String,
    /// Shelf or warehouse location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
}

impl Form for InventoryUpdate {
    fn schema() -> &'static Schema {
        &INVENTORY_UPDATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Payload;
    use crate::Validation;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 14, 0, 0).unwrap()
    }

    fn lot() -> Payload {
        Payload::new()
            .with("pharmaceutical_id", "ph_102")
            .with("batch_number", "LOT-2026-0042")
            .with("quantity", "250")
            .with("expiry_date", "2027-12-31")
            .with("unit_price", "4.75")
    }

    #[test]
    fn create_parses_and_coerces_quantity() {
        let result = InventoryCreate::parse_at(&lot(), now()).unwrap();
        assert_eq!(
            result,
            Validation::success(InventoryCreate {
                pharmaceutical_id: "ph_102".into(),
                batch_number: "LOT-2026-0042".into(),
                quantity: 250,
                expiry_date: "2027-12-31".into(),
                unit_price: "4.75".into(),
            })
        );
    }

    #[test]
    fn quantity_bounds() {
        let check = |q: serde_json::Value| {
            INVENTORY_CREATE
                .validate_field_at("quantity", q, None, now())
                .unwrap()
        };
        assert_eq!(check("0".into()).as_deref(), Some(QUANTITY_POSITIVE));
        assert_eq!(check("1000001".into()).as_deref(), Some(QUANTITY_TOO_HIGH));
        assert_eq!(check("2.5".into()).as_deref(), Some(QUANTITY_WHOLE));
        assert_eq!(check(1_000_000.into()), None);
    }

    #[test]
    fn expiry_today_at_midnight_is_past() {
        let payload = lot().with("expiry_date", "2026-10-16");
        let errors = INVENTORY_CREATE
            .validate_at(&payload, now())
            .errors()
            .cloned()
            .unwrap();
        assert_eq!(
            errors.get("expiry_date"),
            Some("Expiry date must be in the future")
        );
    }

    #[test]
    fn expiry_one_second_ahead_is_accepted() {
        let soon = (now() + Duration::seconds(1)).to_rfc3339();
        let payload = lot().with("expiry_date", soon);
        assert!(INVENTORY_CREATE.validate_at(&payload, now()).is_success());
    }

    #[test]
    fn update_allows_zero_but_not_negative() {
        let update = Payload::new().with("quantity", 0).with("unit_price", "4.75");
        assert!(INVENTORY_UPDATE.validate_at(&update, now()).is_success());

        let update = update.with("quantity", -1);
        let errors = INVENTORY_UPDATE
            .validate_at(&update, now())
            .errors()
            .cloned()
            .unwrap();
        assert_eq!(errors.get("quantity"), Some("Quantity cannot be negative"));
    }

    #[test]
    fn tuned_quantity_ceiling() {
        let schema = inventory_update_with(&Limits {
            max_quantity: 100,
            ..Limits::default()
        })
        .unwrap();
        let payload = Payload::new().with("quantity", 101).with("unit_price", "1");
        let errors = schema.validate_at(&payload, now()).errors().cloned().unwrap();
        assert_eq!(errors.get("quantity"), Some(QUANTITY_TOO_HIGH));
    }

    #[test]
    fn update_record_keeps_optional_location() {
        let payload = Payload::new()
            .with("quantity", "12")
            .with("unit_price", "3.10")
            .with("storage_location", "Aisle 4, Bin 2");
        let record = InventoryUpdate::parse_at(&payload, now())
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(record.storage_location.as_deref(), Some("Aisle 4, Bin 2"));
        assert_eq!(record.quantity, 12);
    }
}
