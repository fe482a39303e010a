//! Marketplace inquiries and transactions

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::field::Field;
use crate::form::Form;
use crate::schema::Schema;

use super::built_in;
use super::messages::*;

/// Inquiry message length bounds, inclusive.
pub const MESSAGE_LEN: (usize, usize) = (10, 500);

/// Buyer inquiry form.
pub static INQUIRY: Lazy<Schema> = Lazy::new(|| built_in(inquiry()));

/// Transaction form.
pub static TRANSACTION: Lazy<Schema> = Lazy::new(|| built_in(transaction()));

fn positive_quantity() -> Field {
    Field::required("quantity", QUANTITY_REQUIRED)
        .integer(QUANTITY_WHOLE)
        .at_least(1, QUANTITY_POSITIVE)
}

/// Buyer inquiry form.
pub fn inquiry() -> Result<Schema, SchemaError> {
    let (min, max) = MESSAGE_LEN;
    Schema::builder("inquiry")
        .field(
            Field::required("inventory_id", "Inventory item is required")
                .non_empty("Inventory item is required"),
        )
        .field(positive_quantity())
        .field(
            Field::required("message", "Message is required")
                .min_len(min, format!("Message must be at least {min} characters"))
                .max_len(max, format!("Message must be at most {max} characters")),
        )
        .build()
}

/// Transaction form, closing an inquiry.
pub fn transaction() -> Result<Schema, SchemaError> {
    Schema::builder("transaction")
        .field(
            Field::required("inquiry_id", "Inquiry is required")
                .non_empty("Inquiry is required"),
        )
        .field(positive_quantity())
        .field(
            Field::required("unit_price", UNIT_PRICE_REQUIRED)
                .positive_decimal(UNIT_PRICE_POSITIVE),
        )
        .build()
}

/// Validated buyer inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Inventory lot asked about.
    pub inventory_id: String,
    /// Units wanted.
    pub quantity: i64,
    /// Note to the seller.
    pub message: String,
}

impl Form for Inquiry {
    fn schema() -> &'static Schema {
        &INQUIRY
    }
}

/// Validated transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Inquiry being closed.
    pub inquiry_id: String,
    /// Units sold.
    pub quantity: i64,
    /// Agreed unit price as entered.
    pub unit_price: String,
}

impl Form for Transaction {
    fn schema() -> &'static Schema {
        &TRANSACTION
    }
}
