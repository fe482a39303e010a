//! The marketplace's form schemas
//!
//! Each module declares its schemas twice over: a `*_with(&Limits)` builder for hosts that
//! tune [`Limits`](crate::Limits), and a lazily built static using the defaults. The
//! statics are process-wide and read-only.
//!
//! | Module | Schemas |
//! |---|---|
//! | [`auth`] | login credentials, company registration |
//! | [`catalog`] | pharmaceutical record |
//! | [`inventory`] | inventory create, inventory update |
//! | [`marketplace`] | inquiry, transaction |

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod marketplace;

use crate::error::SchemaError;
use crate::schema::Schema;

/// Messages shared by several forms.
pub(crate) mod messages {
    pub const QUANTITY_WHOLE: &str = "Quantity must be a whole number";
    pub const QUANTITY_POSITIVE: &str = "Quantity must be positive";
    pub const QUANTITY_TOO_HIGH: &str = "Quantity is unreasonably high";
    pub const QUANTITY_REQUIRED: &str = "Quantity is required";
    pub const UNIT_PRICE_REQUIRED: &str = "Unit price is required";
    pub const UNIT_PRICE_POSITIVE: &str = "Unit price must be a positive number";
}

/// Unwrap a built-in schema.
///
/// Built-in schemas are fixed at compile time, so a failure here is a bug in this crate.
pub(crate) fn built_in(schema: Result<Schema, SchemaError>) -> Schema {
    match schema {
        Ok(schema) => schema,
        Err(err) => panic!("built-in schema is malformed: {err}"),
    }
}
