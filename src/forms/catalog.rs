//! Pharmaceutical catalog records

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::field::Field;
use crate::form::Form;
use crate::schema::Schema;

use super::built_in;

/// National Drug Code layout accepted by the catalog: 5-4-2 digits.
pub const NDC_PATTERN: &str = r"^\d{5}-\d{4}-\d{2}$";

const NAME_MAX: usize = 200;

/// Pharmaceutical record form.
pub static PHARMACEUTICAL: Lazy<Schema> = Lazy::new(|| built_in(pharmaceutical()));

/// Pharmaceutical record form.
///
/// No field depends on [`Limits`](crate::Limits), so there is no `_with` variant.
pub fn pharmaceutical() -> Result<Schema, SchemaError> {
    Schema::builder("pharmaceutical")
        .field(
            Field::required("brand_name", "Brand name is required")
                .non_empty("Brand name is required")
                .max_len(NAME_MAX, "Brand name is too long"),
        )
        .field(
            Field::required("generic_name", "Generic name is required")
                .non_empty("Generic name is required")
                .max_len(NAME_MAX, "Generic name is too long"),
        )
        .field(
            Field::optional("ndc_code")
                .pattern(NDC_PATTERN, "NDC code must be in the format 12345-1234-12"),
        )
        .field(
            Field::required("manufacturer", "Manufacturer is required")
                .non_empty("Manufacturer is required"),
        )
        .field(
            Field::required("category", "Category is required").non_empty("Category is required"),
        )
        .field(Field::optional("dosage_form").text())
        .field(Field::optional("strength").text())
        .field(
            Field::optional("description")
                .max_len(1000, "Description must be at most 1000 characters"),
        )
        .build()
}

/// Validated pharmaceutical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pharmaceutical {
    /// Brand name.
    pub brand_name: String,
    /// Generic (INN) name.
    pub generic_name: String,
    /// National Drug Code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndc_code: Option<String>,
    /// Manufacturer.
    pub manufacturer: String,
    /// Therapeutic category.
    pub category: String,
    /// Tablet, capsule, injection, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage_form: Option<String>,
    /// Strength, e.g. "500 mg".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    /// Free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Form for Pharmaceutical {
    fn schema() -> &'static Schema {
        &PHARMACEUTICAL
    }
}
