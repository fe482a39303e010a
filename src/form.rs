//! Typed form records
//!
//! Schemas speak untyped [`Payload`]s because that is what forms collect. Once a payload
//! passed, callers want a typed record: [`Form`] binds a record type to its schema and
//! reads the normalized payload into it.
//!
//! A record that cannot be read from its own schema's normalized output is a definition
//! bug, so it surfaces as [`SchemaError::RecordMismatch`], never as a field error.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ErrorMap, SchemaError};
use crate::payload::Payload;
use crate::schema::Schema;
use crate::validation::Validation;

/// A typed record validated by a fixed schema.
pub trait Form: Serialize + DeserializeOwned {
    /// The schema every instance satisfies.
    fn schema() -> &'static Schema;

    /// Validate `payload` against the current time and read it into `Self`.
    fn parse(payload: &Payload) -> Result<Validation<Self, ErrorMap>, SchemaError> {
        Self::parse_at(payload, Utc::now())
    }

    /// Validate `payload` as of `now` and read it into `Self`.
    fn parse_at(
        payload: &Payload,
        now: DateTime<Utc>,
    ) -> Result<Validation<Self, ErrorMap>, SchemaError> {
        match Self::schema().validate_at(payload, now) {
            Validation::Success(normalized) => serde_json::from_value(normalized.into_value())
                .map(Validation::success)
                .map_err(|err| Self::mismatch(err.to_string())),
            Validation::Failure(errors) => Ok(Validation::failure(errors)),
        }
    }

    /// Message for `field` given the rest of the form, as of the current time.
    fn check_field(
        field: &str,
        value: impl Into<Value>,
        partial: Option<&Payload>,
    ) -> Result<Option<String>, SchemaError> {
        Self::schema().validate_field(field, value, partial)
    }

    /// Serialize this record back into a payload, omitting absent optional fields.
    fn to_payload(&self) -> Result<Payload, SchemaError> {
        Payload::from_serialize(self)
            .ok_or_else(|| Self::mismatch("record does not serialize to an object".to_string()))
    }

    #[doc(hidden)]
    fn mismatch(reason: String) -> SchemaError {
        SchemaError::RecordMismatch {
            schema: Self::schema().name().to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use once_cell::sync::Lazy;
    use serde::Deserialize;

    static GREETING: Lazy<Schema> = Lazy::new(|| {
        Schema::builder("greeting")
            .field(Field::required("name", "Name is required").non_empty("Name is required"))
            .field(Field::optional("times").integer("Times must be a whole number"))
            .build()
            .unwrap()
    });

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Greeting {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        times: Option<i64>,
    }

    impl Form for Greeting {
        fn schema() -> &'static Schema {
            &GREETING
        }
    }

    // Declares a field the schema never produces.
    #[derive(Debug, Serialize, Deserialize)]
    struct Broken {
        name: String,
        nickname: String,
    }

    impl Form for Broken {
        fn schema() -> &'static Schema {
            &GREETING
        }
    }

    #[test]
    fn parse_reads_coerced_values() {
        let payload = Payload::new().with("name", "Ada").with("times", "3");
        assert_eq!(
            Greeting::parse(&payload),
            Ok(Validation::success(Greeting {
                name: "Ada".into(),
                times: Some(3)
            }))
        );
    }

    #[test]
    fn parse_returns_field_errors_as_data() {
        let payload = Payload::new().with("name", "");
        let result = Greeting::parse(&payload).unwrap();
        assert_eq!(
            result.errors().and_then(|e| e.get("name")),
            Some("Name is required")
        );
    }

    #[test]
    fn record_mismatch_is_an_engine_error() {
        let payload = Payload::new().with("name", "Ada");
        assert!(matches!(
            Broken::parse(&payload),
            Err(SchemaError::RecordMismatch { .. })
        ));
    }

    #[test]
    fn to_payload_omits_absent_optionals() {
        let payload = Greeting {
            name: "Ada".into(),
            times: None,
        }
        .to_payload()
        .unwrap();
        assert_eq!(payload.fields().collect::<Vec<_>>(), ["name"]);
    }

    #[test]
    fn check_field_uses_the_schema() {
        assert_eq!(
            Greeting::check_field("times", "many", None),
            Ok(Some("Times must be a whole number".to_string()))
        );
    }
}
