//! Untyped form payloads
//!
//! Forms hand the engine whatever the user typed, as a JSON object. [`Payload`] wraps that
//! object and answers the one question every rule starts from: is this field present?

use serde::Serialize;
use serde_json::{Map, Value};

/// How a field appears in a payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence<'a> {
    /// Key missing or JSON `null`.
    Absent,
    /// Key holds an empty string.
    Blank,
    /// Key holds anything else.
    Present(&'a Value),
}

/// A form payload: a JSON object keyed by field name.
///
/// # Example
///
/// ```rust
/// use rxform::payload::{Payload, Presence};
/// use serde_json::json;
///
/// let payload = Payload::from_value(json!({ "email": "buyer@clinic.test", "ndc_code": "" }))
///     .unwrap();
///
/// assert!(matches!(payload.presence("email"), Presence::Present(_)));
/// assert_eq!(payload.presence("ndc_code"), Presence::Blank);
/// assert_eq!(payload.presence("phone"), Presence::Absent);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Serialize any record into a payload.
    ///
    /// Returns `None` when the record does not serialize to a JSON object.
    pub fn from_serialize<T: Serialize>(record: &T) -> Option<Self> {
        serde_json::to_value(record).ok().and_then(Self::from_value)
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set `field` to `value`, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Remove `field`.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Raw value at `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String value at `field`, if it holds one.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Classify how `field` appears.
    pub fn presence(&self, field: &str) -> Presence<'_> {
        match self.0.get(field) {
            None | Some(Value::Null) => Presence::Absent,
            Some(Value::String(s)) if s.is_empty() => Presence::Blank,
            Some(value) => Presence::Present(value),
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Unwrap into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_counts_as_absent() {
        let payload = Payload::new().with("ndc_code", Value::Null);
        assert_eq!(payload.presence("ndc_code"), Presence::Absent);
    }

    #[test]
    fn whitespace_is_present_not_blank() {
        let payload = Payload::new().with("city", " ");
        assert_eq!(payload.presence("city"), Presence::Present(&json!(" ")));
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Payload::from_value(json!([1, 2])).is_none());
        assert!(Payload::from_value(json!("email")).is_none());
        assert!(Payload::from_value(json!({})).is_some());
    }

    #[test]
    fn fields_keep_insertion_order() {
        let payload: Payload = [("zip_code", "12345"), ("email", "a@b.co")]
            .into_iter()
            .collect();
        assert_eq!(payload.fields().collect::<Vec<_>>(), ["zip_code", "email"]);
    }

    #[test]
    fn from_serialize_reads_records() {
        #[derive(Serialize)]
        struct Login<'a> {
            email: &'a str,
            password: &'a str,
        }

        let payload = Payload::from_serialize(&Login {
            email: "a@b.co",
            password: "secret1",
        })
        .unwrap();
        assert_eq!(payload.get_str("password"), Some("secret1"));
        assert!(Payload::from_serialize(&42).is_none());
    }
}
