use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::HashMap;

/// A value typed into one of the event form fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(Number),
    Text(String),
}

impl FieldValue {
    /// Whether the value counts as filled in
    ///
    /// Empty strings and zero are treated the same as a missing value, so a
    /// zero amount falls back to the default rather than being sent as-is.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        }
    }
}

impl PartialEq<str> for FieldValue {
    fn eq(&self, other: &str) -> bool {
        matches!(self, FieldValue::Text(s) if s == other)
    }
}

impl PartialEq<&str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value.into())
    }
}

/// Field values keyed by `EventField::id`
///
/// Nothing here is validated; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventFieldValues(HashMap<String, FieldValue>);

impl EventFieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the updated set
    pub fn with(mut self, id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(id.into(), value.into());
    }

    /// Returns the raw value for a field, whether or not it is truthy
    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.0.get(id)
    }

    /// Returns the value for a field only if it is filled in
    pub fn truthy(&self, id: &str) -> Option<&FieldValue> {
        self.0.get(id).filter(|v| v.is_truthy())
    }

    /// Returns the field value, or `fallback` if it is not filled in
    pub fn value_or(&self, id: &str, fallback: impl Into<FieldValue>) -> FieldValue {
        self.truthy(id).cloned().unwrap_or_else(|| fallback.into())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for EventFieldValues {
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

    #[test]
    fn empty_string_is_falsy() {
        assert!(!FieldValue::from("").is_truthy());
        assert!(FieldValue::from("x").is_truthy());
    }

    #[test]
    fn zero_is_falsy() {
        assert!(!FieldValue::from(0).is_truthy());
        let zero_float: FieldValue = serde_json::from_str("0.0").unwrap();
        assert!(!zero_float.is_truthy());
        assert!(FieldValue::from(-3).is_truthy());
    }

    #[test]
    fn string_zero_is_truthy() {
        assert!(FieldValue::from("0").is_truthy());
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let values: EventFieldValues =
            serde_json::from_str(r#"{"sender": "A", "amount": 5, "tier": "2000"}"#).unwrap();

        assert_eq!(values.get("sender"), Some(&FieldValue::from("A")));
        assert_eq!(values.get("amount"), Some(&FieldValue::from(5)));
        assert_eq!(values.get("tier"), Some(&FieldValue::from("2000")));
    }

    #[test]
    fn value_or_falls_back_on_missing_and_empty() {
        let values = EventFieldValues::new().with("sender", "");
        assert_eq!(values.value_or("sender", "fallback"), "fallback");
        assert_eq!(values.value_or("message", "fallback"), "fallback");
    }

    #[test]
    fn value_or_keeps_numbers_as_numbers() {
        let values = EventFieldValues::new().with("tier", 2000);
        assert_eq!(values.value_or("tier", "1000"), FieldValue::from(2000));
        assert_ne!(values.value_or("tier", "1000"), "2000");
    }

    #[test]
    fn value_or_keeps_filled_in_values() {
        let values = EventFieldValues::new().with("amount", 7);
        assert_eq!(values.value_or("amount", 1), FieldValue::from(7));

        let values = EventFieldValues::new().with("amount", 0);
        assert_eq!(values.value_or("amount", 1), FieldValue::from(1));
    }

    #[test]
    fn collects_from_pairs() {
        let values: EventFieldValues = [("sender", "A"), ("receiver", "B")].into_iter().collect();
        assert_eq!(values.value_or("receiver", "someone"), "B");
    }
}
