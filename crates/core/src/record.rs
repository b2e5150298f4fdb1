//! Typed values produced by a successful bind.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One coerced field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Whether this is the format's notion of an empty value: the empty
    /// string, zero numerics, or `false`. Dates are never empty; a value
    /// that parsed as a date was present and well-formed.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Integer(n) => *n == 0,
            Self::Float(f) => *f == 0.0,
            Self::Bool(b) => !b,
            Self::Date(_) | Self::DateTime(_) => false,
        }
    }

    /// The calendar date carried by date-flavored values.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(t) => Some(t.date_naive()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// The populated result of binding one schema: declared field name → value.
///
/// Only declared fields appear; undeclared payload fields are ignored.
pub type BoundRecord = BTreeMap<String, FieldValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_are_empty() {
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(FieldValue::Integer(0).is_empty());
        assert!(FieldValue::Float(0.0).is_empty());
        assert!(FieldValue::Bool(false).is_empty());
    }

    #[test]
    fn populated_values_are_not_empty() {
        assert!(!FieldValue::Text("x".into()).is_empty());
        assert!(!FieldValue::Integer(-1).is_empty());
        assert!(!FieldValue::Bool(true).is_empty());
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert!(!FieldValue::Date(date).is_empty());
    }

    #[test]
    fn as_date_covers_both_date_flavors() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(FieldValue::Date(date).as_date(), Some(date));

        let ts = date.and_hms_opt(12, 30, 0).unwrap().and_utc();
        assert_eq!(FieldValue::DateTime(ts).as_date(), Some(date));

        assert_eq!(FieldValue::Integer(3).as_date(), None);
    }
}
