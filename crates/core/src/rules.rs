//! Named validation rules held in an explicit registry.
//!
//! The registry is built once at startup and handed to the binder; nothing
//! here is process-global state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::Utc;

use crate::record::{BoundRecord, FieldValue};

/// A single validation rule.
///
/// Receives the coerced field value and the whole bound record, so
/// cross-field rules can read their siblings.
pub type Rule = Arc<dyn Fn(&FieldValue, &BoundRecord) -> bool + Send + Sync>;

/// Registry of named rules referenced by [`crate::schema::FieldSpec::rules`].
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    rules: HashMap<String, Rule>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, rule: Rule) -> &mut Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ValidatorRegistry")
            .field("rules", &names)
            .finish()
    }
}

/// Date values must not lie before today.
///
/// Non-date values pass; the rule only constrains the types it understands.
pub fn not_in_past() -> Rule {
    Arc::new(|value: &FieldValue, _record: &BoundRecord| match value.as_date() {
        Some(date) => date >= Utc::now().date_naive(),
        None => true,
    })
}

/// The value must be a date strictly after the named sibling field.
///
/// Fails when either side is missing or not date-flavored.
pub fn after_field(other: impl Into<String>) -> Rule {
    let other = other.into();
    Arc::new(move |value: &FieldValue, record: &BoundRecord| {
        let (Some(this), Some(sibling)) = (
            value.as_date(),
            record.get(&other).and_then(FieldValue::as_date),
        ) else {
            return false;
        };
        this > sibling
    })
}
