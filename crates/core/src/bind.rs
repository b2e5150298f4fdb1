//! The content-negotiating binder.
//!
//! Candidate schemas are tried in list order and the first one whose fields
//! all validate wins. A payload satisfying several candidates always
//! resolves to the earliest; the list order is the tiebreaker and must not
//! be reordered by specificity or field count.

use chrono::{NaiveDate, Utc};

use crate::error::BindError;
use crate::payload::{self, PayloadFormat, RawRecord};
use crate::record::{BoundRecord, FieldValue};
use crate::rules::ValidatorRegistry;
use crate::schema::{FieldType, Schema};

/// Outcome of negotiating a payload against a candidate list.
#[derive(Debug, Clone, PartialEq)]
pub enum BindResult {
    /// The first candidate whose fields all validated.
    Matched {
        schema: String,
        record: BoundRecord,
    },
    /// Every candidate failed.
    NoMatch,
}

impl BindResult {
    /// Name of the matched schema, if any.
    pub fn schema(&self) -> Option<&str> {
        match self {
            Self::Matched { schema, .. } => Some(schema),
            Self::NoMatch => None,
        }
    }
}

/// Bind a payload against a single schema.
pub fn try_bind(
    bytes: &[u8],
    format: PayloadFormat,
    schema: &Schema,
    registry: &ValidatorRegistry,
) -> Result<BoundRecord, BindError> {
    let raw = payload::decode(bytes, format)?;
    bind_record(&raw, format, schema, registry)
}

/// Try each candidate in order and report the first that fully binds.
///
/// A failed candidate is discarded whole, with no partial application,
/// and only exhausting the list yields [`BindResult::NoMatch`]. A payload
/// that does not decode at all cannot match anything.
pub fn negotiate(
    bytes: &[u8],
    format: PayloadFormat,
    candidates: &[Schema],
    registry: &ValidatorRegistry,
) -> BindResult {
    let Ok(raw) = payload::decode(bytes, format) else {
        return BindResult::NoMatch;
    };

    for schema in candidates {
        if let Ok(record) = bind_record(&raw, format, schema, registry) {
            return BindResult::Matched {
                schema: schema.name().to_string(),
                record,
            };
        }
    }

    BindResult::NoMatch
}

fn bind_record(
    raw: &RawRecord,
    format: PayloadFormat,
    schema: &Schema,
    registry: &ValidatorRegistry,
) -> Result<BoundRecord, BindError> {
    let mut record = BoundRecord::new();

    for spec in schema.fields() {
        match raw.get(&spec.name) {
            None | Some(serde_json::Value::Null) => {
                if spec.required {
                    return Err(BindError::MissingField(spec.name.clone()));
                }
            }
            Some(value) => {
                let coerced =
                    coerce(value, spec.ty, format).ok_or_else(|| BindError::TypeMismatch {
                        field: spec.name.clone(),
                        expected: spec.ty.name(),
                    })?;

                if spec.required && coerced.is_empty() {
                    return Err(BindError::EmptyField(spec.name.clone()));
                }

                record.insert(spec.name.clone(), coerced);
            }
        }
    }

    // Rules run after the whole record is coerced so cross-field rules see
    // their siblings regardless of declaration order.
    for spec in schema.fields() {
        let Some(value) = record.get(&spec.name) else {
            continue;
        };
        for rule_name in &spec.rules {
            let rule = registry
                .get(rule_name)
                .ok_or_else(|| BindError::UnknownRule(rule_name.clone()))?;
            if !rule(value, &record) {
                return Err(BindError::RuleFailed {
                    field: spec.name.clone(),
                    rule: rule_name.clone(),
                });
            }
        }
    }

    Ok(record)
}

/// Coerce one raw value to the declared field type.
///
/// JSON payloads must already carry the declared type; text formats (form,
/// XML) deliver strings that are parsed per the declaration. Dates are
/// string-borne in every format.
fn coerce(value: &serde_json::Value, ty: FieldType, format: PayloadFormat) -> Option<FieldValue> {
    use serde_json::Value;

    let typed = format.is_self_describing();

    match (ty, value) {
        (FieldType::Text, Value::String(s)) => Some(FieldValue::Text(s.clone())),

        (FieldType::Integer, Value::Number(n)) => n.as_i64().map(FieldValue::Integer),
        (FieldType::Integer, Value::String(s)) if !typed => {
            s.trim().parse().ok().map(FieldValue::Integer)
        }

        (FieldType::Float, Value::Number(n)) => n.as_f64().map(FieldValue::Float),
        (FieldType::Float, Value::String(s)) if !typed => {
            s.trim().parse().ok().map(FieldValue::Float)
        }

        (FieldType::Bool, Value::Bool(b)) => Some(FieldValue::Bool(*b)),
        (FieldType::Bool, Value::String(s)) if !typed => {
            s.trim().parse().ok().map(FieldValue::Bool)
        }

        (FieldType::Date, Value::String(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .ok()
            .map(FieldValue::Date),

        (FieldType::DateTime, Value::String(s)) => chrono::DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|t| FieldValue::DateTime(t.with_timezone(&Utc))),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;
    use crate::schema::FieldSpec;
    use std::sync::Arc;

    fn candidates() -> Vec<Schema> {
        vec![
            Schema::new("formA").required_text("foo"),
            Schema::new("formB").required_text("bar"),
        ]
    }

    fn empty_registry() -> ValidatorRegistry {
        ValidatorRegistry::new()
    }

    #[test]
    fn payload_matching_first_candidate() {
        let result = negotiate(
            br#"{"foo":"x"}"#,
            PayloadFormat::Json,
            &candidates(),
            &empty_registry(),
        );
        assert_eq!(result.schema(), Some("formA"));
    }

    #[test]
    fn payload_matching_second_candidate() {
        let result = negotiate(
            br#"{"bar":"y"}"#,
            PayloadFormat::Json,
            &candidates(),
            &empty_registry(),
        );
        assert_eq!(result.schema(), Some("formB"));
    }

    #[test]
    fn payload_matching_neither_candidate() {
        let result = negotiate(
            br#"{}"#,
            PayloadFormat::Json,
            &candidates(),
            &empty_registry(),
        );
        assert_eq!(result, BindResult::NoMatch);
    }

    #[test]
    fn ambiguous_payload_resolves_to_first_candidate() {
        let result = negotiate(
            br#"{"foo":"x","bar":"y"}"#,
            PayloadFormat::Json,
            &candidates(),
            &empty_registry(),
        );
        assert_eq!(result.schema(), Some("formA"));
    }

    #[test]
    fn form_and_xml_payloads_resolve_like_json() {
        let registry = empty_registry();
        let cands = candidates();

        let form = negotiate(b"bar=y", PayloadFormat::Form, &cands, &registry);
        assert_eq!(form.schema(), Some("formB"));

        let xml = negotiate(
            b"<root><foo>x</foo></root>",
            PayloadFormat::Xml,
            &cands,
            &registry,
        );
        assert_eq!(xml.schema(), Some("formA"));
    }

    #[test]
    fn undecodable_payload_matches_nothing() {
        let result = negotiate(
            b"{not json",
            PayloadFormat::Json,
            &candidates(),
            &empty_registry(),
        );
        assert_eq!(result, BindResult::NoMatch);
    }

    #[test]
    fn required_empty_string_fails_the_candidate() {
        let result = negotiate(
            br#"{"foo":""}"#,
            PayloadFormat::Json,
            &candidates(),
            &empty_registry(),
        );
        assert_eq!(result, BindResult::NoMatch);

        let schema = Schema::new("formA").required_text("foo");
        let err = try_bind(
            br#"{"foo":""}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap_err();
        assert_eq!(err, BindError::EmptyField("foo".into()));
    }

    #[test]
    fn required_zero_integer_fails() {
        let schema = Schema::new("counter")
            .field(FieldSpec::new("count", FieldType::Integer).required());

        let err = try_bind(
            br#"{"count":0}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap_err();
        assert_eq!(err, BindError::EmptyField("count".into()));

        let record = try_bind(
            br#"{"count":7}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap();
        assert_eq!(record["count"], FieldValue::Integer(7));
    }

    #[test]
    fn json_is_strict_about_declared_types() {
        let schema = Schema::new("counter")
            .field(FieldSpec::new("count", FieldType::Integer).required());

        // A JSON string is not an integer...
        let err = try_bind(
            br#"{"count":"7"}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));

        // ...but a form value is text by nature and parses.
        let record = try_bind(b"count=7", PayloadFormat::Form, &schema, &empty_registry()).unwrap();
        assert_eq!(record["count"], FieldValue::Integer(7));
    }

    #[test]
    fn optional_malformed_field_still_discards_the_candidate() {
        let schema = Schema::new("mixed")
            .required_text("foo")
            .field(FieldSpec::new("age", FieldType::Integer));

        let err = try_bind(
            br#"{"foo":"x","age":"not a number"}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));
    }

    #[test]
    fn missing_optional_field_is_fine() {
        let schema = Schema::new("mixed")
            .required_text("foo")
            .field(FieldSpec::new("age", FieldType::Integer));

        let record = try_bind(
            br#"{"foo":"x"}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap();
        assert_eq!(record.len(), 1);
        assert!(!record.contains_key("age"));
    }

    #[test]
    fn undeclared_fields_are_ignored() {
        let schema = Schema::new("formA").required_text("foo");
        let record = try_bind(
            br#"{"foo":"x","extra":123}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn rules_run_after_coercion_with_cross_field_access() {
        let schema = Schema::new("booking")
            .field(
                FieldSpec::new("check_out", FieldType::Date)
                    .required()
                    .rule("after_check_in"),
            )
            .field(FieldSpec::new("check_in", FieldType::Date).required());

        let mut registry = ValidatorRegistry::new();
        registry.register("after_check_in", rules::after_field("check_in"));

        // check_out declared before check_in; the rule still sees both.
        let record = try_bind(
            b"check_in=2030-01-10&check_out=2030-01-12",
            PayloadFormat::Form,
            &schema,
            &registry,
        )
        .unwrap();
        assert_eq!(record.len(), 2);

        let err = try_bind(
            b"check_in=2030-01-10&check_out=2030-01-09",
            PayloadFormat::Form,
            &schema,
            &registry,
        )
        .unwrap_err();
        assert_eq!(
            err,
            BindError::RuleFailed {
                field: "check_out".into(),
                rule: "after_check_in".into(),
            }
        );
    }

    #[test]
    fn unknown_rule_fails_the_candidate_not_the_process() {
        let schema = Schema::new("formA")
            .field(FieldSpec::new("foo", FieldType::Text).required().rule("nope"));

        let err = try_bind(
            br#"{"foo":"x"}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap_err();
        assert_eq!(err, BindError::UnknownRule("nope".into()));

        // Negotiation just advances past it.
        let cands = vec![schema, Schema::new("formB").required_text("foo")];
        let result = negotiate(
            br#"{"foo":"x"}"#,
            PayloadFormat::Json,
            &cands,
            &empty_registry(),
        );
        assert_eq!(result.schema(), Some("formB"));
    }

    #[test]
    fn rule_rejection_advances_to_later_candidate() {
        let mut registry = ValidatorRegistry::new();
        registry.register(
            "never",
            Arc::new(|_: &FieldValue, _: &BoundRecord| false) as crate::rules::Rule,
        );

        let cands = vec![
            Schema::new("strictA")
                .field(FieldSpec::new("foo", FieldType::Text).required().rule("never")),
            Schema::new("looseA").required_text("foo"),
        ];

        let result = negotiate(br#"{"foo":"x"}"#, PayloadFormat::Json, &cands, &registry);
        assert_eq!(result.schema(), Some("looseA"));
    }

    #[test]
    fn matched_record_carries_coerced_values() {
        let schema = Schema::new("event").field(
            FieldSpec::new("at", FieldType::DateTime).required(),
        );

        let record = try_bind(
            br#"{"at":"2030-01-10T12:30:00Z"}"#,
            PayloadFormat::Json,
            &schema,
            &empty_registry(),
        )
        .unwrap();

        let FieldValue::DateTime(ts) = &record["at"] else {
            panic!("expected datetime value");
        };
        assert_eq!(ts.to_rfc3339(), "2030-01-10T12:30:00+00:00");
    }

    #[test]
    fn repeated_invocations_are_identical() {
        let cands = candidates();
        let registry = empty_registry();
        let payload = br#"{"foo":"x","bar":"y"}"#;

        let first = negotiate(payload, PayloadFormat::Json, &cands, &registry);
        let second = negotiate(payload, PayloadFormat::Json, &cands, &registry);
        assert_eq!(first, second);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// A payload carrying both candidates' required fields always
            /// resolves to the first candidate, whatever the values are.
            #[test]
            fn first_match_wins_on_ambiguous_payloads(
                foo in "[a-zA-Z0-9]{1,20}",
                bar in "[a-zA-Z0-9]{1,20}",
            ) {
                let payload = serde_json::json!({ "foo": foo, "bar": bar }).to_string();
                let result = negotiate(
                    payload.as_bytes(),
                    PayloadFormat::Json,
                    &candidates(),
                    &empty_registry(),
                );
                prop_assert_eq!(result.schema(), Some("formA"));
            }

            /// Negotiation is a pure function of its inputs.
            #[test]
            fn negotiation_is_idempotent(
                key in "(foo|bar|baz)",
                value in "[a-zA-Z0-9]{0,20}",
            ) {
                let mut object = serde_json::Map::new();
                object.insert(key, serde_json::Value::String(value));
                let payload = serde_json::Value::Object(object).to_string();
                let cands = candidates();
                let registry = empty_registry();

                let first = negotiate(payload.as_bytes(), PayloadFormat::Json, &cands, &registry);
                let second = negotiate(payload.as_bytes(), PayloadFormat::Json, &cands, &registry);
                prop_assert_eq!(first, second);
            }

            /// Extra undeclared fields never change the verdict.
            #[test]
            fn undeclared_fields_never_flip_the_match(
                extra_key in "[c-e][a-z]{3,10}",
                extra_value in "[a-zA-Z0-9]{0,20}",
            ) {
                let bare = serde_json::json!({ "bar": "y" }).to_string();
                let mut object = serde_json::Map::new();
                object.insert("bar".to_string(), serde_json::Value::String("y".into()));
                object.insert(extra_key, serde_json::Value::String(extra_value));
                let noisy = serde_json::Value::Object(object).to_string();

                let cands = candidates();
                let registry = empty_registry();

                let bare = negotiate(bare.as_bytes(), PayloadFormat::Json, &cands, &registry);
                let noisy = negotiate(noisy.as_bytes(), PayloadFormat::Json, &cands, &registry);
                prop_assert_eq!(bare.schema(), noisy.schema());
            }
        }
    }
}
