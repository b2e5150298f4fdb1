//! Startup wiring: candidate schemas and the validation-rule registry.
//!
//! Everything here is built once in `build_app` and shared immutably via
//! `Extension<Arc<BindServices>>`; nothing is mutated after startup.

use bindery_core::{rules, FieldSpec, FieldType, Schema, ValidatorRegistry};

/// Shared immutable state handed to handlers.
#[derive(Debug)]
pub struct BindServices {
    candidates: Vec<Schema>,
    booking: Schema,
    registry: ValidatorRegistry,
}

impl BindServices {
    pub fn build() -> Self {
        // Order matters: a payload satisfying several candidates resolves to
        // the earliest one.
        let candidates = vec![
            Schema::new("formA").required_text("foo"),
            Schema::new("formB").required_text("bar"),
        ];

        let booking = Schema::new("booking")
            .field(
                FieldSpec::new("check_in", FieldType::Date)
                    .required()
                    .rule("not_in_past"),
            )
            .field(
                FieldSpec::new("check_out", FieldType::Date)
                    .required()
                    .rule("not_in_past")
                    .rule("after_check_in"),
            );

        let mut registry = ValidatorRegistry::new();
        registry.register("not_in_past", rules::not_in_past());
        registry.register("after_check_in", rules::after_field("check_in"));

        Self {
            candidates,
            booking,
            registry,
        }
    }

    pub fn candidates(&self) -> &[Schema] {
        &self.candidates
    }

    pub fn booking_schema(&self) -> &Schema {
        &self.booking
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }
}
