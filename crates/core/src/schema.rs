//! Declared request shapes.
//!
//! A [`Schema`] is built once at process start and never mutated afterwards;
//! handlers share schemas by reference for the lifetime of the process.

/// Semantic type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Bool,
    /// Calendar date, `%Y-%m-%d`.
    Date,
    /// RFC 3339 timestamp.
    DateTime,
}

impl FieldType {
    /// Name used in bind diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::DateTime => "datetime",
        }
    }
}

/// One declared field of a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: FieldType,
    pub required: bool,
    /// Names of validation rules, resolved against a
    /// [`crate::rules::ValidatorRegistry`] at bind time.
    pub rules: Vec<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            rules: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn rule(mut self, name: impl Into<String>) -> Self {
        self.rules.push(name.into());
        self
    }
}

/// A named, ordered set of field declarations describing one accepted
/// request shape.
///
/// Field order is preserved: validation reports the first failing field
/// deterministically, and cross-field rules may rely on their siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Shorthand for the most common declaration.
    pub fn required_text(self, name: impl Into<String>) -> Self {
        self.field(FieldSpec::new(name, FieldType::Text).required())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}
