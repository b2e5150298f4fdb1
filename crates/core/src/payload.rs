//! Raw payload decoding.
//!
//! JSON, XML, and form-encoded bodies all funnel into one flat
//! name → value map before schema validation. Text formats (form, XML) only
//! ever produce string values; JSON keeps its native scalar types so the
//! binder can hold them to the declared field types.

use std::collections::BTreeMap;

use crate::error::DecodeError;

/// Declared wire format of an incoming payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Xml,
    Form,
}

impl PayloadFormat {
    /// Map a MIME content type (parameters ignored) to a format.
    pub fn from_content_type(value: &str) -> Result<Self, DecodeError> {
        let mime = value
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "application/json" => Ok(Self::Json),
            "application/xml" | "text/xml" => Ok(Self::Xml),
            "application/x-www-form-urlencoded" => Ok(Self::Form),
            _ => Err(DecodeError::UnsupportedContentType(value.to_string())),
        }
    }

    /// Whether values arrive already typed (JSON) or as text to be parsed
    /// per the schema's field declarations (form, XML).
    pub fn is_self_describing(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Canonical decoded payload: field name → undifferentiated value.
pub type RawRecord = BTreeMap<String, serde_json::Value>;

/// Decode a payload in the declared format into a [`RawRecord`].
pub fn decode(bytes: &[u8], format: PayloadFormat) -> Result<RawRecord, DecodeError> {
    match format {
        PayloadFormat::Json => decode_json(bytes),
        PayloadFormat::Form => decode_form(bytes),
        PayloadFormat::Xml => decode_xml(bytes),
    }
}

fn decode_json(bytes: &[u8]) -> Result<RawRecord, DecodeError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| DecodeError::malformed("json", e.to_string()))?;

    match value {
        serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(DecodeError::NotAnObject),
    }
}

fn decode_form(bytes: &[u8]) -> Result<RawRecord, DecodeError> {
    // Query strings share this encoding, so the same decoder serves both.
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes)
        .map_err(|e| DecodeError::malformed("form", e.to_string()))?;

    // Last occurrence wins on repeated names.
    Ok(pairs
        .into_iter()
        .map(|(name, value)| (name, serde_json::Value::String(value)))
        .collect())
}

fn decode_xml(bytes: &[u8]) -> Result<RawRecord, DecodeError> {
    let text =
        std::str::from_utf8(bytes).map_err(|e| DecodeError::malformed("xml", e.to_string()))?;

    // Flat element children of the document root become the fields.
    let map: BTreeMap<String, String> =
        quick_xml::de::from_str(text).map_err(|e| DecodeError::malformed("xml", e.to_string()))?;

    Ok(map
        .into_iter()
        .map(|(name, value)| (name, serde_json::Value::String(value)))
        .collect())
}
