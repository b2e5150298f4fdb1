//! `bindery-core`: content-negotiating request binder.
//!
//! Pure classification logic (no I/O, no framework types): declared schemas,
//! payload decoding for the supported wire formats, and the ordered-candidate
//! negotiation that decides which schema an incoming payload satisfies.

pub mod bind;
pub mod error;
pub mod payload;
pub mod record;
pub mod rules;
pub mod schema;

pub use bind::{negotiate, try_bind, BindResult};
pub use error::{BindError, DecodeError};
pub use payload::PayloadFormat;
pub use record::{BoundRecord, FieldValue};
pub use rules::{Rule, ValidatorRegistry};
pub use schema::{FieldSpec, FieldType, Schema};
