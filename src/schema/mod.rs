//! Validation Schemas Module
//!
//! Defines the structural contract for every entity crossing the API boundary.
//!
//! ## Overview
//! Each entity is a plain serde record bound to the document-store collection
//! that persists it. Form entities additionally know how to build themselves
//! from a raw JSON payload, enforcing their field constraints and reporting
//! every violation at once.
//!
//! ## Submodules
//! - **`types`**: The entity records and their collection bindings.
//! - **`validate`**: Field extraction helpers, the email grammar check, and
//!   the form-record validation logic.

pub mod types;
pub mod validate;


use serde_json::Value;

use self::validate::ValidationError;

/// Binds a record type to the collection that persists it.
pub trait Schema {
    /// Collection name: the lowercase entity name.
    const COLLECTION: &'static str;
}

/// A record accepted from a visitor form submission.
pub trait FormSchema: Schema + Sized {
    /// Builds a typed record from a raw JSON payload.
    ///
    /// On failure the error lists every violated field, not just the first.
    fn from_value(value: &Value) -> Result<Self, ValidationError>;
}
