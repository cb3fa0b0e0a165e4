//! API Response Contracts
//!
//! DTOs serialized into HTTP response bodies. Request payloads arrive as raw
//! JSON and are typed by the schema module instead.

use serde::Serialize;

use crate::schema::validate::FieldError;

/// Fixed acknowledgement returned by the root route.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

/// Acknowledgement for a successful form submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: String,
    /// Identifier the store generated for the new record.
    pub id: String,
}

/// Error body for rejected requests.
///
/// `details` carries one entry per violated field on validation failures and
/// is omitted on persistence failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Report returned by the diagnostic route.
///
/// Human-readable status strings, the collection names found in the store
/// (capped to 10), and presence checks for the connection environment
/// variables. Variable values are never included.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
