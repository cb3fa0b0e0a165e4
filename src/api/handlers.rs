use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mongodb::bson::{self, Document};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{env_is_set, ENV_DATABASE_NAME, ENV_DATABASE_URL};
use crate::schema::validate::ValidationError;
use crate::schema::{FormSchema, Schema};
use crate::storage::gateway::SharedStore;

use super::protocol::{DiagnosticsReport, ErrorBody, StatusMessage, SubmitResponse};

/// Upper bound on records returned by the content list routes.
pub const LIST_LIMIT: i64 = 50;
/// Upper bound on collection names included in the diagnostic report.
pub const DIAGNOSTIC_COLLECTION_LIMIT: usize = 10;

pub async fn handle_root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Nonprofit backend is running".to_string(),
    })
}

pub async fn handle_list<T>(Extension(store): Extension<SharedStore>) -> Response
where
    T: Schema + DeserializeOwned + Serialize,
{
    let documents = match store.list(T::COLLECTION, Document::new(), LIST_LIMIT).await {
        Ok(documents) => documents,
        Err(err) => {
            tracing::error!("Failed to list {}: {}", T::COLLECTION, err);
            return persistence_failure();
        }
    };

    let mut records = Vec::with_capacity(documents.len());
    for document in documents {
        match into_public_record::<T>(document) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::error!("Malformed document in {}: {}", T::COLLECTION, err);
                return persistence_failure();
            }
        }
    }

    (StatusCode::OK, Json(records)).into_response()
}

pub async fn handle_submit<T>(
    Extension(store): Extension<SharedStore>,
    Json(payload): Json<Value>,
) -> Response
where
    T: FormSchema + Serialize,
{
    let record = match T::from_value(&payload) {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!("Rejected {} submission: {}", T::COLLECTION, err);
            return validation_failure(err);
        }
    };

    let document = match bson::to_document(&record) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!("Failed to encode {} record: {}", T::COLLECTION, err);
            return persistence_failure();
        }
    };

    match store.create(T::COLLECTION, document).await {
        Ok(id) => (
            StatusCode::OK,
            Json(SubmitResponse {
                status: "ok".to_string(),
                id,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to store {} record: {}", T::COLLECTION, err);
            persistence_failure()
        }
    }
}

pub async fn handle_diagnostics(Extension(store): Extension<SharedStore>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence_label(env_is_set(ENV_DATABASE_URL)),
        database_name: presence_label(env_is_set(ENV_DATABASE_NAME)),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match store.collection_names().await {
        Ok(names) => {
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected".to_string();
            report.collections = names
                .into_iter()
                .take(DIAGNOSTIC_COLLECTION_LIMIT)
                .collect();
        }
        Err(err) => {
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate(&err.to_string(), 50)
            );
        }
    }

    Json(report)
}

/// Decodes a stored document into its public record, dropping the
/// store-internal `_id`. The identifier is a storage artifact, not part of
/// the public schema.
fn into_public_record<T: DeserializeOwned>(mut document: Document) -> Result<T, bson::de::Error> {
    document.remove("_id");
    bson::from_document(document)
}

fn validation_failure(err: ValidationError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: "validation failed".to_string(),
            details: Some(err.errors),
        }),
    )
        .into_response()
}

fn persistence_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "persistence failure".to_string(),
            details: None,
        }),
    )
        .into_response()
}

fn presence_label(set: bool) -> String {
    if set {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
