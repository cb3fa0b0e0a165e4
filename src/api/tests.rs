//! API Module Tests
//!
//! Drives the HTTP handlers directly against the in-memory gateway and
//! asserts on status codes and response bodies.
//!
//! ## Test Scopes
//! - **Content routes**: identifier stripping, the 50-record cap, persistence failures.
//! - **Form routes**: acknowledgements, validation rejections, no write on reject.
//! - **Root & diagnostics**: fixed acknowledgement; graceful degradation.

#[cfg(test)]
mod tests {
    use crate::api::handlers::{handle_diagnostics, handle_list, handle_root, handle_submit};
    use crate::schema::types::{ContactMessage, Event, Program, Subscriber, VolunteerApplication};
    use crate::storage::gateway::{DocumentStore, SharedStore, StoreError};
    use crate::storage::memory::MemoryStore;
    use async_trait::async_trait;
    use axum::extract::Extension;
    use axum::http::StatusCode;
    use axum::response::Response;
    use axum::Json;
    use mongodb::bson::{doc, Document};
    use serde_json::{json, Value};
    use std::sync::Arc;

    /// Gateway double whose every operation fails with a connection error.
    struct UnreachableStore;

    #[async_trait]
    impl DocumentStore for UnreachableStore {
        async fn create(
            &self,
            _collection: &str,
            _document: Document,
        ) -> Result<String, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn list(
            &self,
            _collection: &str,
            _filter: Document,
            _limit: i64,
        ) -> Result<Vec<Document>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn memory_store() -> (Arc<MemoryStore>, SharedStore) {
        let store = Arc::new(MemoryStore::new());
        let shared: SharedStore = store.clone();
        (store, shared)
    }

    fn unreachable_store() -> SharedStore {
        Arc::new(UnreachableStore)
    }

    async fn response_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body should be readable");
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    }

    // ============================================================
    // ROOT ROUTE
    // ============================================================

    #[tokio::test]
    async fn test_root_returns_fixed_acknowledgement() {
        let Json(body) = handle_root().await;
        assert_eq!(body.message, "Nonprofit backend is running");
    }

    // ============================================================
    // CONTENT ROUTES
    // ============================================================

    #[tokio::test]
    async fn test_list_programs_strips_internal_id() {
        let (store, shared) = memory_store();
        store
            .create(
                "program",
                doc! {
                    "title": "After-School Coding Club",
                    "summary": "Weekly coding sessions",
                    "age_group": "Ages 8-12",
                    "topics": ["scratch", "python"],
                },
            )
            .await
            .unwrap();

        let response = handle_list::<Program>(Extension(shared)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        let records = body.as_array().expect("body should be an array");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["title"], "After-School Coding Club");
        assert_eq!(records[0]["topics"], json!(["scratch", "python"]));
        assert!(
            records[0].get("_id").is_none(),
            "Store identifiers must not leak into responses"
        );
    }

    #[tokio::test]
    async fn test_list_events_caps_at_fifty_records() {
        let (store, shared) = memory_store();
        for index in 0..55 {
            store
                .create(
                    "event",
                    doc! {
                        "title": format!("Event {}", index),
                        "description": "An event",
                        "date": "2026-09-01",
                        "location": "Online",
                    },
                )
                .await
                .unwrap();
        }

        let response = handle_list::<Event>(Extension(shared)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_list_applies_record_defaults() {
        let (store, shared) = memory_store();
        store
            .create(
                "program",
                doc! {
                    "title": "Robotics Lab",
                    "summary": "Build and program robots",
                    "age_group": "Ages 13-17",
                },
            )
            .await
            .unwrap();

        let response = handle_list::<Program>(Extension(shared)).await;
        let body = response_json(response).await;
        assert_eq!(body[0]["topics"], json!([]));
        assert_eq!(body[0]["image"], Value::Null);
    }

    #[tokio::test]
    async fn test_list_persistence_failure_returns_500() {
        let response = handle_list::<Program>(Extension(unreachable_store())).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["error"], "persistence failure");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_list_malformed_document_returns_500() {
        let (store, shared) = memory_store();
        store
            .create("event", doc! { "title": "No other fields" })
            .await
            .unwrap();

        let response = handle_list::<Event>(Extension(shared)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    // ============================================================
    // FORM ROUTES
    // ============================================================

    #[tokio::test]
    async fn test_submit_contact_valid_payload() {
        let (store, shared) = memory_store();
        let payload = json!({
            "name": "Ana",
            "email": "ana@example.com",
            "message": "Hello there",
        });

        let response =
            handle_submit::<ContactMessage>(Extension(shared), Json(payload)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
        let id = body["id"].as_str().unwrap();
        assert!(!id.is_empty());

        assert_eq!(store.count("contactmessage"), 1);
        let stored = store.list("contactmessage", doc! {}, 50).await.unwrap();
        assert_eq!(stored[0].get_str("email").unwrap(), "ana@example.com");
    }

    #[tokio::test]
    async fn test_submit_contact_invalid_email_rejected_without_write() {
        let (store, shared) = memory_store();
        let payload = json!({
            "name": "Ana",
            "email": "not-an-email",
            "message": "Hello there",
        });

        let response =
            handle_submit::<ContactMessage>(Extension(shared), Json(payload)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = response_json(response).await;
        assert_eq!(body["error"], "validation failed");
        let details = body["details"].as_array().unwrap();
        assert!(details.iter().any(|entry| entry["field"] == "email"));

        assert_eq!(store.count("contactmessage"), 0, "Rejected payloads must not be written");
    }

    #[tokio::test]
    async fn test_submit_contact_short_message_rejected_without_write() {
        let (store, shared) = memory_store();
        let payload = json!({
            "name": "Ana",
            "email": "ana@example.com",
            "message": "Hi",
        });

        let response =
            handle_submit::<ContactMessage>(Extension(shared), Json(payload)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.count("contactmessage"), 0);
    }

    #[tokio::test]
    async fn test_submit_contact_reports_every_violation() {
        let (_store, shared) = memory_store();

        let response =
            handle_submit::<ContactMessage>(Extension(shared), Json(json!({}))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = response_json(response).await;
        let fields: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|entry| entry["field"].as_str())
            .collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"message"));
    }

    #[tokio::test]
    async fn test_submit_volunteer_persists_interests_in_order() {
        let (store, shared) = memory_store();
        let payload = json!({
            "name": "Bob",
            "email": "bob@example.com",
            "interests": ["mentoring", "events", "curriculum"],
        });

        let response =
            handle_submit::<VolunteerApplication>(Extension(shared), Json(payload)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let stored = store
            .list("volunteerapplication", doc! {}, 50)
            .await
            .unwrap();
        let interests: Vec<&str> = stored[0]
            .get_array("interests")
            .unwrap()
            .iter()
            .filter_map(|entry| entry.as_str())
            .collect();
        assert_eq!(interests, vec!["mentoring", "events", "curriculum"]);
    }

    #[tokio::test]
    async fn test_submit_subscriber_twice_creates_two_records() {
        let (store, shared) = memory_store();
        let payload = json!({ "email": "ana@example.com" });

        let first =
            handle_submit::<Subscriber>(Extension(shared.clone()), Json(payload.clone())).await;
        let second = handle_submit::<Subscriber>(Extension(shared), Json(payload)).await;
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);

        let first_id = response_json(first).await["id"].as_str().unwrap().to_string();
        let second_id = response_json(second).await["id"].as_str().unwrap().to_string();
        assert_ne!(first_id, second_id);
        assert_eq!(store.count("subscriber"), 2);
    }

    #[tokio::test]
    async fn test_submit_persistence_failure_returns_500() {
        let payload = json!({
            "name": "Ana",
            "email": "ana@example.com",
            "message": "Hello there",
        });

        let response =
            handle_submit::<ContactMessage>(Extension(unreachable_store()), Json(payload)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["error"], "persistence failure");
    }

    // ============================================================
    // DIAGNOSTIC ROUTE
    // ============================================================

    #[tokio::test]
    async fn test_diagnostics_reports_reachable_store() {
        let (store, shared) = memory_store();
        store
            .create("program", doc! { "title": "Coding Club" })
            .await
            .unwrap();

        let Json(report) = handle_diagnostics(Extension(shared)).await;
        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections, vec!["program"]);
    }

    #[tokio::test]
    async fn test_diagnostics_degrades_when_store_unreachable() {
        let Json(report) = handle_diagnostics(Extension(unreachable_store())).await;

        assert_eq!(report.backend, "✅ Running");
        assert!(
            report.database.starts_with("⚠️"),
            "Unreachable store should be reported inline, got `{}`",
            report.database
        );
        assert!(report.database.contains("Error"));
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_diagnostics_caps_collection_list() {
        let (store, shared) = memory_store();
        for index in 0..12 {
            store
                .create(&format!("collection{}", index), doc! { "seq": index })
                .await
                .unwrap();
        }

        let Json(report) = handle_diagnostics(Extension(shared)).await;
        assert_eq!(report.collections.len(), 10);
    }
}
