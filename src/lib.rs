//! Nonprofit Backend API Library
//!
//! This library crate defines the modules behind the nonprofit site's backend.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is a thin validation-and-persistence layer over a document store:
//!
//! - **`schema`**: Statically-typed records for every entity crossing the API
//!   boundary (programs, events, contact messages, volunteer applications,
//!   subscribers) plus the validation functions enforcing their constraints.
//! - **`storage`**: The persistence gateway. A `DocumentStore` trait over the
//!   MongoDB driver, with an in-memory implementation backing the tests.
//! - **`api`**: The HTTP routing layer. Axum handlers that validate payloads,
//!   call the gateway, shape responses, and map errors to status codes.
//! - **`config`**: Environment-driven settings, read once at startup.

pub mod api;
pub mod config;
pub mod schema;
pub mod storage;
