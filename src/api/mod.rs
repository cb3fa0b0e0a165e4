//! HTTP Routing Layer
//!
//! Maps the public routes onto schema validation and the persistence gateway.
//!
//! ## Routes
//! - `GET /`: fixed acknowledgement.
//! - `GET /api/programs`, `GET /api/events`: published content, capped at 50
//!   records, store identifiers stripped.
//! - `POST /api/contact`, `POST /api/volunteer`, `POST /api/subscribe`:
//!   visitor form submissions; 422 with per-field detail on validation
//!   failure, 500 on persistence failure.
//! - `GET /test`: database reachability report; degrades gracefully and
//!   reports failures as data instead of raising.
//!
//! ## Submodules
//! - **`handlers`**: Request handlers for the Axum web server.
//! - **`protocol`**: Response DTOs and error bodies.
//! - **`cors`**: Permissive cross-origin middleware.

pub mod cors;
pub mod handlers;
pub mod protocol;

#[cfg(test)]
mod tests;
