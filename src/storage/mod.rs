//! Persistence Gateway Module
//!
//! The boundary between the routing layer and the document store.
//!
//! ## Core Concepts
//! - **Contract**: `DocumentStore` exposes exactly what the API needs:
//!   insert one document, list up to a cap, and (for diagnostics) name the
//!   collections present.
//! - **Production**: `MongoStore` speaks to MongoDB through the official
//!   driver; the connection is opened once at startup and shared read-only.
//! - **Testing**: `MemoryStore` implements the same contract in process so
//!   handlers can be exercised without a running database.

pub mod gateway;
pub mod memory;
pub mod mongo;
