//! Database abstraction layer for LightBnB
//!
//! Shared statement text and business rules live in the operation modules;
//! each database directory only executes them.
//!
//! # Architecture
//!
//! ```text
//! Common logic (user_read.rs, property_query.rs, property_insert.rs, ...)
//!     ↓
//! Database-specific implementations
//!     ├── postgres/ (PostgreSQL-specific code)
//!     └── sqlite/   (SQLite-specific code)
//! ```

pub mod config;
pub mod postgres;
pub mod property_insert;
pub mod property_query;
pub mod property_read;
pub mod reservation_read;
pub mod sqlite;
pub mod user_insert;
pub mod user_read;

pub use config::DatabaseBackendConfig;

pub use property_query::{build_property_query, build_property_query_for, PropertyQuery, QueryParam};

pub use user_read::UnifiedUserReadOps;

pub use user_insert::UnifiedUserInsertOps;

pub use reservation_read::UnifiedReservationReadOps;

pub use property_read::UnifiedPropertyReadOps;

pub use property_insert::UnifiedPropertyInsertOps;

pub use postgres::PostgresBackend;
pub use sqlite::SqliteBackend;
