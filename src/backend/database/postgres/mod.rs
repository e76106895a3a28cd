//! PostgreSQL backend

pub mod backend_impl;
pub mod property_insert_impl;
pub mod property_read_impl;
pub mod reservation_read_impl;
pub mod schema;
pub mod user_insert_impl;
pub mod user_read_impl;

pub use backend_impl::PostgresBackend;
pub use property_insert_impl::PostgresPropertyInserter;
pub use property_read_impl::PostgresPropertyReader;
pub use reservation_read_impl::PostgresReservationReader;
pub use user_insert_impl::PostgresUserInserter;
pub use user_read_impl::PostgresUserReader;
