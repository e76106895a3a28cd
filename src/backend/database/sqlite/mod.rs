//! SQLite backend

pub mod backend_impl;
pub mod property_insert_impl;
pub mod property_read_impl;
pub mod reservation_read_impl;
pub mod schema;
pub mod user_insert_impl;
pub mod user_read_impl;

pub use backend_impl::SqliteBackend;
pub use property_insert_impl::SqlitePropertyInserter;
pub use property_read_impl::SqlitePropertyReader;
pub use reservation_read_impl::SqliteReservationReader;
pub use user_insert_impl::SqliteUserInserter;
pub use user_read_impl::SqliteUserReader;
