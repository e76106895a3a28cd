pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod startup;

// Re-export commonly used types for easier access
pub use backend::database::{build_property_query, PropertyQuery, QueryParam};
pub use models::{FilterCriteria, NewProperty, NewUser, Property, PropertyListing, Reservation, User};
