//! Reservation read operations

use crate::backend::DatabaseType;
use crate::error::AppResult;
use crate::models::Reservation;
use async_trait::async_trait;
use tracing::{debug, error};

use super::property_query::DEFAULT_LIMIT;

/// Statement listing one guest's reservations with the property's rating
///
/// Reservations on properties without reviews drop out of the inner join.
pub fn guest_reservations_sql(database_type: DatabaseType) -> String {
    format!(
        "SELECT reservations.id, properties.title, properties.cost_per_night, reservations.start_date, \
CAST(AVG(property_reviews.rating) AS DOUBLE PRECISION) AS average_rating \
FROM reservations \
JOIN properties ON properties.id = reservations.property_id \
JOIN property_reviews ON property_reviews.property_id = properties.id \
WHERE reservations.guest_id = {} \
GROUP BY reservations.id, properties.title, reservations.start_date, properties.cost_per_night \
ORDER BY reservations.start_date ASC \
LIMIT {}",
        database_type.placeholder(1),
        database_type.placeholder(2)
    )
}

/// Trait for reservation read operations
#[async_trait]
pub trait ReservationReader: Send + Sync {
    async fn find_reservations_by_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> AppResult<Vec<Reservation>>;
}

/// Unified reservation read operations
pub struct UnifiedReservationReadOps<T: ReservationReader> {
    reader: T,
}

impl<T: ReservationReader> UnifiedReservationReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    pub async fn get_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> AppResult<Vec<Reservation>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        debug!(guest_id, limit, "Listing reservations");
        self.reader
            .find_reservations_by_guest(guest_id, limit)
            .await
            .map_err(|e| {
                error!("Error querying database: {}", e);
                e
            })
    }
}
