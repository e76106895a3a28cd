use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::reservation_read::{guest_reservations_sql, ReservationReader};
use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};
use crate::models::Reservation;

/// SQLite-specific implementation of ReservationReader
pub struct SqliteReservationReader {
    pool: SqlitePool,
}

impl SqliteReservationReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationReader for SqliteReservationReader {
    async fn find_reservations_by_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> AppResult<Vec<Reservation>> {
        let sql = guest_reservations_sql(DatabaseType::SQLite);
        sqlx::query_as::<_, Reservation>(&sql)
            .bind(guest_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch reservations: {}", e)))
    }
}
