use sqlx::SqlitePool;

use crate::models::hotel::{Hotel, HotelWithRooms, Room};

/// Read-only access to the hotel and room tables. Store failures propagate
/// as `sqlx::Error`; the HTTP boundary decides what they turn into.
#[derive(Clone)]
pub struct AccommodationRepository {
    pool: SqlitePool,
}

impl AccommodationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all_hotels(&self) -> Result<Vec<Hotel>, sqlx::Error> {
        sqlx::query_as::<_, Hotel>("SELECT id, name, image, created_at, updated_at FROM hotels")
            .fetch_all(&self.pool)
            .await
    }

    /// Fetches one hotel and all of its rooms, or `None` when no hotel has
    /// the given id. Rooms come back ordered by id so responses are stable.
    pub async fn find_hotel_rooms_by_id(
        &self,
        hotel_id: i64,
    ) -> Result<Option<HotelWithRooms>, sqlx::Error> {
        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = ?",
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, name, capacity, hotel_id, created_at, updated_at \
             FROM rooms WHERE hotel_id = ? ORDER BY id",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
