use crate::errors::AppError;
use crate::models::hotel::{Hotel, HotelWithRooms};
use crate::repositories::AccommodationRepository;

/// Business layer over the accommodation repository. The only rule it owns
/// is translating an absent hotel into a domain-level not-found failure.
#[derive(Clone)]
pub struct AccommodationService {
    repository: AccommodationRepository,
}

impl AccommodationService {
    pub fn new(repository: AccommodationRepository) -> Self {
        Self { repository }
    }

    pub async fn get_all_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        Ok(self.repository.find_all_hotels().await?)
    }

    pub async fn get_hotel_rooms_by_id(&self, hotel_id: i64) -> Result<HotelWithRooms, AppError> {
        self.repository
            .find_hotel_rooms_by_id(hotel_id)
            .await?
            .ok_or(AppError::NotFound)
    }
}
