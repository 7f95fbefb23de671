pub mod accommodations;

pub use accommodations::AccommodationRepository;
