pub mod accommodations;
pub mod tickets;

pub use accommodations::AccommodationService;
pub use tickets::TicketService;
