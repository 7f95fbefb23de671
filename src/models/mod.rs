pub mod hotel;
pub mod ticket;
