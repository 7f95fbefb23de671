use serde::{Deserialize, Serialize};

/// Lifecycle state of an event ticket. `Reserved` means payment has not
/// completed; reserved tickets never grant accommodation access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// An attendee's ticket as read from the ticketing subsystem. Consumed
/// read-only; this slice never creates or mutates tickets.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub status: TicketStatus,
    #[serde(rename = "TicketType")]
    pub ticket_type: TicketType,
}

impl Ticket {
    /// A ticket grants accommodation access only when its type includes a
    /// hotel and payment has completed.
    pub fn grants_accommodation(&self) -> bool {
        self.ticket_type.includes_hotel && self.status != TicketStatus::Reserved
    }
}
