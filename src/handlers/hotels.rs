use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::middleware::AuthenticatedUser;
use crate::models::ticket::Ticket;
use crate::services::{AccommodationService, TicketService};

/// The one business rule of this slice: the caller's ticket must include
/// hotel accommodation and must not still be reserved.
fn check_accommodation_access(ticket: &Ticket) -> Result<(), AppError> {
    if !ticket.grants_accommodation() {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub async fn get_hotels(
    user: AuthenticatedUser,
    tickets: web::Data<TicketService>,
    accommodations: web::Data<AccommodationService>,
) -> Result<HttpResponse, AppError> {
    let ticket = tickets.get_ticket_by_user_id(user.user_id).await?;
    check_accommodation_access(&ticket)?;

    let hotels = accommodations.get_all_hotels().await?;
    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn get_hotel_rooms(
    user: AuthenticatedUser,
    path: web::Path<String>,
    tickets: web::Data<TicketService>,
    accommodations: web::Data<AccommodationService>,
) -> Result<HttpResponse, AppError> {
    // Upstream rejected non-numeric and zero ids; unlike upstream, we stop
    // processing once the 400 is decided.
    let hotel_id = path
        .into_inner()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(AppError::InvalidHotelId)?;

    let ticket = tickets.get_ticket_by_user_id(user.user_id).await?;
    check_accommodation_access(&ticket)?;

    let hotel_rooms = accommodations.get_hotel_rooms_by_id(hotel_id).await?;
    Ok(HttpResponse::Ok().json(hotel_rooms))
}
