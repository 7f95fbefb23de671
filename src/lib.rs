pub mod db;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

use actix_web::web;
use sqlx::SqlitePool;

use middleware::{authenticate_token, JwtSecret};
use repositories::AccommodationRepository;
use services::{AccommodationService, TicketService};

/// Builds the accommodation routes and their shared state. Used by the
/// server binary and by the integration tests, so both run the exact same
/// app: the `/hotels` scope behind the session-token middleware, with
/// `GET /hotels` and `GET /hotels/{hotelId}`.
pub fn configure_app(
    pool: SqlitePool,
    jwt_secret: String,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let repository = AccommodationRepository::new(pool.clone());
        cfg.app_data(web::Data::new(AccommodationService::new(repository)))
            .app_data(web::Data::new(TicketService::new(pool.clone())))
            .app_data(web::Data::new(JwtSecret(jwt_secret)))
            .app_data(web::Data::new(pool))
            .service(
                web::scope("/hotels")
                    .wrap(actix_web::middleware::from_fn(authenticate_token))
                    .route("", web::get().to(handlers::hotels::get_hotels))
                    .route("/{hotelId}", web::get().to(handlers::hotels::get_hotel_rooms)),
            );
    }
}
