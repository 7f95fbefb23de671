use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::ticket::{Ticket, TicketStatus, TicketType};

#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i64,
    status: TicketStatus,
    type_id: i64,
    type_name: String,
    price: i64,
    is_remote: bool,
    includes_hotel: bool,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            id: row.id,
            status: row.status,
            ticket_type: TicketType {
                id: row.type_id,
                name: row.type_name,
                price: row.price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
        }
    }
}

/// Read-only client for the external ticketing subsystem's data. Tickets and
/// ticket types are created elsewhere; this slice only looks them up.
#[derive(Clone)]
pub struct TicketService {
    pool: SqlitePool,
}

impl TicketService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_ticket_by_user_id(&self, user_id: i64) -> Result<Ticket, AppError> {
        let row = sqlx::query_as::<_, TicketRow>(
            "SELECT t.id, t.status, tt.id AS type_id, tt.name AS type_name, \
                    tt.price, tt.is_remote, tt.includes_hotel \
             FROM tickets t \
             JOIN ticket_types tt ON tt.id = t.ticket_type_id \
             WHERE t.user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Ticket::from).ok_or(AppError::NoTicket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    #[actix_web::test]
    async fn user_without_ticket_maps_to_no_ticket() {
        let service = TicketService::new(memory_pool().await);
        let err = service.get_ticket_by_user_id(1).await.unwrap_err();
        assert!(matches!(err, AppError::NoTicket));
    }

    #[actix_web::test]
    async fn ticket_comes_back_with_its_type() {
        let pool = memory_pool().await;
        sqlx::query("INSERT INTO users (email, password) VALUES ('a@b.c', 'hash')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO ticket_types (name, price, is_remote, includes_hotel) \
             VALUES ('Full Pass', 600, 0, 1)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO tickets (user_id, ticket_type_id, status) VALUES (1, 1, 'PAID')")
            .execute(&pool)
            .await
            .unwrap();

        let ticket = TicketService::new(pool).get_ticket_by_user_id(1).await.unwrap();
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert!(ticket.ticket_type.includes_hotel);
        assert!(!ticket.ticket_type.is_remote);
        assert!(ticket.grants_accommodation());
    }
}
