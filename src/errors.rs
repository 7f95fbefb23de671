use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Application error taxonomy. The HTTP boundary is the only place failures
/// turn into status codes; everything below it propagates these variants.
///
/// Missing tickets and store failures both surface as `204 No Content` to
/// match the upstream contract, but stay distinct variants so logs can tell
/// them apart.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("hotel id must be a positive integer")]
    InvalidHotelId,

    #[error("ticket does not grant access to hotel accommodation")]
    Forbidden,

    #[error("no ticket found for this user")]
    NoTicket,

    #[error("no hotel matches the given id")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidHotelId => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::NoTicket | Self::Database(_) => StatusCode::NO_CONTENT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Database(err) => {
                log::error!("store failure: {err}");
                HttpResponse::new(self.status_code())
            }
            // 204 carries no body
            Self::NoTicket => HttpResponse::new(self.status_code()),
            _ => HttpResponse::build(self.status_code()).json(ErrorResponse {
                error: self.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_contract() {
        assert_eq!(
            AppError::unauthorized("nope").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::InvalidHotelId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NoTicket.status_code(), StatusCode::NO_CONTENT);
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::NO_CONTENT
        );
    }

    #[test]
    fn no_content_responses_have_empty_bodies() {
        let response = AppError::NoTicket.error_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
