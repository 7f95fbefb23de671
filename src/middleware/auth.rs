use std::future::{ready, Ready};
use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::body::MessageBody;
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

/// HS256 signing secret, provided at bootstrap from `JWT_SECRET`.
#[derive(Clone)]
pub struct JwtSecret(pub String);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user_id: i64,
    exp: usize,
}

const TOKEN_TTL_SECS: u64 = 60 * 60 * 24 * 7;

/// Signs a session JWT for the given user. Token issuance lives in the auth
/// subsystem; this helper exists so session tokens can be minted for tests
/// and tooling.
pub fn sign_token(user_id: i64, secret: &str) -> jsonwebtoken::errors::Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let claims = Claims {
        user_id,
        exp: (now + TOKEN_TTL_SECS) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("invalid token"))
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    header
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

/// Authentication middleware for the accommodation routes.
///
/// Rejects with 401 unless the request carries a bearer JWT that verifies
/// against the configured secret AND matches an active session row. On
/// success the caller's identity is attached to the request extensions for
/// the [`AuthenticatedUser`] extractor.
pub async fn authenticate_token(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let token =
        bearer_token(&req).ok_or_else(|| AppError::unauthorized("missing bearer token"))?;

    let secret = req
        .app_data::<web::Data<JwtSecret>>()
        .ok_or_else(|| AppError::unauthorized("auth is not configured"))?
        .clone();
    let claims = verify_token(&token, &secret.0)?;

    let pool = req
        .app_data::<web::Data<SqlitePool>>()
        .ok_or_else(|| AppError::unauthorized("auth is not configured"))?
        .clone();
    let session = sqlx::query_scalar::<_, i64>("SELECT id FROM sessions WHERE token = ?")
        .bind(&token)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|err| {
            log::error!("session lookup failed: {err}");
            AppError::unauthorized("could not validate session")
        })?;
    if session.is_none() {
        return Err(AppError::unauthorized("no active session for token").into());
    }

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id,
    });
    next.call(req).await
}

/// Caller identity attached by [`authenticate_token`].
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .copied()
                .ok_or_else(|| AppError::unauthorized("missing credentials").into()),
        )
    }
}
