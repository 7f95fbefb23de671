pub mod auth;

pub use auth::{authenticate_token, sign_token, AuthenticatedUser, JwtSecret};
