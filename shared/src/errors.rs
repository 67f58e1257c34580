//! Error types shared across the Vitalog crates

use thiserror::Error;

/// Authentication error types
///
/// Raised by the JWT layer and credential checks; the backend maps these
/// onto 401 responses.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Missing token")]
    MissingToken,

    #[error("Wrong token type: expected {expected}")]
    WrongTokenType { expected: &'static str },
}
