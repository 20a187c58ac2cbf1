//! Wire DTOs for the authentication API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies exactly so serde round-trips
//! stay lossless. Failure bodies carry an optional `error` string; the
//! caller substitutes a per-call fallback when it is absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the login endpoint and persisted in
/// the session record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-side primary key.
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Payload for `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for `POST /api/auth/login`. `email` carries either an email
/// address or a username; the server matches both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /api/auth/forgot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotRequest {
    pub email: String,
}

/// Payload for `POST /api/auth/reset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetRequest {
    pub email: String,
    pub otp: String,
    pub password: String,
}

/// Success body shared by signup, forgot, and reset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Success body for login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

/// Error body for non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}
