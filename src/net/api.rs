//! REST API helpers for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning the per-call fallback error, since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, String>` where the error string is the
//! server's `error` body field when one is present, or the call's fixed
//! fallback otherwise. Callers surface the string as a toast and never
//! panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ForgotRequest, LoginRequest, LoginResponse, MessageResponse, ResetRequest, SignupRequest,
};
#[cfg(feature = "hydrate")]
use super::types::ErrorResponse;

const SIGNUP_FALLBACK: &str = "Signup failed";
const LOGIN_FALLBACK: &str = "Login failed";
const FORGOT_FALLBACK: &str = "Failed to send OTP";
const RESET_FALLBACK: &str = "Password reset failed";

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(name: &str) -> String {
    format!("/api/auth/{name}")
}

/// Pick the user-facing error text for a failed call: the server's `error`
/// body when present, else the call's fallback.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(body_error: Option<String>, fallback: &str) -> String {
    body_error.unwrap_or_else(|| fallback.to_owned())
}

/// JSON POST with uniform bearer-token attachment. The token is irrelevant
/// for these unauthenticated flows but applied whenever a session exists,
/// matching the shared-client behavior of the rest of the app.
#[cfg(feature = "hydrate")]
async fn post_json<B, T>(endpoint: &str, body: &B, fallback: &str) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let mut request = gloo_net::http::Request::post(endpoint);
    if let Some(session) = crate::util::session::load_session() {
        request = request.header("Authorization", &format!("Bearer {}", session.token));
    }
    let resp = request
        .json(body)
        .map_err(|_| fallback.to_owned())?
        .send()
        .await
        .map_err(|_| fallback.to_owned())?;
    if resp.ok() {
        resp.json::<T>().await.map_err(|_| fallback.to_owned())
    } else {
        let body_error = resp
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|b| b.error);
        Err(error_message(body_error, fallback))
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the server's `error` text, or "Signup failed" when none is
/// available.
pub async fn signup(payload: &SignupRequest) -> Result<MessageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&auth_endpoint("signup"), payload, SIGNUP_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(SIGNUP_FALLBACK.to_owned())
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's `error` text, or "Login failed" when none is
/// available.
pub async fn login(payload: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&auth_endpoint("login"), payload, LOGIN_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(LOGIN_FALLBACK.to_owned())
    }
}

/// Request a password-reset OTP via `POST /api/auth/forgot`.
///
/// # Errors
///
/// Returns the server's `error` text, or "Failed to send OTP" when none is
/// available.
pub async fn forgot(payload: &ForgotRequest) -> Result<MessageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&auth_endpoint("forgot"), payload, FORGOT_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(FORGOT_FALLBACK.to_owned())
    }
}

/// Reset the password with an OTP via `POST /api/auth/reset`.
///
/// # Errors
///
/// Returns the server's `error` text, or "Password reset failed" when none
/// is available.
pub async fn reset(payload: &ResetRequest) -> Result<MessageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&auth_endpoint("reset"), payload, RESET_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(RESET_FALLBACK.to_owned())
    }
}
