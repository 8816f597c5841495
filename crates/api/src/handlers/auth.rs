//! Handler for the `/auth` resource (admin login).
//!
//! The old implementation compared plaintext credentials in the browser and
//! set a local-storage flag. Here the credential lives server-side as an
//! Argon2id hash and a successful login returns an expiring JWT.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use academy_core::error::CoreError;

use crate::auth::jwt::{generate_access_token, ROLE_ADMIN};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub email: String,
    pub role: String,
}

/// POST /api/v1/auth/login
///
/// Authenticate with the admin email + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let admin = &state.config.admin;

    // One configured admin account; a wrong email and a wrong password
    // produce the same response.
    let email_matches = input.email == admin.email;
    let password_matches = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !email_matches || !password_matches {
        tracing::warn!(email = %input.email, "Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid admin credentials. Please try again.".into(),
        )));
    }

    let access_token = generate_access_token(&admin.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(email = %admin.email, "Admin logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        email: admin.email.clone(),
        role: ROLE_ADMIN.to_string(),
    }))
}
