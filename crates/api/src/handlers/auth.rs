//! Handler for `/auth/login`.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use serde::{Deserialize, Serialize};

use super::parse_json;
use crate::auth::jwt::generate_admin_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token expiry (UTC Unix timestamp).
    pub expires_at: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Exchange the admin password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<LoginResponse>> {
    let input: LoginRequest = parse_json(&body)?;
    let admin = state.config.admin.as_ref().ok_or_else(|| {
        AppError::BadRequest("Admin authentication is not configured".into())
    })?;

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let (token, claims) = generate_admin_token(&admin.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(jti = %claims.jti, "Admin logged in");
    Ok(Json(LoginResponse {
        token,
        expires_at: claims.exp,
    }))
}
