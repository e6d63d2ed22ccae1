//! Handlers for the `/settings` singleton.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use folio_core::models::{Settings, SettingsPatch};

use super::parse_json;
use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<Settings>> {
    let settings = state.stores.settings.get().await?;
    Ok(Json(settings))
}

/// PUT /api/settings
///
/// Merges the supplied fields over the stored settings. No id is needed.
pub async fn update_settings(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<Settings>> {
    let patch: SettingsPatch = parse_json(&body)?;
    let settings = state.stores.settings.update(patch).await?;

    tracing::info!("Settings updated");
    Ok(Json(settings))
}
