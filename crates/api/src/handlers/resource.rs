//! Generic handlers for the record collections (projects, artworks, messages).
//!
//! Each handler is instantiated per collection by the route table, e.g.
//! `get(resource::list::<Project>)`. Handlers that take [`RequireAdmin`]
//! are admin operations; the rest are public.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::ids::{lenient_id, parse_id};
use folio_core::models::Collection;
use folio_core::types::DbId;
use folio_db::Stored;
use serde::Deserialize;

use super::parse_json;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::Acknowledgement;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `PUT`: the target id alongside the patch fields.
#[derive(Debug, Deserialize)]
#[serde(bound = "U: Deserialize<'de>")]
pub struct UpdateRequest<U> {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub patch: U,
}

/// Query string of `DELETE`. The id stays textual so that a missing or
/// non-numeric value is reported as a bad request rather than rejected by
/// the extractor.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET -- every record in the collection's listing order.
pub async fn list<C: Stored>(State(state): State<AppState>) -> AppResult<Json<Vec<C>>> {
    let records = state.stores.collection::<C>().list().await?;
    Ok(Json(records))
}

/// GET, admin only.
pub async fn list_admin<C: Stored>(
    _admin: RequireAdmin,
    state: State<AppState>,
) -> AppResult<Json<Vec<C>>> {
    list::<C>(state).await
}

/// POST, admin only. Returns 201 with the stored record.
pub async fn create<C: Stored>(
    _admin: RequireAdmin,
    state: State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<C>)> {
    submit::<C>(state, body).await
}

/// POST, public. Used by the contact form.
///
/// The body is decoded and the collection's defaults and validation are
/// applied before the store is touched.
pub async fn submit<C: Stored>(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<C>)> {
    let input: C::Create = parse_json(&body)?;
    let new = C::resolve(input)?;

    let record = state.stores.collection::<C>().create(new).await?;

    tracing::info!(collection = C::KEY, id = record.id(), "Record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT, admin only. The body names the target by `id` and carries the
/// fields to change.
pub async fn update<C: Stored>(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<C>> {
    let request: UpdateRequest<C::Update> = parse_json(&body)?;
    let id = request.id.ok_or_else(|| {
        AppError::BadRequest(format!("{} ID is required for updating", C::ENTITY))
    })?;

    let record = state
        .stores
        .collection::<C>()
        .update(id, request.patch)
        .await?;

    tracing::info!(collection = C::KEY, id, "Record updated");
    Ok(Json(record))
}

/// DELETE `?id=`, admin only.
pub async fn delete<C: Stored>(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<Json<Acknowledgement>> {
    let raw = params
        .id
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} ID is required", C::ENTITY)))?;
    let id = parse_id(&raw)
        .ok_or_else(|| AppError::BadRequest(format!("{} ID must be an integer", C::ENTITY)))?;

    state.stores.collection::<C>().delete(id).await?;

    tracing::info!(collection = C::KEY, id, "Record deleted");
    Ok(Json(Acknowledgement::deleted(C::ENTITY)))
}

#[cfg(test)]
mod tests {
    use folio_core::catalog::PublishStatus;
    use folio_core::models::{UpdateMessage, UpdateProject};

    use super::*;

    #[test]
    fn update_request_splits_id_from_patch() {
        let request: UpdateRequest<UpdateProject> =
            serde_json::from_str(r#"{"id": "17", "status": "Live"}"#).unwrap();
        assert_eq!(request.id, Some(17));
        assert_eq!(request.patch.status, Some(PublishStatus::Live));
        assert!(request.patch.title.is_none());
    }

    #[test]
    fn update_request_without_id_still_parses() {
        let request: UpdateRequest<UpdateMessage> =
            serde_json::from_str(r#"{"isRead": false}"#).unwrap();
        assert_eq!(request.id, None);
        assert_eq!(request.patch.is_read, Some(false));
    }
}
