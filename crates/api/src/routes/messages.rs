use axum::routing::get;
use axum::Router;
use folio_core::models::Message;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// Sending is public; reading and managing the inbox is admin only.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/messages",
        get(resource::list_admin::<Message>)
            .post(resource::submit::<Message>)
            .put(resource::update::<Message>)
            .delete(resource::delete::<Message>),
    )
}
