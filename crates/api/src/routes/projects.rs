use axum::routing::get;
use axum::Router;
use folio_core::models::Project;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/projects",
        get(resource::list::<Project>)
            .post(resource::create::<Project>)
            .put(resource::update::<Project>)
            .delete(resource::delete::<Project>),
    )
}
