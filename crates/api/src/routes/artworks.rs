use axum::routing::get;
use axum::Router;
use folio_core::models::Artwork;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/artworks`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/artworks",
        get(resource::list::<Artwork>)
            .post(resource::create::<Artwork>)
            .put(resource::update::<Artwork>)
            .delete(resource::delete::<Artwork>),
    )
}
