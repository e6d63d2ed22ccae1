use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`. Other methods get 405 from the router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(settings::get_settings).put(settings::update_settings),
    )
}
