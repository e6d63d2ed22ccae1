pub mod artworks;
pub mod auth;
pub mod health;
pub mod messages;
pub mod projects;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login        exchange admin password for a token (public)
///
/// /projects          GET public; POST, PUT, DELETE ?id= admin
/// /artworks          GET public; POST, PUT, DELETE ?id= admin
/// /messages          POST public (contact form); GET, PUT, DELETE ?id= admin
/// /settings          GET public; PUT admin
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(projects::router())
        .merge(artworks::router())
        .merge(messages::router())
        .merge(settings::router())
}
