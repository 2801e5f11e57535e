use axum::Router;

pub mod system;
pub mod valuations;

/// Router for all valuation endpoints.
pub fn router() -> Router {
    Router::new().nest("/valuations", valuations::router())
}
