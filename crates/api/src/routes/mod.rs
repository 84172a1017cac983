//! Route modules and the `/api/v1` route table.

pub mod health;
pub mod journey;

use axum::Router;

use crate::state::AppState;

/// All routes nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/journeys", journey::router())
}
