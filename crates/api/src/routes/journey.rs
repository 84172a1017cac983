//! Route definitions for journey management.
//!
//! ```text
//! Mounted at /journeys:
//! GET    /                    list_journeys (?organization_id)
//! POST   /                    create_journey
//! POST   /copy                copy_journey
//! GET    /{id}                get_journey
//! DELETE /{id}                disable_journey
//! GET    /{id}/items          list_items
//! GET    /{id}/structures     list_structures
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::journey;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(journey::list_journeys).post(journey::create_journey),
        )
        // `/copy` must come before `/{id}` to avoid path conflict.
        .route("/copy", post(journey::copy_journey))
        .route(
            "/{id}",
            get(journey::get_journey).delete(journey::disable_journey),
        )
        .route("/{id}/items", get(journey::list_items))
        .route("/{id}/structures", get(journey::list_structures))
}
