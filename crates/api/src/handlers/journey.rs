//! Handlers for journey management.
//!
//! Provides endpoints for creating, listing, disabling, and duplicating
//! journeys, plus read access to a journey's items and structure graph.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use panelcast_core::error::CoreError;
use panelcast_core::types::Id;
use panelcast_db::copy::{self, CopyRequest};
use panelcast_db::models::journey::{CreateJourney, Journey};
use panelcast_db::repositories::{
    JourneyItemRepo, JourneyRepo, JourneyStructureRepo,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for the journey listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub organization_id: Id,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a journey exists, returning the full row.
async fn ensure_journey_exists(state: &AppState, id: Id) -> AppResult<Journey> {
    JourneyRepo::find_by_id(&*state.store, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Journey",
                id,
            })
        })
}

// ---------------------------------------------------------------------------
// GET /journeys?organization_id=
// ---------------------------------------------------------------------------

/// List enabled journeys for an organization.
pub async fn list_journeys(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let journeys =
        JourneyRepo::list_by_organization(&*state.store, params.organization_id).await?;

    tracing::debug!(
        count = journeys.len(),
        organization_id = %params.organization_id,
        "Listed journeys"
    );

    Ok(Json(DataResponse { data: journeys }))
}

// ---------------------------------------------------------------------------
// POST /journeys
// ---------------------------------------------------------------------------

/// Create a new, empty journey.
pub async fn create_journey(
    State(state): State<AppState>,
    Json(body): Json<CreateJourney>,
) -> AppResult<impl IntoResponse> {
    let journey = JourneyRepo::create(&*state.store, &body).await?;

    tracing::info!(
        journey_id = %journey.id,
        organization_id = %journey.organization_id,
        "Journey created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: journey })))
}

// ---------------------------------------------------------------------------
// GET /journeys/:id
// ---------------------------------------------------------------------------

/// Get a single journey by ID.
pub async fn get_journey(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    let journey = ensure_journey_exists(&state, id).await?;
    Ok(Json(DataResponse { data: journey }))
}

// ---------------------------------------------------------------------------
// DELETE /journeys/:id
// ---------------------------------------------------------------------------

/// Soft-disable a journey.
///
/// Journeys are never hard-deleted; the row stays in place but disappears
/// from listings.
pub async fn disable_journey(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    let journey = JourneyRepo::disable(&*state.store, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Journey",
                id,
            })
        })?;

    tracing::info!(journey_id = %id, "Journey disabled");

    Ok(Json(DataResponse { data: journey }))
}

// ---------------------------------------------------------------------------
// GET /journeys/:id/items
// ---------------------------------------------------------------------------

/// List all items of a journey.
pub async fn list_items(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    ensure_journey_exists(&state, id).await?;
    let items = JourneyItemRepo::list_by_journey(&*state.store, id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /journeys/:id/structures
// ---------------------------------------------------------------------------

/// List all structure nodes of a journey.
pub async fn list_structures(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    ensure_journey_exists(&state, id).await?;
    let structures = JourneyStructureRepo::list_by_journey(&*state.store, id).await?;
    Ok(Json(DataResponse { data: structures }))
}

// ---------------------------------------------------------------------------
// POST /journeys/copy
// ---------------------------------------------------------------------------

/// Duplicate a journey (or a specific version of one).
///
/// Runs the copy engine and returns the full bundle of created entities.
/// If the copy fails after writes began, the partially created journey is
/// discarded best-effort before the error is returned.
pub async fn copy_journey(
    State(state): State<AppState>,
    Json(body): Json<CopyRequest>,
) -> AppResult<impl IntoResponse> {
    match copy::copy_journey(&*state.store, &body).await {
        Ok(result) => {
            tracing::info!(
                journey_id = %result.journey.id,
                items = result.items.len(),
                structures = result.structures.len(),
                "Journey duplicated"
            );
            Ok((StatusCode::CREATED, Json(DataResponse { data: result })))
        }
        Err(err) => {
            if let Some(partial_id) = err.partial_journey_id() {
                tracing::warn!(
                    %partial_id,
                    "Copy failed after writes began; discarding partial journey"
                );
                if let Err(discard_err) = copy::discard_partial(&*state.store, partial_id).await
                {
                    tracing::error!(
                        %partial_id,
                        error = %discard_err,
                        "Failed to discard partial journey"
                    );
                }
            }
            Err(err.into())
        }
    }
}
