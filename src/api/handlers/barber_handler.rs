//! Barber handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get},
    Router,
};

use crate::api::extractors::AppJson;
use crate::api::AppState;
use crate::domain::{Barber, UpsertBarber};
use crate::errors::AppResult;
use crate::types::NoContent;

/// Create barber routes
pub fn barber_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_barbers).post(upsert_barber))
        .route("/:id", delete(delete_barber))
}

/// List the team
#[utoipa::path(
    get,
    path = "/api/barbers",
    tag = "Barbers",
    responses(
        (status = 200, description = "All barbers ordered by id", body = Vec<Barber>)
    )
)]
pub async fn list_barbers(State(state): State<AppState>) -> AppResult<Json<Vec<Barber>>> {
    let barbers = state.barber_service.list().await?;
    Ok(Json(barbers))
}

/// Create or replace a barber
///
/// Without an `id`, the slug of `name` is used ("Gian Marco" becomes "gian-marco").
#[utoipa::path(
    post,
    path = "/api/barbers",
    tag = "Barbers",
    request_body = UpsertBarber,
    responses(
        (status = 200, description = "Stored barber", body = Barber),
        (status = 400, description = "Neither id nor name given")
    )
)]
pub async fn upsert_barber(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpsertBarber>,
) -> AppResult<Json<Barber>> {
    let barber = state.barber_service.upsert(payload).await?;
    Ok(Json(barber))
}

/// Remove a barber
#[utoipa::path(
    delete,
    path = "/api/barbers/{id}",
    tag = "Barbers",
    params(("id" = String, Path, description = "Barber slug")),
    responses(
        (status = 204, description = "Deleted, or nothing to delete")
    )
)]
pub async fn delete_barber(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<NoContent> {
    state.barber_service.delete(&id).await?;
    Ok(NoContent)
}
