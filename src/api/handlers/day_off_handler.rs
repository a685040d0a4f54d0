//! Day-off handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, post},
    Router,
};

use crate::api::extractors::{AppPath, AppQuery, ValidatedJson};
use crate::api::AppState;
use crate::domain::{DayOff, DayOffCheckQuery, DayOffRange, NewDayOff};
use crate::errors::AppResult;
use crate::types::NoContent;

/// Create day-off routes
pub fn day_off_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_day_offs).post(create_day_off))
        .route("/range", post(create_day_off_range))
        .route("/check", get(check_day_off))
        .route("/:id", delete(delete_day_off))
}

/// List all day-offs
#[utoipa::path(
    get,
    path = "/api/dayoffs",
    tag = "Day-offs",
    responses(
        (status = 200, description = "Day-offs ordered by date", body = Vec<DayOff>)
    )
)]
pub async fn list_day_offs(State(state): State<AppState>) -> AppResult<Json<Vec<DayOff>>> {
    let day_offs = state.day_off_service.list_all().await?;
    Ok(Json(day_offs))
}

/// Mark one date off
#[utoipa::path(
    post,
    path = "/api/dayoffs",
    tag = "Day-offs",
    request_body = NewDayOff,
    responses(
        (status = 200, description = "Stored day-off", body = DayOff),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Barber already off on that date")
    )
)]
pub async fn create_day_off(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewDayOff>,
) -> AppResult<Json<DayOff>> {
    let day_off = state
        .day_off_service
        .create(payload.barber_id, payload.date)
        .await?;
    Ok(Json(day_off))
}

/// Mark every date in an inclusive range off
///
/// Dates the barber already has off are skipped; only new rows are returned.
#[utoipa::path(
    post,
    path = "/api/dayoffs/range",
    tag = "Day-offs",
    request_body = DayOffRange,
    responses(
        (status = 200, description = "Newly created day-offs, ascending", body = Vec<DayOff>),
        (status = 400, description = "startDate after endDate")
    )
)]
pub async fn create_day_off_range(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DayOffRange>,
) -> AppResult<Json<Vec<DayOff>>> {
    let created = state
        .day_off_service
        .create_range(payload.barber_id, payload.start_date, payload.end_date)
        .await?;
    Ok(Json(created))
}

/// Remove a day-off
#[utoipa::path(
    delete,
    path = "/api/dayoffs/{id}",
    tag = "Day-offs",
    params(("id" = i64, Path, description = "Day-off id")),
    responses(
        (status = 204, description = "Deleted, or nothing to delete")
    )
)]
pub async fn delete_day_off(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<NoContent> {
    state.day_off_service.delete(id).await?;
    Ok(NoContent)
}

/// Whether a barber is off on a date
#[utoipa::path(
    get,
    path = "/api/dayoffs/check",
    tag = "Day-offs",
    params(DayOffCheckQuery),
    responses(
        (status = 200, description = "Matching day-offs (empty when working)", body = Vec<DayOff>),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn check_day_off(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DayOffCheckQuery>,
) -> AppResult<Json<Vec<DayOff>>> {
    let day_offs = state
        .day_off_service
        .check(&query.barber_id, &query.date)
        .await?;
    Ok(Json(day_offs))
}
