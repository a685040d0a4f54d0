//! Booking handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::{AppJson, AppPath, AppQuery};
use crate::api::AppState;
use crate::domain::{Booking, NewBooking, ReservedQuery};
use crate::errors::AppResult;
use crate::types::NoContent;

/// Admin panel login body
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminCredentials {
    #[serde(default)]
    #[schema(example = "admin@silla.com")]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Create booking routes
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/reserved", get(reserved_slots))
        .route("/auth", post(admin_auth))
        .route("/:id", delete(delete_booking))
}

/// List all bookings, newest first
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "Bookings by creation time, descending", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.booking_service.list_all().await?;
    Ok(Json(bookings))
}

/// Bookings already taken for one barber on one date
#[utoipa::path(
    get,
    path = "/api/bookings/reserved",
    tag = "Bookings",
    params(ReservedQuery),
    responses(
        (status = 200, description = "Matching bookings", body = Vec<Booking>)
    )
)]
pub async fn reserved_slots(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ReservedQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state
        .booking_service
        .list_reserved(&query.date, &query.barber)
        .await?;
    Ok(Json(bookings))
}

/// Book an appointment
///
/// The creation timestamp is assigned by the server; the customer is
/// notified by SMS and e-mail.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = NewBooking,
    responses(
        (status = 200, description = "Stored booking", body = Booking)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewBooking>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_service.create(payload).await?;
    Ok(Json(booking))
}

/// Cancel a booking
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 204, description = "Cancelled, or nothing to cancel")
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<NoContent> {
    state.booking_service.delete(id).await?;
    Ok(NoContent)
}

/// Check admin panel credentials
#[utoipa::path(
    post,
    path = "/api/bookings/auth",
    tag = "Bookings",
    request_body = AdminCredentials,
    responses(
        (status = 200, description = "Whether the credentials match", body = bool)
    )
)]
pub async fn admin_auth(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AdminCredentials>,
) -> Json<bool> {
    Json(
        state
            .booking_service
            .simple_admin_auth(&payload.email, &payload.password),
    )
}
