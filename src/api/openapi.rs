//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, barber_handler, booking_handler, day_off_handler};
use crate::domain::{Barber, Booking, DayOff, DayOffRange, NewBooking, NewDayOff, UpsertBarber, UserResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the booking API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Silla Booking API",
        version = "0.1.0",
        description = "Barbers, bookings, day-offs and customer accounts for the Silla barber shop",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    paths(
        barber_handler::list_barbers,
        barber_handler::upsert_barber,
        barber_handler::delete_barber,
        booking_handler::list_bookings,
        booking_handler::reserved_slots,
        booking_handler::create_booking,
        booking_handler::delete_booking,
        booking_handler::admin_auth,
        day_off_handler::list_day_offs,
        day_off_handler::create_day_off,
        day_off_handler::create_day_off_range,
        day_off_handler::delete_day_off,
        day_off_handler::check_day_off,
        auth_handler::register,
        auth_handler::login,
        auth_handler::delete_account,
    ),
    components(
        schemas(
            Barber,
            UpsertBarber,
            Booking,
            NewBooking,
            DayOff,
            NewDayOff,
            DayOffRange,
            UserResponse,
            MessageResponse,
            booking_handler::AdminCredentials,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
        )
    ),
    tags(
        (name = "Barbers", description = "Team roster"),
        (name = "Bookings", description = "Appointments and admin panel login"),
        (name = "Day-offs", description = "Barber unavailability"),
        (name = "Authentication", description = "Customer registration, login and account deletion")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in [
            "/api/barbers",
            "/api/barbers/{id}",
            "/api/bookings/reserved",
            "/api/bookings/auth",
            "/api/dayoffs/range",
            "/api/dayoffs/check",
            "/api/auth/register",
            "/api/auth/{id}",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {}", expected);
        }
    }
}
