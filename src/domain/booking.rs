//! Booking domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A client's appointment with a barber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: i64,
    /// Barber slug (not enforced against the barbers table)
    #[schema(example = "lele")]
    pub barber: String,
    #[schema(example = "cut")]
    pub service: String,
    /// Calendar day, "YYYY-MM-DD"
    #[schema(example = "2024-06-01")]
    pub date: String,
    /// Slot start, "HH:mm"
    #[schema(example = "10:00")]
    pub time: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    #[schema(example = 30.0)]
    pub price: f64,
    /// Set by the server when the booking is created
    pub timestamp: DateTime<Utc>,
}

/// Booking request body. Every field is optional and stored as sent; a
/// client-supplied `timestamp` is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewBooking {
    #[serde(default)]
    #[schema(example = "lele")]
    pub barber: String,
    #[serde(default)]
    #[schema(example = "cut")]
    pub service: String,
    #[serde(default)]
    #[schema(example = "2024-06-01")]
    pub date: String,
    #[serde(default)]
    #[schema(example = "10:00")]
    pub time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub price: f64,
}

/// Query for the reserved-slots lookup
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReservedQuery {
    pub date: String,
    pub barber: String,
}
