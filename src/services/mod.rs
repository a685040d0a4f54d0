//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion; repositories are reached through the Unit of Work.

mod auth_service;
mod barber_service;
mod booking_service;
pub mod container;
mod day_off_service;
mod notification_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use barber_service::{BarberManager, BarberService};
pub use booking_service::{BookingManager, BookingService};
pub use day_off_service::{parse_date, DayOffManager, DayOffService};
pub use notification_service::{Notifications, Notifier, Outbox};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use barber_service::MockBarberService;
#[cfg(any(test, feature = "test-utils"))]
pub use booking_service::MockBookingService;
#[cfg(any(test, feature = "test-utils"))]
pub use day_off_service::MockDayOffService;
#[cfg(any(test, feature = "test-utils"))]
pub use notification_service::MockNotifier;
