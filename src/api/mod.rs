//! API layer - HTTP handlers and routing
//!
//! - Request handlers, one module per resource
//! - Custom extractors
//! - Route definitions, CORS and OpenAPI

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
