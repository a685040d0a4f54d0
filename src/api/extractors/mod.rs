//! Custom request extractors.

mod rejection;
mod validated_json;

pub use rejection::{AppJson, AppPath, AppQuery};
pub use validated_json::ValidatedJson;
