//! Utility functions and helpers.

mod slug;
pub mod templates;

pub use slug::slugify;
