//! JSON serialization for API responses and the settings file.

mod json;

pub use json::*;
