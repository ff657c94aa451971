//! Dotalens Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod avatar;
pub mod persistence;
pub mod serialization;

pub use adapters::OpenDotaClient;
pub use avatar::{AVATAR_WIDTH, AvatarError, AvatarImage, decode_avatar};
pub use persistence::{BASE_URL_ENV, SettingsError, SettingsRepository, apply_overrides};
pub use serialization::{SerializationError, from_json_bytes, parse_body, to_json_pretty};
