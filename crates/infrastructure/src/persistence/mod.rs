//! File-based persistence

mod settings_repository;

pub use settings_repository::{BASE_URL_ENV, SettingsError, SettingsRepository, apply_overrides};
