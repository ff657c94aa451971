//! Infrastructure adapters

mod open_dota_client;

pub use open_dota_client::OpenDotaClient;
