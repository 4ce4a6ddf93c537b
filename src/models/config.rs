//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// CSV file with the user dataset, loaded once at startup.
    pub dataset_path: String,
    /// When set, the `AccessToken` header must match this value.
    #[serde(default)]
    pub access_token: Option<String>,
}
