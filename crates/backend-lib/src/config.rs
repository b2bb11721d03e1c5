// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Data directory path for the flat-file account store
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
    /// Secret used to sign access tokens
    pub token_secret: String,
    /// Access token TTL in seconds
    pub token_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            token_secret: "insecure-dev-secret".to_string(),
            token_ttl_secs: 60 * 60 * 24, // 1 day
        }
    }
}

impl Settings {
    /// Load settings from the default config file location and environment
    pub fn load() -> Result<Self> {
        Self::load_from("config/default.toml")
    }

    /// Load settings from an explicit config file, then environment variables
    ///
    /// Missing file entries fall back to `Settings::default()`; any
    /// `GATEKEEPER_`-prefixed environment variable overrides both.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("GATEKEEPER_"))
            .extract()?;

        Ok(settings)
    }
}
