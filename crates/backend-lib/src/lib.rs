// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the gatekeeper credential service.

pub mod account;
pub mod config;
pub mod error;
pub mod http_router;
pub mod metrics;
pub mod store;

use crate::account::{AccountService, JwtTokenIssuer, ScryptPasswordHasher, UuidIssuer};
use crate::config::Settings;
use crate::store::{AccountStore, FlatFileAccountStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Account registration/login service
    pub accounts: Arc<AccountService>,
    /// Settings manager
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state around the given account store
    pub fn new(store: Arc<dyn AccountStore>, settings: Settings) -> Self {
        let tokens = Arc::new(JwtTokenIssuer::new(
            &settings.token_secret,
            settings.token_ttl_secs,
        ));
        let accounts = Arc::new(AccountService::new(
            Arc::new(UuidIssuer),
            Arc::new(ScryptPasswordHasher),
            tokens,
            store,
        ));

        Self {
            accounts,
            settings: Arc::new(settings),
        }
    }

    /// Create a new application state with loaded settings and flat-file storage
    pub fn new_default() -> anyhow::Result<Self> {
        let settings = Settings::load()?;
        let storage = FlatFileAccountStore::new(&settings.data_dir)?;
        Ok(Self::new(Arc::new(storage), settings))
    }
}
