// ============================
// crates/backend-lib/src/store.rs
// ============================
//! Account storage abstraction with flat-file and in-memory implementations.
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;
use gatekeeper_common::Role;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tokio::fs as tokio_fs;

/// A persisted user record. Owned by the store; immutable once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
    /// scrypt PHC string, never the plaintext
    pub password_hash: String,
    pub role: Role,
}

/// Trait for account storage backends
///
/// Email uniqueness is the store's responsibility; a duplicate create fails
/// with [`AppError::Storage`]. A missing email on lookup is `Ok(None)`,
/// not an error.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account
    async fn create(&self, account: &Account) -> Result<(), AppError>;

    /// Look up an account by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;
}

/// Flat-file implementation of the `AccountStore` trait
///
/// One pretty-printed JSON document per account under `<root>/accounts/`,
/// named by account id. Lookups scan the directory; there is no secondary
/// index.
#[derive(Clone)]
pub struct FlatFileAccountStore {
    root: PathBuf,
}

impl FlatFileAccountStore {
    pub fn new<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("accounts"))?;
        Ok(Self { root })
    }

    fn account_path(&self, id: &str) -> PathBuf {
        self.root.join("accounts").join(format!("{id}.json"))
    }
}

#[async_trait]
impl AccountStore for FlatFileAccountStore {
    async fn create(&self, account: &Account) -> Result<(), AppError> {
        if self.find_by_email(&account.email).await?.is_some() {
            return Err(AppError::Storage(
                "an account with this email already exists".to_string(),
            ));
        }

        let json = serde_json::to_string_pretty(account)
            .map_err(|e| AppError::Storage(format!("failed to encode account: {e}")))?;

        tokio_fs::write(self.account_path(&account.id), json)
            .await
            .map_err(|e| AppError::Storage(format!("failed to write account: {e}")))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let dir = self.root.join("accounts");

        let mut entries = tokio_fs::read_dir(&dir)
            .await
            .map_err(|e| AppError::Storage(format!("failed to read account directory: {e}")))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::Storage(format!("failed to read account directory: {e}")))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let content = tokio_fs::read_to_string(&path)
                .await
                .map_err(|e| AppError::Storage(format!("failed to read account: {e}")))?;
            let account: Account = serde_json::from_str(&content)
                .map_err(|e| AppError::Storage(format!("corrupt account record: {e}")))?;

            if account.email == email {
                return Ok(Some(account));
            }
        }

        Ok(None)
    }
}

/// In-memory implementation of the `AccountStore` trait, keyed by email
///
/// Used by tests and throwaway dev setups; nothing survives a restart.
#[derive(Clone, Default)]
pub struct MemoryAccountStore {
    accounts: DashMap<String, Account>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, account: &Account) -> Result<(), AppError> {
        use dashmap::mapref::entry::Entry;

        match self.accounts.entry(account.email.clone()) {
            Entry::Occupied(_) => Err(AppError::Storage(
                "an account with this email already exists".to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok(())
            },
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        Ok(self.accounts.get(email).map(|entry| entry.value().clone()))
    }
}
