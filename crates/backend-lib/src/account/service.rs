// ============================
// crates/backend-lib/src/account/service.rs
// ============================
//! Registration and login orchestration.
//!
//! All decision logic lives here: input validation, the error taxonomy, and
//! the order collaborators are invoked in. Each call is an independent
//! request-scoped flow; the service holds nothing but immutable collaborator
//! references and is safe to share across tasks.
use crate::account::password::MIN_PASSWORD_LENGTH;
use crate::account::{IdIssuer, PasswordHasher, TokenClaims, TokenIssuer};
use crate::error::AppError;
use crate::store::{Account, AccountStore};
use gatekeeper_common::{LoginInput, RegistrationInput, Role};
use std::sync::Arc;

/// Orchestrates account registration and login
pub struct AccountService {
    ids: Arc<dyn IdIssuer>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(
        ids: Arc<dyn IdIssuer>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
        store: Arc<dyn AccountStore>,
    ) -> Self {
        Self {
            ids,
            hasher,
            tokens,
            store,
        }
    }

    /// Register a new account and return its access token
    ///
    /// Validation is fail-fast, in a fixed order; nothing is persisted on a
    /// validation failure. The password is hashed before the account is
    /// created, and the token is only issued once the store accepted the
    /// record.
    pub async fn register(&self, input: RegistrationInput) -> Result<String, AppError> {
        if input.name.is_empty()
            || input.email.is_empty()
            || input.password.is_empty()
            || input.role.is_empty()
        {
            return Err(AppError::InvalidInput(
                "'name', 'email', 'password' and 'role' must be informed".to_string(),
            ));
        }

        if input.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "Password must have at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        if !input.email.contains('@') {
            return Err(AppError::InvalidInput("Invalid email".to_string()));
        }

        let role = Role::parse(&input.role).ok_or_else(|| {
            AppError::InvalidInput("'role' must be 'NORMAL' or 'ADMIN'".to_string())
        })?;

        let id = self.ids.generate();
        let password_hash = self.hasher.hash(&input.password).await?;

        let account = Account {
            id,
            email: input.email,
            name: input.name,
            password_hash,
            role,
        };
        self.store.create(&account).await?;

        let token = self
            .tokens
            .issue(&TokenClaims {
                id: account.id.clone(),
                role,
            })
            .await?;

        tracing::info!(account_id = %account.id, "account registered");
        Ok(token)
    }

    /// Authenticate an existing account and return a fresh access token
    ///
    /// Lookup happens before any hash comparison; an unknown email never
    /// reaches the hasher.
    pub async fn authenticate(&self, input: LoginInput) -> Result<String, AppError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(AppError::InvalidInput(
                "'email' and 'password' must be informed".to_string(),
            ));
        }

        let account = self
            .store
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let password_matches = self
            .hasher
            .compare(&input.password, &account.password_hash)
            .await?;
        if !password_matches {
            return Err(AppError::InvalidCredentials);
        }

        self.tokens
            .issue(&TokenClaims {
                id: account.id,
                role: account.role,
            })
            .await
    }
}
