// ============================
// crates/backend-lib/src/account/password.rs
// ============================
//! Password hashing and verification.
use crate::error::AppError;
use async_trait::async_trait;
use scrypt::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Scrypt,
};
use zeroize::Zeroize;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Trait for password hashing backends
///
/// `compare` must accept any hash produced by `hash`. A mismatched or
/// unparseable hash is `Ok(false)`, not an error.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plain: &str) -> Result<String, AppError>;
    async fn compare(&self, plain: &str, hash: &str) -> Result<bool, AppError>;
}

/// Hash a password using scrypt
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Scrypt
        .hash_password(plain.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

/// Verify a password against a hash
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Scrypt.verify_password(plain.as_bytes(), &parsed_hash).is_ok()
}

/// Securely hash a password and zeroize the original
pub fn hash_password_secure(plain: &mut String) -> anyhow::Result<String> {
    let hash = hash_password(plain);
    plain.zeroize();
    hash
}

/// scrypt implementation of the `PasswordHasher` trait
///
/// The KDF runs on the blocking pool so request flows never stall the
/// async executor.
#[derive(Clone, Default)]
pub struct ScryptPasswordHasher;

#[async_trait]
impl PasswordHasher for ScryptPasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, AppError> {
        let mut plain = plain.to_owned();
        tokio::task::spawn_blocking(move || hash_password_secure(&mut plain))
            .await?
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
    }

    async fn compare(&self, plain: &str, hash: &str) -> Result<bool, AppError> {
        let plain = plain.to_owned();
        let hash = hash.to_owned();
        Ok(tokio::task::spawn_blocking(move || verify_password(&hash, &plain)).await?)
    }
}
