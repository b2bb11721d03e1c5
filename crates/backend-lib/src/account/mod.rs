// ============================
// crates/backend-lib/src/account/mod.rs
// ============================
//! Account registration and login.

pub mod id;
pub mod password;
pub mod service;
pub mod token;

pub use id::{IdIssuer, UuidIssuer};
pub use password::{hash_password, verify_password, PasswordHasher, ScryptPasswordHasher};
pub use service::AccountService;
pub use token::{JwtTokenIssuer, TokenClaims, TokenIssuer};
