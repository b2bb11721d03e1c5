// ============================
// crates/backend-lib/src/account/id.rs
// ============================
//! Account identifier generation.
use uuid::Uuid;

/// Trait for account id generation
///
/// Implementations must produce values unique across all accounts and must
/// not block.
pub trait IdIssuer: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUID ids
#[derive(Clone, Default)]
pub struct UuidIssuer;

impl IdIssuer for UuidIssuer {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
