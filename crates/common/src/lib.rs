// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the gatekeeper backend and its clients.
//! This module defines the signup/login request shapes and supporting types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Privilege level attached to an account and embedded in issued tokens.
///
/// Closed set: anything other than `ADMIN` or `NORMAL` is rejected during
/// registration validation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Normal,
}

impl Role {
    /// Parse the wire representation. Exact match only.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "NORMAL" => Some(Role::Normal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration request body
///
/// All fields default to empty so an absent field and an empty field are
/// rejected the same way by the service. `role` stays a string here; the
/// backend parses it into [`Role`] as part of validation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegistrationInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Login request body
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful signup/login response carrying the bearer token
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}
