//! Authentication collaborator: the boundary the login page and the
//! onboarding wizard talk to.
//!
//! `AppState` holds an `Arc<dyn Authenticator>`: the HTTP backend when
//! `AUTH_BACKEND_URL` is configured, otherwise the in-memory stub.

pub mod handlers;
pub mod http;
pub mod stub;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use http::HttpAuthenticator;
pub use stub::StubAuthenticator;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IdentityProvider {
    Google,
    Linkedin,
}

impl IdentityProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            IdentityProvider::Google => "google",
            IdentityProvider::Linkedin => "linkedin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpData {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// An authenticated account as reported back to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub provider: Option<IdentityProvider>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    /// The collaborator refused the request with a user-facing message.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Auth backend unavailable: {0}")]
    Backend(String),
}

/// The authentication contract. Implement this to swap backends without
/// touching the wizard or the handlers.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Account, AuthError>;

    async fn sign_up(&self, data: &SignUpData) -> Result<Account, AuthError>;

    async fn sign_in_with_provider(&self, provider: IdentityProvider)
        -> Result<Account, AuthError>;
}
