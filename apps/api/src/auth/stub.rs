use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{Account, AuthError, Authenticator, Credentials, IdentityProvider, SignUpData};

const MIN_PASSWORD_LEN: usize = 8;

struct StoredAccount {
    account: Account,
    password: String,
}

/// In-process account registry for local development and tests.
/// Accounts live only as long as the process.
#[derive(Default)]
pub struct StubAuthenticator {
    accounts: RwLock<HashMap<String, StoredAccount>>,
}

impl StubAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Account, AuthError> {
        let accounts = self.accounts.read().await;
        match accounts.get(&normalize_email(&credentials.email)) {
            Some(stored) if stored.password == credentials.password => Ok(stored.account.clone()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn sign_up(&self, data: &SignUpData) -> Result<Account, AuthError> {
        let email = normalize_email(&data.email);
        if !email.contains('@') {
            return Err(AuthError::Rejected(
                "Please enter a valid email address".to_string(),
            ));
        }
        if data.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Rejected(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(AuthError::Rejected(
                "An account with this email already exists".to_string(),
            ));
        }

        let account = Account {
            id: Uuid::new_v4(),
            email: Some(email.clone()),
            full_name: Some(data.full_name.trim().to_string()),
            provider: None,
            created_at: Utc::now(),
        };
        accounts.insert(
            email,
            StoredAccount {
                account: account.clone(),
                password: data.password.clone(),
            },
        );
        info!(account_id = %account.id, "Stub account created");
        Ok(account)
    }

    async fn sign_in_with_provider(
        &self,
        provider: IdentityProvider,
    ) -> Result<Account, AuthError> {
        Ok(Account {
            id: Uuid::new_v4(),
            email: None,
            full_name: None,
            provider: Some(provider),
            created_at: Utc::now(),
        })
    }
}
