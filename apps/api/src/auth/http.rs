//! Auth backend reached over HTTP.
//!
//! Every endpoint answers `{ "success": bool, "message"?: string, "user_id"?: uuid }`,
//! with `user_id` required whenever `success` is true.
//! `success = false` is a rejection the user can act on. Transport failures,
//! 5xx statuses, unparseable bodies and successes without a `user_id` are
//! backend errors.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::{Account, AuthError, Authenticator, Credentials, IdentityProvider, SignUpData};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct AuthReply {
    success: bool,
    message: Option<String>,
    user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
struct ProviderRequest {
    provider: IdentityProvider,
}

#[derive(Clone)]
pub struct HttpAuthenticator {
    client: Client,
    base_url: String,
}

impl HttpAuthenticator {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build auth HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Uuid, AuthError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        debug!(%url, %status, "Auth backend replied");
        read_reply(status, &text)
    }
}

fn read_reply(status: StatusCode, body: &str) -> Result<Uuid, AuthError> {
    if status.is_server_error() {
        warn!("Auth backend failed with {status}");
        return Err(AuthError::Backend(format!("backend error ({status})")));
    }
    let reply = serde_json::from_str::<AuthReply>(body).map_err(|_| {
        warn!("Auth backend returned {status} with unparseable body");
        AuthError::Backend(format!("unexpected response ({status})"))
    })?;
    interpret_reply(reply)
}

fn interpret_reply(reply: AuthReply) -> Result<Uuid, AuthError> {
    if reply.success {
        reply.user_id.ok_or_else(|| {
            warn!("Auth backend reported success without a user_id");
            AuthError::Backend("successful reply without user_id".to_string())
        })
    } else {
        Err(AuthError::Rejected(
            reply
                .message
                .unwrap_or_else(|| "Request was rejected".to_string()),
        ))
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Account, AuthError> {
        let id = self.post("signin", credentials).await?;
        Ok(Account {
            id,
            email: Some(credentials.email.clone()),
            full_name: None,
            provider: None,
            created_at: Utc::now(),
        })
    }

    async fn sign_up(&self, data: &SignUpData) -> Result<Account, AuthError> {
        let id = self.post("signup", data).await?;
        Ok(Account {
            id,
            email: Some(data.email.clone()),
            full_name: Some(data.full_name.clone()),
            provider: None,
            created_at: Utc::now(),
        })
    }

    async fn sign_in_with_provider(
        &self,
        provider: IdentityProvider,
    ) -> Result<Account, AuthError> {
        let id = self.post("provider", &ProviderRequest { provider }).await?;
        Ok(Account {
            id,
            email: None,
            full_name: None,
            provider: Some(provider),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(raw: &str) -> AuthReply {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_failed_reply_carries_backend_message() {
        let err = interpret_reply(reply(r#"{"success": false, "message": "Email taken"}"#))
            .unwrap_err();
        assert_eq!(err, AuthError::Rejected("Email taken".to_string()));
    }

    #[test]
    fn test_failed_reply_without_message() {
        let err = interpret_reply(reply(r#"{"success": false}"#)).unwrap_err();
        assert_eq!(err, AuthError::Rejected("Request was rejected".to_string()));
    }

    #[test]
    fn test_successful_reply_keeps_backend_user_id() {
        let id = Uuid::new_v4();
        let raw = format!(r#"{{"success": true, "user_id": "{id}"}}"#);
        assert_eq!(interpret_reply(reply(&raw)).unwrap(), id);
    }

    #[test]
    fn test_success_without_user_id_is_backend_error() {
        let err = interpret_reply(reply(r#"{"success": true}"#)).unwrap_err();
        assert!(matches!(err, AuthError::Backend(_)));
    }

    #[test]
    fn test_server_error_wins_over_parseable_body() {
        let err = read_reply(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"success": false, "message": "Try later"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AuthError::Backend(_)));
    }

    #[test]
    fn test_client_error_body_is_still_a_rejection() {
        let err = read_reply(
            StatusCode::CONFLICT,
            r#"{"success": false, "message": "Email taken"}"#,
        )
        .unwrap_err();
        assert_eq!(err, AuthError::Rejected("Email taken".to_string()));
    }

    #[test]
    fn test_unparseable_body_is_backend_error() {
        let err = read_reply(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, AuthError::Backend(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_backend_error() {
        // Port 9 (discard) is not expected to run an HTTP server locally.
        let auth = HttpAuthenticator::new("http://127.0.0.1:9").unwrap();
        let err = auth
            .sign_in_with_provider(IdentityProvider::Google)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Backend(_)));
    }
}
