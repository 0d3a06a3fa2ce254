//! Profile-store client: document reads and writes over the hosted
//! collection.
//!
//! ERROR HANDLING
//! ==============
//! An absent document is `Ok(None)` so views can degrade to a placeholder;
//! transport and backend failures are `StoreError` and surface as transient
//! messages. Nothing here panics on a bad response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::config::BackendConfig;
use super::types::{Session, UserProfile, UserStatus};

/// Errors from the hosted profile store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never reached a backend verdict.
    #[error("profile store request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("profile store error {status}: {message}")]
    Backend { status: u16, message: String },
    /// The response body did not match the document schema.
    #[error("profile store response malformed: {0}")]
    Decode(String),
}

/// Bearer header value for authenticated store requests.
#[cfg(any(test, feature = "csr"))]
fn bearer(session: &Session) -> String {
    format!("Bearer {}", session.id_token)
}

/// Body for a status-toggle write: flipped status plus audit fields.
fn status_patch(status: UserStatus, modified_by: &str, now: OffsetDateTime) -> Result<serde_json::Value, StoreError> {
    let stamp = now.format(&Rfc3339).map_err(|e| StoreError::Decode(e.to_string()))?;
    Ok(serde_json::json!({
        "status": status,
        "lastModified": stamp,
        "modifiedBy": modified_by,
    }))
}

/// Client for the hosted profile-document collection.
#[derive(Clone)]
pub struct ProfileStore {
    config: BackendConfig,
}

impl ProfileStore {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    /// Fetch one profile document; `Ok(None)` when it does not exist.
    pub async fn fetch(&self, session: &Session, uid: &str) -> Result<Option<UserProfile>, StoreError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.user_doc_endpoint(uid);
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &bearer(session))
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if resp.status() == 404 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(backend_error(&resp).await);
            }
            let profile: UserProfile = resp.json().await.map_err(|e| StoreError::Decode(e.to_string()))?;
            Ok(Some(profile))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, uid);
            Err(StoreError::Transport("not available outside the browser".to_owned()))
        }
    }

    /// Fetch every profile document in the collection.
    pub async fn fetch_all(&self, session: &Session) -> Result<Vec<UserProfile>, StoreError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.users_endpoint();
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &bearer(session))
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(backend_error(&resp).await);
            }
            resp.json().await.map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
            Err(StoreError::Transport("not available outside the browser".to_owned()))
        }
    }

    /// Write a full profile document under its id.
    pub async fn create(&self, session: &Session, profile: &UserProfile) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.user_doc_endpoint(&profile.id);
            let resp = gloo_net::http::Request::put(&url)
                .header("Authorization", &bearer(session))
                .json(profile)
                .map_err(|e| StoreError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(backend_error(&resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, profile);
            Err(StoreError::Transport("not available outside the browser".to_owned()))
        }
    }

    /// Apply a status change plus audit fields to one document.
    pub async fn update_status(
        &self,
        session: &Session,
        uid: &str,
        status: UserStatus,
        modified_by: &str,
        now: OffsetDateTime,
    ) -> Result<(), StoreError> {
        let patch = status_patch(status, modified_by, now)?;
        #[cfg(feature = "csr")]
        {
            let url = self.config.user_doc_endpoint(uid);
            let resp = gloo_net::http::Request::patch(&url)
                .header("Authorization", &bearer(session))
                .json(&patch)
                .map_err(|e| StoreError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(backend_error(&resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, uid, patch);
            Err(StoreError::Transport("not available outside the browser".to_owned()))
        }
    }

    /// Whether the signed-in user's own document carries the admin flag.
    /// A missing document is not an admin.
    pub async fn is_admin(&self, session: &Session) -> Result<bool, StoreError> {
        let profile = self.fetch(session, &session.uid).await?;
        Ok(profile.is_some_and(|p| p.is_admin))
    }

    /// Locate the provisioned bootstrap admin document by email; the one
    /// query-by-field consumer in the client.
    pub async fn find_bootstrap_admin(&self, session: &Session, email: &str) -> Result<Option<UserProfile>, StoreError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.admin_query_endpoint(email);
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &bearer(session))
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(backend_error(&resp).await);
            }
            let matches: Vec<UserProfile> = resp.json().await.map_err(|e| StoreError::Decode(e.to_string()))?;
            Ok(matches.into_iter().next())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, email);
            Err(StoreError::Transport("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
async fn backend_error(resp: &gloo_net::http::Response) -> StoreError {
    let status = resp.status();
    let message = resp.text().await.unwrap_or_default();
    StoreError::Backend { status, message }
}
