//! Identity-gateway client: credential sign-in/up, session lifecycle, and
//! session-change notification.
//!
//! ARCHITECTURE
//! ============
//! The hosted provider authenticates credentials and issues a bearer token;
//! this module keeps the resulting session in memory, mirrors it to
//! localStorage so a reload restores it, and fans every change out to
//! registered listeners. The access guard owns exactly one subscription per
//! page lifetime and is the only writer of shared session state.
//!
//! TRADE-OFFS
//! ==========
//! Listeners receive a snapshot clone of the session, not a borrow, so a
//! notification can never observe a half-updated session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

use super::config::BackendConfig;
use super::types::Session;
use crate::util::persistence;

/// localStorage key mirroring the live session across reloads.
const SESSION_STORAGE_KEY: &str = "irismapper_session";

/// Errors from the hosted identity provider.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the credentials or the signup request; the
    /// message is the provider's own and is shown to the user.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a provider verdict.
    #[error("identity request failed: {0}")]
    Transport(String),
}

/// Successful credential-exchange response body.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct CredentialResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "idToken")]
    id_token: String,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

type Listener = Arc<dyn Fn(Option<Session>) + Send + Sync>;

struct GatewayInner {
    config: BackendConfig,
    session: RwLock<Option<Session>>,
    restored: AtomicBool,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener: AtomicU64,
}

/// Client for the hosted identity provider.
#[derive(Clone)]
pub struct IdentityGateway {
    inner: Arc<GatewayInner>,
}

/// Handle for a registered session-change listener. Delivery continues until
/// [`SessionSubscription::unsubscribe`] is called.
pub struct SessionSubscription {
    inner: Weak<GatewayInner>,
    id: u64,
}

impl SessionSubscription {
    /// Stop delivering notifications to this listener.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut listeners) = inner.listeners.lock() {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

impl IdentityGateway {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                config,
                session: RwLock::new(None),
                restored: AtomicBool::new(false),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(1),
            }),
        }
    }

    /// Snapshot of the current session, if any.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.inner.session.read().ok().and_then(|slot| slot.clone())
    }

    /// Register `listener` for session-change notifications. If the
    /// persisted session has already been restored, the listener is invoked
    /// immediately with the current state so late subscribers converge.
    pub fn subscribe(&self, listener: impl Fn(Option<Session>) + Send + Sync + 'static) -> SessionSubscription {
        let listener: Listener = Arc::new(listener);
        let id = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.inner.listeners.lock() {
            listeners.push((id, listener.clone()));
        }
        if self.inner.restored.load(Ordering::Acquire) {
            listener(self.session());
        }
        SessionSubscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Restore the mirrored session (if any) and deliver the first
    /// notification. Called once at app start.
    pub fn restore(&self) {
        let session = persistence::load_json::<Session>(SESSION_STORAGE_KEY);
        if let Ok(mut slot) = self.inner.session.write() {
            *slot = session;
        }
        self.inner.restored.store(true, Ordering::Release);
        self.notify();
    }

    /// Sign in with email and password. On success the session becomes
    /// current and listeners are notified.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let endpoint = self.inner.config.sign_in_endpoint();
        let session = credential_request(&endpoint, email, password).await?;
        self.install(Some(session.clone()));
        Ok(session)
    }

    /// Create a new account and return its session. The returned session is
    /// NOT installed as the current one: provisioning an account from the
    /// admin panel must not displace the operator's own session.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let endpoint = self.inner.config.sign_up_endpoint();
        credential_request(&endpoint, email, password).await
    }

    /// Drop the current session and notify listeners.
    pub fn sign_out(&self) {
        self.install(None);
    }

    /// Make `session` current, mirror it to storage, and notify listeners.
    fn install(&self, session: Option<Session>) {
        match &session {
            Some(live) => persistence::save_json(SESSION_STORAGE_KEY, live),
            None => persistence::remove_key(SESSION_STORAGE_KEY),
        }
        if let Ok(mut slot) = self.inner.session.write() {
            *slot = session;
        }
        self.notify();
    }

    fn notify(&self) {
        let current = self.session();
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .map(|listeners| listeners.iter().map(|(_, listener)| listener.clone()).collect())
            .unwrap_or_default();
        for listener in listeners {
            listener(current.clone());
        }
    }
}

/// Exchange credentials at `endpoint` for a session.
async fn credential_request(endpoint: &str, email: &str, password: &str) -> Result<Session, AuthError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&payload)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("identity request failed: {status}"),
            };
            return Err(AuthError::Rejected(message));
        }
        let body: CredentialResponse = resp.json().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Session {
            uid: body.local_id,
            email: body.email,
            id_token: body.id_token,
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, email, password);
        Err(AuthError::Transport("not available outside the browser".to_owned()))
    }
}
