//! Shared session state for the current browser user.
//!
//! DESIGN
//! ======
//! One `SessionState` signal is provided via context and written only by the
//! access guard's subscription callback; presenters and controllers read it.
//! `loading` stays set until the first session-change notification arrives,
//! so pages can distinguish "still resolving" from "signed out".

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::net::types::Session;

/// Session resolution state shared across pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// State after a session-change notification has been delivered.
    #[must_use]
    pub fn resolved(session: Option<Session>) -> Self {
        Self {
            session,
            loading: false,
        }
    }

    /// Email of the signed-in user, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.email.as_str())
    }
}
