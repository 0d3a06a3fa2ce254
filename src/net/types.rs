//! Wire DTOs for the hosted identity and profile-store services.
//!
//! DESIGN
//! ======
//! Field names mirror the stored document schema (camelCase on the wire) so
//! serde round-trips stay lossless. Timestamps travel as RFC 3339 strings
//! and are optional: documents written before audit fields existed still
//! deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

/// The live authenticated identity issued by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Provider-assigned user identifier; also the profile document key.
    pub uid: String,
    /// Email the account was registered with.
    pub email: String,
    /// Bearer token authorizing profile-store requests.
    pub id_token: String,
}

/// Activation status of an account.
///
/// Inactive accounts are blocked at sign-in; elsewhere the status is
/// displayed and managed but not re-checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// The opposite status, as applied by the roster toggle.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// Lowercase wire label; also the sort key for the status column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Capitalized label for table and dialog copy.
    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// A persisted user profile document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Document id; equals the identity uid.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email mirrored from the identity provider.
    pub email: String,
    /// Activation status.
    pub status: UserStatus,
    /// Admin-panel access flag; never written by this client.
    pub is_admin: bool,
    /// Set once when the document is first written.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Updated on every status change.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_modified: Option<OffsetDateTime>,
    /// Email of the actor performing the last write.
    pub modified_by: String,
}

impl UserProfile {
    /// Document written when an authenticated account has no profile yet.
    /// The display name defaults to the local part of the email.
    #[must_use]
    pub fn bootstrap(uid: &str, email: &str, now: OffsetDateTime) -> Self {
        let name = email.split('@').next().unwrap_or_default().to_owned();
        Self {
            id: uid.to_owned(),
            name,
            email: email.to_owned(),
            status: UserStatus::Active,
            is_admin: false,
            created_at: Some(now),
            last_modified: Some(now),
            modified_by: "system".to_owned(),
        }
    }

    /// Creation time in epoch milliseconds; missing timestamps sort first.
    #[must_use]
    pub fn created_at_ms(&self) -> i128 {
        self.created_at.map_or(0, |t| t.unix_timestamp_nanos() / 1_000_000)
    }
}

/// Render a timestamp as a short date, or the placeholder used whenever a
/// document lacks one.
#[must_use]
pub fn date_label(ts: Option<OffsetDateTime>) -> String {
    let Some(ts) = ts else {
        return "Not available".to_owned();
    };
    let format = format_description!("[year]-[month]-[day]");
    ts.format(format).unwrap_or_else(|_| "Not available".to_owned())
}
