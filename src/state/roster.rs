//! Roster filtering, sorting, and sort-preference persistence.
//!
//! DESIGN
//! ======
//! Everything here is pure over fetched profile documents; the table
//! component re-applies it on each render. The sort preference lives in
//! localStorage so it survives reloads; concurrent admin pages race on it
//! with last-write-wins.

#[cfg(test)]
#[path = "roster_test.rs"]
mod tests;

use crate::net::types::{UserProfile, UserStatus};
use crate::util::persistence;

/// localStorage keys for the persisted sort preference.
pub const SORT_FIELD_KEY: &str = "usersSortField";
pub const SORT_DIRECTION_KEY: &str = "usersSortDirection";

/// Roster fetch state for the manage-users tab.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    /// Every document from the last successful fetch, unfiltered.
    pub profiles: Vec<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set once the first fetch has completed, so an empty collection can
    /// render "no users" rather than the loading placeholder.
    pub loaded: bool,
}

/// Active status toggles and search text.
#[derive(Clone, Debug)]
pub struct RosterFilter {
    pub show_active: bool,
    pub show_inactive: bool,
    pub search: String,
}

impl Default for RosterFilter {
    fn default() -> Self {
        Self {
            show_active: true,
            show_inactive: true,
            search: String::new(),
        }
    }
}

/// Profiles passing the status toggles and search text. Admin-flagged
/// profiles never pass: the panel does not manage its own operator.
#[must_use]
pub fn filter_profiles(profiles: &[UserProfile], filter: &RosterFilter) -> Vec<UserProfile> {
    let needle = filter.search.trim().to_lowercase();
    profiles
        .iter()
        .filter(|p| {
            if p.is_admin {
                return false;
            }
            if p.status == UserStatus::Active && !filter.show_active {
                return false;
            }
            if p.status == UserStatus::Inactive && !filter.show_inactive {
                return false;
            }
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Sortable roster columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Name,
    Email,
    CreatedAt,
    Status,
}

impl SortField {
    /// Value persisted to localStorage.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::CreatedAt => "createdAt",
            Self::Status => "status",
        }
    }

    /// Parse a persisted value; unknown input is rejected so a stale or
    /// foreign key falls back to the default.
    #[must_use]
    pub fn from_storage(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "createdAt" => Some(Self::CreatedAt),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn from_storage(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Sort profiles by `field`. Strings compare case-insensitively, creation
/// dates by epoch millisecond (missing date = epoch 0), status by its wire
/// label; ties keep their incoming order.
#[must_use]
pub fn sort_profiles(mut profiles: Vec<UserProfile>, field: SortField, direction: SortDirection) -> Vec<UserProfile> {
    profiles.sort_by(|a, b| {
        let ordering = match field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            SortField::CreatedAt => a.created_at_ms().cmp(&b.created_at_ms()),
            SortField::Status => a.status.label().cmp(b.status.label()),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    profiles
}

/// Sort state after a header click: same field toggles direction, a new
/// field resets to ascending.
#[must_use]
pub fn next_sort(
    current_field: SortField,
    current_direction: SortDirection,
    clicked: SortField,
) -> (SortField, SortDirection) {
    if clicked == current_field {
        (clicked, current_direction.flipped())
    } else {
        (clicked, SortDirection::Asc)
    }
}

/// Read the persisted sort preference, defaulting to name ascending.
#[must_use]
pub fn load_sort_preference() -> (SortField, SortDirection) {
    let field = persistence::load_string(SORT_FIELD_KEY)
        .and_then(|raw| SortField::from_storage(&raw))
        .unwrap_or_default();
    let direction = persistence::load_string(SORT_DIRECTION_KEY)
        .and_then(|raw| SortDirection::from_storage(&raw))
        .unwrap_or_default();
    (field, direction)
}

/// Persist the sort preference; called on every header click.
pub fn save_sort_preference(field: SortField, direction: SortDirection) {
    persistence::save_string(SORT_FIELD_KEY, field.storage_key());
    persistence::save_string(SORT_DIRECTION_KEY, direction.storage_key());
}
