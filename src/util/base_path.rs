//! Deployment mount-prefix resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app is served from the domain root in local development but from a
//! project subfolder on static hosting, so every cross-page redirect must be
//! prefixed with the deployment folder it was loaded under.

#[cfg(test)]
#[path = "base_path_test.rs"]
mod tests;

/// Deployment folders the app is known to be hosted under.
const PROJECT_FOLDERS: &[&str] = &["irismapper", "irismapper-main", "irismapperproplan"];

/// Resolve the mount prefix for `path`.
///
/// The first non-empty path segment is compared case-insensitively against
/// the known deployment folders; a match yields `"/<folder>/"`, anything
/// else yields `"/"`. Pure and idempotent: feeding a returned prefix back in
/// resolves to itself.
#[must_use]
pub fn base_path(path: &str) -> String {
    if let Some(segment) = path.split('/').find(|s| !s.is_empty()) {
        for folder in PROJECT_FOLDERS {
            if segment.eq_ignore_ascii_case(folder) {
                return format!("/{folder}/");
            }
        }
    }
    "/".to_owned()
}

/// Mount prefix of the current browser location. Outside the browser this is
/// always `"/"`.
#[must_use]
pub fn current_base_path() -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                return base_path(&path);
            }
        }
        "/".to_owned()
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}
