//! Hosted-backend project configuration and endpoint construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the identity provider and the profile store are managed services;
//! this module owns the project constants and the URL layout they expose.
//! Endpoint builders are pure so request code stays free of string plumbing.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Email of the provisioned bootstrap administrator account.
pub const BOOTSTRAP_ADMIN_EMAIL: &str = "team@irislab.com";

/// Project configuration for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Public web API key identifying this project to the identity service.
    pub api_key: String,
    /// Identity service base URL.
    pub identity_url: String,
    /// Profile store base URL, already scoped to the project.
    pub store_url: String,
}

impl BackendConfig {
    /// Configuration for the IrisMapper project.
    #[must_use]
    pub fn irismapper() -> Self {
        Self {
            api_key: "im-web-4f7c09b1d2e6a8".to_owned(),
            identity_url: "https://identity.irislab.cloud/v1".to_owned(),
            store_url: "https://store.irislab.cloud/v1/projects/irismapper".to_owned(),
        }
    }

    /// Credential sign-in endpoint.
    #[must_use]
    pub fn sign_in_endpoint(&self) -> String {
        format!("{}/accounts:signInWithPassword?key={}", self.identity_url, self.api_key)
    }

    /// Account creation endpoint.
    #[must_use]
    pub fn sign_up_endpoint(&self) -> String {
        format!("{}/accounts:signUp?key={}", self.identity_url, self.api_key)
    }

    /// Profile document endpoint for one user.
    #[must_use]
    pub fn user_doc_endpoint(&self, uid: &str) -> String {
        format!("{}/users/{uid}", self.store_url)
    }

    /// Full profile collection endpoint.
    #[must_use]
    pub fn users_endpoint(&self) -> String {
        format!("{}/users", self.store_url)
    }

    /// Query endpoint locating an admin-flagged profile by email.
    #[must_use]
    pub fn admin_query_endpoint(&self, email: &str) -> String {
        format!("{}/users?email={email}&isAdmin=true", self.store_url)
    }
}
