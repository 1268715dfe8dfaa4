//! Identity provider configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hydrated bundle runs in the browser where no process environment
//! exists, so the provider key and endpoint are captured at compile time and
//! handed to pages through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Hosted identity provider REST base used when no override is configured.
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Where account-creation requests are sent and which project key they carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl AuthConfig {
    /// Build config from an API key and an optional endpoint override.
    ///
    /// Blank overrides fall back to [`DEFAULT_AUTH_ENDPOINT`]; a trailing `/`
    /// is dropped so path joins stay predictable.
    pub fn new(api_key: impl Into<String>, endpoint: Option<&str>) -> Self {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_AUTH_ENDPOINT)
            .trim_end_matches('/')
            .to_owned();
        Self { api_key: api_key.into().trim().to_owned(), endpoint }
    }

    /// Build config from values captured at compile time.
    ///
    /// - `SIGNUP_AUTH_API_KEY`: provider project key (empty when unset)
    /// - `SIGNUP_AUTH_ENDPOINT`: REST base, default [`DEFAULT_AUTH_ENDPOINT`]
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("SIGNUP_AUTH_API_KEY").unwrap_or_default(),
            option_env!("SIGNUP_AUTH_ENDPOINT"),
        )
    }

    /// Full account-creation URL including the key query parameter.
    pub fn sign_up_url(&self) -> String {
        format!("{}/accounts:signUp?key={}", self.endpoint, self.api_key)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
