//! Account creation against the hosted identity provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the provider reports an unknown failure, since sign-up
//! is only ever triggered from a browser event.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to a [`ProviderError`] carrying at most one
//! human-readable message. Raw provider codes are translated into the same
//! wording the provider's browser SDK shows, so the form can render the text
//! verbatim without classifying it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AuthConfig;

/// Shown when a failure carries no usable message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[cfg(any(test, feature = "hydrate"))]
const NETWORK_FAILURE_CODE: &str = "network-request-failed";

/// A failed account-creation attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE))]
pub struct ProviderError {
    message: Option<String>,
}

impl ProviderError {
    /// Failure with a provider-supplied message. Blank text counts as no message.
    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::unknown();
        }
        Self { message: Some(message) }
    }

    /// Failure that carries no message at all.
    pub fn unknown() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Account returned by a successful sign-up.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAccount {
    /// Provider-assigned user id.
    #[serde(rename = "localId")]
    pub uid: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl std::fmt::Debug for CreatedAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatedAccount")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// External capability that creates a user account from an email and password.
///
/// Futures are `?Send` because the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait AccountProvider {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the provider rejects the request or
    /// cannot be reached.
    async fn create_account(&self, email: &str, password: &str) -> Result<CreatedAccount, ProviderError>;
}

/// [`AccountProvider`] speaking the identity provider's REST sign-up endpoint.
#[derive(Clone, Debug)]
pub struct IdentityToolkitProvider {
    config: AuthConfig,
}

impl IdentityToolkitProvider {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl AccountProvider for IdentityToolkitProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<CreatedAccount, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            if !self.config.has_api_key() {
                log::warn!("sign-up attempted without SIGNUP_AUTH_API_KEY configured");
            }
            let body = SignUpRequest { email, password, return_secure_token: true };
            let resp = gloo_net::http::Request::post(&self.config.sign_up_url())
                .json(&body)
                .map_err(|e| {
                    log::warn!("sign-up request build failed: {e}");
                    network_failure()
                })?
                .send()
                .await
                .map_err(|e| {
                    log::warn!("sign-up request failed: {e}");
                    network_failure()
                })?;
            if !resp.ok() {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                let err = error_from_body(&text);
                log::warn!("sign-up rejected with status {status}: {err}");
                return Err(err);
            }
            resp.json::<CreatedAccount>().await.map_err(|e| {
                log::warn!("sign-up response unreadable: {e}");
                ProviderError::unknown()
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ProviderError::unknown())
        }
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Translate a non-OK response body into a [`ProviderError`].
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_from_body(body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error: ErrorBody { message: Some(raw) } }) => {
            ProviderError::with_message(describe_provider_code(&raw))
        }
        _ => ProviderError::unknown(),
    }
}

/// Error for requests that never got a response.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn network_failure() -> ProviderError {
    ProviderError::with_message(format!("Firebase: Error (auth/{NETWORK_FAILURE_CODE})."))
}

/// Render a raw REST code such as `WEAK_PASSWORD : Password should be at least
/// 6 characters` the way the browser SDK words it.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn describe_provider_code(raw: &str) -> String {
    let (code, detail) = match raw.split_once(':') {
        Some((code, detail)) => (code.trim(), Some(detail.trim()).filter(|d| !d.is_empty())),
        None => (raw.trim(), None),
    };
    let auth_code = sdk_auth_code(code);
    match detail {
        Some(detail) => format!("Firebase: {detail} (auth/{auth_code})."),
        None => format!("Firebase: Error (auth/{auth_code})."),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn sdk_auth_code(code: &str) -> &'static str {
    match code {
        "EMAIL_EXISTS" => "email-already-in-use",
        "INVALID_EMAIL" => "invalid-email",
        "WEAK_PASSWORD" => "weak-password",
        "MISSING_PASSWORD" => "missing-password",
        "MISSING_EMAIL" => "missing-email",
        "OPERATION_NOT_ALLOWED" => "operation-not-allowed",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "too-many-requests",
        "ADMIN_ONLY_OPERATION" => "admin-restricted-operation",
        "API_KEY_INVALID" | "INVALID_API_KEY" => "invalid-api-key",
        _ => "internal-error",
    }
}
