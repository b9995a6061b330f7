use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;

/// Environment variable holding the deltaDNA API key, read by [`Credentials::from_env`].
pub const API_KEY_VAR: &str = "DELTADNA_API_KEY";

/// Environment variable holding the deltaDNA API password, read by [`Credentials::from_env`].
pub const PASSWORD_VAR: &str = "DELTADNA_PASSWORD";

/// The API key and password exchanged for a bearer token when calling
/// [`crate::engage::Client::authenticate`]. They are kept on the authenticated client so that
/// [`crate::engage::Client::refresh`] can obtain a new token.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) key: String,
    pub(crate) password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new<K: Into<String>>(key: K, password: String) -> Self {
        Self {
            key: key.into(),
            password: SecretString::from(password),
        }
    }

    /// Reads the credentials from [`API_KEY_VAR`] and [`PASSWORD_VAR`].
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_VAR)
            .map_err(|e| Error::validation(format!("{API_KEY_VAR} is not usable: {e}")))?;
        let password = std::env::var(PASSWORD_VAR)
            .map_err(|e| Error::validation(format!("{PASSWORD_VAR} is not usable: {e}")))?;

        Ok(Self::new(key, password))
    }

    /// Returns the API key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub(crate) fn body(&self) -> AuthenticationRequest<'_> {
        AuthenticationRequest {
            key: &self.key,
            password: self.password.expose_secret(),
        }
    }
}

/// Body of the `authentication/v1/authenticate` call. Only built right before the request is
/// sent so the password is exposed for as short as possible.
#[derive(Serialize)]
pub(crate) struct AuthenticationRequest<'creds> {
    key: &'creds str,
    password: &'creds str,
}

#[derive(Deserialize)]
pub(crate) struct AuthenticationResponse {
    #[serde(rename = "idToken")]
    pub(crate) id_token: SecretString,
}

/// Builds the `Authorization: Bearer ...` header sent with every call after authentication.
pub(crate) fn bearer_headers(token: &SecretString) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);

    Ok(headers)
}

/// Each client can exist in one state at a time, i.e. [`state::Unauthenticated`] or
/// [`state::Authenticated`].
pub mod state {
    use crate::auth::{Credentials, SecretString};
    use crate::engage::types::response::Environment;

    /// The initial state of the client
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Unauthenticated;

    /// The elevated state of the client, reached through
    /// [`crate::engage::Client::authenticate`]. It carries the bearer token and the environment
    /// directory, both fetched once and only replaced by [`crate::engage::Client::refresh`].
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Authenticated {
        /// Kept so that the token can be re-acquired
        pub(crate) credentials: Credentials,
        /// Sent as `Authorization: Bearer <token>`
        pub(crate) token: SecretString,
        /// Every environment visible to the API key, in remote response order
        pub(crate) environments: Vec<Environment>,
    }

    /// The client state can only be [`Unauthenticated`] or [`Authenticated`].
    pub trait State: sealed::Sealed {}

    impl State for Unauthenticated {}
    impl sealed::Sealed for Unauthenticated {}

    impl State for Authenticated {}
    impl sealed::Sealed for Authenticated {}

    mod sealed {
        pub trait Sealed {}
    }
}
