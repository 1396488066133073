//! Auth configuration and shared state.

use secrecy::SecretString;

use super::cookie::Environment;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    jwt_secret: SecretString,
    environment: Environment,
    client_url: String,
}

impl AuthConfig {
    #[must_use]
    pub fn new(jwt_secret: SecretString, environment: Environment, client_url: String) -> Self {
        Self {
            jwt_secret,
            environment,
            client_url,
        }
    }

    #[must_use]
    pub(crate) fn jwt_secret(&self) -> &SecretString {
        &self.jwt_secret
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[must_use]
    pub fn client_url(&self) -> &str {
        &self.client_url
    }
}

/// Shared auth state handed to handlers via an `Extension`.
#[derive(Clone, Debug)]
pub struct AuthState {
    config: AuthConfig,
}

impl AuthState {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
