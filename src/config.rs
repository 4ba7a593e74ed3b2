// Client configuration, built once at startup and passed by reference
use serde_json::Value;
use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://user-api-v2.simplybook.me/admin";

pub const COMPANY_LOGIN_VAR: &str = "SIMPLYBOOK_COMPANY_LOGIN";
pub const CREDENTIALS_VAR: &str = "SIMPLYBOOK_CREDENTIALS";
pub const BASE_URL_VAR: &str = "SIMPLYBOOK_API_BASE_URL";

#[derive(Clone)]
pub struct SimplybookConfig {
    pub base_url: String,
    pub company_login: String,
    // Posted verbatim to /auth
    pub credentials: Value,
}

impl SimplybookConfig {
    pub fn new(company_login: impl Into<String>, credentials: Value) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            company_login: company_login.into(),
            credentials,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from the process environment.
    ///
    /// `SIMPLYBOOK_COMPANY_LOGIN` and `SIMPLYBOOK_CREDENTIALS` (a JSON object)
    /// are required; `SIMPLYBOOK_API_BASE_URL` overrides the default endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let company_login = lookup(COMPANY_LOGIN_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(COMPANY_LOGIN_VAR))?;

        let raw_credentials =
            lookup(CREDENTIALS_VAR).ok_or(ConfigError::MissingVar(CREDENTIALS_VAR))?;
        let credentials: Value =
            serde_json::from_str(&raw_credentials).map_err(|e| ConfigError::InvalidValue {
                name: CREDENTIALS_VAR,
                reason: e.to_string(),
            })?;
        if !credentials.is_object() {
            return Err(ConfigError::InvalidValue {
                name: CREDENTIALS_VAR,
                reason: "expected a JSON object".to_string(),
            });
        }

        let config = Self::new(company_login, credentials);
        Ok(match lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            Some(url) => config.with_base_url(url.trim()),
            None => config,
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl fmt::Debug for SimplybookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimplybookConfig")
            .field("base_url", &self.base_url)
            .field("company_login", &self.company_login)
            .field("credentials", &"<redacted>")
            .finish()
    }
}
