// Authenticator: exchanges the configured credentials for a bearer token
use std::fmt;
use tracing::{debug, error};

use crate::config::SimplybookConfig;
use crate::error::{SimplybookError, TransportError};
use crate::transport::HttpTransport;
use crate::vendor::AuthResponse;

pub(crate) const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// Short-lived token returned by `/auth`. Never cached or reused.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

pub async fn authenticate<T>(
    config: &SimplybookConfig,
    transport: &T,
) -> Result<AuthToken, SimplybookError>
where
    T: HttpTransport + ?Sized,
{
    let url = config.endpoint("auth");
    let headers = [(JSON_CONTENT_TYPE.0, JSON_CONTENT_TYPE.1.to_string())];

    let result = async {
        let body = transport
            .post_json(&url, &headers, &config.credentials)
            .await?;
        let response: AuthResponse = serde_json::from_value(body)?;
        Ok::<_, TransportError>(AuthToken::new(response.token))
    }
    .await;

    match result {
        Ok(token) => {
            debug!(url = %url, "authenticated against SimplyBook API");
            Ok(token)
        }
        Err(err) => {
            error!(error = %err, "failed to authenticate against SimplyBook API");
            Err(SimplybookError::Authentication(err))
        }
    }
}
