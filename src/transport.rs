// HTTP transport seam between the SimplyBook client logic and reqwest
use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

pub type Headers<'a> = [(&'a str, String)];

#[async_trait]
pub trait HttpTransport: Send + Sync {
    // POST a JSON body and decode the JSON response
    async fn post_json(
        &self,
        url: &str,
        headers: &Headers<'_>,
        body: &Value,
    ) -> Result<Value, TransportError>;

    // GET with query parameters and decode the JSON response
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &Headers<'_>,
    ) -> Result<Value, TransportError>;
}

/// Transport backed by a single `reqwest::Client` with its default timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &Headers<'_>,
        body: &Value,
    ) -> Result<Value, TransportError> {
        let mut request = self.client.post(url).json(body);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }
        Self::read_json(request.send().await?).await
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &Headers<'_>,
    ) -> Result<Value, TransportError> {
        let mut request = self.client.get(url).query(query);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }
        Self::read_json(request.send().await?).await
    }
}
