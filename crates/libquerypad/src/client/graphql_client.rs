use crate::client::Request;
use crate::client::Response;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

type Result<T> = std::result::Result<T, TransportError>;

/// Thin HTTP transport for GraphQL documents.
///
/// POSTs the standard `{ query, variables? }` JSON body to a single fixed
/// endpoint and reads the response as text, parsing it as a [`Response`]
/// envelope when non-empty. No authentication, no retries, and no timeout
/// beyond whatever the underlying HTTP stack enforces.
#[derive(Clone, Debug)]
pub struct GraphQlClient {
    endpoint: Url,
    http_client: reqwest::Client,
}
impl GraphQlClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Dispatch a query document, optionally with variable bindings.
    ///
    /// An empty response body is treated as an absent envelope rather than
    /// an error; a non-empty body that is not valid JSON is a transport
    /// error.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<Option<Response>> {
        log::debug!("Dispatching a GraphQL request to `{}`.", self.endpoint);
        let http_response = self.http_client
            .post(self.endpoint.clone())
            .json(&Request { query, variables })
            .send()
            .await?;

        let body = http_response.text().await?;
        if body.is_empty() {
            log::debug!("Received an empty response body from `{}`.", self.endpoint);
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&body)?))
    }
}

#[derive(Clone, Debug, Error)]
pub enum TransportError {
    #[error("Failed to dispatch the request or read its response: {0}")]
    RequestFailed(Arc<reqwest::Error>),

    #[error("The response body is not a valid JSON envelope: {0}")]
    MalformedResponseBody(Arc<serde_json::Error>),
}
impl std::convert::From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(value))
    }
}
impl std::convert::From<serde_json::Error> for TransportError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedResponseBody(Arc::new(value))
    }
}
