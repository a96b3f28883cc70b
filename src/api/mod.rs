//! HTTP access to the Ahorrista backend.
//!
//! One method per endpoint, grouped by resource in the submodules. Every
//! method performs exactly one request and turns whatever comes back into an
//! [`ApiResult`]. Authenticated methods take the bearer token as an argument;
//! the client itself holds no session.

pub mod envelope;
pub mod transport;

mod auth;
mod expenses;
mod goals;
mod students;

use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use envelope::TokenEnvelope;
pub use transport::{ApiRequest, GlooTransport, Method, RawResponse, Transport};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient<T> {
    base_url: String,
    auth_prefix: String,
    register_path: String,
    token_envelope: TokenEnvelope,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &AppConfig, transport: T) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            auth_prefix: config.auth_prefix.clone(),
            register_path: config.register_path.clone(),
            token_envelope: config.token_envelope,
            transport,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, format!("{}{}", self.base_url, path))
    }

    /// Sends the request and sorts the outcome into success or [`ApiError`].
    async fn execute(&self, request: ApiRequest, fallback: &str) -> ApiResult<RawResponse> {
        let method = request.method;
        let url = request.url.clone();
        log::debug!("{method} {url}");

        let response = self.transport.send(request).await.map_err(|failure| {
            log::warn!("{method} {url} failed: {failure}");
            ApiError::Network {
                message: fallback.to_string(),
            }
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let message = envelope::server_message(&response.body)
            .unwrap_or_else(|| fallback.to_string());
        log::warn!("{method} {url} returned {}: {message}", response.status);
        Err(match response.status {
            401 | 403 => ApiError::Unauthorized { message },
            status => ApiError::Rejected { status, message },
        })
    }

    async fn fetch_item<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        fallback: &str,
    ) -> ApiResult<R> {
        let response = self.execute(request, fallback).await?;
        envelope::parse_item(&response.body).map_err(|err| malformed(err, fallback))
    }

    async fn fetch_list<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        fallback: &str,
    ) -> ApiResult<Vec<R>> {
        let response = self.execute(request, fallback).await?;
        envelope::parse_list(&response.body).map_err(|err| malformed(err, fallback))
    }

    async fn fetch_nothing(&self, request: ApiRequest, fallback: &str) -> ApiResult<()> {
        self.execute(request, fallback).await.map(|_| ())
    }
}

fn malformed(err: impl std::fmt::Display, fallback: &str) -> ApiError {
    log::warn!("unexpected response body: {err}");
    ApiError::Malformed {
        message: fallback.to_string(),
    }
}

fn to_body(value: &impl serde::Serialize) -> serde_json::Value {
    // Plain data structs with string keys always serialize.
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
pub(crate) fn test_client(
    transport: transport::scripted::ScriptedTransport,
) -> ApiClient<transport::scripted::ScriptedTransport> {
    let config = AppConfig {
        backend_url: "http://api.test".to_string(),
        ..AppConfig::default()
    };
    ApiClient::new(&config, transport)
}
