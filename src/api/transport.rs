use std::fmt;
use std::future::Future;

use gloo_net::http::{Request, RequestBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One fully resolved HTTP call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            bearer: None,
            body: None,
        }
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportFailure>>;
}

/// Browser `fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooTransport;

impl GlooTransport {
    fn builder(request: &ApiRequest) -> RequestBuilder {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v)));
        }
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        builder
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportFailure> {
        let builder = Self::builder(&request);
        let sent = match &request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body.to_string())
                    .map_err(|err| TransportFailure(err.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|err| TransportFailure(err.to_string()))?;
        let status = response.status();
        // A failed body read is treated like an empty body.
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned responses in order and records every request.
    #[derive(Default)]
    pub struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<RawResponse, TransportFailure>>>,
        pub sent: RefCell<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, reason: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Err(TransportFailure(reason.to_string())));
            self
        }

        pub fn last(&self) -> ApiRequest {
            self.sent.borrow().last().cloned().expect("no request was sent")
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportFailure> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportFailure("no scripted reply".to_string())))
        }
    }
}
