//! Fetch-based HTTP transport.
//!
//! Uses browser `fetch()` via gloo-net. Timed requests race the whole
//! exchange (headers and body) against a gloo-timers timeout; when the timer
//! wins the request is aborted through its `AbortController` so the socket
//! does not linger.

use async_trait::async_trait;
use futures::future::{self, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use web_sys::AbortController;

use talksy_core::ports::{HttpPort, HttpReply};
use talksy_types::{config::BackendConfig, Result, TalksyError};

const JSON: &str = "application/json";

pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.normalized_base(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    /// GET builder for `path`. Timed GETs are reachability checks and go out
    /// bare; API GETs declare JSON like every other call.
    pub fn get_request(&self, path: &str, timeout_ms: Option<u64>) -> RequestBuilder {
        let builder = Request::get(&self.url(path));
        match timeout_ms {
            Some(_) => builder,
            None => builder.header("Content-Type", JSON),
        }
    }

    pub fn post_request(&self, path: &str, body: Option<&Value>) -> Result<Request> {
        let builder = Request::post(&self.url(path)).header("Content-Type", JSON);
        match body {
            Some(body) => builder.json(body).map_err(network),
            None => builder.build().map_err(network),
        }
    }

    async fn send(builder: RequestBuilder, timeout_ms: Option<u64>) -> Result<HttpReply> {
        let Some(ms) = timeout_ms else {
            let request = builder.build().map_err(network)?;
            return read_reply(request.send().await.map_err(network)?).await;
        };

        let controller = AbortController::new()
            .map_err(|e| TalksyError::JsInterop(format!("AbortController: {:?}", e)))?;
        let request = builder
            .abort_signal(Some(&controller.signal()))
            .build()
            .map_err(network)?;

        let exchange = async {
            let response = request.send().await.map_err(network)?;
            read_reply(response).await
        };
        let timer = TimeoutFuture::new(ms.min(u32::MAX as u64) as u32);
        pin_mut!(exchange, timer);

        match future::select(exchange, timer).await {
            Either::Left((reply, _)) => reply,
            Either::Right(((), _)) => {
                controller.abort();
                Err(TalksyError::Timeout(ms))
            }
        }
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchTransport {
    async fn get(&self, path: &str, timeout_ms: Option<u64>) -> Result<HttpReply> {
        Self::send(self.get_request(path, timeout_ms), timeout_ms).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> Result<HttpReply> {
        let request = self.post_request(path, body)?;
        let response = request.send().await.map_err(network)?;
        read_reply(response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

async fn read_reply(response: Response) -> Result<HttpReply> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    log::debug!("{} -> HTTP {} ({} bytes)", response.url(), status, body.len());
    Ok(HttpReply::new(status, body))
}

fn network(e: gloo_net::Error) -> TalksyError {
    TalksyError::Network(e.to_string())
}

/// Join the backend origin and a route. `path` always starts with `/`.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("http://localhost:8000", "/greet"), "http://localhost:8000/greet");
        assert_eq!(endpoint_url("http://localhost:8000/", "/listen"), "http://localhost:8000/listen");
        assert_eq!(endpoint_url("http://localhost:8000", "/"), "http://localhost:8000/");
    }

    #[test]
    fn test_transport_normalizes_base() {
        let transport = FetchTransport::new(&BackendConfig {
            api_base: "https://talksy.example/ ".to_string(),
            probe_timeout_ms: 3000,
        });
        assert_eq!(transport.base_url(), "https://talksy.example");
        assert_eq!(transport.url("/speak"), "https://talksy.example/speak");
    }
}
