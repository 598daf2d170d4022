//! Browser transport
//!
//! `fetch`-backed implementation of the core's `HttpClient`, built on
//! `gloo-net`. One request per call; no timeout, no retry.

use gloo_net::http::{Request, RequestBuilder};
use pedidos::{ConsoleError, ConsoleResult, HttpClient, HttpRequest, HttpResponse};
use pedidos_shared::protocol::HttpMethod;

/// Stateless `fetch` client.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn builder(url: &str, method: HttpMethod) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ConsoleResult<HttpResponse> {
        let mut builder = Self::builder(&req.url, req.method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ConsoleError::network(format!("request build failed: {}", e)))?;

        // A rejected fetch promise means the backend was not reachable at all.
        let response = request
            .send()
            .await
            .map_err(|e| ConsoleError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConsoleError::network(format!("reading body failed: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
