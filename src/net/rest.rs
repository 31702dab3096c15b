//! Live REST adapter for the management API.
//!
//! Implements the same [`Backend`](super::api::Backend) capability as the
//! mock against a running server, so the console can be pointed at real data
//! without touching the dispatcher. Browser-only: native builds compile this
//! module empty.

#[cfg(feature = "web")]
use serde_json::Value;

#[cfg(feature = "web")]
use super::api::{ApiError, ApiFuture, Backend, Mutation, Resource};

/// Backend talking to a live server over HTTP.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct RestBackend;

#[cfg(feature = "web")]
impl RestBackend {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "web")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "web")]
async fn read_json(resp: gloo_net::http::Response, path: &str) -> Result<Value, ApiError> {
    if resp.status() == 404 {
        return Err(ApiError::UnknownEndpoint { path: path.to_owned() });
    }
    if !resp.ok() {
        return Err(ApiError::Http {
            status: resp.status(),
            message: resp.status_text(),
        });
    }
    let text = resp.text().await.map_err(transport)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(feature = "web")]
impl Backend for RestBackend {
    fn fetch(&self, resource: Resource) -> ApiFuture<Value> {
        Box::pin(async move {
            let path = resource.path();
            let resp = gloo_net::http::Request::get(path)
                .send()
                .await
                .map_err(transport)?;
            read_json(resp, path).await
        })
    }

    fn submit(&self, mutation: Mutation) -> ApiFuture<Value> {
        Box::pin(async move {
            let path = mutation.path();
            let req = match mutation.method() {
                "DELETE" => gloo_net::http::Request::delete(&path),
                _ => gloo_net::http::Request::post(&path),
            };
            let resp = match mutation.body() {
                Some(body) => req.json(&body).map_err(transport)?.send().await,
                None => req.send().await,
            }
            .map_err(transport)?;
            read_json(resp, &path).await
        })
    }
}
