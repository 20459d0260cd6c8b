use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use super::error::FetchError;

/// JSON-over-HTTP GET, swappable for an in-memory fake in tests.
#[async_trait(?Send)]
pub trait HttpClient {
	/// GET `url` and parse the body as JSON.
	async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// `fetch`-backed client for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClient;

#[async_trait(?Send)]
impl HttpClient for BrowserClient {
	async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
		let resp = Request::get(url)
			.send()
			.await
			.map_err(|e| FetchError::Network(e.to_string()))?;
		let (ok, status) = (resp.ok(), resp.status());
		// error payloads come back with 4xx/5xx; their body still decides
		match resp.json::<Value>().await {
			Ok(body) => Ok(body),
			Err(_) if !ok => Err(FetchError::Status(status)),
			Err(e) => Err(FetchError::Decode(e.to_string())),
		}
	}
}
