use thiserror::Error;

/// Ways a data fetch can fail. The helpers collapse all of them into a single
/// failed signal for the page.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FetchError {
	/// The route could not be built from the page origin.
	#[error("invalid url: {0}")]
	InvalidUrl(#[from] url::ParseError),
	/// The request was rejected before a response arrived.
	#[error("request failed: {0}")]
	Network(String),
	/// Non-2xx response without a JSON body.
	#[error("unexpected status {0}")]
	Status(u16),
	/// The body was not JSON.
	#[error("invalid response body: {0}")]
	Decode(String),
	/// The payload carried an `error` field.
	#[error("{0}")]
	Server(String),
}
