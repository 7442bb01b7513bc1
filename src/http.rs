//! Transport primitives for API calls.
//!
//! The module exposes [`HttpTransport`] alongside [`RawResponse`] so downstream crates can plug
//! in their own HTTP stack. A transport performs exactly one exchange per call: it never
//! retries, caches, or classifies statuses. Status handling and body parsing belong to the
//! executor, which is what lets failure hooks observe every non-success answer.

// self
#[cfg(feature = "reqwest")] use crate::request::HttpMethod;
use crate::{_prelude::*, error::TransportError, request::ApiRequest};

/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of sending an [`ApiRequest`].
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared by every
/// clone of a client across tasks. Any HTTP status, including 4xx/5xx, is a successful send;
/// only failures that leave no response behind (DNS, TCP, TLS, I/O) should surface as
/// [`TransportError`].
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends the request and buffers the full response.
	fn send<'a>(&'a self, request: &'a ApiRequest) -> TransportFuture<'a>;
}

/// Buffered HTTP response as received from the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers, lower-cased names.
	pub headers: BTreeMap<String, String>,
	/// Body decoded as UTF-8 (lossy).
	pub body: String,
}
impl RawResponse {
	/// Creates a response with the provided status and body and no headers.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, headers: BTreeMap::new(), body: body.into() }
	}

	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn send<'a>(&'a self, request: &'a ApiRequest) -> TransportFuture<'a> {
		Box::pin(async move {
			let builder = match request.method {
				HttpMethod::Post =>
					self.0.post(request.url.clone()).body(request.body.encode()),
				HttpMethod::Get => {
					let mut url = request.url.clone();

					url.query_pairs_mut().extend_pairs(request.body.iter());

					self.0.get(url)
				},
			};
			let builder = request
				.headers
				.iter()
				.fold(builder, |builder, (name, value)| builder.header(name, value));
			let response = builder.send().await?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.filter_map(|(name, value)| {
					value.to_str().ok().map(|value| (name.as_str().to_owned(), value.to_owned()))
				})
				.collect();
			let bytes = response.bytes().await?;

			Ok(RawResponse { status, headers, body: String::from_utf8_lossy(&bytes).into_owned() })
		})
	}
}
