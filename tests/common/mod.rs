//! Shared fixtures for integration tests.

#![allow(dead_code)]

// std
use std::{collections::VecDeque, sync::Arc};
// crates.io
use gigya_client::{
	auth::Credentials,
	client::{Client, ClientBuilder, ReqwestApiClient},
	error::TransportError,
	hooks::Hooks,
	http::{HttpTransport, RawResponse, ReqwestTransport, TransportFuture},
	reqwest::Client as ReqwestClient,
	request::ApiRequest,
	url::Url,
};
use parking_lot::Mutex;

/// API key used by integration tests.
pub const TEST_API_KEY: &str = "3_test-api-key";
/// PKCS#8 RSA key fixture.
pub const PKCS8_PEM: &str = include_str!("../fixtures/rsa_pkcs8.pem");
/// Same key, PKCS#1 encoded.
pub const PKCS1_PEM: &str = include_str!("../fixtures/rsa_pkcs1.pem");
/// Public half of the key fixtures.
pub const PUBLIC_PEM: &str = include_str!("../fixtures/rsa_public.pem");

/// Builds a reqwest transport that accepts the self-signed certificates produced by `httpmock`.
pub fn test_reqwest_transport() -> ReqwestTransport {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestTransport::with_client(client)
}

/// Constructs a reqwest-backed client pointed at a mock server base URL.
pub fn build_reqwest_test_client(
	base_url: &str,
	credentials: Credentials,
	hooks: Hooks,
) -> ReqwestApiClient {
	ClientBuilder::new()
		.api_key(TEST_API_KEY)
		.base_url(Url::parse(base_url).expect("Mock server base URL should parse."))
		.credentials(credentials)
		.hooks(hooks)
		.debug(true)
		.build_with_transport(test_reqwest_transport())
		.expect("Test client should build.")
}

/// In-process transport that records every request and replays scripted outcomes.
#[derive(Default)]
pub struct RecordingTransport {
	sent: Mutex<Vec<ApiRequest>>,
	script: Mutex<VecDeque<Result<RawResponse, String>>>,
}
impl RecordingTransport {
	/// Transport answering every call with `status` + `body`.
	pub fn replying(status: u16, body: &str) -> Arc<Self> {
		let transport = Self::default();

		transport.push(status, body);

		Arc::new(transport)
	}

	/// Transport failing every call at the network layer.
	pub fn unreachable(message: &str) -> Arc<Self> {
		let transport = Self::default();

		transport.script.lock().push_back(Err(message.to_owned()));

		Arc::new(transport)
	}

	/// Queues a response; the last queued outcome repeats once the queue drains.
	pub fn push(&self, status: u16, body: &str) {
		self.script.lock().push_back(Ok(RawResponse::new(status, body)));
	}

	/// Requests sent so far.
	pub fn sent(&self) -> Vec<ApiRequest> {
		self.sent.lock().clone()
	}

	/// Number of requests sent so far.
	pub fn calls(&self) -> usize {
		self.sent.lock().len()
	}

	fn next_outcome(&self) -> Result<RawResponse, String> {
		let mut script = self.script.lock();

		if script.len() > 1 {
			script.pop_front().expect("Script length was checked above.")
		} else {
			script.front().cloned().unwrap_or_else(|| Ok(RawResponse::new(200, "{\"errorCode\":0}")))
		}
	}
}
impl HttpTransport for RecordingTransport {
	fn send<'a>(&'a self, request: &'a ApiRequest) -> TransportFuture<'a> {
		self.sent.lock().push(request.clone());

		let outcome = self.next_outcome();

		Box::pin(async move {
			outcome.map_err(|message| {
				TransportError::Io(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message))
			})
		})
	}
}

/// Client over a [`RecordingTransport`].
pub fn build_recording_client(
	transport: Arc<RecordingTransport>,
	credentials: Credentials,
	hooks: Hooks,
) -> Client<RecordingTransport> {
	ClientBuilder::new()
		.api_key(TEST_API_KEY)
		.credentials(credentials)
		.hooks(hooks)
		.build_with_shared_transport(transport)
		.expect("Recording client should build.")
}
