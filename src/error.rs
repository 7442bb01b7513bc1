//! Client-level error types shared across credentials, hooks, and the request executor.

// self
use crate::{_prelude::*, request::Namespace};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, raised before any network activity.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS) with no HTTP response to inspect.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// A registered hook failed; the payload is the hook's own error, untouched.
	#[error("Hook aborted the request: {0}")]
	Hook(#[source] BoxError),

	/// Endpoint answered with a non-success HTTP status.
	#[error("Request to {namespace}.{endpoint} failed with HTTP status {status}.")]
	HttpStatus {
		/// Namespace of the failed call.
		namespace: Namespace,
		/// Endpoint name of the failed call.
		endpoint: String,
		/// HTTP status code returned by the server.
		status: u16,
	},
	/// Endpoint answered with a success status but the body is not a single valid JSON value.
	#[error(
		"Request to {namespace}.{endpoint} returned HTTP status {status} but the response body could not be parsed."
	)]
	ResponseParse {
		/// Namespace of the failed call.
		namespace: Namespace,
		/// Endpoint name of the failed call.
		endpoint: String,
		/// HTTP status code returned by the server.
		status: u16,
		/// JSON syntax failure.
		#[source]
		source: serde_json::Error,
	},
	/// A well-formed JSON response does not match the envelope or the typed endpoint shape.
	#[error("Response of {namespace}.{endpoint} does not match the expected shape.")]
	Decode {
		/// Namespace of the call.
		namespace: Namespace,
		/// Endpoint name of the call.
		endpoint: String,
		/// Structured decoding failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Non-zero `errorCode`, raised only through [`crate::response::ApiResponse::error_for_code`].
	#[error("API returned error code {code}: {message}.")]
	Api {
		/// Vendor error code.
		code: i64,
		/// Vendor error message, or a placeholder when none was sent.
		message: String,
		/// Vendor error details, when present.
		details: Option<String>,
	},
}
impl Error {
	/// Wraps an arbitrary hook failure.
	pub fn hook(src: impl Into<BoxError>) -> Self {
		Self::Hook(src.into())
	}

	/// Returns the HTTP status attached to the error, when one is known.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::HttpStatus { status, .. } | Self::ResponseParse { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Builder finished without an API key.
	#[error("An API key is required.")]
	MissingApiKey,
	/// API key contains characters the API never issues.
	#[error("API key must not be empty or contain whitespace.")]
	InvalidApiKey,
	/// Base URL override is unusable.
	#[error("Base URL `{url}` must be an absolute http(s) URL.")]
	InvalidBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Endpoint name cannot form a request path.
	#[error("Endpoint name `{endpoint}` is invalid.")]
	InvalidEndpoint {
		/// Offending endpoint name.
		endpoint: String,
	},
	/// Private key is PKCS#1 encoded.
	#[error(
		"Private key is in PKCS#1 format (`BEGIN RSA PRIVATE KEY`); convert it to PKCS#8 (`BEGIN PRIVATE KEY`), e.g. `openssl pkcs8 -topk8 -nocrypt -in key.pem -out key.pk8.pem`."
	)]
	Pkcs1PrivateKey,
	/// Private key is not a PKCS#8 RSA key in PEM form.
	#[error("Private key must be a PKCS#8 PEM-encoded RSA key (`BEGIN PRIVATE KEY`).")]
	InvalidPrivateKey {
		/// Underlying key parsing failure, when one was reported.
		#[source]
		source: Option<jsonwebtoken::errors::Error>,
	},
	/// JWT could not be signed.
	#[error("Failed to sign the request JWT.")]
	JwtSigning(#[source] jsonwebtoken::errors::Error),
	/// Typed parameters did not serialize into a JSON object.
	#[error("Request parameters must serialize into a JSON object.")]
	InvalidParams {
		/// Serialization failure, when serialization itself failed.
		#[source]
		source: Option<serde_json::Error>,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
