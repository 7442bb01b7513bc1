//! Per-call request descriptors and the wire vocabulary they are built from.
//!
//! An [`ApiRequest`] is assembled fresh for every call: the executor resolves the target URL from
//! the client's data center, serializes parameters into a [`FormBody`], lets the active
//! credential decorate it, and then hands it to the pre-send hooks. Nothing in this module
//! performs I/O.

pub mod body;
pub mod data_center;
pub mod namespace;

pub use body::*;
pub use data_center::*;
pub use namespace::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Header carrying bearer credentials.
pub const AUTHORIZATION: &str = "Authorization";
/// Header declaring the body encoding.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Body encoding used by every API call.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// HTTP verbs understood by transports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// Parameters travel in the query string.
	Get,
	#[default]
	/// Parameters travel in a form-encoded body; used for every authenticated call.
	Post,
}
impl HttpMethod {
	/// Returns the canonical verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully constructed request handed to hooks and transports.
///
/// Hooks receive the request by value and must hand back a request of the same shape; the value
/// returned by the last pre-send hook is exactly what the transport sends.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
	/// Namespace the endpoint belongs to.
	pub namespace: Namespace,
	/// Endpoint name within the namespace (e.g. `getPolicies`).
	pub endpoint: String,
	/// HTTP verb.
	pub method: HttpMethod,
	/// Absolute target URL.
	pub url: Url,
	/// Outbound headers keyed by name.
	pub headers: BTreeMap<String, String>,
	/// Serialized parameters.
	pub body: FormBody,
}
impl ApiRequest {
	/// Builds a `POST` request for `<base>/<namespace>.<endpoint>`.
	pub fn new(
		base_url: &Url,
		namespace: Namespace,
		endpoint: impl Into<String>,
		body: FormBody,
	) -> Result<Self> {
		let endpoint = endpoint.into();

		if endpoint.is_empty() || endpoint.contains(['/', '?', '#']) {
			return Err(ConfigError::InvalidEndpoint { endpoint }.into());
		}

		let url = base_url
			.join(&format!("{namespace}.{endpoint}"))
			.map_err(|_| ConfigError::InvalidEndpoint { endpoint: endpoint.clone() })?;
		let mut headers = BTreeMap::new();

		headers.insert(CONTENT_TYPE.into(), FORM_URLENCODED.into());

		Ok(Self { namespace, endpoint, method: HttpMethod::Post, url, headers, body })
	}

	/// Sets or replaces a header.
	pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.headers.insert(name.into(), value.into());
	}

	/// Returns a header value, if set.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).map(String::as_str)
	}

	/// Returns the `Authorization` header, if any credential set one.
	pub fn authorization(&self) -> Option<&str> {
		self.header(AUTHORIZATION)
	}

	/// `<namespace>.<endpoint>` label used in logs and errors.
	pub fn method_name(&self) -> String {
		format!("{}.{}", self.namespace, self.endpoint)
	}
}
impl Debug for ApiRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let headers = self
			.headers
			.iter()
			.map(|(name, value)| {
				let value = if name.eq_ignore_ascii_case(AUTHORIZATION) {
					"<redacted>"
				} else {
					value.as_str()
				};

				(name.as_str(), value)
			})
			.collect::<BTreeMap<_, _>>();

		f.debug_struct("ApiRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("headers", &headers)
			.field("body", &self.body)
			.finish()
	}
}
