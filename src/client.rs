//! Request executor.
//!
//! [`Client::call`] runs the whole pipeline for one API invocation:
//!
//! 1. serialize the parameters into a form body and append the API key,
//! 2. resolve `<base>/<namespace>.<endpoint>` and let the credential decorate the request,
//! 3. fold the request through the pre-send hooks,
//! 4. send it once through the [`HttpTransport`],
//! 5. on a non-2xx status or a body that is not a single JSON value, notify the failure hooks
//!    and fail,
//! 6. otherwise fold the parsed response through the post-receive hooks and return it.
//!
//! A response whose `errorCode` is non-zero is still a successful call at this layer. A 2xx body
//! that is valid JSON but not an envelope object fails with [`Error::Decode`] and does not reach
//! the failure hooks.

pub mod builder;
pub mod config;

pub use builder::*;
pub use config::*;

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	endpoints::Endpoint,
	hooks::Hooks,
	http::{HttpTransport, RawResponse},
	obs::{self, CallOutcome, CallSpan},
	params::{self, Params},
	request::{ApiRequest, Namespace},
	response::ApiResponse,
};
#[cfg(feature = "reqwest")] use crate::{http::ReqwestTransport, request::DataCenter};

/// Body field carrying the API key on every call.
pub const API_KEY_FIELD: &str = "apiKey";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestTransport>;

/// Immutable per-client settings shared by every clone.
struct Settings {
	api_key: String,
	base_url: Url,
	credentials: Credentials,
	debug: bool,
	hooks: Hooks,
}

/// API client bound to one API key, data center, credential, and hook registry.
///
/// Everything is fixed at construction and shared read-only behind `Arc`s, so clones are cheap
/// and concurrent calls never contend on client state.
pub struct Client<T>
where
	T: ?Sized + HttpTransport,
{
	transport: Arc<T>,
	settings: Arc<Settings>,
}
impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// API key appended to every request.
	pub fn api_key(&self) -> &str {
		&self.settings.api_key
	}

	/// Base URL endpoint paths are joined onto.
	pub fn base_url(&self) -> &Url {
		&self.settings.base_url
	}

	/// Active credential strategy.
	pub fn credentials(&self) -> &Credentials {
		&self.settings.credentials
	}

	/// Whether request/response logging is enabled.
	pub fn is_debug(&self) -> bool {
		self.settings.debug
	}

	/// Registered hooks.
	pub fn hooks(&self) -> &Hooks {
		&self.settings.hooks
	}

	/// Transport used for every call.
	pub fn transport(&self) -> &Arc<T> {
		&self.transport
	}

	/// Handle scoped to one namespace.
	pub fn namespace(&self, namespace: Namespace) -> NamespaceClient<'_, T> {
		NamespaceClient { client: self, namespace }
	}

	/// `accounts` namespace handle.
	pub fn accounts(&self) -> NamespaceClient<'_, T> {
		self.namespace(Namespace::Accounts)
	}

	/// `audit` namespace handle.
	pub fn audit(&self) -> NamespaceClient<'_, T> {
		self.namespace(Namespace::Audit)
	}

	/// `ds` (data store) namespace handle.
	pub fn ds(&self) -> NamespaceClient<'_, T> {
		self.namespace(Namespace::Ds)
	}

	/// `socialize` namespace handle.
	pub fn socialize(&self) -> NamespaceClient<'_, T> {
		self.namespace(Namespace::Socialize)
	}

	/// Calls `<namespace>.<endpoint>` with untyped parameters.
	pub async fn call(
		&self,
		namespace: Namespace,
		endpoint: &str,
		params: Params,
	) -> Result<ApiResponse> {
		let span = CallSpan::new(namespace, endpoint);

		obs::record_call_outcome(namespace, CallOutcome::Attempt);

		let result = span.instrument(self.execute(namespace, endpoint, &params)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(namespace, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(namespace, CallOutcome::Failure),
		}

		result
	}

	/// Calls a typed endpoint declaration.
	pub async fn send<E>(&self, request: &E::Request) -> Result<ApiResponse<E::Response>>
	where
		E: Endpoint,
	{
		let params = Params::from_serialize(request)?;
		let response = self.call(E::NAMESPACE, E::NAME, params).await?;

		response.into_typed().map_err(|source| Error::Decode {
			namespace: E::NAMESPACE,
			endpoint: E::NAME.into(),
			source,
		})
	}

	async fn execute(
		&self,
		namespace: Namespace,
		endpoint: &str,
		params: &Params,
	) -> Result<ApiResponse> {
		let settings = self.settings.as_ref();
		let request = self.prepare(namespace, endpoint, params)?;
		let request = settings.hooks.run_before_request(request)?;

		if settings.debug {
			obs::log_request(&request);
		}

		let raw = self.transport.send(&request).await?;

		if !raw.is_success() {
			return Err(self.fail(&request, &raw, |request| Error::HttpStatus {
				namespace: request.namespace,
				endpoint: request.endpoint.clone(),
				status: raw.status,
			}));
		}

		let body = match parse_body(&raw) {
			Ok(body) => body,
			Err(source) =>
				return Err(self.fail(&request, &raw, |request| Error::ResponseParse {
					namespace: request.namespace,
					endpoint: request.endpoint.clone(),
					status: raw.status,
					source,
				})),
		};
		let response = serde_path_to_error::deserialize::<_, ApiResponse>(body).map_err(
			|source| Error::Decode {
				namespace: request.namespace,
				endpoint: request.endpoint.clone(),
				source,
			},
		)?;

		if settings.debug {
			obs::log_response(&response);
		}

		settings.hooks.run_after_response(&request, response)
	}

	/// Builds the request and applies the credential; no I/O happens here.
	fn prepare(&self, namespace: Namespace, endpoint: &str, params: &Params) -> Result<ApiRequest> {
		let settings = self.settings.as_ref();
		let mut body = params::serialize_params(params);

		body.append(API_KEY_FIELD, settings.api_key.as_str());

		let mut request = ApiRequest::new(&settings.base_url, namespace, endpoint, body)?;

		settings.credentials.apply(&mut request)?;

		Ok(request)
	}

	/// Runs the failure hooks, whose own errors take precedence over `error`.
	fn fail<F>(&self, request: &ApiRequest, raw: &RawResponse, error: F) -> Error
	where
		F: FnOnce(&ApiRequest) -> Error,
	{
		if self.settings.debug {
			obs::log_failure(raw);
		}

		match self.settings.hooks.run_failed_request(request, raw) {
			Ok(()) => error(request),
			Err(hook_error) => hook_error,
		}
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Starts a [`ClientBuilder`].
	pub fn builder() -> ClientBuilder {
		ClientBuilder::new()
	}

	/// Creates a reqwest-backed client with no hooks and debug logging disabled.
	pub fn new(
		api_key: impl Into<String>,
		data_center: DataCenter,
		credentials: Credentials,
	) -> Result<Self> {
		ClientBuilder::new()
			.api_key(api_key)
			.data_center(data_center)
			.credentials(credentials)
			.build()
	}
}
impl<T> Clone for Client<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { transport: self.transport.clone(), settings: self.settings.clone() }
	}
}
impl<T> Debug for Client<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("api_key", &self.settings.api_key)
			.field("base_url", &self.settings.base_url.as_str())
			.field("credentials", &self.settings.credentials.kind())
			.field("debug", &self.settings.debug)
			.field("hooks", &self.settings.hooks)
			.finish()
	}
}

/// Borrowed handle that fixes the namespace of every call.
pub struct NamespaceClient<'a, T>
where
	T: ?Sized + HttpTransport,
{
	client: &'a Client<T>,
	namespace: Namespace,
}
impl<T> NamespaceClient<'_, T>
where
	T: ?Sized + HttpTransport,
{
	/// Namespace this handle targets.
	pub fn namespace(&self) -> Namespace {
		self.namespace
	}

	/// Calls `<namespace>.<endpoint>`.
	pub async fn call(&self, endpoint: &str, params: Params) -> Result<ApiResponse> {
		self.client.call(self.namespace, endpoint, params).await
	}
}
impl<T> Debug for NamespaceClient<'_, T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("NamespaceClient").field("namespace", &self.namespace).finish()
	}
}

/// Parses the whole body as one JSON value; trailing data is a syntax error.
fn parse_body(raw: &RawResponse) -> Result<Value, serde_json::Error> {
	serde_json::from_str(&raw.body)
}
