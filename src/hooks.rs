//! Ordered request/response hooks.
//!
//! A [`Hooks`] registry is a list of [`Middleware`] entries. The executor folds the request
//! through every entry's [`Middleware::on_before_request`] before sending, folds the parsed
//! response through [`Middleware::on_after_response`] after receiving, and calls
//! [`Middleware::on_failed_request`] once per entry when the server answers with a failure
//! status or an unparseable body. Entries run strictly in registration order and each receives
//! the previous entry's output. The first hook error aborts the call and is returned untouched
//! inside [`Error::Hook`].
//!
//! Plain closures can be registered per stage with [`Hooks::on_before_request`],
//! [`Hooks::on_after_response`], and [`Hooks::on_failed_request`]; types that care about
//! several stages implement [`Middleware`] directly.

// self
use crate::{_prelude::*, http::RawResponse, request::ApiRequest, response::ApiResponse};

/// Error type hooks may fail with.
pub type HookError = Box<dyn StdError + Send + Sync>;
/// Result type returned by hooks.
pub type HookResult<T> = std::result::Result<T, HookError>;

/// Pipeline participant observing or rewriting calls at each stage.
///
/// Every method defaults to a pass-through, so implementors override only the stages they need.
pub trait Middleware: Send + Sync {
	/// Rewrites the outgoing request. The returned value replaces the request for the rest of
	/// the pipeline.
	fn on_before_request(&self, request: ApiRequest) -> HookResult<ApiRequest> {
		Ok(request)
	}

	/// Rewrites the parsed response. `request` is the exact request that was sent.
	fn on_after_response(
		&self,
		_request: &ApiRequest,
		response: ApiResponse,
	) -> HookResult<ApiResponse> {
		Ok(response)
	}

	/// Observes a failed exchange (non-2xx status, or 2xx with an unparseable body).
	fn on_failed_request(&self, _request: &ApiRequest, _response: &RawResponse) -> HookResult<()> {
		Ok(())
	}
}

struct BeforeRequestFn<F>(F);
impl<F> Middleware for BeforeRequestFn<F>
where
	F: Fn(ApiRequest) -> HookResult<ApiRequest> + Send + Sync,
{
	fn on_before_request(&self, request: ApiRequest) -> HookResult<ApiRequest> {
		(self.0)(request)
	}
}

struct AfterResponseFn<F>(F);
impl<F> Middleware for AfterResponseFn<F>
where
	F: Fn(&ApiRequest, ApiResponse) -> HookResult<ApiResponse> + Send + Sync,
{
	fn on_after_response(
		&self,
		request: &ApiRequest,
		response: ApiResponse,
	) -> HookResult<ApiResponse> {
		(self.0)(request, response)
	}
}

struct FailedRequestFn<F>(F);
impl<F> Middleware for FailedRequestFn<F>
where
	F: Fn(&ApiRequest, &RawResponse) -> HookResult<()> + Send + Sync,
{
	fn on_failed_request(&self, request: &ApiRequest, response: &RawResponse) -> HookResult<()> {
		(self.0)(request, response)
	}
}

/// Immutable-once-attached registry of pipeline entries.
#[derive(Clone, Default)]
pub struct Hooks {
	entries: Vec<Arc<dyn Middleware>>,
}
impl Hooks {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a pre-send hook.
	pub fn on_before_request<F>(self, hook: F) -> Self
	where
		F: 'static + Fn(ApiRequest) -> HookResult<ApiRequest> + Send + Sync,
	{
		self.middleware(BeforeRequestFn(hook))
	}

	/// Registers a post-receive hook.
	pub fn on_after_response<F>(self, hook: F) -> Self
	where
		F: 'static + Fn(&ApiRequest, ApiResponse) -> HookResult<ApiResponse> + Send + Sync,
	{
		self.middleware(AfterResponseFn(hook))
	}

	/// Registers a failure hook.
	pub fn on_failed_request<F>(self, hook: F) -> Self
	where
		F: 'static + Fn(&ApiRequest, &RawResponse) -> HookResult<()> + Send + Sync,
	{
		self.middleware(FailedRequestFn(hook))
	}

	/// Registers a middleware participating in every stage it overrides.
	pub fn middleware(self, middleware: impl 'static + Middleware) -> Self {
		self.shared_middleware(Arc::new(middleware))
	}

	/// Registers an already shared middleware.
	pub fn shared_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.entries.push(middleware);

		self
	}

	/// Number of registered entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Folds the request through every pre-send hook.
	pub fn run_before_request(&self, request: ApiRequest) -> Result<ApiRequest> {
		self.entries
			.iter()
			.try_fold(request, |request, entry| entry.on_before_request(request))
			.map_err(Error::Hook)
	}

	/// Folds the response through every post-receive hook.
	pub fn run_after_response(
		&self,
		request: &ApiRequest,
		response: ApiResponse,
	) -> Result<ApiResponse> {
		self.entries
			.iter()
			.try_fold(response, |response, entry| entry.on_after_response(request, response))
			.map_err(Error::Hook)
	}

	/// Notifies every failure hook once.
	pub fn run_failed_request(&self, request: &ApiRequest, response: &RawResponse) -> Result<()> {
		self.entries
			.iter()
			.try_for_each(|entry| entry.on_failed_request(request, response))
			.map_err(Error::Hook)
	}
}
impl Debug for Hooks {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Hooks").field("entries", &self.entries.len()).finish()
	}
}
