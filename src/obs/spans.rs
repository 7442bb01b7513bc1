// self
use crate::{
	_prelude::*,
	http::RawResponse,
	request::{ApiRequest, Namespace},
	response::ApiResponse,
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by the executor.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the namespace + endpoint.
	pub fn new(namespace: Namespace, endpoint: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("gigya_client.call", namespace = namespace.as_str(), endpoint);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (namespace, endpoint);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs the request about to be sent; credentials are redacted by its `Debug` impl.
pub fn log_request(request: &ApiRequest) {
	#[cfg(feature = "tracing")]
	tracing::debug!(?request, "sending request");
	#[cfg(not(feature = "tracing"))]
	let _ = request;
}

/// Logs a parsed response.
pub fn log_response(response: &ApiResponse) {
	#[cfg(feature = "tracing")]
	tracing::debug!(
		error_code = response.error_code,
		status_code = response.status_code,
		?response,
		"received response"
	);
	#[cfg(not(feature = "tracing"))]
	let _ = response;
}

/// Logs a failed exchange.
pub fn log_failure(response: &RawResponse) {
	#[cfg(feature = "tracing")]
	tracing::debug!(status = response.status, body = %response.body, "request failed");
	#[cfg(not(feature = "tracing"))]
	let _ = response;
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[cfg(feature = "tracing")]
	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new(Namespace::Ds, "get");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[test]
	fn call_span_builds_without_subscriber() {
		let _span = CallSpan::new(Namespace::Accounts, "getPolicies");
	}
}
