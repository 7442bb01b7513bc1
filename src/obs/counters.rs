// self
use crate::{obs::CallOutcome, request::Namespace};

/// Counter incremented once per call stage.
pub const CALL_COUNTER: &str = "gigya_client_call_total";

/// Bumps [`CALL_COUNTER`] for `namespace` and `outcome`. Compiles to nothing without the
/// `metrics` feature.
pub fn record_call_outcome(namespace: Namespace, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		CALL_COUNTER,
		"namespace" => namespace.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (namespace, outcome);
}
