//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `gigya_client.call` with the `namespace` and
//!   `endpoint` fields, plus request/response logging for clients built with the debug flag.
//! - Enable `metrics` to increment the `gigya_client_call_total` counter for every
//!   attempt/success/failure, labeled by `namespace` + `outcome`.

mod counters;
mod spans;

pub use counters::*;
pub use spans::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to the executor.
	Attempt,
	/// Successful completion (regardless of `errorCode`).
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
