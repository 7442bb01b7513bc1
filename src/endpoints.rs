//! Typed endpoint declarations.
//!
//! An [`Endpoint`] pairs a request shape with a response payload shape so
//! [`Client::send`](crate::client::Client::send) can check parameters and decode responses at
//! compile time. Declarations carry no runtime behavior of their own; the executor treats them
//! exactly like untyped calls. Only a representative subset of the API is declared here;
//! anything else is reachable through [`Client::call`](crate::client::Client::call).

pub mod accounts;
pub mod audit;
pub mod ds;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, request::Namespace};

/// Compile-time description of one API method.
pub trait Endpoint {
	/// Namespace the method lives in.
	const NAMESPACE: Namespace;
	/// Method name within the namespace.
	const NAME: &'static str;

	/// Parameters; must serialize into a JSON object. `None` fields are omitted on the wire.
	type Request: Serialize;
	/// Payload merged next to the response envelope.
	type Response: DeserializeOwned;
}
