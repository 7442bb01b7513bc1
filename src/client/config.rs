//! Serde-friendly client configuration.

// self
use crate::{_prelude::*, request::DataCenter};

/// Serializable client settings for callers that load configuration from files or the
/// environment. Credentials and hooks are attached through [`crate::client::ClientBuilder`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// API key appended to every request.
	pub api_key: String,
	/// Data center the tenant lives on.
	pub data_center: DataCenter,
	/// Optional override of the data-center URL.
	pub base_url: Option<Url>,
	/// Enables request/response logging.
	pub debug: bool,
}
