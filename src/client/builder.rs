//! Validating builder for [`Client`].

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;
use crate::{
	_prelude::*,
	auth::Credentials,
	client::{Client, ClientConfig, Settings},
	error::ConfigError,
	hooks::Hooks,
	http::HttpTransport,
	request::DataCenter,
};

/// Builder for [`Client`] values.
#[derive(Debug, Default)]
pub struct ClientBuilder {
	/// API key appended to every request.
	pub api_key: Option<String>,
	/// Data center the tenant lives on.
	pub data_center: DataCenter,
	/// Overrides the data-center URL (proxies, mock servers).
	pub base_url: Option<Url>,
	/// Credential strategy.
	pub credentials: Credentials,
	/// Enables request/response logging.
	pub debug: bool,
	/// Hook registry.
	pub hooks: Hooks,
}
impl ClientBuilder {
	/// Creates an empty builder targeting the default data center.
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds a builder from deserialized configuration.
	pub fn from_config(config: ClientConfig) -> Self {
		Self {
			api_key: Some(config.api_key),
			data_center: config.data_center,
			base_url: config.base_url,
			debug: config.debug,
			..Self::default()
		}
	}

	/// Sets the API key.
	pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
		self.api_key = Some(api_key.into());

		self
	}

	/// Sets the data center.
	pub fn data_center(mut self, data_center: DataCenter) -> Self {
		self.data_center = data_center;

		self
	}

	/// Overrides the base URL derived from the data center.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Sets the credential strategy.
	pub fn credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = credentials;

		self
	}

	/// Enables or disables request/response logging.
	pub fn debug(mut self, debug: bool) -> Self {
		self.debug = debug;

		self
	}

	/// Replaces the hook registry.
	pub fn hooks(mut self, hooks: Hooks) -> Self {
		self.hooks = hooks;

		self
	}

	/// Validates the configuration and builds a client over `transport`.
	pub fn build_with_transport<T>(self, transport: T) -> Result<Client<T>>
	where
		T: HttpTransport,
	{
		self.build_with_shared_transport(Arc::new(transport))
	}

	/// Validates the configuration and builds a client over an already shared transport.
	pub fn build_with_shared_transport<T>(self, transport: Arc<T>) -> Result<Client<T>>
	where
		T: ?Sized + HttpTransport,
	{
		let api_key = self.api_key.ok_or(ConfigError::MissingApiKey)?;

		if api_key.is_empty() || api_key.chars().any(char::is_whitespace) {
			return Err(ConfigError::InvalidApiKey.into());
		}

		let base_url = match self.base_url {
			Some(url) => normalize_base_url(url)?,
			None => self.data_center.base_url()?,
		};
		let settings = Settings {
			api_key,
			base_url,
			credentials: self.credentials,
			debug: self.debug,
			hooks: self.hooks,
		};

		Ok(Client { transport, settings: Arc::new(settings) })
	}

	/// Validates the configuration and builds a client over a default reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn build(self) -> Result<Client<ReqwestTransport>> {
		self.build_with_transport(ReqwestTransport::default())
	}
}

fn normalize_base_url(mut url: Url) -> Result<Url, ConfigError> {
	if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() || url.host().is_none()
	{
		return Err(ConfigError::InvalidBaseUrl { url: url.into() });
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	url.set_query(None);
	url.set_fragment(None);

	Ok(url)
}
