//! Per-client authentication strategy.

// self
use crate::{
	_prelude::*,
	auth::{AsymmetricKey, Secret},
	request::{AUTHORIZATION, ApiRequest},
};

/// Body field carrying the user key for key + secret authentication.
pub const USER_KEY_FIELD: &str = "userKey";
/// Body field carrying the secret for key + secret authentication.
pub const SECRET_FIELD: &str = "secret";

/// The single authentication strategy a client signs every request with.
#[derive(Clone, Debug, Default)]
pub enum Credentials {
	#[default]
	/// Anonymous calls identified only by the API key.
	None,
	/// User (or application) key with its shared secret, sent in the body.
	KeySecret {
		/// User key.
		user_key: String,
		/// Shared secret.
		secret: Secret,
	},
	/// Pre-issued access token sent as a bearer header.
	BearerToken(Secret),
	/// RSA key that signs a fresh JWT for every request.
	AsymmetricKey(AsymmetricKey),
}
impl Credentials {
	/// User key + secret credentials.
	pub fn key_secret(user_key: impl Into<String>, secret: impl Into<Secret>) -> Self {
		Self::KeySecret { user_key: user_key.into(), secret: secret.into() }
	}

	/// Bearer token credentials.
	pub fn bearer_token(token: impl Into<Secret>) -> Self {
		Self::BearerToken(token.into())
	}

	/// Asymmetric-key credentials; see [`AsymmetricKey::from_pem`] for accepted input.
	pub fn asymmetric_key(user_key: impl Into<String>, pem: &str) -> Result<Self> {
		AsymmetricKey::from_pem(user_key, pem).map(Self::AsymmetricKey)
	}

	/// Stable label for logs.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::KeySecret { .. } => "key_secret",
			Self::BearerToken(_) => "bearer_token",
			Self::AsymmetricKey(_) => "asymmetric_key",
		}
	}

	/// Decorates the request according to the active strategy.
	pub fn apply(&self, request: &mut ApiRequest) -> Result<()> {
		match self {
			Self::None => {},
			Self::KeySecret { user_key, secret } => {
				request.body.append(USER_KEY_FIELD, user_key.as_str());
				request.body.append(SECRET_FIELD, secret.expose());
			},
			Self::BearerToken(token) =>
				request.set_header(AUTHORIZATION, format!("Bearer {}", token.expose())),
			Self::AsymmetricKey(key) => {
				let jwt = key.sign()?;

				request.set_header(AUTHORIZATION, format!("Bearer {jwt}"));
			},
		}

		Ok(())
	}
}
