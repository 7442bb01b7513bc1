//! `accounts` namespace declarations.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, endpoints::Endpoint, request::Namespace};

/// `accounts.getPolicies`: reads site policy sections.
#[derive(Clone, Copy, Debug)]
pub struct GetPolicies;
impl Endpoint for GetPolicies {
	type Request = GetPoliciesRequest;
	type Response = GetPoliciesResponse;

	const NAME: &'static str = "getPolicies";
	const NAMESPACE: Namespace = Namespace::Accounts;
}

/// Parameters of `accounts.getPolicies`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPoliciesRequest {
	/// Comma-separated section names; all readable sections when omitted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sections: Option<String>,
}
impl GetPoliciesRequest {
	/// Requests the given sections.
	pub fn sections<I, S>(sections: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let joined = sections.into_iter().map(|s| s.as_ref().to_owned()).collect::<Vec<_>>();

		Self { sections: Some(joined.join(",")) }
	}
}

/// Policy sections returned by `accounts.getPolicies`; absent sections were not requested or
/// not readable with the caller's credentials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPoliciesResponse {
	/// Account options.
	pub account_options: Option<Value>,
	/// Email notification settings.
	pub email_notifications: Option<Value>,
	/// Email verification settings.
	pub email_verification: Option<Value>,
	/// Plugin settings.
	pub gigya_plugins: Option<Value>,
	/// Password complexity rules.
	pub password_complexity: Option<Value>,
	/// Password reset settings.
	pub password_reset: Option<Value>,
	/// Registration settings.
	pub registration: Option<Value>,
	/// Security settings.
	pub security: Option<Value>,
	/// Two-factor settings.
	pub two_factor_auth: Option<Value>,
}

/// `accounts.getAccountInfo`: reads one account.
#[derive(Clone, Copy, Debug)]
pub struct GetAccountInfo;
impl Endpoint for GetAccountInfo {
	type Request = GetAccountInfoRequest;
	type Response = AccountInfo;

	const NAME: &'static str = "getAccountInfo";
	const NAMESPACE: Namespace = Namespace::Accounts;
}

/// Parameters of `accounts.getAccountInfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountInfoRequest {
	/// Account identifier.
	#[serde(rename = "UID", skip_serializing_if = "Option::is_none")]
	pub uid: Option<String>,
	/// Registration token, for accounts mid-registration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reg_token: Option<String>,
	/// Comma-separated account fields to include.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include: Option<String>,
	/// Comma-separated extra profile fields to include.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extra_profile_fields: Option<String>,
}

/// Account payload returned by account reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
	/// Account identifier.
	#[serde(rename = "UID")]
	pub uid: Option<String>,
	/// Whether the account finished registration.
	pub is_registered: Option<bool>,
	/// Whether the account is active.
	pub is_active: Option<bool>,
	/// Whether the account email is verified.
	pub is_verified: Option<bool>,
	/// Identity provider that created the account.
	pub login_provider: Option<String>,
	/// Profile object.
	pub profile: Option<Value>,
	/// Custom data object.
	pub data: Option<Value>,
	/// Subscriptions object.
	pub subscriptions: Option<Value>,
	/// Consent preferences object.
	pub preferences: Option<Value>,
}

/// `accounts.setAccountInfo`: updates one account.
#[derive(Clone, Copy, Debug)]
pub struct SetAccountInfo;
impl Endpoint for SetAccountInfo {
	type Request = SetAccountInfoRequest;
	type Response = JsonMapPayload;

	const NAME: &'static str = "setAccountInfo";
	const NAMESPACE: Namespace = Namespace::Accounts;
}

/// Parameters of `accounts.setAccountInfo`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAccountInfoRequest {
	/// Account identifier.
	#[serde(rename = "UID")]
	pub uid: String,
	/// Profile fields to merge.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile: Option<Value>,
	/// Custom data fields to merge.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
	/// Consent preferences to merge.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub preferences: Option<Value>,
	/// Subscriptions to merge.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subscriptions: Option<Value>,
}

/// Payload kept untyped for endpoints that only echo the envelope.
pub type JsonMapPayload = crate::response::JsonMap;
