//! Response envelope shared by every endpoint.
//!
//! Every API answer is a JSON object carrying `errorCode` (0 on success) plus optional
//! diagnostics, with the endpoint payload merged in at the top level. A non-zero `errorCode`
//! is an application outcome, not a transport failure: the executor hands such responses back
//! as `Ok`, and callers opt in to treating them as errors with
//! [`ApiResponse::error_for_code`].

// crates.io
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

/// Untyped endpoint payload.
pub type JsonMap = Map<String, Value>;

/// Envelope plus endpoint payload `T` (untyped by default).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T = JsonMap> {
	/// `0` on success, vendor error code otherwise; `0` when the server omits it.
	#[serde(default)]
	pub error_code: i64,
	/// Human-readable error summary.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_message: Option<String>,
	/// Extended error explanation.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_details: Option<String>,
	/// HTTP-equivalent status reported inside the body.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status_code: Option<u16>,
	/// Reason phrase accompanying `statusCode`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status_reason: Option<String>,
	/// Server-side call identifier, useful for support tickets.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub call_id: Option<String>,
	/// Server timestamp of the call.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time: Option<String>,
	/// Endpoint-specific fields.
	#[serde(flatten)]
	pub payload: T,
}
impl<T> ApiResponse<T> {
	/// Returns true when `errorCode` is `0`.
	pub fn is_success(&self) -> bool {
		self.error_code == 0
	}

	/// Converts a non-zero `errorCode` into [`Error::Api`].
	pub fn error_for_code(self) -> Result<Self> {
		if self.is_success() {
			return Ok(self);
		}

		Err(Error::Api {
			code: self.error_code,
			message: self.error_message.unwrap_or_else(|| "no error message".into()),
			details: self.error_details,
		})
	}
}
impl ApiResponse {
	/// Looks up an untyped payload field.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.payload.get(key)
	}

	/// Inserts or replaces an untyped payload field.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.payload.insert(key.into(), value.into());
	}

	/// Re-reads the response as a typed payload, reporting the JSON path of any mismatch.
	pub fn into_typed<U>(self) -> Result<ApiResponse<U>, serde_path_to_error::Error<serde_json::Error>>
	where
		U: DeserializeOwned,
	{
		serde_path_to_error::deserialize(self.into_value())
	}

	/// Reassembles the flat JSON object the server sent.
	pub fn into_value(self) -> Value {
		let mut map = self.payload;

		map.insert("errorCode".into(), self.error_code.into());

		for (key, value) in [
			("errorMessage", self.error_message.map(Value::from)),
			("errorDetails", self.error_details.map(Value::from)),
			("statusCode", self.status_code.map(Value::from)),
			("statusReason", self.status_reason.map(Value::from)),
			("callId", self.call_id.map(Value::from)),
			("time", self.time.map(Value::from)),
		] {
			if let Some(value) = value {
				map.insert(key.into(), value);
			}
		}

		Value::Object(map)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn parse(value: Value) -> ApiResponse {
		serde_json::from_value(value).expect("Fixture should parse into an envelope.")
	}

	#[test]
	fn envelope_fields_are_split_from_payload() {
		let response = parse(json!({
			"errorCode": 403007,
			"errorMessage": "Permission denied",
			"statusCode": 403,
			"callId": "abc",
			"registration": { "requireCaptcha": false }
		}));

		assert!(!response.is_success());
		assert_eq!(response.status_code, Some(403));
		assert_eq!(response.error_message.as_deref(), Some("Permission denied"));
		assert!(response.get("registration").is_some());
		assert!(response.get("errorCode").is_none());
	}

	#[test]
	fn missing_error_code_reads_as_success() {
		let response = parse(json!({ "statusCode": 200, "UID": "u-1" }));

		assert_eq!(response.error_code, 0);
		assert!(response.is_success());
		assert_eq!(response.get("UID").and_then(|v| v.as_str()), Some("u-1"));
	}

	#[test]
	fn error_for_code_only_rejects_non_zero_codes() {
		let ok = parse(json!({ "errorCode": 0, "statusCode": 200 }));

		assert!(ok.error_for_code().is_ok());

		let err = parse(json!({ "errorCode": 400006, "errorMessage": "Invalid parameter value" }))
			.error_for_code()
			.expect_err("Non-zero codes must convert into errors.");

		assert!(matches!(err, Error::Api { code: 400006, .. }));
	}

	#[test]
	fn into_typed_rejects_mismatched_payloads() {
		#[derive(Debug, Deserialize)]
		struct Payload {
			count: u32,
		}

		let typed = parse(json!({ "errorCode": 0, "count": 3 }))
			.into_typed::<Payload>()
			.expect("Matching payloads should decode.");

		assert_eq!(typed.payload.count, 3);

		let err = parse(json!({ "errorCode": 0, "count": "three" }))
			.into_typed::<Payload>()
			.expect_err("Mismatched payloads must fail.");

		assert!(err.inner().to_string().contains("invalid type"));
	}
}
