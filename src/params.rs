//! Request parameter mapping and its form serialization.
//!
//! Parameters arrive as an insertion-ordered map of JSON values. [`serialize_params`] lowers
//! them onto a [`FormBody`] with the API's conventions: absent values are dropped, structured
//! values travel as compact JSON, and scalars travel as their plain string form.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, error::ConfigError, request::FormBody};

/// Insertion-ordered request parameters.
///
/// `None` (serialized as JSON `null`) marks an absent parameter and never reaches the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);
impl Params {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds parameters from any value that serializes into a JSON object.
	pub fn from_serialize<T>(value: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		match serde_json::to_value(value)
			.map_err(|e| ConfigError::InvalidParams { source: Some(e) })?
		{
			Value::Object(map) => Ok(Self(map)),
			Value::Null => Ok(Self::new()),
			_ => Err(ConfigError::InvalidParams { source: None }.into()),
		}
	}

	/// Inserts or replaces a parameter, keeping the original position on replacement.
	///
	/// A JSON `null` value (including `Option::None`) marks the parameter as absent and is never
	/// sent. To send the literal text `null`, insert the string `"null"`. Nulls nested inside
	/// arrays or objects are kept in their JSON encoding.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(key.into(), value.into());
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);

		self
	}

	/// Returns the raw value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Number of entries, including absent ones.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no entries exist.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}
}
impl From<Map<String, Value>> for Params {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}
impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}

/// Lowers parameters onto a form body, preserving insertion order.
pub fn serialize_params(params: &Params) -> FormBody {
	let mut body = FormBody::new();

	for (key, value) in params.iter() {
		if let Some(encoded) = encode_value(value) {
			body.append(key.as_str(), encoded);
		}
	}

	body
}

fn encode_value(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		// `Display` on arrays/objects renders compact JSON.
		Value::Array(_) | Value::Object(_) => Some(value.to_string()),
	}
}
