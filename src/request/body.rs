//! Ordered form bodies.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

const REDACTED_FIELDS: [&str; 1] = ["secret"];

/// Ordered form body sent as `application/x-www-form-urlencoded`.
///
/// Keys keep the order they were appended in so encoded bodies are deterministic. Appending an
/// existing key replaces its value in place.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormBody(Vec<(String, String)>);
impl FormBody {
	/// Creates an empty body.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a field, or overwrites it in place when the key already exists.
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();

		match self.0.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, slot)) => *slot = value,
			None => self.0.push((key, value)),
		}
	}

	/// Builder-style [`append`](Self::append).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.append(key, value);

		self
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(existing, _)| existing == key).map(|(_, value)| value.as_str())
	}

	/// Returns true when `key` is present.
	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Removes and returns the value stored under `key`.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		let idx = self.0.iter().position(|(existing, _)| existing == key)?;

		Some(self.0.remove(idx).1)
	}

	/// Iterates fields in order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Field names in order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|(key, _)| key.as_str())
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no fields are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Encodes the body as `application/x-www-form-urlencoded`.
	pub fn encode(&self) -> String {
		form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}
}
impl<K, V> FromIterator<(K, V)> for FormBody
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut body = Self::new();

		for (key, value) in iter {
			body.append(key, value);
		}

		body
	}
}
impl Debug for FormBody {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_map()
			.entries(self.iter().map(|(key, value)| {
				if REDACTED_FIELDS.contains(&key) { (key, "<redacted>") } else { (key, value) }
			}))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn append_keeps_order_and_overwrites_in_place() {
		let mut body = FormBody::new().with("b", "1").with("a", "2");

		body.append("b", "3");

		assert_eq!(body.keys().collect::<Vec<_>>(), ["b", "a"]);
		assert_eq!(body.get("b"), Some("3"));
		assert_eq!(body.remove("a"), Some("2".into()));
		assert!(!body.contains("a"));
	}

	#[test]
	fn encode_escapes_reserved_characters() {
		let body = FormBody::new().with("query", "select * from accounts").with("x", "a&b=c");

		assert_eq!(body.encode(), "query=select+*+from+accounts&x=a%26b%3Dc");
	}

	#[test]
	fn debug_redacts_secret() {
		let body = FormBody::new().with("userKey", "AAA").with("secret", "shh");
		let rendered = format!("{body:?}");

		assert!(rendered.contains("AAA"));
		assert!(!rendered.contains("shh"));
	}
}
