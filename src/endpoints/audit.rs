//! `audit` namespace declarations.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, endpoints::Endpoint, request::Namespace};

/// `audit.search`: queries the audit log with the SQL-like query language.
#[derive(Clone, Copy, Debug)]
pub struct Search;
impl Endpoint for Search {
	type Request = SearchRequest;
	type Response = SearchResponse;

	const NAME: &'static str = "search";
	const NAMESPACE: Namespace = Namespace::Audit;
}

/// Parameters of `audit.search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
	/// Query string, e.g. `SELECT * FROM auditLog WHERE endpoint = 'accounts.login'`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,
	/// Cursor returned by a previous page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cursor_id: Option<String>,
	/// Requests a cursor for paging.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub open_cursor: Option<bool>,
}

/// Payload of `audit.search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	/// Matching audit records.
	#[serde(default)]
	pub results: Vec<Value>,
	/// Records in this page.
	pub objects_count: Option<u64>,
	/// Total matching records.
	pub total_count: Option<u64>,
	/// Cursor for the next page.
	pub next_cursor_id: Option<String>,
}
