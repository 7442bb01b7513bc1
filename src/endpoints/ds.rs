//! `ds` (data store) namespace declarations.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, endpoints::Endpoint, request::Namespace};

/// `ds.store`: writes (or merges) one data-store object.
#[derive(Clone, Copy, Debug)]
pub struct Store;
impl Endpoint for Store {
	type Request = StoreRequest;
	type Response = StoreResponse;

	const NAME: &'static str = "store";
	const NAMESPACE: Namespace = Namespace::Ds;
}

/// Parameters of `ds.store`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
	/// Object type (collection) name.
	#[serde(rename = "type")]
	pub kind: String,
	/// Object data.
	pub data: Value,
	/// Object identifier; `auto` lets the server generate one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub oid: Option<String>,
	/// Owning account.
	#[serde(rename = "UID", skip_serializing_if = "Option::is_none")]
	pub uid: Option<String>,
	/// `replace` or `update`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub update_behavior: Option<String>,
}

/// Payload of `ds.store`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
	/// Identifier of the stored object.
	pub oid: Option<String>,
}

/// `ds.get`: reads one data-store object.
#[derive(Clone, Copy, Debug)]
pub struct Get;
impl Endpoint for Get {
	type Request = GetRequest;
	type Response = GetResponse;

	const NAME: &'static str = "get";
	const NAMESPACE: Namespace = Namespace::Ds;
}

/// Parameters of `ds.get`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRequest {
	/// Object type (collection) name.
	#[serde(rename = "type")]
	pub kind: String,
	/// Object identifier.
	pub oid: String,
	/// Owning account.
	#[serde(rename = "UID", skip_serializing_if = "Option::is_none")]
	pub uid: Option<String>,
	/// Comma-separated field list.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fields: Option<String>,
}

/// Payload of `ds.get`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
	/// Object identifier.
	pub oid: Option<String>,
	/// Owning account.
	#[serde(rename = "UID")]
	pub uid: Option<String>,
	/// Object data.
	pub data: Option<Value>,
	/// Last update time.
	pub last_updated: Option<i64>,
}
