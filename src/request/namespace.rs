//! API namespaces (the `<namespace>` part of `<namespace>.<endpoint>`).

// self
use crate::_prelude::*;

/// Logical endpoint groupings exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
	/// Account management and authentication.
	Accounts,
	/// Audit log queries.
	Audit,
	/// Schema-less data store.
	Ds,
	/// Federated identity (SAML/OIDC) administration.
	Fidm,
	/// Usage reports.
	Reports,
	/// Social login and sharing.
	Socialize,
}
impl Namespace {
	/// Every namespace, in declaration order.
	pub const ALL: [Namespace; 6] = [
		Namespace::Accounts,
		Namespace::Audit,
		Namespace::Ds,
		Namespace::Fidm,
		Namespace::Reports,
		Namespace::Socialize,
	];

	/// Returns the wire prefix used in endpoint paths.
	pub const fn as_str(self) -> &'static str {
		match self {
			Namespace::Accounts => "accounts",
			Namespace::Audit => "audit",
			Namespace::Ds => "ds",
			Namespace::Fidm => "fidm",
			Namespace::Reports => "reports",
			Namespace::Socialize => "socialize",
		}
	}
}
impl Display for Namespace {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Namespace {
	type Err = UnknownNamespace;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|namespace| namespace.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| UnknownNamespace { value: s.to_owned() })
	}
}

/// Error returned when parsing an unknown namespace.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown API namespace `{value}`.")]
pub struct UnknownNamespace {
	/// Rejected input.
	pub value: String,
}
