//! Regional data centers and the base URLs they serve from.

// self
use crate::{_prelude::*, error::ConfigError};

/// Regional API hosts a tenant can live on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataCenter {
	#[default]
	/// United States.
	Us1,
	/// Europe (Frankfurt).
	Eu1,
	/// Europe (Amsterdam).
	Eu2,
	/// Australia.
	Au1,
	/// Russia.
	Ru1,
	/// Israel.
	Il1,
	/// Global site groups.
	Global,
	/// China.
	Cn1,
}
impl DataCenter {
	/// Every known data center, in declaration order.
	pub const ALL: [DataCenter; 8] = [
		DataCenter::Us1,
		DataCenter::Eu1,
		DataCenter::Eu2,
		DataCenter::Au1,
		DataCenter::Ru1,
		DataCenter::Il1,
		DataCenter::Global,
		DataCenter::Cn1,
	];

	/// Short identifier (`us1`, `eu1`, ...).
	pub const fn id(self) -> &'static str {
		match self {
			DataCenter::Us1 => "us1",
			DataCenter::Eu1 => "eu1",
			DataCenter::Eu2 => "eu2",
			DataCenter::Au1 => "au1",
			DataCenter::Ru1 => "ru1",
			DataCenter::Il1 => "il1",
			DataCenter::Global => "global",
			DataCenter::Cn1 => "cn1",
		}
	}

	/// Host name the data center serves from.
	pub const fn host(self) -> &'static str {
		match self {
			DataCenter::Us1 => "us1.gigya.com",
			DataCenter::Eu1 => "eu1.gigya.com",
			DataCenter::Eu2 => "eu2.gigya.com",
			DataCenter::Au1 => "au1.gigya.com",
			DataCenter::Ru1 => "ru1.gigya.com",
			DataCenter::Il1 => "il1.gigya.com",
			DataCenter::Global => "global.gigya.com",
			DataCenter::Cn1 => "cn1.sapcdm.cn",
		}
	}

	/// Base URL every endpoint path is joined onto: `https://accounts.<host>/`.
	pub fn base_url(self) -> Result<Url, ConfigError> {
		let raw = format!("https://accounts.{}/", self.host());

		Url::parse(&raw).map_err(|_| ConfigError::InvalidBaseUrl { url: raw })
	}
}
impl Display for DataCenter {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.id())
	}
}
impl FromStr for DataCenter {
	type Err = UnknownDataCenter;

	/// Accepts either the short identifier (`eu1`) or the host (`eu1.gigya.com`).
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let needle = s.trim();

		Self::ALL
			.into_iter()
			.find(|dc| dc.id().eq_ignore_ascii_case(needle) || dc.host().eq_ignore_ascii_case(needle))
			.ok_or_else(|| UnknownDataCenter { value: s.to_owned() })
	}
}

/// Error returned when parsing an unknown data center.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown data center `{value}`.")]
pub struct UnknownDataCenter {
	/// Rejected input.
	pub value: String,
}
