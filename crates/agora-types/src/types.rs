//! Common types used throughout the Agora platform.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Timestamp {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(i64::try_from(res.as_secs()).unwrap_or(i64::MAX))
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

// ApiResponse //
//*************//
/// Envelope for every JSON API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
	pub data: T,
	pub time: Timestamp,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { data, time: Timestamp::now() }
	}
}


// vim: ts=4
