use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Employment status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
	Active,
	Vacation,
	Resigned,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status '{0}' (expected active, vacation or resigned)")]
pub struct ParseStatusError(pub String);

impl Status {
	pub const ALL: [Status; 3] = [Status::Active, Status::Vacation, Status::Resigned];

	/// Wire representation used in data files and search matching.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Status::Active => "active",
			Status::Vacation => "vacation",
			Status::Resigned => "resigned",
		}
	}

	/// The status that follows `self` when cycling through filters.
	#[must_use]
	pub const fn next(self) -> Option<Status> {
		match self {
			Status::Active => Some(Status::Vacation),
			Status::Vacation => Some(Status::Resigned),
			Status::Resigned => None,
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Status {
	type Err = ParseStatusError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Status::ALL
			.into_iter()
			.find(|status| status.as_str() == normalized)
			.ok_or_else(|| ParseStatusError(value.to_string()))
	}
}
