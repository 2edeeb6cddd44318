use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Record;

/// Addressable attributes of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
	Id,
	Name,
	Role,
	Department,
	Age,
	Salary,
	Status,
	Email,
	City,
	JoinDate,
}

/// Borrowed view of a single field value, used for sorting and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
	Number(u64),
	Text(&'a str),
	Missing,
}

impl FieldValue<'_> {
	/// Lower-cased string form matched by free-text search.
	#[must_use]
	pub fn search_text(&self) -> Option<String> {
		match self {
			FieldValue::Number(value) => Some(value.to_string()),
			FieldValue::Text(text) => Some(text.to_lowercase()),
			FieldValue::Missing => None,
		}
	}
}

impl Field {
	pub const ALL: [Field; 10] = [
		Field::Id,
		Field::Name,
		Field::Role,
		Field::Department,
		Field::Age,
		Field::Salary,
		Field::Status,
		Field::Email,
		Field::City,
		Field::JoinDate,
	];

	/// Key used in data files and on the command line.
	#[must_use]
	pub const fn key(self) -> &'static str {
		match self {
			Field::Id => "id",
			Field::Name => "name",
			Field::Role => "role",
			Field::Department => "department",
			Field::Age => "age",
			Field::Salary => "salary",
			Field::Status => "status",
			Field::Email => "email",
			Field::City => "city",
			Field::JoinDate => "joinDate",
		}
	}

	#[must_use]
	pub const fn is_numeric(self) -> bool {
		matches!(self, Field::Id | Field::Age | Field::Salary)
	}

	/// Look up a field by key, ignoring case and `_`/`-` separators.
	#[must_use]
	pub fn parse(name: &str) -> Option<Field> {
		let normalized: String = name
			.trim()
			.chars()
			.filter(|ch| *ch != '_' && *ch != '-')
			.flat_map(char::to_lowercase)
			.collect();
		Field::ALL
			.into_iter()
			.find(|field| field.key().to_ascii_lowercase() == normalized)
	}

	/// Extract this field from `record`.
	#[must_use]
	pub fn value(self, record: &Record) -> FieldValue<'_> {
		match self {
			Field::Id => FieldValue::Number(record.id),
			Field::Name => FieldValue::Text(&record.name),
			Field::Role => FieldValue::Text(&record.role),
			Field::Department => FieldValue::Text(&record.department),
			Field::Age => FieldValue::Number(u64::from(record.age)),
			Field::Salary => FieldValue::Number(record.salary),
			Field::Status => FieldValue::Text(record.status.as_str()),
			Field::Email => optional(record.email.as_deref()),
			Field::City => optional(record.city.as_deref()),
			Field::JoinDate => optional(record.join_date.as_deref()),
		}
	}
}

fn optional(value: Option<&str>) -> FieldValue<'_> {
	value.map_or(FieldValue::Missing, FieldValue::Text)
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for Field {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Field::parse(value).ok_or_else(|| value.to_string())
	}
}
