//! Declarative column descriptors shared by every rendering surface.
//!
//! A [`ColumnSet`] decides which fields are shown, which of them can be
//! sorted on, and which take part in free-text search. Formatters only affect
//! display; search and sort always work on the raw field value.

pub mod format;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{Field, Record};

/// Presentation callback turning a record into cell text.
pub type Formatter = fn(&Record) -> String;

/// Describes one visible column.
#[derive(Clone)]
pub struct ColumnDescriptor {
	pub field: Field,
	pub label: String,
	pub sortable: bool,
	pub searchable: bool,
	pub formatter: Option<Formatter>,
}

impl ColumnDescriptor {
	/// A searchable, unsortable column rendering the raw value.
	pub fn new(field: Field, label: impl Into<String>) -> Self {
		Self {
			field,
			label: label.into(),
			sortable: false,
			searchable: true,
			formatter: None,
		}
	}

	#[must_use]
	pub fn sortable(mut self) -> Self {
		self.sortable = true;
		self
	}

	#[must_use]
	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	#[must_use]
	pub fn with_formatter(mut self, formatter: Formatter) -> Self {
		self.formatter = Some(formatter);
		self
	}

	/// Cell text for `record`.
	#[must_use]
	pub fn render(&self, record: &Record) -> String {
		match self.formatter {
			Some(formatter) => formatter(record),
			None => format::raw(self.field, record),
		}
	}
}

impl fmt::Debug for ColumnDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnDescriptor")
			.field("field", &self.field)
			.field("label", &self.label)
			.field("sortable", &self.sortable)
			.field("searchable", &self.searchable)
			.field("formatted", &self.formatter.is_some())
			.finish()
	}
}

/// Named label/formatter presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnPreset {
	#[default]
	Default,
	Korean,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown column preset '{0}' (expected default or korean)")]
pub struct UnknownPreset(pub String);

impl ColumnPreset {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			ColumnPreset::Default => "default",
			ColumnPreset::Korean => "korean",
		}
	}
}

impl FromStr for ColumnPreset {
	type Err = UnknownPreset;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"default" => Ok(ColumnPreset::Default),
			"korean" | "ko" => Ok(ColumnPreset::Korean),
			_ => Err(UnknownPreset(value.to_string())),
		}
	}
}

/// Ordered columns of a table.
#[derive(Debug, Clone)]
pub struct ColumnSet {
	columns: Vec<ColumnDescriptor>,
}

impl Default for ColumnSet {
	fn default() -> Self {
		Self::employees()
	}
}

impl ColumnSet {
	#[must_use]
	pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
		Self { columns }
	}

	/// Employee columns with English labels.
	#[must_use]
	pub fn employees() -> Self {
		Self::new(vec![
			ColumnDescriptor::new(Field::Name, "Name").sortable(),
			ColumnDescriptor::new(Field::Role, "Role").sortable(),
			ColumnDescriptor::new(Field::Department, "Department").sortable(),
			ColumnDescriptor::new(Field::Age, "Age").sortable(),
			ColumnDescriptor::new(Field::Salary, "Salary")
				.sortable()
				.with_formatter(format::salary),
			ColumnDescriptor::new(Field::Status, "Status")
				.sortable()
				.with_formatter(format::status_label),
			ColumnDescriptor::new(Field::Email, "Email"),
			ColumnDescriptor::new(Field::City, "City"),
			ColumnDescriptor::new(Field::JoinDate, "Joined"),
		])
	}

	/// Employee columns with Korean labels and won/age formatting.
	#[must_use]
	pub fn employees_korean() -> Self {
		Self::new(vec![
			ColumnDescriptor::new(Field::Name, "이름").sortable(),
			ColumnDescriptor::new(Field::Role, "직책").sortable(),
			ColumnDescriptor::new(Field::Department, "부서").sortable(),
			ColumnDescriptor::new(Field::Age, "나이")
				.sortable()
				.with_formatter(format::age_years),
			ColumnDescriptor::new(Field::Salary, "연봉")
				.sortable()
				.with_formatter(format::salary_won),
			ColumnDescriptor::new(Field::Status, "상태")
				.sortable()
				.with_formatter(format::status_label_ko),
			ColumnDescriptor::new(Field::Email, "이메일"),
			ColumnDescriptor::new(Field::City, "도시"),
			ColumnDescriptor::new(Field::JoinDate, "입사일"),
		])
	}

	#[must_use]
	pub fn from_preset(preset: ColumnPreset) -> Self {
		match preset {
			ColumnPreset::Default => Self::employees(),
			ColumnPreset::Korean => Self::employees_korean(),
		}
	}

	/// Replace column labels in order; extra labels are ignored.
	#[must_use]
	pub fn with_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
		for (column, label) in self.columns.iter_mut().zip(labels) {
			column.label = label.as_ref().to_string();
		}
		self
	}

	pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
		self.columns.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	#[must_use]
	pub fn get(&self, field: Field) -> Option<&ColumnDescriptor> {
		self.columns.iter().find(|column| column.field == field)
	}

	#[must_use]
	pub fn is_sortable(&self, field: Field) -> bool {
		self.get(field).is_some_and(|column| column.sortable)
	}

	pub fn searchable_fields(&self) -> impl Iterator<Item = Field> + '_ {
		self.columns
			.iter()
			.filter(|column| column.searchable)
			.map(|column| column.field)
	}

	pub fn sortable_fields(&self) -> impl Iterator<Item = Field> + '_ {
		self.columns
			.iter()
			.filter(|column| column.sortable)
			.map(|column| column.field)
	}

	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(|column| column.label.as_str())
	}
}
