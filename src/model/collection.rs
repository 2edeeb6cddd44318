use std::collections::HashSet;

use super::{Record, RecordDraft, RecordId};
use crate::error::{FieldViolation, ViewError};

/// Ordered set of records with unique identifiers.
///
/// Insertion order is the base order every view starts from. Identifiers for
/// new records come from a monotonic counter, so an id freed by a removal is
/// never handed out again. Once `RecordId::MAX` has been used the counter is
/// exhausted and further adds fail.
#[derive(Debug, Clone)]
pub struct Collection {
	records: Vec<Record>,
	next_id: Option<RecordId>,
	revision: u64,
}

impl Default for Collection {
	fn default() -> Self {
		Self::empty()
	}
}

impl Collection {
	/// Build a collection, rejecting duplicate identifiers.
	pub fn new(records: Vec<Record>) -> Result<Self, ViewError> {
		let mut seen = HashSet::with_capacity(records.len());
		let mut violations = Vec::new();
		for record in &records {
			if !seen.insert(record.id) {
				violations.push(FieldViolation::new(
					"id",
					format!("duplicate identifier {}", record.id),
				));
			}
		}
		if !violations.is_empty() {
			return Err(ViewError::Validation(violations));
		}

		let next_id = records
			.iter()
			.map(|record| record.id)
			.max()
			.map_or(Some(1), |max| max.checked_add(1));
		Ok(Self {
			records,
			next_id,
			revision: 0,
		})
	}

	#[must_use]
	pub fn empty() -> Self {
		Self {
			records: Vec::new(),
			next_id: Some(1),
			revision: 0,
		}
	}

	#[must_use]
	pub fn records(&self) -> &[Record] {
		&self.records
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Number of successful mutations applied since construction.
	#[must_use]
	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// Identifier the next added record will receive, `None` once exhausted.
	#[must_use]
	pub fn next_id(&self) -> Option<RecordId> {
		self.next_id
	}

	#[must_use]
	pub fn get(&self, id: RecordId) -> Option<&Record> {
		self.records.iter().find(|record| record.id == id)
	}

	#[must_use]
	pub fn contains(&self, id: RecordId) -> bool {
		self.position(id).is_some()
	}

	fn position(&self, id: RecordId) -> Option<usize> {
		self.records.iter().position(|record| record.id == id)
	}

	/// Validate `draft`, assign it a fresh identifier and append it.
	pub fn add(&mut self, draft: RecordDraft) -> Result<RecordId, ViewError> {
		let Some(id) = self.next_id else {
			return Err(ViewError::Validation(vec![FieldViolation::new(
				"id",
				"identifier space exhausted",
			)]));
		};
		let record = draft.validate(id).map_err(ViewError::Validation)?;
		self.records.push(record);
		self.next_id = id.checked_add(1);
		self.revision += 1;
		Ok(id)
	}

	/// Merge `patch` into the record with `id`, re-validating the result.
	pub fn update(&mut self, id: RecordId, patch: &RecordDraft) -> Result<&Record, ViewError> {
		let position = self.position(id).ok_or(ViewError::NotFound { id })?;
		let merged = patch
			.merged_onto(&self.records[position])
			.validate(id)
			.map_err(ViewError::Validation)?;
		self.records[position] = merged;
		self.revision += 1;
		Ok(&self.records[position])
	}

	/// Remove the record with `id`, returning it when it existed.
	pub fn remove(&mut self, id: RecordId) -> Option<Record> {
		let position = self.position(id)?;
		self.revision += 1;
		Some(self.records.remove(position))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{Status, sample};

	fn draft(name: &str) -> RecordDraft {
		RecordDraft::new()
			.name(name)
			.age(20)
			.salary(1)
			.status("active")
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let records = vec![
			Record::new(1, "a", "", "", 1, 1, Status::Active),
			Record::new(1, "b", "", "", 1, 1, Status::Active),
		];
		let err = Collection::new(records).unwrap_err();
		assert_eq!(err.violations()[0].field, "id");
	}

	#[test]
	fn empty_collection_starts_at_one() {
		let mut collection = Collection::empty();
		assert_eq!(collection.add(draft("first")).unwrap(), 1);
	}

	#[test]
	fn ids_are_not_reused_after_removal() {
		let mut collection = Collection::new(sample::employees()).unwrap();
		let id = collection.add(draft("temp")).unwrap();
		assert_eq!(id, 6);
		collection.remove(id);
		assert_eq!(collection.add(draft("next")).unwrap(), 7);
	}

	#[test]
	fn non_contiguous_ids_continue_from_max() {
		let records = vec![
			Record::new(3, "a", "", "", 1, 1, Status::Active),
			Record::new(10, "b", "", "", 1, 1, Status::Active),
		];
		let collection = Collection::new(records).unwrap();
		assert_eq!(collection.next_id(), Some(11));
	}

	#[test]
	fn exhausted_identifier_space_rejects_adds() {
		let records = vec![Record::new(RecordId::MAX, "last", "", "", 1, 1, Status::Active)];
		let mut collection = Collection::new(records).unwrap();
		assert_eq!(collection.next_id(), None);

		let err = collection.add(draft("one more")).unwrap_err();
		assert_eq!(
			err,
			ViewError::Validation(vec![FieldViolation::new("id", "identifier space exhausted")])
		);
		assert_eq!(collection.len(), 1);
		assert_eq!(collection.revision(), 0);
	}

	#[test]
	fn default_collection_starts_at_one() {
		assert_eq!(Collection::default().next_id(), Some(1));
	}

	#[test]
	fn failed_update_leaves_record_untouched() {
		let mut collection = Collection::new(sample::employees()).unwrap();
		let before = collection.get(1).cloned();
		let revision = collection.revision();
		let err = collection.update(1, &RecordDraft::new().age(-5)).unwrap_err();
		assert!(matches!(err, ViewError::Validation(_)));
		assert_eq!(collection.get(1).cloned(), before);
		assert_eq!(collection.revision(), revision);
	}

	#[test]
	fn update_missing_id_is_not_found() {
		let mut collection = Collection::empty();
		let err = collection.update(42, &RecordDraft::new()).unwrap_err();
		assert_eq!(err, ViewError::NotFound { id: 42 });
	}
}
