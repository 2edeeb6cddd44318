use super::*;
use crate::columns::ColumnDescriptor;
use crate::model::sample;

fn sample_view() -> TabularView {
	TabularView::new(Collection::new(sample::employees()).expect("sample ids are unique"))
}

fn visible_ids(view: &TabularView) -> Vec<RecordId> {
	view.snapshot().visible_ids()
}

fn hong_gildong() -> RecordDraft {
	RecordDraft::new()
		.name("홍길동")
		.role("QA")
		.department("QA팀")
		.age(30)
		.salary(40_000_000)
		.status("active")
}

#[test]
fn vacation_filter_shows_only_record_two() {
	let mut view = sample_view();
	view.set_status_filter(["vacation".parse::<Status>().unwrap()]);
	assert_eq!(visible_ids(&view), vec![2]);
	assert_eq!(view.snapshot().total_matches, 1);
}

#[test]
fn salary_descending_orders_by_amount() {
	let mut view = sample_view();
	view.set_sort("salary", Some(SortDirection::Desc)).unwrap();
	assert_eq!(visible_ids(&view), vec![4, 2, 5, 1, 3]);
}

#[test]
fn third_page_of_two_holds_last_record() {
	let mut view = sample_view();
	view.set_page_size(2).unwrap();
	view.set_page(2);
	let snapshot = view.snapshot();
	assert_eq!(snapshot.visible_ids(), vec![5]);
	assert_eq!(snapshot.page_count, 3);
	assert_eq!(snapshot.page, 2);
}

#[test]
fn add_then_remove_restores_collection() {
	let mut view = sample_view();
	let original = view.collection().records().to_vec();

	let id = view.add_record(hong_gildong()).unwrap();
	assert_eq!(id, 6);
	assert_eq!(view.collection().len(), 6);
	assert_eq!(view.collection().records().last().map(|r| r.id), Some(6));

	let removed = view.remove_record(6).expect("record 6 exists");
	assert_eq!(removed.name, "홍길동");
	assert_eq!(view.collection().records(), original.as_slice());
}

#[test]
fn repeated_age_sort_is_identical() {
	let mut view = sample_view();
	view.set_sort("age", Some(SortDirection::Asc)).unwrap();
	let first = visible_ids(&view);
	view.set_sort("age", Some(SortDirection::Asc)).unwrap();
	assert_eq!(visible_ids(&view), first);
	assert_eq!(first, vec![3, 1, 5, 2, 4]);
}

#[test]
fn search_is_idempotent() {
	let mut view = sample_view();
	view.set_search_text("백엔드");
	let once = visible_ids(&view);
	view.set_search_text("백엔드");
	assert_eq!(visible_ids(&view), once);
	assert_eq!(once, vec![2, 3, 4, 5]);
}

#[test]
fn search_matches_any_searchable_column_case_insensitively() {
	let mut view = sample_view();
	view.set_search_text("KIM@");
	assert_eq!(visible_ids(&view), vec![1]);

	view.set_search_text("부산");
	assert_eq!(visible_ids(&view), vec![2]);

	view.set_search_text("");
	assert_eq!(view.snapshot().total_matches, 5);
}

#[test]
fn unsearchable_columns_are_skipped() {
	let columns = ColumnSet::new(vec![
		ColumnDescriptor::new(Field::Name, "Name").sortable(),
		ColumnDescriptor::new(Field::City, "City").searchable(false),
	]);
	let mut view = TabularView::with_columns(Collection::new(sample::employees()).unwrap(), columns);
	view.set_search_text("서울");
	assert!(visible_ids(&view).is_empty());
}

#[test]
fn filter_predicate_holds_for_every_record() {
	let mut view = sample_view();
	view.set_status_filter([Status::Active]);
	view.set_search_text("개발자");
	let visible = visible_ids(&view);
	for record in view.collection().records() {
		let expected = record.status == Status::Active && record.role.contains("개발자");
		assert_eq!(visible.contains(&record.id), expected, "record {}", record.id);
	}
}

#[test]
fn filters_combine_with_and() {
	let mut view = sample_view();
	view.set_status_filter([Status::Vacation]);
	view.set_search_text("프론트엔드");
	assert!(visible_ids(&view).is_empty());
	assert_eq!(view.snapshot().page_count, 1);
}

#[test]
fn sort_ties_keep_insertion_order() {
	let mut view = sample_view();
	view.set_sort("department", Some(SortDirection::Asc)).unwrap();
	assert_eq!(visible_ids(&view), vec![1, 2, 3, 4, 5]);
	view.set_sort("department", Some(SortDirection::Desc)).unwrap();
	assert_eq!(visible_ids(&view), vec![1, 2, 3, 4, 5]);
}

#[test]
fn omitted_direction_toggles_same_field() {
	let mut view = sample_view();
	assert_eq!(view.set_sort("age", None).unwrap().direction, SortDirection::Asc);
	assert_eq!(view.set_sort("age", None).unwrap().direction, SortDirection::Desc);
	assert_eq!(view.set_sort("age", None).unwrap().direction, SortDirection::Asc);
	assert_eq!(view.set_sort("name", None).unwrap().direction, SortDirection::Asc);
}

#[test]
fn invalid_sort_field_leaves_state_unchanged() {
	let mut view = sample_view();
	view.set_sort("salary", Some(SortDirection::Desc)).unwrap();
	let before = view.state().clone();

	let err = view.set_sort("bonus", None).unwrap_err();
	assert!(matches!(err, ViewError::InvalidField { ref name, .. } if name == "bonus"));
	let err = view.set_sort("email", None).unwrap_err();
	assert!(matches!(err, ViewError::InvalidField { .. }));
	assert_eq!(view.state(), &before);
}

#[test]
fn filter_changes_reset_page() {
	let mut view = sample_view();
	view.set_page_size(2).unwrap();
	view.set_page(1);
	view.set_search_text("개발");
	assert_eq!(view.state().page(), 0);

	view.set_page(1);
	view.set_status_filter([]);
	assert_eq!(view.state().page(), 0);
}

#[test]
fn set_page_clamps_out_of_range() {
	let mut view = sample_view();
	view.set_page_size(2).unwrap();
	view.set_page(99);
	assert_eq!(view.state().page(), 2);
	view.next_page();
	assert_eq!(view.state().page(), 2);
	view.previous_page();
	view.previous_page();
	view.previous_page();
	assert_eq!(view.state().page(), 0);
}

#[test]
fn removing_last_page_records_clamps_page() {
	let mut view = sample_view();
	view.set_page_size(2).unwrap();
	view.set_page(2);
	view.remove_record(5);
	assert_eq!(view.state().page(), 1);
	assert_eq!(visible_ids(&view), vec![3, 4]);
}

#[test]
fn zero_page_size_is_rejected() {
	let mut view = sample_view();
	let err = view.set_page_size(0).unwrap_err();
	assert_eq!(err.violations()[0].field, "pageSize");
	assert_eq!(view.state().page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn pagination_bounds_hold_for_every_page_size() {
	let mut view = sample_view();
	for size in 1..=7 {
		view.set_page_size(size).unwrap();
		let pages = view.page_count();
		assert_eq!(pages, 5usize.div_ceil(size).max(1));
		for page in 0..pages {
			view.set_page(page);
			let snapshot = view.snapshot();
			assert!(snapshot.visible.len() <= size);
			assert!(snapshot.offset() + snapshot.visible.len() <= snapshot.total_matches);
		}
	}
}

#[test]
fn selection_survives_filtering() {
	let mut view = sample_view();
	view.toggle_select(1);
	view.set_status_filter([Status::Vacation]);
	assert_eq!(view.snapshot().selected, vec![1]);
}

#[test]
fn toggle_select_ignores_unknown_ids() {
	let mut view = sample_view();
	view.toggle_select(42);
	assert!(view.snapshot().selected.is_empty());
	view.toggle_select(3);
	view.toggle_select(3);
	assert!(view.snapshot().selected.is_empty());
}

#[test]
fn select_all_skips_missing_records() {
	let mut view = sample_view();
	view.select_all([2, 4, 99]);
	assert_eq!(view.snapshot().selected, vec![2, 4]);
	view.clear_selection();
	assert_eq!(view.snapshot().selected_count(), 0);
}

#[test]
fn select_page_toggles_visible_rows() {
	let mut view = sample_view();
	view.set_page_size(2).unwrap();
	view.select_page();
	assert_eq!(view.snapshot().selected, vec![1, 2]);
	view.next_page();
	view.select_page();
	assert_eq!(view.snapshot().selected, vec![1, 2, 3, 4]);
	view.select_page();
	assert_eq!(view.snapshot().selected, vec![1, 2]);
}

#[test]
fn removing_selected_record_prunes_selection() {
	let mut view = sample_view();
	view.select_all([1, 2]);
	view.remove_record(2);
	assert_eq!(view.snapshot().selected, vec![1]);
	assert_eq!(view.state().selected().len(), 1);
}

#[test]
fn remove_missing_record_is_noop() {
	let mut view = sample_view();
	assert!(view.remove_record(77).is_none());
	assert_eq!(view.collection().len(), 5);
}

#[test]
fn remove_selected_deletes_in_bulk() {
	let mut view = sample_view();
	view.select_all([1, 3, 5]);
	assert_eq!(view.remove_selected(), 3);
	let ids: Vec<_> = view.collection().records().iter().map(|r| r.id).collect();
	assert_eq!(ids, vec![2, 4]);
	assert!(view.snapshot().selected.is_empty());
}

#[test]
fn invalid_add_reports_all_fields_and_changes_nothing() {
	let mut view = sample_view();
	let revision = view.collection().revision();
	let err = view
		.add_record(RecordDraft::new().name("").age(-3).salary(10).status("gone"))
		.unwrap_err();
	let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
	assert_eq!(fields, vec!["name", "age", "status"]);
	assert_eq!(view.collection().len(), 5);
	assert_eq!(view.collection().revision(), revision);
	assert_eq!(view.collection().next_id(), Some(6));
}

#[test]
fn update_merges_and_revalidates() {
	let mut view = sample_view();
	view.update_record(3, RecordDraft::new().salary(60_000_000)).unwrap();
	view.set_sort("salary", Some(SortDirection::Desc)).unwrap();
	assert_eq!(visible_ids(&view)[0], 3);

	let err = view
		.update_record(3, RecordDraft::new().status("fired"))
		.unwrap_err();
	assert!(matches!(err, ViewError::Validation(_)));
	assert_eq!(view.record(3).map(|r| r.status), Some(Status::Active));
}

#[test]
fn update_unknown_record_is_not_found() {
	let mut view = sample_view();
	let err = view.update_record(10, RecordDraft::new().age(1)).unwrap_err();
	assert_eq!(err, ViewError::NotFound { id: 10 });
}

#[test]
fn range_filter_on_age() {
	let mut view = sample_view();
	view.set_column_filter(Field::Age, ColumnFilter::range(Some(28), Some(32)))
		.unwrap();
	assert_eq!(visible_ids(&view), vec![1, 2, 5]);

	view.set_column_filter(Field::Age, ColumnFilter::range(None, None))
		.unwrap();
	assert!(view.state().column_filters().is_empty());
}

#[test]
fn invalid_column_filters_are_rejected() {
	let mut view = sample_view();
	assert!(
		view.set_column_filter(Field::Name, ColumnFilter::range(Some(1), None))
			.is_err()
	);
	assert!(
		view.set_column_filter(Field::Id, ColumnFilter::contains("1"))
			.is_err()
	);
	assert!(view.state().column_filters().is_empty());
}

#[test]
fn contains_filter_narrows_one_column() {
	let mut view = sample_view();
	view.set_column_filter(Field::Role, ColumnFilter::contains("프론트"))
		.unwrap();
	assert_eq!(visible_ids(&view), vec![1]);
	view.clear_column_filters();
	assert_eq!(view.snapshot().total_matches, 5);
}

#[test]
fn matches_ignore_pagination() {
	let mut view = sample_view();
	view.set_page_size(2).unwrap();
	view.set_sort("age", Some(SortDirection::Desc)).unwrap();
	let ids: Vec<_> = view.matches().iter().map(|r| r.id).collect();
	assert_eq!(ids, vec![4, 2, 5, 1, 3]);
	assert_eq!(view.snapshot().visible.len(), 2);
}

#[test]
fn clear_sort_restores_base_order() {
	let mut view = sample_view();
	view.set_sort("salary", Some(SortDirection::Desc)).unwrap();
	view.clear_sort();
	assert_eq!(visible_ids(&view), vec![1, 2, 3, 4, 5]);
	assert!(view.snapshot().sort.is_none());
}

#[test]
fn empty_collection_has_one_empty_page() {
	let view = TabularView::new(Collection::empty());
	let snapshot = view.snapshot();
	assert_eq!(snapshot.page_count, 1);
	assert!(snapshot.visible.is_empty());
}
