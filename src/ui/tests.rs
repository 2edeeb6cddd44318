use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::App;
use crate::columns::ColumnSet;
use crate::model::{Collection, Record, Status};
use crate::view::{SortDirection, TabularView};

fn ascii_records() -> Vec<Record> {
	vec![
		Record::new(1, "Alice", "Frontend", "Dev", 28, 45_000_000, Status::Active),
		Record::new(2, "Bob", "Backend", "Dev", 32, 52_000_000, Status::Vacation),
		Record::new(3, "Carol", "Backend", "Dev", 25, 38_000_000, Status::Active),
	]
}

fn app() -> App {
	let collection = Collection::new(ascii_records()).unwrap();
	App::new(TabularView::with_columns(collection, ColumnSet::employees()))
}

fn press(app: &mut App, code: KeyCode) -> Option<super::ViewOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(app: &mut App, ch: char) -> Option<super::ViewOutcome> {
	app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn render(app: &mut App) -> String {
	let mut terminal = Terminal::new(TestBackend::new(140, 10)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	terminal.backend().to_string()
}

#[test]
fn renders_rows_and_footer() {
	let mut app = app().with_title("Employees");
	let screen = render(&mut app);
	assert!(screen.contains("Employees >"));
	assert!(screen.contains("Alice"));
	assert!(screen.contains("Carol"));
	assert!(screen.contains("Page 1/1 · 3 matches · 0 selected"));
}

#[test]
fn typing_filters_rows() {
	let mut app = app();
	for ch in "bob".chars() {
		press(&mut app, KeyCode::Char(ch));
	}
	assert_eq!(app.view().snapshot().visible_ids(), vec![2]);
	let screen = render(&mut app);
	assert!(screen.contains("bob"));
	assert!(!screen.contains("Alice"));

	press(&mut app, KeyCode::Backspace);
	press(&mut app, KeyCode::Backspace);
	press(&mut app, KeyCode::Backspace);
	assert_eq!(app.view().snapshot().total_matches, 3);
}

#[test]
fn empty_result_shows_placeholder() {
	let mut app = app();
	for ch in "zzz".chars() {
		press(&mut app, KeyCode::Char(ch));
	}
	assert!(render(&mut app).contains("No results"));
	assert_eq!(app.cursor_id(), None);
}

#[test]
fn tab_selects_cursor_row_and_enter_returns_selection() {
	let mut app = app();
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Tab);
	assert!(render(&mut app).contains("[x]"));

	let outcome = press(&mut app, KeyCode::Enter).expect("enter finishes");
	assert!(outcome.accepted);
	assert_eq!(outcome.selected.len(), 1);
	assert_eq!(outcome.selected[0].name, "Bob");
}

#[test]
fn enter_without_selection_returns_cursor_row() {
	let mut app = app();
	let outcome = press(&mut app, KeyCode::Enter).unwrap();
	assert_eq!(outcome.selected[0].id, 1);
}

#[test]
fn escape_cancels_without_selection() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	let outcome = press(&mut app, KeyCode::Esc).unwrap();
	assert!(!outcome.accepted);
	assert!(outcome.selected.is_empty());
}

#[test]
fn arrows_page_through_results() {
	let mut app = app();
	app.view.set_page_size(2).unwrap();
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Right);
	assert_eq!(app.view().state().page(), 1);
	assert_eq!(app.cursor_id(), Some(3));
	press(&mut app, KeyCode::Right);
	assert_eq!(app.view().state().page(), 1);
	press(&mut app, KeyCode::Left);
	assert_eq!(app.view().snapshot().visible_ids(), vec![1, 2]);
}

#[test]
fn ctrl_s_cycles_sort_and_ctrl_r_reverses() {
	let mut app = app();
	ctrl(&mut app, 's');
	let sort = app.view().state().sort().unwrap();
	assert_eq!(sort.field, crate::model::Field::Name);
	ctrl(&mut app, 'r');
	assert_eq!(app.view().state().sort().unwrap().direction, SortDirection::Desc);
	assert!(render(&mut app).contains("Name ▼"));
}

#[test]
fn ctrl_f_cycles_status_filter() {
	let mut app = app();
	ctrl(&mut app, 'f');
	assert_eq!(app.view().snapshot().visible_ids(), vec![1, 3]);
	ctrl(&mut app, 'f');
	assert_eq!(app.view().snapshot().visible_ids(), vec![2]);
	ctrl(&mut app, 'f');
	assert!(app.view().snapshot().visible.is_empty());
	ctrl(&mut app, 'f');
	assert_eq!(app.view().snapshot().total_matches, 3);
}

#[test]
fn delete_removes_cursor_record() {
	let mut app = app();
	press(&mut app, KeyCode::Delete);
	assert!(app.view().record(1).is_none());
	assert!(render(&mut app).contains("Removed Alice"));
	assert_eq!(app.cursor_id(), Some(2));
}

#[test]
fn ctrl_a_selects_page() {
	let mut app = app();
	ctrl(&mut app, 'a');
	assert_eq!(app.view().snapshot().selected, vec![1, 2, 3]);
	ctrl(&mut app, 'x');
	assert!(app.view().snapshot().selected.is_empty());
}
