//! Core crate exports for the `tabview` engine and its terminal surface.
//!
//! The root module re-exports the engine types so that embedders can build a
//! view without digging through the module hierarchy.

pub mod app_dirs;
pub mod columns;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod ui;
pub mod view;

pub use columns::{ColumnDescriptor, ColumnPreset, ColumnSet, Formatter};
pub use error::{FieldViolation, ViewError};
pub use export::{ExportOptions, export_matches, to_delimited};
pub use model::{Collection, Field, Record, RecordDraft, RecordId, Status};
pub use ui::{App, ViewOutcome, run};
pub use view::{ColumnFilter, SortDirection, SortKey, TabularView, ViewSnapshot, ViewState};
