//! Records, their fields, and the collection that owns them.

mod collection;
mod draft;
mod field;
mod record;
pub mod sample;
mod status;

pub use collection::Collection;
pub use draft::RecordDraft;
pub use field::{Field, FieldValue};
pub use record::{Record, RecordId};
pub use status::{ParseStatusError, Status};
