//! Content record model and field catalog

pub mod content_record;
pub mod field;

pub use content_record::{
    AuthorRef, Citation, ClientRef, ContentRecord, ContentStatus, FaqEntry, ImageRef,
};
pub use field::{FieldErrors, FieldId, UnknownField};
