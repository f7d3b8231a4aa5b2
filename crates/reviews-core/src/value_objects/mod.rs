//! Value objects used across entities.

pub mod record_id;

pub use record_id::{RecordId, RecordIdParseError};
