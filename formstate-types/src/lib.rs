//! Shared data types for the dashboard form state layer.
//!
//! This crate defines the plain data exchanged between pages and the stores
//! in `formstate`:
//! - Server validation errors and their per-field index
//! - Formset rows (one editable row of a multi-row edit)
//! - Autocomplete choices (`{label, value}` pairs)
//!
//! Nothing here holds behavior beyond lookups; mutation lives in the stores.

mod choice;
mod errors;
mod formset;

pub use choice::Choice;
pub use errors::{FIELD_PATH_SEPARATOR, FormErrors, ServerError};
pub use formset::FormsetRow;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when decoding shared types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
