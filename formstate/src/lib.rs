//! Form and list state stores for the dashboard.
//!
//! Pages seed these stores with data fetched from the server, bind inputs to
//! their current state and read the state back out on submit:
//!
//! - [`Synced<T>`] — local copy of an upstream value, resynced on change
//! - [`FormStore<T>`] — single-record form with dirty tracking and field errors
//! - [`FormsetStore<D, V>`] — keyed rows of independently editable values
//! - [`SelectionStore<I>`] — selected identifiers (checkbox selection)
//! - [`ListActions<T, F>`] — selected records under a caller equality
//! - [`ListItemsStore`] — multi-autocomplete selection of [`Choice`]s
//! - [`DialogOpenTracker`] — open/close transitions of a modal dialog
//!
//! The free functions in [`lists`] are the slice operations the stores are
//! built on.
//!
//! Every store is owned by exactly one page and mutated through `&mut self`;
//! nothing here blocks, spawns or performs I/O.

mod dialog;
mod form;
mod formset;
mod list_actions;
mod list_items;
pub mod lists;
mod selection;
mod sync;

pub use dialog::{DialogOpenTracker, DialogTransition};
pub use form::FormStore;
pub use formset::FormsetStore;
pub use list_actions::ListActions;
pub use list_items::ListItemsStore;
pub use selection::SelectionStore;
pub use sync::{ResyncPolicy, SyncOptions, SyncOutcome, Synced};

pub use formstate_types::{Choice, FormErrors, FormsetRow, ServerError};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations reported by the stores.
///
/// These signal a bug in the calling page, not a user-facing failure. Server
/// validation errors are data ([`FormErrors`]) and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("form field {0} is not a sequence")]
    NotASequence(String),

    #[error("form data does not serialize to an object")]
    NotAnObject,

    #[error("invalid value for form field {field}: {source}")]
    InvalidValue {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("form data does not survive a JSON round trip: {0}")]
    UnrepresentableData(#[source] serde_json::Error),

    #[error("unknown formset row: {0}")]
    UnknownRow(String),

    #[error("duplicate formset row: {0}")]
    DuplicateRow(String),

    #[error(transparent)]
    Types(#[from] formstate_types::Error),
}
