//! Single-record form state.
//!
//! Fields are addressed by name through the record's serialized object form,
//! so any `T` whose serde representation is a JSON object works as form
//! data. Writes round-trip through `serde_json::Value` and are checked
//! against `T` before they land: a value of the wrong type is rejected and
//! leaves the data untouched.

use crate::lists;
use crate::sync::{SyncOptions, SyncOutcome, Synced};
use crate::{Error, Result};
use formstate_types::{FormErrors, ServerError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Editable state of one record.
///
/// Pristine until the first edit, dirty afterwards. Only a replacement from
/// upstream (see [`FormStore::observe`]) makes a dirty form pristine again.
///
/// The dirty flag is the divergence flag of the underlying [`Synced`], so
/// the resync policy always sees the same answer as [`FormStore::has_changed`].
///
/// Every write round-trips the whole record through `serde_json::Value`.
/// Records that do not survive that round trip, such as non-finite floats
/// (serialized as `null`), cannot be edited; writes to them fail with
/// [`Error::UnrepresentableData`] and leave the data untouched.
#[derive(Debug, Clone)]
pub struct FormStore<T> {
    data: Synced<T>,
    errors: FormErrors,
}

impl<T> FormStore<T>
where
    T: Serialize + DeserializeOwned + Clone + PartialEq,
{
    /// Creates a pristine form over `initial`.
    pub fn new(initial: T) -> Self {
        Self::with_options(initial, SyncOptions::new())
    }

    /// Creates a pristine form with explicit resync options.
    pub fn with_options(initial: T, options: SyncOptions<T>) -> Self {
        Self {
            data: Synced::with_options(initial, options),
            errors: FormErrors::new(),
        }
    }

    /// Current form data.
    #[must_use]
    pub fn data(&self) -> &T {
        self.data.state()
    }

    /// The upstream value the form was last synced with.
    #[must_use]
    pub fn initial(&self) -> &T {
        self.data.last_seen()
    }

    /// Returns true once any field was edited.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.data.is_diverged()
    }

    /// Server errors indexed by field.
    #[must_use]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Upstream value held back by [`crate::ResyncPolicy::PromptUser`].
    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.data.pending()
    }

    /// Sets a field.
    ///
    /// The field must already exist in the data. Writing a field's current
    /// value again is not an edit and leaves the form pristine.
    pub fn change<V: Serialize>(&mut self, field: &str, value: V) -> Result<()> {
        let value = to_field_value(field, value)?;
        let mut fields = self.fields()?;
        let Some(slot) = fields.get_mut(field) else {
            return Err(unknown_field(field));
        };
        if *slot == value {
            return Ok(());
        }
        *slot = value;
        let next = self.decode(field, fields)?;
        self.data.set_state(next);
        Ok(())
    }

    /// Adds `value` to a sequence field, or removes it if already present.
    pub fn toggle_value<V: Serialize>(&mut self, field: &str, value: V) -> Result<()> {
        let value = to_field_value(field, value)?;
        let mut fields = self.fields()?;
        match fields.get_mut(field) {
            None => return Err(unknown_field(field)),
            Some(Value::Array(items)) => {
                *items = lists::toggle(items, value, |a, b| a == b);
            }
            Some(_) => {
                warn!(field, "toggle on a form field that is not a sequence");
                return Err(Error::NotASequence(field.to_owned()));
            }
        }
        let next = self.decode(field, fields)?;
        self.data.set_state(next);
        Ok(())
    }

    /// Shallow-merges `partial` into the data.
    ///
    /// `partial` must serialize to an object whose keys are all existing
    /// fields. Does not mark the form dirty.
    pub fn set<P: Serialize>(&mut self, partial: P) -> Result<()> {
        let Value::Object(partial) =
            serde_json::to_value(partial).map_err(formstate_types::Error::from)?
        else {
            return Err(Error::NotAnObject);
        };
        let mut fields = self.fields()?;
        if let Some(field) = partial.keys().find(|key| !fields.contains_key(*key)) {
            return Err(unknown_field(field));
        }
        let first = partial.keys().next().cloned().unwrap_or_default();
        fields.extend(partial);
        let next = self.decode(&first, fields)?;
        self.data.replace_state(next);
        Ok(())
    }

    /// Marks the form dirty without touching its data.
    pub fn trigger_change(&mut self) {
        self.data.mark_diverged();
    }

    /// Restores the data to the last observed upstream value.
    ///
    /// The dirty flag is left as it is.
    pub fn reset(&mut self) {
        let dirty = self.data.is_diverged();
        self.data.reset_to_upstream();
        if dirty {
            self.data.mark_diverged();
        }
    }

    /// Hands the current data to `on_submit`.
    ///
    /// The store performs no validation or I/O; the callback's result is
    /// returned as is.
    pub fn submit<R>(&self, on_submit: impl FnOnce(&T) -> R) -> R {
        on_submit(self.data.state())
    }

    /// Rebuilds the field error index from a server error list.
    pub fn set_errors(&mut self, errors: &[ServerError]) {
        self.errors = FormErrors::from_errors(errors);
    }

    /// Rebuilds the field error index from a JSON error list.
    pub fn set_errors_json(&mut self, json: &str) -> Result<()> {
        let errors = ServerError::list_from_json(json)?;
        self.set_errors(&errors);
        Ok(())
    }

    /// Feeds a freshly fetched upstream value.
    ///
    /// A replacement discards local edits and makes the form pristine.
    pub fn observe(&mut self, initial: T) -> SyncOutcome {
        self.data.observe(initial)
    }

    /// Takes the pending upstream value, discarding local edits.
    pub fn accept_pending(&mut self) -> bool {
        self.data.accept_pending()
    }

    /// Drops the pending upstream value and keeps editing.
    pub fn discard_pending(&mut self) -> bool {
        self.data.discard_pending()
    }

    fn fields(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self.data.state()).map_err(formstate_types::Error::from)? {
            Value::Object(fields) => Ok(fields),
            _ => Err(Error::NotAnObject),
        }
    }

    fn decode(&self, field: &str, fields: Map<String, Value>) -> Result<T> {
        serde_json::from_value(Value::Object(fields)).map_err(|source| {
            if !self.round_trips() {
                warn!(field, %source, "form data does not survive a JSON round trip");
                return Error::UnrepresentableData(source);
            }
            warn!(field, %source, "rejected form field value");
            Error::InvalidValue {
                field: field.to_owned(),
                source,
            }
        })
    }

    /// Returns true if the current data can be read back from its own
    /// serialized form.
    fn round_trips(&self) -> bool {
        serde_json::to_value(self.data.state())
            .and_then(serde_json::from_value::<T>)
            .is_ok()
    }
}

fn to_field_value<V: Serialize>(field: &str, value: V) -> Result<Value> {
    serde_json::to_value(value).map_err(|source| Error::InvalidValue {
        field: field.to_owned(),
        source,
    })
}

fn unknown_field(field: &str) -> Error {
    warn!(field, "unknown form field");
    Error::UnknownField(field.to_owned())
}
