//! Server validation errors.
//!
//! A mutation response carries a flat list of `{field, message}` entries.
//! Forms display them per top-level field, so the list is indexed by the
//! part of `field` before the first [`FIELD_PATH_SEPARATOR`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between segments of a nested field path (`"price:min"`).
pub const FIELD_PATH_SEPARATOR: char = ':';

/// A validation error returned by the server for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    /// Field path, segments joined by `:`.
    pub field: String,
    pub message: String,
    /// Machine-readable error code, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ServerError {
    /// Creates an error without a code.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: None,
        }
    }

    /// Attaches an error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The top-level field this error belongs to.
    #[must_use]
    pub fn root_field(&self) -> &str {
        match self.field.split_once(FIELD_PATH_SEPARATOR) {
            Some((root, _)) => root,
            None => &self.field,
        }
    }

    /// Decodes an error list from a mutation response's JSON array.
    pub fn list_from_json(json: &str) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Server errors indexed by top-level field name.
///
/// When several entries map to the same field, the one that comes last in
/// the source list wins.
///
/// Serializes as the source error list; the index is rebuilt on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ServerError>", into = "Vec<ServerError>")]
pub struct FormErrors {
    by_field: BTreeMap<String, String>,
    source: Vec<ServerError>,
}

impl FormErrors {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from a server error list.
    pub fn from_errors(errors: &[ServerError]) -> Self {
        let mut by_field = BTreeMap::new();
        for err in errors {
            by_field.insert(err.root_field().to_owned(), err.message.clone());
        }
        Self {
            by_field,
            source: errors.to_vec(),
        }
    }

    /// Message for a top-level field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.by_field.get(field).map(String::as_str)
    }

    /// Message for an exact field path, without the top-level folding.
    ///
    /// Same precedence as [`FormErrors::get`]: the last matching entry wins.
    #[must_use]
    pub fn for_path(&self, path: &str) -> Option<&str> {
        self.source
            .iter()
            .rev()
            .find(|err| err.field == path)
            .map(|err| err.message.as_str())
    }

    /// Returns true if the field has an error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.by_field.contains_key(field)
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// Returns true if no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_field
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// The error list this index was built from.
    #[must_use]
    pub fn source(&self) -> &[ServerError] {
        &self.source
    }
}

impl From<&[ServerError]> for FormErrors {
    fn from(errors: &[ServerError]) -> Self {
        Self::from_errors(errors)
    }
}

impl From<Vec<ServerError>> for FormErrors {
    fn from(errors: Vec<ServerError>) -> Self {
        Self::from_errors(&errors)
    }
}

impl From<FormErrors> for Vec<ServerError> {
    fn from(errors: FormErrors) -> Self {
        errors.source
    }
}
