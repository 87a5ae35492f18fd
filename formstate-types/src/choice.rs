//! Autocomplete choices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One option of a (multi-)autocomplete picker.
///
/// Two choices denote the same option when their `value`s match; the label
/// is display text only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    /// Creates a choice.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// A choice whose label is its own value.
    ///
    /// Used when a selected value can no longer be resolved against the
    /// candidate list, so the UI still has something to show.
    pub fn bare(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// Returns true if both choices carry the same value.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
