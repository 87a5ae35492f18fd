//! Multi-autocomplete selection.

use crate::list_actions::ListActions;
use crate::sync::SyncOutcome;
use formstate_types::Choice;

type SameValue = fn(&Choice, &Choice) -> bool;

/// Selected choices of a multi-autocomplete input.
///
/// Choices are the same when their values match.
#[derive(Debug, Clone)]
pub struct ListItemsStore {
    choices: ListActions<Choice, SameValue>,
}

impl ListItemsStore {
    /// Creates a store starting from `initial`.
    pub fn new(initial: Vec<Choice>) -> Self {
        Self {
            choices: ListActions::new(initial, Choice::same_value),
        }
    }

    /// Selected choices.
    #[must_use]
    pub fn items(&self) -> &[Choice] {
        self.choices.items()
    }

    /// Selected values, in selection order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.choices.items().iter().map(|choice| choice.value.as_str())
    }

    /// Returns true if a choice with `value` is selected.
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.choices.is_selected(&Choice::bare(value))
    }

    /// Toggles the choice the user picked.
    ///
    /// The label is looked up in `candidates` by value. An unknown value is
    /// selected with itself as label.
    pub fn select(&mut self, value: &str, candidates: &[Choice]) {
        let choice = candidates
            .iter()
            .find(|candidate| candidate.value == value)
            .cloned()
            .unwrap_or_else(|| Choice::bare(value));
        self.choices.toggle(choice);
    }

    /// Toggles a fully resolved choice.
    pub fn toggle(&mut self, choice: Choice) {
        self.choices.toggle(choice);
    }

    /// Unselects the choice with `value`.
    pub fn remove(&mut self, value: &str) {
        self.choices.remove(&Choice::bare(value));
    }

    /// Replaces the selection.
    pub fn set(&mut self, choices: Vec<Choice>) {
        self.choices.set(choices);
    }

    /// Unselects everything.
    pub fn clear(&mut self) {
        self.choices.clear();
    }

    /// Returns to the last observed upstream selection.
    pub fn reset_to_initial(&mut self) {
        self.choices.reset_to_initial();
    }

    /// Feeds a freshly fetched upstream selection.
    pub fn observe(&mut self, initial: Vec<Choice>) -> SyncOutcome {
        self.choices.observe(initial)
    }
}

impl Default for ListItemsStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
