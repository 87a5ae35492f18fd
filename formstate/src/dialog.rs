//! Modal dialog open/close tracking.

use tracing::debug;

/// A change of a dialog's open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTransition {
    Opened,
    Closed,
}

/// Tracks a dialog's open flag across renders.
///
/// Pages run their on-open hook (clearing stale errors, seeding inputs) and
/// on-close hook exactly once per transition, however often the flag is
/// re-observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogOpenTracker {
    open: bool,
}

impl DialogOpenTracker {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Records the current flag, returning the transition if it changed.
    pub fn observe(&mut self, open: bool) -> Option<DialogTransition> {
        if open == self.open {
            return None;
        }
        self.open = open;
        let transition = if open {
            DialogTransition::Opened
        } else {
            DialogTransition::Closed
        };
        debug!(?transition, "dialog transition");
        Some(transition)
    }

    /// Like [`DialogOpenTracker::observe`], running the matching hook.
    pub fn observe_with(
        &mut self,
        open: bool,
        on_open: impl FnOnce(),
        on_close: impl FnOnce(),
    ) -> Option<DialogTransition> {
        let transition = self.observe(open);
        match transition {
            Some(DialogTransition::Opened) => on_open(),
            Some(DialogTransition::Closed) => on_close(),
            None => {}
        }
        transition
    }
}
