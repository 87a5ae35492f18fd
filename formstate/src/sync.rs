//! Local state that follows an upstream value.
//!
//! A page refetches its data after pagination or a mutation and hands the
//! fresh result to its stores. [`Synced`] keeps the last upstream value it
//! saw; when a newly observed value is structurally different, the local copy
//! is resolved according to the configured [`ResyncPolicy`].
//!
//! Under the default [`ResyncPolicy::Overwrite`] unsaved local edits are
//! discarded. Callers that cannot afford that either stop refetching while a
//! form is dirty or pick one of the other policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// What to do with a diverged local copy when upstream changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResyncPolicy {
    /// Upstream replaces local state, edits or not.
    #[default]
    Overwrite,
    /// A diverged local copy is kept; a pristine one follows upstream.
    Keep,
    /// A diverged local copy is kept and the new upstream value is held as
    /// pending until the caller accepts or discards it.
    PromptUser,
}

/// Result of [`Synced::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Upstream is equal to the last seen value.
    Unchanged,
    /// Local state was replaced.
    Replaced,
    /// Upstream changed but the diverged local copy was kept.
    Kept,
    /// Upstream changed and is waiting for [`Synced::accept_pending`].
    Pending,
}

type MergeFn<T> = Arc<dyn Fn(&T, &T, &T) -> T + Send + Sync>;
type RefreshFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Resync configuration.
pub struct SyncOptions<T> {
    policy: ResyncPolicy,
    merge: Option<MergeFn<T>>,
    on_refresh: Option<RefreshFn<T>>,
}

impl<T> SyncOptions<T> {
    /// Default options: overwrite, no merge, no refresh hook.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: ResyncPolicy::Overwrite,
            merge: None,
            on_refresh: None,
        }
    }

    /// Sets the conflict policy.
    #[must_use]
    pub fn policy(mut self, policy: ResyncPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Computes the replacement from `(previous upstream, local, next upstream)`
    /// instead of taking the next upstream value verbatim.
    #[must_use]
    pub fn merge(mut self, merge: impl Fn(&T, &T, &T) -> T + Send + Sync + 'static) -> Self {
        self.merge = Some(Arc::new(merge));
        self
    }

    /// Runs after every replacement with the new local state.
    #[must_use]
    pub fn on_refresh(mut self, hook: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_refresh = Some(Arc::new(hook));
        self
    }

    /// The configured policy.
    #[must_use]
    pub fn resync_policy(&self) -> ResyncPolicy {
        self.policy
    }
}

impl<T> Default for SyncOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SyncOptions<T> {
    fn clone(&self) -> Self {
        Self {
            policy: self.policy,
            merge: self.merge.clone(),
            on_refresh: self.on_refresh.clone(),
        }
    }
}

impl<T> fmt::Debug for SyncOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncOptions")
            .field("policy", &self.policy)
            .field("merge", &self.merge.is_some())
            .field("on_refresh", &self.on_refresh.is_some())
            .finish()
    }
}

impl<T> From<ResyncPolicy> for SyncOptions<T> {
    fn from(policy: ResyncPolicy) -> Self {
        Self::new().policy(policy)
    }
}

/// A local copy of an upstream value.
#[derive(Debug, Clone)]
pub struct Synced<T> {
    state: T,
    last_seen: T,
    /// Set once the local copy was written through [`Synced::set_state`] or
    /// [`Synced::update`], or flagged by [`Synced::mark_diverged`], since the
    /// last replacement.
    diverged: bool,
    pending: Option<T>,
    options: SyncOptions<T>,
}

impl<T: Clone + PartialEq> Synced<T> {
    /// Creates a local copy of `initial` with default options.
    pub fn new(initial: T) -> Self {
        Self::with_options(initial, SyncOptions::new())
    }

    /// Creates a local copy of `initial`.
    pub fn with_options(initial: T, options: SyncOptions<T>) -> Self {
        Self {
            state: initial.clone(),
            last_seen: initial,
            diverged: false,
            pending: None,
            options,
        }
    }

    /// Current local state.
    #[must_use]
    pub fn state(&self) -> &T {
        &self.state
    }

    /// The last upstream value observed.
    #[must_use]
    pub fn last_seen(&self) -> &T {
        &self.last_seen
    }

    /// Upstream value parked by [`ResyncPolicy::PromptUser`].
    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Returns true if the local copy was written since the last replacement.
    #[must_use]
    pub fn is_diverged(&self) -> bool {
        self.diverged
    }

    /// The configured policy.
    #[must_use]
    pub fn policy(&self) -> ResyncPolicy {
        self.options.policy
    }

    /// Replaces the local state.
    pub fn set_state(&mut self, state: T) {
        self.state = state;
        self.diverged = true;
    }

    /// Replaces the local state without changing whether it counts as
    /// diverged.
    pub fn replace_state(&mut self, state: T) {
        self.state = state;
    }

    /// Flags the local copy as diverged without touching it.
    pub fn mark_diverged(&mut self) {
        self.diverged = true;
    }

    /// Edits the local state in place.
    pub fn update(&mut self, edit: impl FnOnce(&mut T)) {
        edit(&mut self.state);
        self.diverged = true;
    }

    /// Restores the local state to the last observed upstream value.
    pub fn reset_to_upstream(&mut self) {
        self.state = self.last_seen.clone();
        self.diverged = false;
        self.pending = None;
    }

    /// Feeds a freshly fetched upstream value.
    ///
    /// Nothing happens when `upstream` equals the last seen value. Otherwise
    /// the last seen value is updated in the same step and the local copy is
    /// resolved per the policy.
    pub fn observe(&mut self, upstream: T) -> SyncOutcome {
        if upstream == self.last_seen {
            return SyncOutcome::Unchanged;
        }

        match self.options.policy {
            ResyncPolicy::Overwrite => {
                self.replace(upstream);
                SyncOutcome::Replaced
            }
            ResyncPolicy::Keep | ResyncPolicy::PromptUser if !self.diverged => {
                self.replace(upstream);
                SyncOutcome::Replaced
            }
            ResyncPolicy::Keep => {
                debug!("upstream changed, keeping diverged local state");
                self.last_seen = upstream;
                SyncOutcome::Kept
            }
            ResyncPolicy::PromptUser => {
                debug!("upstream changed, holding it as pending");
                self.pending = Some(upstream.clone());
                self.last_seen = upstream;
                SyncOutcome::Pending
            }
        }
    }

    /// Replaces the local state with the pending upstream value.
    ///
    /// Returns false if nothing was pending.
    pub fn accept_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let next = self.resolve(&pending);
        self.commit(next);
        true
    }

    /// Drops the pending upstream value, keeping the local state.
    ///
    /// Returns false if nothing was pending.
    pub fn discard_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn replace(&mut self, upstream: T) {
        debug!(policy = ?self.options.policy, "upstream changed, replacing local state");
        let next = self.resolve(&upstream);
        self.last_seen = upstream;
        self.pending = None;
        self.commit(next);
    }

    /// Computes the replacement value. Must run before `last_seen` moves on,
    /// since the merge function receives the previous upstream value.
    fn resolve(&self, upstream: &T) -> T {
        match &self.options.merge {
            Some(merge) => merge(&self.last_seen, &self.state, upstream),
            None => upstream.clone(),
        }
    }

    fn commit(&mut self, next: T) {
        self.state = next;
        self.diverged = false;
        if let Some(hook) = &self.options.on_refresh {
            hook(&self.state);
        }
    }
}
