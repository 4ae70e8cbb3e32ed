//! `HandlerList` — the ordered, keyed handler collection of one owner.

use std::cmp::Ordering;

use bo_core::{BehaviorType, HandlerKey, Priority, PriorityRange};
use indexmap::IndexMap;

use crate::{Dispatcher, Handler};

/// Ordered mapping `HandlerKey → Handler` belonging to one owner.
///
/// Keys are unique and never reused.  Iteration order is insertion order
/// until [`sort_by`](Self::sort_by) reorders it; sorting never changes keys
/// or priorities.  Priority uniqueness is *not* enforced here.
///
/// The list owns the owner's [`Dispatcher`] so that every enabled-state
/// change is reported exactly once.
pub struct HandlerList<D: Dispatcher> {
    owner:      String,
    handlers:   IndexMap<HandlerKey, Handler>,
    next_key:   HandlerKey,
    dispatcher: D,
}

impl<D: Dispatcher> HandlerList<D> {
    /// An empty list for the owner labelled `owner`.
    pub fn new(owner: impl Into<String>, dispatcher: D) -> Self {
        Self {
            owner:      owner.into(),
            handlers:   IndexMap::new(),
            next_key:   HandlerKey(0),
            dispatcher,
        }
    }

    /// Label of the owning object, used in diagnostics.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The legal priority range, as defined by the dispatcher.
    pub fn range(&self) -> PriorityRange {
        self.dispatcher.range()
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Append `handler` and return its new key.
    ///
    /// An enabled handler is subscribed immediately.
    pub fn push(&mut self, handler: Handler) -> HandlerKey {
        let key = self.next_key;
        self.next_key = key.next();
        if handler.is_enabled() {
            self.dispatcher.subscribe(key, handler.behavior(), handler.priority());
        }
        tracing::trace!(
            owner = %self.owner,
            %key,
            behavior = %handler.behavior(),
            priority = handler.priority(),
            "handler attached"
        );
        self.handlers.insert(key, handler);
        key
    }

    /// Remove and return the handler at `key`, unsubscribing it if enabled.
    ///
    /// The relative order of the remaining handlers is preserved.
    pub fn remove(&mut self, key: HandlerKey) -> Option<Handler> {
        let handler = self.handlers.shift_remove(&key)?;
        if handler.is_enabled() {
            self.dispatcher.unsubscribe(key);
        }
        tracing::trace!(owner = %self.owner, %key, "handler removed");
        Some(handler)
    }

    #[inline]
    pub fn get(&self, key: HandlerKey) -> Option<&Handler> {
        self.handlers.get(&key)
    }

    #[inline]
    pub fn contains(&self, key: HandlerKey) -> bool {
        self.handlers.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// `(key, handler)` pairs in current iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (HandlerKey, &Handler)> + '_ {
        self.handlers.iter().map(|(&k, h)| (k, h))
    }

    pub fn keys(&self) -> impl Iterator<Item = HandlerKey> + '_ {
        self.handlers.keys().copied()
    }

    /// Behavior types of all handlers, in iteration order.
    pub fn behaviors(&self) -> impl Iterator<Item = &BehaviorType> + '_ {
        self.handlers.values().map(Handler::behavior)
    }

    pub fn contains_behavior(&self, behavior: &BehaviorType) -> bool {
        self.behaviors().any(|b| b == behavior)
    }

    // ── Ordering ──────────────────────────────────────────────────────────

    /// Stable resort of the iteration order by `cmp`.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Handler, &Handler) -> Ordering,
    {
        self.handlers.sort_by(|_, a, _, b| cmp(a, b));
    }

    // ── Subscription state ────────────────────────────────────────────────

    /// Subscribe the handler at `key`.
    ///
    /// Returns `false` if `key` is unknown.  Enabling an enabled handler is a
    /// no-op.
    pub fn enable(&mut self, key: HandlerKey) -> bool {
        let Some(handler) = self.handlers.get_mut(&key) else {
            return false;
        };
        if !handler.is_enabled() {
            handler.set_enabled(true);
            self.dispatcher.subscribe(key, handler.behavior(), handler.priority());
        }
        true
    }

    /// Unsubscribe the handler at `key`.
    ///
    /// Returns `false` if `key` is unknown.  Disabling a disabled handler is
    /// a no-op.
    pub fn disable(&mut self, key: HandlerKey) -> bool {
        let Some(handler) = self.handlers.get_mut(&key) else {
            return false;
        };
        if handler.is_enabled() {
            handler.set_enabled(false);
            self.dispatcher.unsubscribe(key);
        }
        true
    }

    /// Run `f` on the handler at `key` while it is unsubscribed.
    ///
    /// The handler is disabled before `f` runs and re-enabled afterwards if
    /// (and only if) it was enabled on entry.  Returns `None` if `key` is
    /// unknown, in which case `f` is not called.
    pub fn with_detached<R, F>(&mut self, key: HandlerKey, f: F) -> Option<R>
    where
        F: FnOnce(&mut Handler) -> R,
    {
        let was_enabled = self.handlers.get(&key)?.is_enabled();
        self.disable(key);
        let out = self.handlers.get_mut(&key).map(f);
        if was_enabled {
            self.enable(key);
        }
        out
    }

    /// Move the handler at `key` to `priority`, detaching it around the write.
    ///
    /// Returns `false` if `key` is unknown.
    pub fn set_priority(&mut self, key: HandlerKey, priority: Priority) -> bool {
        self.with_detached(key, |h| h.set_priority(priority)).is_some()
    }
}
