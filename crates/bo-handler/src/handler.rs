//! A single pluggable handler ("behavior") attached to an owner.

use bo_core::{BehaviorType, Priority};

/// A unit with an integer priority, an enabled toggle, and a type identity.
///
/// The enabled flag mirrors whether the handler is subscribed to the
/// [`Dispatcher`][crate::Dispatcher]; only [`HandlerList`][crate::HandlerList]
/// flips it, so the flag and the subscription never drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handler {
    behavior: BehaviorType,
    priority: Priority,
    enabled:  bool,
}

impl Handler {
    /// A new enabled handler at priority `0`.
    pub fn new(behavior: impl Into<BehaviorType>) -> Self {
        Self {
            behavior: behavior.into(),
            priority: 0,
            enabled:  true,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Start detached: the handler is stored but not subscribed.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[inline]
    pub fn behavior(&self) -> &BehaviorType {
        &self.behavior
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Overwrite the priority.
    ///
    /// Attached handlers are only reachable mutably through
    /// [`HandlerList::with_detached`][crate::HandlerList::with_detached].
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
