//! The dispatch collaborator seam.
//!
//! The ordering engine does not call handlers itself.  An external
//! dispatcher does, in priority order, and it is the dispatcher that defines
//! the legal [`PriorityRange`].  `HandlerList` reports every subscription
//! change through this trait.

use bo_core::{BehaviorType, CoreResult, HandlerKey, OrderingConfig, Priority, PriorityRange};

/// Callbacks invoked by [`HandlerList`][crate::HandlerList] whenever a
/// handler's subscription changes.
///
/// All methods have defaults so implementors only override what they need.
///
/// # Contract
///
/// - `subscribe` is only called for a handler that is not subscribed.
/// - `unsubscribe` is only called for a handler that is subscribed.
/// - A subscribed handler's priority never changes between the two calls.
pub trait Dispatcher {
    /// The legal priority range.
    fn range(&self) -> PriorityRange {
        PriorityRange::DEFAULT
    }

    /// The handler at `key` starts receiving events at `priority`.
    fn subscribe(&mut self, _key: HandlerKey, _behavior: &BehaviorType, _priority: Priority) {}

    /// The handler at `key` stops receiving events.
    fn unsubscribe(&mut self, _key: HandlerKey) {}
}

/// A [`Dispatcher`] that only carries a range and ignores subscriptions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDispatcher {
    range: PriorityRange,
}

impl NoopDispatcher {
    pub fn new(range: PriorityRange) -> Self {
        Self { range }
    }

    /// Build from engine configuration, validating the bounds.
    pub fn from_config(config: &OrderingConfig) -> CoreResult<Self> {
        Ok(Self::new(config.range()?))
    }
}

impl Dispatcher for NoopDispatcher {
    fn range(&self) -> PriorityRange {
        self.range
    }
}
