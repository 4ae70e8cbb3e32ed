//! `OrderDependency` — "run before/after every peer of these types".
//!
//! # Algorithm
//!
//! ```text
//! target = subject.priority
//! for peer of a targeted type:
//!     if !compare(subject, peer): target = peer.priority      // last one wins
//! if is_in_order(subject.priority, target): done
//!
//! sort peers by compare()                  // scan in displacement direction
//! current = target; shifted = []
//! for peer in peers:
//!     subject          → shifted += (subject, target)
//!     p == current     → shifted += (peer, next(current))
//!     p == next(current) → current = next(current); shifted += (peer, next(current))
//!     shifted empty    → skip
//!     otherwise        → chain ended, stop
//! delta = shift_delta(shifted)
//! every shifted handler: detach, priority = clamp(value + delta), reattach
//! ```
//!
//! The shift moves a contiguous collision chain as one block and then
//! slides the whole block so its far end sits on the range boundary.  A
//! chain longer than the range is wide cannot fit; its near end is clamped
//! onto the opposite boundary, so some handlers share a slot.

use std::collections::BTreeSet;

use bo_core::{BehaviorType, HandlerKey, Priority};
use bo_handler::{Dispatcher, Handler, HandlerList};

use crate::Direction;

/// Ordering constraint of one behavior type against a set of peer types.
///
/// Stateless apart from its direction and targets; built once per declaring
/// type and reused for every resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderDependency {
    direction: Direction,
    targets:   BTreeSet<BehaviorType>,
}

impl OrderDependency {
    pub fn new<I, T>(direction: Direction, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BehaviorType>,
    {
        Self {
            direction,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// The subject must run before every handler of `targets`.
    pub fn before<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BehaviorType>,
    {
        Self::new(Direction::Before, targets)
    }

    /// The subject must run after every handler of `targets`.
    pub fn after<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BehaviorType>,
    {
        Self::new(Direction::After, targets)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn targets(&self) -> &BTreeSet<BehaviorType> {
        &self.targets
    }

    /// Reassign priorities in `list` so that the handler at `subject` is
    /// ordered against the targeted peers.
    ///
    /// Re-sorts `list` when a shift is needed.  Never fails; an unknown
    /// `subject` is logged and ignored.
    pub fn resolve<D: Dispatcher>(&self, subject: HandlerKey, list: &mut HandlerList<D>) {
        let Some(current) = list.get(subject).map(Handler::priority) else {
            tracing::warn!(owner = list.owner(), %subject, "order dependency subject not in list");
            return;
        };

        let target = self.target_priority(subject, current, list);
        let range = list.range();
        if self.direction.is_in_order(current, target, range) {
            tracing::debug!(
                owner = list.owner(),
                %subject,
                direction = %self.direction,
                priority = current,
                "already in order"
            );
            return;
        }

        let direction = self.direction;
        list.sort_by(|a, b| direction.ordering(a.priority(), b.priority()));

        let shifted = collision_chain(direction, subject, target, list);
        let delta = direction.shift_delta(shifted.iter().map(|&(_, p)| p), range);

        tracing::debug!(
            owner = list.owner(),
            %subject,
            direction = %direction,
            from = current,
            target,
            shifted = shifted.len(),
            delta,
            "resolved order dependency"
        );

        for (key, priority) in shifted {
            let moved = priority.saturating_add(delta);
            let priority = range.clamp(moved);
            if priority != moved {
                tracing::warn!(
                    owner = list.owner(),
                    %key,
                    moved,
                    %range,
                    "priority range exhausted, clamped"
                );
            }
            tracing::trace!(%key, priority, "shift");
            list.set_priority(key, priority);
        }
    }

    /// The priority of the last targeted peer the subject is out of order
    /// with, or the subject's own priority if there is none.
    fn target_priority<D: Dispatcher>(
        &self,
        subject: HandlerKey,
        current: Priority,
        list:    &HandlerList<D>,
    ) -> Priority {
        list.iter()
            .filter(|(key, peer)| *key != subject && self.targets.contains(peer.behavior()))
            .filter(|(_, peer)| !self.direction.compare_priorities(current, peer.priority()))
            .last()
            .map_or(current, |(_, peer)| peer.priority())
    }
}

/// Walk the sorted list and collect the new (pre-delta) slot of every
/// handler in the collision chain starting at `target`.
fn collision_chain<D: Dispatcher>(
    direction: Direction,
    subject:   HandlerKey,
    target:    Priority,
    list:      &HandlerList<D>,
) -> Vec<(HandlerKey, Priority)> {
    let mut current = target;
    let mut shifted = Vec::new();

    for (key, peer) in list.iter() {
        if key == subject {
            shifted.push((key, target));
            continue;
        }

        let p = peer.priority();
        let mut next = direction.next_priority(current);
        if p == current {
            // occupies the claimed slot
        } else if p == next {
            current = next;
            next = direction.next_priority(current);
        } else if shifted.is_empty() {
            continue;
        } else {
            break;
        }
        shifted.push((key, next));
    }

    shifted
}
