//! The two ordering policies.
//!
//! | Hook                   | `Before`                          | `After`                           |
//! |------------------------|-----------------------------------|-----------------------------------|
//! | `compare_priorities`   | `a > b`                           | `a < b`                           |
//! | `is_in_order`          | `target < max && current >= target` | `target > min && current <= target` |
//! | `next_priority`        | `p - 1`                           | `p + 1`                           |
//! | `shift_delta`          | `min - min(shifted)`              | `max - max(shifted)`              |
//!
//! `Before` treats a higher priority as "runs before"; `After` is the mirror
//! image.  The hooks are the only place where the two policies differ.

use std::cmp::Ordering;
use std::fmt;

use bo_core::{Priority, PriorityRange};

/// Which side of its peers a subject must end up on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Before,
    After,
}

impl Direction {
    /// `true` iff `a` is already correctly ordered relative to `b`.
    #[inline]
    pub fn compare_priorities(self, a: Priority, b: Priority) -> bool {
        match self {
            Direction::Before => a > b,
            Direction::After => a < b,
        }
    }

    /// `true` iff moving from `current` to `target` needs no mutation.
    #[inline]
    pub fn is_in_order(self, current: Priority, target: Priority, range: PriorityRange) -> bool {
        match self {
            Direction::Before => target < range.max() && current >= target,
            Direction::After => target > range.min() && current <= target,
        }
    }

    /// The adjacent slot in the direction of displacement.
    #[inline]
    pub fn next_priority(self, p: Priority) -> Priority {
        match self {
            Direction::Before => p.saturating_sub(1),
            Direction::After => p.saturating_add(1),
        }
    }

    /// Offset that moves the extreme shifted value exactly onto the range
    /// boundary.  Zero for an empty set.
    pub fn shift_delta<I>(self, shifted: I, range: PriorityRange) -> Priority
    where
        I: IntoIterator<Item = Priority>,
    {
        let shifted = shifted.into_iter();
        match self {
            Direction::Before => shifted
                .min()
                .map_or(0, |lowest| range.min().saturating_sub(lowest)),
            Direction::After => shifted
                .max()
                .map_or(0, |highest| range.max().saturating_sub(highest)),
        }
    }

    /// Sort comparator derived from [`compare_priorities`](Self::compare_priorities):
    /// already-ordered values sort first, ties keep their relative order.
    pub fn ordering(self, a: Priority, b: Priority) -> Ordering {
        if self.compare_priorities(a, b) {
            Ordering::Less
        } else if self.compare_priorities(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Before => "before",
            Direction::After => "after",
        };
        f.write_str(s)
    }
}
