//! Priority model.
//!
//! # Design
//!
//! A priority is a plain `i32`.  The dispatch collaborator defines a closed
//! range `[min, max]`; every priority the ordering engine assigns must land
//! inside it.  Which end of the range runs first is the collaborator's
//! business: the engine only relies on the comparison conventions of
//! `bo-dependency::Direction`.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Execution priority of a handler.
pub type Priority = i32;

// ── PriorityRange ─────────────────────────────────────────────────────────────

/// The bounded domain `[min, max]` used for all priorities.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PriorityRange {
    min: Priority,
    max: Priority,
}

impl PriorityRange {
    /// Range used when the dispatch collaborator does not supply one.
    pub const DEFAULT: PriorityRange = PriorityRange { min: -100, max: 100 };

    /// Build a range, rejecting `min > max`.
    pub fn new(min: Priority, max: Priority) -> CoreResult<Self> {
        if min > max {
            return Err(CoreError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(self) -> Priority {
        self.min
    }

    #[inline]
    pub fn max(self) -> Priority {
        self.max
    }

    /// `true` if `p` lies in `[min, max]`.
    #[inline]
    pub fn contains(self, p: Priority) -> bool {
        (self.min..=self.max).contains(&p)
    }

    #[inline]
    pub fn clamp(self, p: Priority) -> Priority {
        p.clamp(self.min, self.max)
    }

    /// Number of distinct slots in the range.
    #[inline]
    pub fn width(self) -> u64 {
        (i64::from(self.max) - i64::from(self.min) + 1) as u64
    }
}

impl Default for PriorityRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PriorityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

// ── OrderingConfig ────────────────────────────────────────────────────────────

/// Engine configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (with the
/// `serde` feature) and turned into a validated [`PriorityRange`] for the
/// dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrderingConfig {
    /// Lowest legal priority.
    pub priority_min: Priority,
    /// Highest legal priority.
    pub priority_max: Priority,
}

impl OrderingConfig {
    /// Validate the bounds and produce the range.
    pub fn range(&self) -> CoreResult<PriorityRange> {
        PriorityRange::new(self.priority_min, self.priority_max).map_err(|e| {
            CoreError::Config(format!("priority bounds: {e}"))
        })
    }
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            priority_min: PriorityRange::DEFAULT.min,
            priority_max: PriorityRange::DEFAULT.max,
        }
    }
}

impl From<PriorityRange> for OrderingConfig {
    fn from(range: PriorityRange) -> Self {
        Self { priority_min: range.min, priority_max: range.max }
    }
}
