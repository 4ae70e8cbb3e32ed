//! `bo-core` — foundational types for the behavior ordering engine.
//!
//! This crate is a dependency of every other `bo-*` crate.  It has no `bo-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`ids`]        | `HandlerKey`                                            |
//! | [`behavior`]   | `BehaviorType` — identity of a handler implementation   |
//! | [`priority`]   | `Priority`, `PriorityRange`, `OrderingConfig`           |
//! | [`error`]      | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `HandlerKey` and          |
//! |         | `OrderingConfig`.                                           |

pub mod behavior;
pub mod error;
pub mod ids;
pub mod priority;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use behavior::BehaviorType;
pub use error::{CoreError, CoreResult};
pub use ids::HandlerKey;
pub use priority::{OrderingConfig, Priority, PriorityRange};
