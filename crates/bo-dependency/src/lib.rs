//! `bo-dependency` — declarative constraints between behaviors of one owner.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`direction`]  | `Direction` (`Before` / `After`) and its four policy hooks   |
//! | [`order`]      | `OrderDependency` — cascading priority displacement          |
//! | [`require`]    | `RequireDependency` — required / forbidden companion check   |
//! | [`dependency`] | `Dependency` — either of the above behind one `apply`        |
//! | [`error`]      | `DependencyError`, `DependencyResult<T>`                     |
//!
//! # Design notes
//!
//! Resolution is naive and order-of-application: each `OrderDependency`
//! only looks at the current priorities and moves the subject (and the
//! contiguous run of peers in its way) so that it satisfies its own
//! constraint.  There is no global solve.  When two dependencies pull the
//! same slot in opposite directions, the one applied last wins.
//!
//! `OrderDependency::resolve` never fails.  `RequireDependency::apply` only
//! reads the list and reports violations as
//! [`DependencyError::Configuration`].

pub mod dependency;
pub mod direction;
pub mod error;
pub mod order;
pub mod require;


pub use dependency::Dependency;
pub use direction::Direction;
pub use error::{DependencyError, DependencyResult};
pub use order::OrderDependency;
pub use require::RequireDependency;
