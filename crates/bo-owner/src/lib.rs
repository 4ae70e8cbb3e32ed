//! `bo-owner` — attaching behaviors to an owner.
//!
//! # Attachment flow
//!
//! ```text
//! attach(declaration):
//!   ① Push      — append a handler built from the declaration; subscribe
//!                 it if the declaration starts enabled.
//!   ② Evaluate  — apply each declared dependency, in declaration order:
//!                   Order(..)   → resolve (may move peers and the subject)
//!                   Require(..) → validate; on failure detach the new
//!                                 handler and return the error
//! ```
//!
//! Attachments to one owner must be sequential; `Owner` takes `&mut self`
//! for every mutation, so the borrow checker enforces that within a thread.
//!
//! # Quick-start
//!
//! ```rust
//! use bo_handler::NoopDispatcher;
//! use bo_owner::OwnerBuilder;
//! use bo_registry::{BehaviorDeclaration, DeclarationRegistry};
//!
//! let registry: DeclarationRegistry = [
//!     BehaviorDeclaration::new("app::Timestamp"),
//!     BehaviorDeclaration::new("app::Sluggable").apply_before(["app::Timestamp"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let owner = OwnerBuilder::new("Article", &registry, NoopDispatcher::default())
//!     .behavior("app::Timestamp")
//!     .behavior("app::Sluggable")
//!     .build()
//!     .unwrap();
//! assert_eq!(owner.list().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod owner;


pub use builder::OwnerBuilder;
pub use error::{OwnerError, OwnerResult};
pub use owner::Owner;
