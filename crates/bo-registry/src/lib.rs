//! `bo-registry` — what each behavior type declares about itself.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`declaration`] | `BehaviorDeclaration` — default priority + dependencies   |
//! | [`registry`]    | `DeclarationRegistry` — declarations keyed by type        |
//! | [`loader`]      | CSV declarations, JSON `OrderingConfig`                   |
//! | [`error`]       | `RegistryError`, `RegistryResult<T>`                      |
//!
//! A declaration is built once per behavior type and reused every time a
//! handler of that type is attached to an owner.  The order of its
//! dependencies is the order in which they are applied, and that order is
//! significant: later order dependencies override earlier ones.

pub mod declaration;
pub mod error;
pub mod loader;
pub mod registry;


pub use declaration::BehaviorDeclaration;
pub use error::{RegistryError, RegistryResult};
pub use loader::{
    load_declarations_csv, load_declarations_reader, load_ordering_config,
    load_ordering_config_reader,
};
pub use registry::DeclarationRegistry;
