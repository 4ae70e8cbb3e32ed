//! Fluent builder for constructing an [`Owner`] from declared behaviors.

use bo_core::BehaviorType;
use bo_handler::Dispatcher;
use bo_registry::DeclarationRegistry;

use crate::{Owner, OwnerError, OwnerResult};

/// Fluent builder for [`Owner<D>`].
///
/// Behaviors are attached in the order they are listed, each against the
/// handlers attached before it; this mirrors a model loader attaching
/// behaviors one at a time.
///
/// # Example
///
/// ```rust,ignore
/// let owner = OwnerBuilder::new("Article#12", &registry, dispatcher)
///     .behavior("app::Timestamp")
///     .behavior("app::Sluggable")
///     .build()?;
/// ```
pub struct OwnerBuilder<'r, D: Dispatcher> {
    label:      String,
    registry:   &'r DeclarationRegistry,
    dispatcher: D,
    behaviors:  Vec<BehaviorType>,
}

impl<'r, D: Dispatcher> OwnerBuilder<'r, D> {
    pub fn new(label: impl Into<String>, registry: &'r DeclarationRegistry, dispatcher: D) -> Self {
        Self {
            label: label.into(),
            registry,
            dispatcher,
            behaviors: Vec::new(),
        }
    }

    /// Queue one behavior for attachment.
    pub fn behavior(mut self, behavior: impl Into<BehaviorType>) -> Self {
        self.behaviors.push(behavior.into());
        self
    }

    /// Check every queued behavior is declared, then attach them in order.
    pub fn build(self) -> OwnerResult<Owner<D>> {
        // ── Validate before touching the dispatcher ───────────────────────
        let registry = self.registry;
        let declarations = self
            .behaviors
            .iter()
            .map(|b| {
                registry
                    .get(b)
                    .ok_or_else(|| OwnerError::UndeclaredBehavior(b.clone()))
            })
            .collect::<OwnerResult<Vec<_>>>()?;

        // ── Attach ────────────────────────────────────────────────────────
        let mut owner = Owner::new(self.label, self.dispatcher);
        for decl in declarations {
            owner.attach(decl)?;
        }
        Ok(owner)
    }
}
