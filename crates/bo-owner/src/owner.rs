//! The `Owner` struct and its attachment flow.

use bo_core::{HandlerKey, Priority};
use bo_dependency::Dependency;
use bo_handler::{Dispatcher, Handler, HandlerList};
use bo_registry::BehaviorDeclaration;

use crate::OwnerResult;

/// An object that behaviors attach to.
///
/// Wraps the owner's [`HandlerList`] and runs every attached handler's
/// dependencies against it.
pub struct Owner<D: Dispatcher> {
    list: HandlerList<D>,
}

impl<D: Dispatcher> Owner<D> {
    /// An owner with no behaviors.  `label` identifies it in diagnostics.
    pub fn new(label: impl Into<String>, dispatcher: D) -> Self {
        Self { list: HandlerList::new(label, dispatcher) }
    }

    pub fn label(&self) -> &str {
        self.list.owner()
    }

    pub fn list(&self) -> &HandlerList<D> {
        &self.list
    }

    pub fn priority_of(&self, key: HandlerKey) -> Option<Priority> {
        self.list.get(key).map(Handler::priority)
    }

    /// Attach a handler built from `declaration` and apply its dependencies.
    pub fn attach(&mut self, declaration: &BehaviorDeclaration) -> OwnerResult<HandlerKey> {
        self.attach_handler(declaration.make_handler(), declaration.dependencies())
    }

    /// Attach `handler` and apply `dependencies` to it, in order.
    ///
    /// If a dependency fails the handler is detached again and the error is
    /// returned.  Priority changes made by order dependencies that ran before
    /// the failure are kept.
    pub fn attach_handler(
        &mut self,
        handler:      Handler,
        dependencies: &[Dependency],
    ) -> OwnerResult<HandlerKey> {
        let behavior = handler.behavior().clone();
        let key = self.list.push(handler);

        for dependency in dependencies {
            if let Err(e) = dependency.apply(key, &mut self.list) {
                self.list.remove(key);
                tracing::warn!(
                    owner = self.list.owner(),
                    %behavior,
                    error = %e,
                    "behavior rejected"
                );
                return Err(e.into());
            }
        }

        tracing::debug!(
            owner = self.list.owner(),
            %behavior,
            %key,
            priority = ?self.priority_of(key),
            dependencies = dependencies.len(),
            "behavior attached"
        );
        Ok(key)
    }

    /// Detach and return the handler at `key`.
    pub fn detach(&mut self, key: HandlerKey) -> Option<Handler> {
        self.list.remove(key)
    }

    pub fn into_list(self) -> HandlerList<D> {
        self.list
    }
}
