//! `BehaviorDeclaration` — the static metadata of one behavior type.

use bo_core::{BehaviorType, Priority};
use bo_dependency::{Dependency, OrderDependency, RequireDependency};
use bo_handler::Handler;

/// Default priority, initial enabled state, and ordered dependencies of one
/// behavior type.
///
/// # Example
///
/// ```rust
/// use bo_registry::BehaviorDeclaration;
///
/// let decl = BehaviorDeclaration::new("app::Sluggable")
///     .priority(10)
///     .apply_after(["app::Timestamp"])
///     .require(["app::Timestamp"], ["app::Tree"]);
///
/// assert_eq!(decl.dependencies().len(), 2);
/// assert_eq!(decl.make_handler().priority(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BehaviorDeclaration {
    behavior:     BehaviorType,
    priority:     Priority,
    enabled:      bool,
    dependencies: Vec<Dependency>,
}

impl BehaviorDeclaration {
    /// A declaration with priority `0`, enabled, and no dependencies.
    pub fn new(behavior: impl Into<BehaviorType>) -> Self {
        Self {
            behavior:     behavior.into(),
            priority:     0,
            enabled:      true,
            dependencies: Vec::new(),
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Handlers of this type start detached.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn apply_before<I, T>(self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BehaviorType>,
    {
        self.depends_on(OrderDependency::before(targets))
    }

    pub fn apply_after<I, T>(self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BehaviorType>,
    {
        self.depends_on(OrderDependency::after(targets))
    }

    pub fn require<R, F, A, B>(self, required: R, forbidden: F) -> Self
    where
        R: IntoIterator<Item = A>,
        F: IntoIterator<Item = B>,
        A: Into<BehaviorType>,
        B: Into<BehaviorType>,
    {
        self.depends_on(RequireDependency::new(required, forbidden))
    }

    /// Append a dependency; it runs after every dependency added before it.
    pub fn depends_on(mut self, dependency: impl Into<Dependency>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    #[inline]
    pub fn behavior(&self) -> &BehaviorType {
        &self.behavior
    }

    #[inline]
    pub fn default_priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Dependencies in application order.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// A fresh handler of this type, ready to be attached.
    pub fn make_handler(&self) -> Handler {
        let handler = Handler::new(self.behavior.clone()).with_priority(self.priority);
        if self.enabled { handler } else { handler.disabled() }
    }
}
