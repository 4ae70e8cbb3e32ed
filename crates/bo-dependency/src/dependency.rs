//! `Dependency` — one declared constraint of a behavior type.

use bo_core::HandlerKey;
use bo_handler::{Dispatcher, HandlerList};

use crate::{DependencyResult, OrderDependency, RequireDependency};

/// Either kind of dependency, applied uniformly by the attachment flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dependency {
    Order(OrderDependency),
    Require(RequireDependency),
}

impl Dependency {
    /// Apply to the handler at `subject`.
    ///
    /// Order dependencies always succeed; require dependencies may fail with
    /// [`DependencyError::Configuration`][crate::DependencyError::Configuration].
    pub fn apply<D: Dispatcher>(
        &self,
        subject: HandlerKey,
        list:    &mut HandlerList<D>,
    ) -> DependencyResult<()> {
        match self {
            Dependency::Order(order) => {
                order.resolve(subject, list);
                Ok(())
            }
            Dependency::Require(require) => require.apply(subject, list),
        }
    }
}

impl From<OrderDependency> for Dependency {
    fn from(dep: OrderDependency) -> Self {
        Dependency::Order(dep)
    }
}

impl From<RequireDependency> for Dependency {
    fn from(dep: RequireDependency) -> Self {
        Dependency::Require(dep)
    }
}
