//! `RequireDependency` — presence / conflict validation.

use std::collections::HashSet;

use bo_core::{BehaviorType, HandlerKey};
use bo_handler::{Dispatcher, HandlerList};

use crate::{DependencyError, DependencyResult};

/// Companion types a behavior needs, and types it cannot coexist with.
///
/// A type named in both lists is only required: the forbidden list is
/// stripped of every required type at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequireDependency {
    required:  Vec<BehaviorType>,
    forbidden: Vec<BehaviorType>,
}

impl RequireDependency {
    pub fn new<R, F, A, B>(required: R, forbidden: F) -> Self
    where
        R: IntoIterator<Item = A>,
        F: IntoIterator<Item = B>,
        A: Into<BehaviorType>,
        B: Into<BehaviorType>,
    {
        let required = dedup(required.into_iter().map(Into::into));
        let forbidden = dedup(
            forbidden
                .into_iter()
                .map(Into::into)
                .filter(|ty| !required.contains(ty)),
        );
        Self { required, forbidden }
    }

    /// Only required companions.
    pub fn requires<R, A>(required: R) -> Self
    where
        R: IntoIterator<Item = A>,
        A: Into<BehaviorType>,
    {
        Self::new(required, std::iter::empty::<BehaviorType>())
    }

    /// Only forbidden companions.
    pub fn forbids<F, B>(forbidden: F) -> Self
    where
        F: IntoIterator<Item = B>,
        B: Into<BehaviorType>,
    {
        Self::new(std::iter::empty::<BehaviorType>(), forbidden)
    }

    /// Required types, in declaration order.
    pub fn required(&self) -> &[BehaviorType] {
        &self.required
    }

    /// Effective forbidden types, in declaration order.
    pub fn forbidden(&self) -> &[BehaviorType] {
        &self.forbidden
    }

    /// Check the peers of `subject` in `list`.
    ///
    /// Peers are every handler in the list except the subject itself.  Takes
    /// the list by shared reference: validation never touches priorities or
    /// subscriptions.
    pub fn apply<D: Dispatcher>(
        &self,
        subject: HandlerKey,
        list:    &HandlerList<D>,
    ) -> DependencyResult<()> {
        let handler = list
            .get(subject)
            .ok_or(DependencyError::UnknownSubject(subject))?;

        let present: HashSet<&BehaviorType> = list
            .iter()
            .filter(|(key, _)| *key != subject)
            .map(|(_, peer)| peer.behavior())
            .collect();

        let missing = short_names(self.required.iter().filter(|ty| !present.contains(ty)));
        let conflicting = short_names(self.forbidden.iter().filter(|ty| present.contains(ty)));

        if missing.is_empty() && conflicting.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            owner = list.owner(),
            behavior = %handler.behavior(),
            missing = missing.len(),
            conflicting = conflicting.len(),
            "require dependency violated"
        );

        Err(DependencyError::Configuration {
            behavior: handler.behavior().clone(),
            owner: list.owner().to_owned(),
            missing,
            conflicting,
        })
    }
}

fn dedup(types: impl Iterator<Item = BehaviorType>) -> Vec<BehaviorType> {
    let mut out: Vec<BehaviorType> = Vec::new();
    for ty in types {
        if !out.contains(&ty) {
            out.push(ty);
        }
    }
    out
}

fn short_names<'a>(types: impl Iterator<Item = &'a BehaviorType>) -> Vec<String> {
    types.map(|ty| ty.short_name().to_owned()).collect()
}
