//! `DeclarationRegistry` — declarations keyed by behavior type.

use std::collections::BTreeMap;

use bo_core::BehaviorType;

use crate::BehaviorDeclaration;

/// All known behavior declarations.
///
/// Iteration is sorted by qualified type name so that diagnostics and
/// exports are deterministic.
#[derive(Clone, Debug, Default)]
pub struct DeclarationRegistry {
    inner: BTreeMap<BehaviorType, BehaviorDeclaration>,
}

impl DeclarationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `declaration`, replacing any earlier one for the same type.
    ///
    /// Returns the replaced declaration.
    pub fn declare(&mut self, declaration: BehaviorDeclaration) -> Option<BehaviorDeclaration> {
        let replaced = self.inner.insert(declaration.behavior().clone(), declaration);
        if let Some(old) = &replaced {
            tracing::debug!(behavior = %old.behavior(), "declaration replaced");
        }
        replaced
    }

    pub fn get(&self, behavior: &BehaviorType) -> Option<&BehaviorDeclaration> {
        self.inner.get(behavior)
    }

    pub fn contains(&self, behavior: &BehaviorType) -> bool {
        self.inner.contains_key(behavior)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BehaviorDeclaration> + '_ {
        self.inner.values()
    }
}

impl FromIterator<BehaviorDeclaration> for DeclarationRegistry {
    fn from_iter<I: IntoIterator<Item = BehaviorDeclaration>>(iter: I) -> Self {
        let mut registry = Self::new();
        for decl in iter {
            registry.declare(decl);
        }
        registry
    }
}
