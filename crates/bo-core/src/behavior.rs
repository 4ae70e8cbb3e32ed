//! `BehaviorType` — identity of a handler implementation.

use std::fmt;
use std::sync::Arc;

/// Opaque identity of a handler's implementation "class".
///
/// Holds the qualified path (`app::behaviors::Timestamp`).  Clones share the
/// same allocation, so a type can be copied into every dependency that
/// names it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BehaviorType(Arc<str>);

impl BehaviorType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref().trim()))
    }

    /// Identity derived from a Rust type's path.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// The full qualified name, e.g. `app::behaviors::Timestamp`.
    pub fn qualified_name(&self) -> &str {
        &self.0
    }

    /// The unqualified name, e.g. `Timestamp`.
    ///
    /// Splits on `::`, and also on `\` and `.` so names written in other
    /// namespace notations still render short.
    pub fn short_name(&self) -> &str {
        let tail = self.0.rsplit("::").next().unwrap_or(&self.0);
        tail.rsplit(['\\', '.']).next().unwrap_or(tail)
    }
}

impl fmt::Debug for BehaviorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BehaviorType({})", self.0)
    }
}

impl fmt::Display for BehaviorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BehaviorType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for BehaviorType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&BehaviorType> for BehaviorType {
    fn from(ty: &BehaviorType) -> Self {
        ty.clone()
    }
}
