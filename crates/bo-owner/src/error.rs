use bo_core::BehaviorType;
use bo_dependency::DependencyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OwnerError {
    #[error("behavior `{0}` has no declaration")]
    UndeclaredBehavior(BehaviorType),

    #[error(transparent)]
    Dependency(#[from] DependencyError),
}

pub type OwnerResult<T> = Result<T, OwnerError>;
