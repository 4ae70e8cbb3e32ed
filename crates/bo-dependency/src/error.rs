use bo_core::{BehaviorType, HandlerKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DependencyError {
    /// Required companions are missing or forbidden ones are present.
    ///
    /// `missing` and `conflicting` hold short (unqualified) type names.
    #[error("{}", unmet_message(.behavior, .owner, .missing, .conflicting))]
    Configuration {
        behavior:    BehaviorType,
        owner:       String,
        missing:     Vec<String>,
        conflicting: Vec<String>,
    },

    #[error("no handler with key {0} in the list")]
    UnknownSubject(HandlerKey),
}

pub type DependencyResult<T> = Result<T, DependencyError>;

fn unmet_message(
    behavior:    &BehaviorType,
    owner:       &str,
    missing:     &[String],
    conflicting: &[String],
) -> String {
    let mut msg = format!("behavior `{behavior}` attached to `{owner}` has unmet dependencies");
    if !missing.is_empty() {
        msg.push_str("; missing: ");
        msg.push_str(&json_list(missing));
    }
    if !conflicting.is_empty() {
        msg.push_str("; conflicting: ");
        msg.push_str(&json_list(conflicting));
    }
    msg
}

fn json_list(names: &[String]) -> String {
    serde_json::to_string(names).unwrap_or_else(|_| format!("{names:?}"))
}
