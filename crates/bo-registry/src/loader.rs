//! Declaration and configuration loaders.
//!
//! # CSV format
//!
//! One row per rule.  Rows for the same behavior accumulate in file order,
//! which is also the order the rules are applied in.
//!
//! ```csv
//! behavior,priority,rule,types,forbidden
//! app::Timestamp,5,,,
//! app::Sluggable,10,after,app::Timestamp,
//! app::Sluggable,,require,app::Timestamp,app::Tree|app::Nested
//! app::Tree,,before,app::Sluggable|app::Timestamp,
//! ```
//!
//! | Column      | Meaning                                                   |
//! |-------------|-----------------------------------------------------------|
//! | `behavior`  | Qualified type name of the declaring behavior             |
//! | `priority`  | Optional default priority; the last non-empty value wins  |
//! | `rule`      | Empty, `before`, `after`, `require`, or `forbid`          |
//! | `types`     | `|`-separated target / required / forbidden type names    |
//! | `forbidden` | `|`-separated forbidden type names (`require` rows only)  |
//!
//! A row with an empty `rule` only declares the behavior (and optionally
//! its priority).
//!
//! # Configuration file
//!
//! [`OrderingConfig`] is read from JSON; missing fields take their defaults.
//!
//! ```json
//! { "priority_min": -50, "priority_max": 50 }
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use bo_core::{BehaviorType, OrderingConfig, Priority};
use bo_dependency::{Dependency, OrderDependency, RequireDependency};

use crate::{BehaviorDeclaration, DeclarationRegistry, RegistryError, RegistryResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DeclarationRecord {
    behavior:  String,
    #[serde(default)]
    priority:  Option<Priority>,
    #[serde(default)]
    rule:      String,
    #[serde(default)]
    types:     String,
    #[serde(default)]
    forbidden: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`DeclarationRegistry`] from a CSV file.
pub fn load_declarations_csv(path: &Path) -> RegistryResult<DeclarationRegistry> {
    let file = std::fs::File::open(path)?;
    load_declarations_reader(file)
}

/// Like [`load_declarations_csv`] but accepts any `Read` source.
pub fn load_declarations_reader<R: Read>(reader: R) -> RegistryResult<DeclarationRegistry> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut by_behavior: BTreeMap<BehaviorType, BehaviorDeclaration> = BTreeMap::new();

    for (i, result) in csv_reader.deserialize::<DeclarationRecord>().enumerate() {
        // Line 1 is the header.
        let line = i + 2;
        let row = result.map_err(|e| RegistryError::Parse(e.to_string()))?;

        let behavior = BehaviorType::new(&row.behavior);
        if behavior.qualified_name().is_empty() {
            return Err(RegistryError::Parse(format!("line {line}: empty behavior name")));
        }

        let mut decl = by_behavior
            .remove(&behavior)
            .unwrap_or_else(|| BehaviorDeclaration::new(behavior.clone()));
        if let Some(p) = row.priority {
            decl = decl.priority(p);
        }
        if let Some(dep) = parse_rule(&row, line)? {
            decl = decl.depends_on(dep);
        }
        by_behavior.insert(behavior, decl);
    }

    tracing::debug!(declarations = by_behavior.len(), "loaded behavior declarations");
    Ok(by_behavior.into_values().collect())
}

/// Load and validate an [`OrderingConfig`] from a JSON file.
pub fn load_ordering_config(path: &Path) -> RegistryResult<OrderingConfig> {
    let file = std::fs::File::open(path)?;
    load_ordering_config_reader(file)
}

/// Like [`load_ordering_config`] but accepts any `Read` source.
pub fn load_ordering_config_reader<R: Read>(reader: R) -> RegistryResult<OrderingConfig> {
    let config: OrderingConfig =
        serde_json::from_reader(reader).map_err(|e| RegistryError::Parse(e.to_string()))?;
    let range = config.range()?;
    tracing::debug!(%range, "loaded ordering config");
    Ok(config)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_rule(row: &DeclarationRecord, line: usize) -> RegistryResult<Option<Dependency>> {
    let types = split_types(&row.types);
    let forbidden = split_types(&row.forbidden);

    let dep = match row.rule.trim().to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "before" => Dependency::from(OrderDependency::before(non_empty(types, line, "before")?)),
        "after" => Dependency::from(OrderDependency::after(non_empty(types, line, "after")?)),
        "require" => {
            if types.is_empty() && forbidden.is_empty() {
                return Err(RegistryError::Parse(format!(
                    "line {line}: `require` rule names neither required nor forbidden types"
                )));
            }
            Dependency::from(RequireDependency::new(types, forbidden))
        }
        "forbid" => Dependency::from(RequireDependency::forbids(non_empty(types, line, "forbid")?)),
        other => {
            return Err(RegistryError::Parse(format!(
                "line {line}: unknown rule {other:?}: expected \"before\", \"after\", \"require\", or \"forbid\""
            )));
        }
    };
    Ok(Some(dep))
}

fn split_types(s: &str) -> Vec<BehaviorType> {
    s.split('|')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(BehaviorType::new)
        .collect()
}

fn non_empty(types: Vec<BehaviorType>, line: usize, rule: &str) -> RegistryResult<Vec<BehaviorType>> {
    if types.is_empty() {
        return Err(RegistryError::Parse(format!("line {line}: `{rule}` rule names no types")));
    }
    Ok(types)
}
