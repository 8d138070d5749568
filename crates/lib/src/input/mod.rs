//! Importing settings from partial JSON.
//!
//! Stored math objects are often older or hand-written and lack fields the current
//! settings shapes require. This module completes them from the default table and
//! reports what it filled in, then hands back normalized, typed settings.
//!
//! Expression elements in older data carry no explicit `kind`; they are classified
//! here, once, by the fields they hold. Past this boundary the tree always carries
//! explicit discriminants.

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    containers::NodeContext,
    defaults::DefaultTable,
    mode::ModeRegistry,
    path::ContainerPath,
    tree::normalize_deep,
    types::{MathInput, MathObjectKind, Settings},
};

pub mod errors;
mod merge;

pub use errors::InputError;
use merge::{Merger, classify_elements, default_value, json_type};

/// Settings completed from defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    /// The completed, normalized settings.
    pub settings: Settings,
    /// Dotted paths of keys taken from the defaults, array items as `key[i]`.
    pub missing: Vec<String>,
}

/// An imported exchange record.
#[derive(Debug, Clone, PartialEq)]
pub struct Imported {
    pub input: MathInput,
    pub missing: Vec<String>,
}

/// Completes a partial settings object of `kind` from its simple default.
///
/// Keys missing from `input` are copied from the default and reported. Nested
/// objects merge recursively; each element of an array of objects merges against
/// the default's first element, or against the default of its own kind when that
/// differs. Keys the default does not have are dropped.
pub fn merge_with_defaults(
    kind: MathObjectKind,
    input: &Value,
    table: &DefaultTable,
) -> Result<Merged, InputError> {
    if !input.is_object() {
        return Err(InputError::NotAnObject {
            found: json_type(input),
        });
    }
    if let Some(tag) = input.get("kind") {
        let found = parse_kind(tag)?;
        if found != kind {
            return Err(InputError::KindMismatch {
                expected: kind,
                found,
            });
        }
    }

    let mut input = input.clone();
    classify_elements(&mut input);

    let default = default_value(table, kind)?;
    let mut merger = Merger {
        table,
        missing: Vec::new(),
    };
    let merged = merger.merge(&default, &input, "")?;
    if !merger.missing.is_empty() {
        warn!(
            kind = %kind,
            missing = %merger.missing.join(", "),
            "Filled missing settings from defaults"
        );
    }

    let settings: Settings = serde_json::from_value(merged).map_err(|err| InputError::Invalid {
        kind,
        reason: err.to_string(),
    })?;

    let root = ContainerPath::root(0, kind);
    let modes = ModeRegistry::seeded(&root, &settings);
    let ctx = NodeContext::root(table, &modes, root, kind);
    let settings = normalize_deep(&settings, &ctx);
    debug!(kind = %kind, filled = merger.missing.len(), "Imported settings");

    Ok(Merged {
        settings,
        missing: merger.missing,
    })
}

fn parse_kind(tag: &Value) -> Result<MathObjectKind, InputError> {
    let text = tag.as_str().ok_or_else(|| InputError::UnknownKind {
        kind: tag.to_string(),
    })?;
    text.parse().map_err(|_| InputError::UnknownKind {
        kind: text.to_string(),
    })
}

/// Imports either a full exchange record (`{"settings": {...}, "priority": ...}`)
/// or a bare settings object. The kind is read from the settings' `kind` tag.
pub fn parse_document(value: &Value, table: &DefaultTable) -> Result<Imported, InputError> {
    if !value.is_object() {
        return Err(InputError::NotAnObject {
            found: json_type(value),
        });
    }
    let settings = value.get("settings").unwrap_or(value);
    let kind = parse_kind(settings.get("kind").ok_or(InputError::MissingKind)?)?;
    let Merged { settings, missing } = merge_with_defaults(kind, settings, table)?;

    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let input = MathInput {
        settings,
        priority: value.get("priority").and_then(Value::as_i64).unwrap_or(0),
        dependency: text("dependency"),
        example: text("example"),
    };
    Ok(Imported { input, missing })
}
