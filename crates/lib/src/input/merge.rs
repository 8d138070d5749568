//! Deep merge of partial JSON settings onto defaults.

use serde_json::{Map, Value};

use super::InputError;
use crate::{
    defaults::DefaultTable,
    types::{MathObjectKind, Mode},
};

const KIND_KEY: &str = "kind";

pub(super) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The default of `kind` as a JSON value.
pub(super) fn default_value(table: &DefaultTable, kind: MathObjectKind) -> Result<Value, InputError> {
    serde_json::to_value(table.get(kind, Mode::Simple)).map_err(|err| InputError::Invalid {
        kind,
        reason: err.to_string(),
    })
}

fn tagged_kind(value: &Value) -> Option<MathObjectKind> {
    value.get(KIND_KEY)?.as_str()?.parse().ok()
}

/// Adds the `kind` tag to expression elements that only imply it.
///
/// An element holding `coefficients` and `termIds` is a term; one holding `terms`
/// is a combination of terms. Anything else is left for the merge to tag.
pub(super) fn classify_elements(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(elements)) = map.get_mut("expressions") {
                for element in elements.iter_mut() {
                    if let Value::Object(fields) = element
                        && !fields.contains_key(KIND_KEY)
                    {
                        let kind = if fields.contains_key("coefficients")
                            && fields.contains_key("termIds")
                        {
                            Some(MathObjectKind::Term)
                        } else if fields.contains_key("terms") {
                            Some(MathObjectKind::Terms)
                        } else {
                            None
                        };
                        if let Some(kind) = kind {
                            fields.insert(KIND_KEY.to_string(), Value::from(kind.as_str()));
                        }
                    }
                }
            }
            map.values_mut().for_each(classify_elements);
        }
        Value::Array(items) => items.iter_mut().for_each(classify_elements),
        _ => {}
    }
}

/// Merges `input` onto `default`, returning the result and the paths of every key
/// that had to be filled in.
pub(super) struct Merger<'a> {
    pub table: &'a DefaultTable,
    pub missing: Vec<String>,
}

impl Merger<'_> {
    pub fn merge(&mut self, default: &Value, input: &Value, path: &str) -> Result<Value, InputError> {
        let (Value::Object(defaults), Value::Object(fields)) = (default, input) else {
            return Ok(input.clone());
        };

        let mut merged = Map::new();
        for (key, default_value) in defaults {
            let current = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            let Some(input_value) = fields.get(key) else {
                if key != KIND_KEY {
                    self.missing.push(current);
                }
                merged.insert(key.clone(), default_value.clone());
                continue;
            };

            let value = match (default_value, input_value) {
                (Value::Object(_), Value::Object(_)) => {
                    self.merge(default_value, input_value, &current)?
                }
                (Value::Array(template), Value::Array(items))
                    if template.first().is_some_and(Value::is_object) =>
                {
                    let mut merged_items = Vec::with_capacity(items.len());
                    for (index, item) in items.iter().enumerate() {
                        let item_path = format!("{current}[{index}]");
                        let item_default = self.item_default(&template[0], item)?;
                        merged_items.push(self.merge(&item_default, item, &item_path)?);
                    }
                    Value::Array(merged_items)
                }
                _ => input_value.clone(),
            };
            merged.insert(key.clone(), value);
        }
        Ok(Value::Object(merged))
    }

    /// The template an array item is merged against: the array default's first
    /// element, or the default of the item's own kind when that differs.
    fn item_default(&self, template: &Value, item: &Value) -> Result<Value, InputError> {
        match (tagged_kind(template), tagged_kind(item)) {
            (Some(expected), Some(found)) if expected != found => {
                default_value(self.table, found)
            }
            _ => Ok(template.clone()),
        }
    }
}
