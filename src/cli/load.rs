// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading item lists and options from JSON files.
//!
//! Items are arbitrary JSON objects. A field reads one top-level key: strings
//! are indexed as-is, numbers by their JSON text, arrays element by element.
//! Anything else (missing keys, null, booleans, nested objects) has no value.

use super::FieldArg;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tickerdex::{FieldSpec, FieldValue, SearchConfig, SearchOptions};

pub fn load_items(path: &Path) -> Result<Vec<Value>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed: Value = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
    match parsed {
        Value::Array(items) => Ok(items),
        other => bail!(
            "{} must contain a JSON array of objects, found {}",
            path.display(),
            kind(&other)
        ),
    }
}

pub fn load_options(path: &Path) -> Result<SearchOptions> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse search options from {}", path.display()))
}

/// Turn `--field` arguments into a validated config over JSON objects.
pub fn build_config(fields: &[FieldArg], options: SearchOptions) -> Result<SearchConfig<Value>> {
    let config = fields
        .iter()
        .fold(SearchConfig::new().options(options), |config, arg| {
            config.field(field_spec(arg))
        });
    config.validate().context("Invalid field configuration")?;
    Ok(config)
}

fn field_spec(arg: &FieldArg) -> FieldSpec<Value> {
    let key = arg.name.clone();
    let spec = FieldSpec::new(arg.name.clone(), move |item: &Value| {
        item.get(&key).map_or(FieldValue::None, json_field_value)
    })
    .fuzzy(arg.fuzzy);
    match arg.weight {
        Some(weight) => spec.weight(weight),
        None => spec,
    }
}

pub fn json_field_value(value: &Value) -> FieldValue {
    match value {
        Value::String(s) => FieldValue::Single(s.clone()),
        Value::Number(n) => FieldValue::Single(n.to_string()),
        Value::Array(values) => FieldValue::Many(
            values
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
        ),
        _ => FieldValue::None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
