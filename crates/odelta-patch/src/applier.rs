//! Apply one side of a delta onto a value tree.
//!
//! The applier consumes both the target and the delta and returns the
//! rebuilt tree; callers must use the returned value. A delta object is read
//! according to the shape of the target it lands on:
//!
//! - on a non-empty array, its keys are decimal indices and an optional
//!   [`COUNT_KEY`] entry resizes the array first;
//! - on a non-empty object, its keys are field names and an optional
//!   [`REMOVED_KEY`] list deletes fields first.
//!
//! Anything else (absent or empty target, absent or non-object delta) is a
//! whole-value replacement: the delta itself becomes the result.

use tracing::{debug, trace};

use odelta_diff::DeltaResult;
use odelta_value::{Object, Value, COUNT_KEY, REMOVED_KEY};

use crate::config::{IndexPolicy, PatchConfig};
use crate::error::{PatchError, PatchResult};

/// Apply `delta` onto `target`, returning the patched tree.
pub fn patch(
    target: Option<Value>,
    delta: Option<Value>,
    config: &PatchConfig,
) -> PatchResult<Option<Value>> {
    let delta = match delta {
        Some(Value::Object(delta)) => delta,
        replacement => return Ok(replacement),
    };

    match target {
        Some(Value::Array(items)) if !items.is_empty() => {
            patch_array(items, delta, config).map(|items| Some(Value::Array(items)))
        }
        Some(Value::Object(fields)) if !fields.is_empty() => {
            patch_fields(fields, delta, config).map(|fields| Some(Value::Object(fields)))
        }
        _ => {
            trace!(fields = delta.len(), "target has no values, delta replaces it");
            Ok(Some(Value::Object(delta)))
        }
    }
}

/// Apply one side of a delta onto an object tree.
pub fn patch_object(
    target: Option<Object>,
    delta: Option<Object>,
    config: &PatchConfig,
) -> PatchResult<Option<Value>> {
    patch(target.map(Value::Object), delta.map(Value::Object), config)
}

/// Apply `old_values`, then `new_values`, of a delta onto `target`.
///
/// A delta with both sides absent leaves the target untouched.
pub fn apply_delta(
    target: Option<Value>,
    delta: &DeltaResult,
    config: &PatchConfig,
) -> PatchResult<Option<Value>> {
    if delta.old_values.is_none() && delta.new_values.is_none() {
        return Ok(target);
    }
    let reverted = patch(target, delta.old_values.clone().map(Value::Object), config)?;
    patch(reverted, delta.new_values.clone().map(Value::Object), config)
}

fn patch_array(
    mut items: Vec<Value>,
    mut delta: Object,
    config: &PatchConfig,
) -> PatchResult<Vec<Value>> {
    if let Some(count) = delta.shift_remove(COUNT_KEY) {
        let len = parse_count(&count, config)?;
        if len != items.len() {
            debug!(from = items.len(), to = len, "resizing array");
            items.resize(len, Value::Null);
        }
    }

    for (key, value) in delta {
        let Ok(index) = key.parse::<usize>() else {
            trace!(key = %key, "ignoring non-index key in array delta");
            continue;
        };
        if index >= items.len() {
            match config.out_of_range {
                IndexPolicy::Reject => {
                    return Err(PatchError::IndexOutOfRange {
                        index,
                        len: items.len(),
                    })
                }
                IndexPolicy::Grow => {
                    let len = index
                        .checked_add(1)
                        .filter(|len| *len <= config.max_array_len)
                        .ok_or_else(|| PatchError::ArrayTooLong {
                            requested: key.clone(),
                            max: config.max_array_len,
                        })?;
                    items.resize(len, Value::Null);
                }
            }
        }
        let current = std::mem::take(&mut items[index]);
        items[index] = patch(Some(current), Some(value), config)?.unwrap_or_default();
    }

    Ok(items)
}

fn patch_fields(mut fields: Object, mut delta: Object, config: &PatchConfig) -> PatchResult<Object> {
    if let Some(removed) = delta.shift_remove(REMOVED_KEY) {
        for name in removed_names(removed)? {
            fields.shift_remove(&name);
        }
    }

    for (key, value) in delta {
        match fields.get_mut(&key) {
            Some(slot) => {
                let current = std::mem::take(slot);
                *slot = patch(Some(current), Some(value), config)?.unwrap_or_default();
            }
            None => {
                let created = patch(None, Some(value), config)?.unwrap_or_default();
                fields.insert(key, created);
            }
        }
    }

    Ok(fields)
}

fn parse_count(count: &Value, config: &PatchConfig) -> PatchResult<usize> {
    let requested = count
        .as_u64()
        .ok_or_else(|| PatchError::InvalidCount(count.to_string()))?;
    usize::try_from(requested)
        .ok()
        .filter(|len| *len <= config.max_array_len)
        .ok_or_else(|| PatchError::ArrayTooLong {
            requested: requested.to_string(),
            max: config.max_array_len,
        })
}

fn removed_names(removed: Value) -> PatchResult<Vec<String>> {
    let Value::Array(names) = removed else {
        return Err(PatchError::InvalidRemovedList(removed.to_string()));
    };
    names
        .into_iter()
        .map(|name| match name {
            Value::String(name) => Ok(name),
            other => Err(PatchError::InvalidRemovedList(other.to_string())),
        })
        .collect()
}
