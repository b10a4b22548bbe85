//! Recursive diff between two object trees.
//!
//! The generator walks both trees in parallel and records every difference
//! twice: the source-side value into `old_values`, the target-side value into
//! `new_values`. Arrays are compared strictly by position; a length change is
//! carried by a [`COUNT_KEY`] entry and dropped fields by a [`REMOVED_KEY`]
//! list, so either side can later be re-applied by the patch applier.
//!
//! # Whole-value replacement
//!
//! Some differences are not diffed further and the whole value is recorded:
//! a null on exactly one side, mismatched variants, unequal scalars, and an
//! empty array against a non-empty one. A wholly absent object on one side is
//! likewise recorded as-is.

use tracing::debug;

use odelta_value::{Object, Value, COUNT_KEY, REMOVED_KEY};

use crate::result::DeltaResult;

/// Compute the delta between two possibly-absent objects.
pub fn diff_objects(source: Option<&Object>, target: Option<&Object>) -> DeltaResult {
    let result = match (source, target) {
        (None, None) => DeltaResult::new(),
        (Some(source), Some(target)) => diff_fields(source, target),
        _ => DeltaResult::from_sides(source.cloned(), target.cloned()),
    };

    debug!(
        old_fields = result.old_values.as_ref().map_or(0, Object::len),
        new_fields = result.new_values.as_ref().map_or(0, Object::len),
        equal = result.are_equal(),
        "computed object delta"
    );
    result
}

fn diff_fields(source: &Object, target: &Object) -> DeltaResult {
    let mut result = DeltaResult::new();
    // Keys the old side lacks (present only in target), and vice versa.
    let mut missing_from_source = Vec::new();
    let mut missing_from_target = Vec::new();

    for (key, source_value) in source {
        match target.get(key) {
            Some(target_value) => field_delta(key, source_value, target_value, &mut result),
            None => {
                result.insert_old(key.clone(), source_value.clone());
                missing_from_target.push(Value::String(key.clone()));
            }
        }
    }

    for (key, target_value) in target {
        if source.contains_key(key) {
            continue;
        }
        missing_from_source.push(Value::String(key.clone()));
        result.insert_new(key.clone(), target_value.clone());
    }

    if !missing_from_source.is_empty() {
        result.insert_old(REMOVED_KEY, Value::Array(missing_from_source));
    }
    if !missing_from_target.is_empty() {
        result.insert_new(REMOVED_KEY, Value::Array(missing_from_target));
    }

    result
}

/// Record the difference between two present values under `key`.
fn field_delta(key: &str, source: &Value, target: &Value, result: &mut DeltaResult) {
    match (source, target) {
        (Value::Null, Value::Null) => {}
        (Value::Null, _) | (_, Value::Null) => {
            result.insert_both(key, source.clone(), target.clone());
        }
        (Value::Object(s), Value::Object(t)) => {
            let nested = diff_fields(s, t);
            if !nested.are_equal() {
                result.insert_nested(key, nested);
            }
        }
        (Value::Array(s), Value::Array(t)) => array_delta(key, s, t, result),
        _ => {
            if source != target {
                result.insert_both(key, source.clone(), target.clone());
            }
        }
    }
}

fn array_delta(key: &str, source: &[Value], target: &[Value], result: &mut DeltaResult) {
    // Diffing index-by-index against an empty array says nothing useful.
    if (source.is_empty() || target.is_empty()) && source.len() != target.len() {
        result.insert_both(
            key,
            Value::Array(source.to_vec()),
            Value::Array(target.to_vec()),
        );
        return;
    }

    let mut delta = DeltaResult::new();
    let common = source.len().min(target.len());

    for (i, (s, t)) in source.iter().zip(target).enumerate() {
        field_delta(&i.to_string(), s, t, &mut delta);
    }
    for (i, extra) in target.iter().enumerate().skip(common) {
        delta.insert_new(i.to_string(), extra.clone());
    }
    for (i, extra) in source.iter().enumerate().skip(common) {
        delta.insert_old(i.to_string(), extra.clone());
    }

    if delta.are_equal() {
        return;
    }
    if source.len() != target.len() {
        delta.insert_both(
            COUNT_KEY,
            Value::from(source.len()),
            Value::from(target.len()),
        );
    }
    result.insert_nested(key, delta);
}
