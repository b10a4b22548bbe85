//! The delta container produced by the diff generator.

use std::fmt;

use serde::{Deserialize, Serialize};

use odelta_value::{objects_equal, Object, Value};

/// Which half of a [`DeltaResult`] to work with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Values as they were before the change. Applying this side reverts.
    Old,
    /// Values as they are after the change. Applying this side advances.
    New,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Old => Side::New,
            Side::New => Side::Old,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// A pair of partial trees describing a change between two objects.
///
/// `old_values` holds what changed *from*, `new_values` what it changed
/// *to*. A result whose two sides are deep-equal (including both absent)
/// describes no change at all.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaResult {
    pub old_values: Option<Object>,
    pub new_values: Option<Object>,
    /// Name of the type the compared objects were converted from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
}

impl DeltaResult {
    /// An empty result: no change.
    pub fn new() -> Self {
        Self::default()
    }

    /// A result with the given sides and no subject type.
    pub fn from_sides(old_values: Option<Object>, new_values: Option<Object>) -> Self {
        Self {
            old_values,
            new_values,
            subject_type: None,
        }
    }

    /// Attach the subject type tag.
    pub fn with_subject_type(mut self, subject_type: impl Into<String>) -> Self {
        self.subject_type = Some(subject_type.into());
        self
    }

    /// Returns `true` when the two sides are deep-equal, i.e. there is no delta.
    pub fn are_equal(&self) -> bool {
        objects_equal(self.old_values.as_ref(), self.new_values.as_ref())
    }

    /// Borrow one side.
    pub fn side(&self, side: Side) -> Option<&Object> {
        match side {
            Side::Old => self.old_values.as_ref(),
            Side::New => self.new_values.as_ref(),
        }
    }

    /// Take one side, dropping the other.
    pub fn into_side(self, side: Side) -> Option<Object> {
        match side {
            Side::Old => self.old_values,
            Side::New => self.new_values,
        }
    }

    pub(crate) fn insert_old(&mut self, key: impl Into<String>, value: Value) {
        self.old_values
            .get_or_insert_with(Object::new)
            .insert(key.into(), value);
    }

    pub(crate) fn insert_new(&mut self, key: impl Into<String>, value: Value) {
        self.new_values
            .get_or_insert_with(Object::new)
            .insert(key.into(), value);
    }

    pub(crate) fn insert_both(&mut self, key: &str, old: Value, new: Value) {
        self.insert_old(key, old);
        self.insert_new(key, new);
    }

    /// Record a nested result under `key` on both sides.
    pub(crate) fn insert_nested(&mut self, key: &str, nested: DeltaResult) {
        self.insert_both(key, nested_side(nested.old_values), nested_side(nested.new_values));
    }
}

fn nested_side(side: Option<Object>) -> Value {
    side.map(Value::Object).unwrap_or(Value::Null)
}
