use std::any::type_name;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use odelta_diff::{diff_objects, DeltaResult};
use odelta_value::{Object, Value};

use crate::config::DeltaConfig;
use crate::convert::{from_tree, to_tree};
use crate::error::{SdkError, SdkResult};
use crate::wire;

/// Typed delta generation and patching bound to one configuration.
///
/// The engine holds no state besides its configuration and can be shared
/// freely across threads.
#[derive(Clone, Debug, Default)]
pub struct DeltaEngine {
    config: DeltaConfig,
}

impl DeltaEngine {
    pub fn new(config: DeltaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeltaConfig {
        &self.config
    }

    // ---- Delta generation ----

    /// Compute the delta between two typed values.
    pub fn generate_delta<T: Serialize>(&self, original: &T, updated: &T) -> SdkResult<DeltaResult> {
        self.generate_delta_opt(Some(original), Some(updated))
    }

    /// Compute the delta between two possibly-absent typed values.
    ///
    /// When exactly one side is absent the other is recorded whole.
    pub fn generate_delta_opt<T: Serialize>(
        &self,
        original: Option<&T>,
        updated: Option<&T>,
    ) -> SdkResult<DeltaResult> {
        let source = original.map(to_tree).transpose()?;
        let target = updated.map(to_tree).transpose()?;

        let mut result = diff_objects(source.as_ref(), target.as_ref());
        if self.config.record_subject_type {
            result.subject_type = Some(type_name::<T>().to_string());
        }

        debug!(
            subject_type = type_name::<T>(),
            equal = result.are_equal(),
            "generated delta"
        );
        Ok(result)
    }

    /// Compute the delta between two object trees already in hand.
    pub fn diff_trees(&self, source: Option<&Object>, target: Option<&Object>) -> DeltaResult {
        diff_objects(source, target)
    }

    // ---- Patching ----

    /// Apply one delta side, given in its JSON wire form, onto `source`.
    pub fn patch_object_str<T>(&self, source: &T, delta_wire: &str) -> SdkResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let delta = wire::decode(delta_wire)?;
        self.patch_tree_into(source, delta)
    }

    /// Apply one delta side onto `source`.
    pub fn patch_object<T>(&self, source: &T, delta: &Object) -> SdkResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        self.patch_tree_into(source, delta.clone())
    }

    /// Apply `old_values` then `new_values` of `delta` onto `source`.
    ///
    /// Returns `None` when the delta records the value being removed.
    pub fn apply_delta<T>(&self, source: Option<&T>, delta: &DeltaResult) -> SdkResult<Option<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        let tree = source.map(to_tree).transpose()?.map(Value::Object);
        let patched = odelta_patch::apply_delta(tree, delta, &self.config.patch)?;

        debug!(
            subject_type = type_name::<T>(),
            removed = patched.is_none(),
            "applied composite delta"
        );
        patched.map(from_tree).transpose()
    }

    fn patch_tree_into<T>(&self, source: &T, delta: Object) -> SdkResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let tree = to_tree(source)?;
        let patched = odelta_patch::patch_object(Some(tree), Some(delta), &self.config.patch)?
            .ok_or_else(|| SdkError::Conversion("patch produced no value".into()))?;

        debug!(subject_type = type_name::<T>(), "patched object");
        from_tree(patched)
    }
}

// ---- Free functions over the default configuration ----

/// [`DeltaEngine::generate_delta`] with the default configuration.
pub fn generate_delta<T: Serialize>(original: &T, updated: &T) -> SdkResult<DeltaResult> {
    DeltaEngine::default().generate_delta(original, updated)
}

/// [`DeltaEngine::generate_delta_opt`] with the default configuration.
pub fn generate_delta_opt<T: Serialize>(
    original: Option<&T>,
    updated: Option<&T>,
) -> SdkResult<DeltaResult> {
    DeltaEngine::default().generate_delta_opt(original, updated)
}

pub fn diff_trees(source: Option<&Object>, target: Option<&Object>) -> DeltaResult {
    diff_objects(source, target)
}

/// [`DeltaEngine::patch_object_str`] with the default configuration.
pub fn patch_object_str<T: Serialize + DeserializeOwned>(source: &T, delta_wire: &str) -> SdkResult<T> {
    DeltaEngine::default().patch_object_str(source, delta_wire)
}

/// [`DeltaEngine::patch_object`] with the default configuration.
pub fn patch_object<T: Serialize + DeserializeOwned>(source: &T, delta: &Object) -> SdkResult<T> {
    DeltaEngine::default().patch_object(source, delta)
}

/// [`DeltaEngine::apply_delta`] with the default configuration.
pub fn apply_delta<T: Serialize + DeserializeOwned>(
    source: Option<&T>,
    delta: &DeltaResult,
) -> SdkResult<Option<T>> {
    DeltaEngine::default().apply_delta(source, delta)
}
