//! High-level SDK for odelta.
//!
//! Generates structural deltas between typed values, applies them back in
//! either direction, and moves single delta sides over the JSON wire form.
//! This is the main entry point for applications embedding odelta.

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod wire;

#[cfg(test)]
mod fixtures;

pub use config::DeltaConfig;
pub use engine::{
    apply_delta, diff_trees, generate_delta, generate_delta_opt, patch_object, patch_object_str,
    DeltaEngine,
};
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use odelta_diff::{DeltaResult, Side};
pub use odelta_patch::{IndexPolicy, PatchConfig, PatchError};
pub use odelta_value::{Object, Value, ValueDigest, COUNT_KEY, REMOVED_KEY};
