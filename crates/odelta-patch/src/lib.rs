//! Patch applier for odelta.
//!
//! Re-applies one side of a [`DeltaResult`](odelta_diff::DeltaResult) onto a
//! value tree of the same shape family, or both sides in sequence (old, then
//! new) to carry a stale snapshot across a recorded change.
//!
//! # Key Types
//!
//! - [`patch`] / [`patch_object`] -- Apply one side
//! - [`apply_delta`] -- Composite apply: old values, then new values
//! - [`PatchConfig`] / [`IndexPolicy`] -- Out-of-range index handling and array size limit

pub mod applier;
pub mod config;
pub mod error;

pub use applier::{apply_delta, patch, patch_object};
pub use config::{IndexPolicy, PatchConfig, DEFAULT_MAX_ARRAY_LEN};
pub use error::{PatchError, PatchResult};
