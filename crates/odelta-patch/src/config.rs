use serde::{Deserialize, Serialize};

/// What to do when an array delta addresses an index the array does not have.
///
/// Well-formed deltas always carry a length entry whenever indices beyond
/// the current length are addressed, so this only matters for deltas that
/// were built by hand or applied to an unrelated tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Fail with [`crate::PatchError::IndexOutOfRange`].
    #[default]
    Reject,
    /// Pad the array with nulls up to the addressed index.
    Grow,
}

/// Default upper bound on the length an array delta may resize to.
pub const DEFAULT_MAX_ARRAY_LEN: usize = 1 << 24;

/// Configuration for the patch applier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    pub out_of_range: IndexPolicy,
    /// Largest array length a `"@@ Count"` entry or a grown index may produce.
    pub max_array_len: usize,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            out_of_range: IndexPolicy::default(),
            max_array_len: DEFAULT_MAX_ARRAY_LEN,
        }
    }
}

impl PatchConfig {
    /// A configuration that grows arrays instead of rejecting stray indices.
    pub fn growing() -> Self {
        Self {
            out_of_range: IndexPolicy::Grow,
            ..Self::default()
        }
    }
}
