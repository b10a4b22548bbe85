//! JSON wire form of one delta side.
//!
//! A side travels as a plain JSON object. Reserved keys appear only where the
//! diff generator put them: `"@@ Count"` as an integer inside array deltas and
//! `"@@ Removed"` as an array of strings inside object deltas. There is no
//! framing or versioning beyond the tree shape.

use odelta_value::{Object, Value};

use crate::error::{SdkError, SdkResult};

/// Serialize one delta side to compact JSON.
pub fn encode(side: &Object) -> SdkResult<String> {
    serde_json::to_string(side).map_err(|e| SdkError::Wire(e.to_string()))
}

/// Parse one delta side. Anything but a JSON object is rejected.
pub fn decode(s: &str) -> SdkResult<Object> {
    Value::from_json_str(s)
        .map_err(|e| SdkError::Wire(e.to_string()))?
        .into_object()
        .map_err(|other| SdkError::Wire(format!("expected a JSON object, got {}", other.kind())))
}
