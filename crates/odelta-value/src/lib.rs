//! Generic value tree for odelta.
//!
//! Every other odelta crate depends on `odelta-value`. The diff generator and
//! the patch applier both walk this tree; typed data reaches it through serde.
//!
//! # Key Types
//!
//! - [`Value`] -- Null / Bool / Number / String / Array / Object
//! - [`Object`] -- Insertion-ordered field map
//! - [`ValueDigest`] -- BLAKE3 fingerprint of a value's canonical text
//! - [`COUNT_KEY`] / [`REMOVED_KEY`] -- Reserved keys used inside deltas

pub mod digest;
pub mod equality;
pub mod error;
pub mod sentinel;
pub mod value;

pub use digest::ValueDigest;
pub use equality::{deep_equal, numbers_equal, objects_equal};
pub use error::{ValueError, ValueResult};
pub use sentinel::{is_reserved, COUNT_KEY, REMOVED_KEY};
pub use value::{Object, Value};
