//! Diff generator for odelta.
//!
//! Compares two object trees and produces a [`DeltaResult`]: a symmetric pair
//! of partial trees holding what changed from (`old_values`) and what it
//! changed to (`new_values`).
//!
//! # Key Types
//!
//! - [`DeltaResult`] -- Old/new partial trees plus an optional subject type
//! - [`Side`] -- Selects one half of a result
//! - [`diff_objects`] -- The diff entry point

pub mod generator;
pub mod result;

pub use generator::diff_objects;
pub use result::{DeltaResult, Side};
