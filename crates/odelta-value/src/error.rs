use thiserror::Error;

/// Errors produced while building or parsing value trees.
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    /// JSON numbers cannot carry NaN or infinities.
    #[error("non-finite number cannot be represented: {0}")]
    NonFiniteNumber(f64),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience alias for value tree results.
pub type ValueResult<T> = Result<T, ValueError>;
