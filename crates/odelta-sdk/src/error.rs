use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    /// The delta text could not be parsed as a JSON object.
    #[error("malformed delta: {0}")]
    Wire(String),

    /// A typed value converted to something other than an object.
    #[error("expected an object tree, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("conversion error: {0}")]
    Conversion(String),

    #[error("patch error: {0}")]
    Patch(#[from] odelta_patch::PatchError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type SdkResult<T> = Result<T, SdkError>;
