use thiserror::Error;

/// Errors returned by the normalization helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// The input has no usable normalized form.
    #[error("validation error: {0}")]
    Validation(String),

    /// A fixed-shape textual value is malformed.
    #[error("format error: {0}")]
    Format(String),

    /// Byte quantities cannot be negative.
    #[error("byte count must not be negative (got {0})")]
    NegativeBytes(i64),
}

pub type Result<T> = std::result::Result<T, UtilError>;
