use thiserror::Error;

/// Error types for the compute module.
///
/// These never escape the public `calculate` functions: a failed scenario is
/// degraded to a zero-valued result carrying the generic error marker.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// A required amount was missing or unusable after coercion.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A date field was present but not a valid ISO date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Date arithmetic left the supported calendar range.
    #[error("calendar overflow after {0} strides")]
    CalendarOverflow(u32),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
