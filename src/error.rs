use thiserror::Error;

/// Failures a calculation can report back to its caller.
///
/// Both operands share one `InvalidFormat` outcome: the caller shows a single
/// correction prompt and does not need to know which operand or rule failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimeCalcError {
    #[error("Enter times in the correct format (e.g. 1h30m, 45m, 10s)")]
    InvalidFormat,
    #[error("Duration is too large to represent")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, TimeCalcError>;
