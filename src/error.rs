use std::fmt;

/// The two conditions the core raises directly. Both are fatal to the
/// caller's expression if left unhandled; neither is recoverable within the
/// library's own contract. Overflow and underflow are not represented here —
/// they saturate to infinity or flush to zero instead of erroring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FloatError {
    /// A division (or `sqrt`'s internal Newton step) was attempted with a
    /// zero divisor.
    DivideByZero,
    /// `sqrt` was called on a negative, nonzero value.
    SqrtOfNegative,
}

impl fmt::Display for FloatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatError::DivideByZero => f.write_str("division by zero"),
            FloatError::SqrtOfNegative => f.write_str("square root of a negative number"),
        }
    }
}

impl std::error::Error for FloatError {}
