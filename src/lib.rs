//! Software emulation of binary floating-point arithmetic for targets with no
//! hardware FPU: a 32-bit two's-complement Q1.30 mantissa and a 16-bit signed
//! exponent, normalized after every operation, with saturating overflow and
//! underflow in place of a trap.
//!
//! [`Float`] is the only type most callers need. Arithmetic is exposed
//! through the standard operator traits; `Div` and `sqrt` return `Result`
//! since they're the only two fallible operations.

mod decimal;
mod float;
mod mantissa;

pub mod error;

pub use error::FloatError;
pub use float::Float;
