//! Engine parameters.
//!
//! These are fixed by the estimation algorithm rather than configured at
//! runtime. The only runtime knob, the number of playouts, defaults to
//! [`DEFAULT_ITERATIONS`] and can be overridden per call.

/// Number of playouts used to build a probability map when none is given.
pub const DEFAULT_ITERATIONS: usize = 30;

/// Liberties a freshly placed group needs for the move to be legal.
///
/// Stricter than the real suicide rule: random play should not walk into
/// self-atari, which would skew the ownership statistics.
pub const LEGAL_LIBERTIES: usize = 2;

/// Liberties an enemy group needs to survive a neighboring placement.
pub const CAPTURE_LIBERTIES: usize = 1;

/// Probability assigned to points no playout ever resolved.
pub const UNDECIDED: f64 = 0.5;
