//! Gas property errors.

use gx_core::CoreError;
use thiserror::Error;

/// Result type for gas operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur while building compositions or evaluating the equation of state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Explicit gas fractions leave no room for the nitrogen remainder.
    #[error("Defined gases must not exceed 100% (1.0), got {sum}")]
    InvalidGasComposition { sum: f64 },

    /// A single gas fraction is negative, non-finite or not allowed.
    #[error("Invalid fraction for {gas}: {fraction}")]
    InvalidFraction { gas: &'static str, fraction: f64 },

    /// Inputs fall outside the region where the Van der Waals root is physical.
    #[error("Outside the Van der Waals envelope: {what}")]
    OutsideEnvelope { what: &'static str },

    /// Convergence failure (e.g., solving mixture pressure for a mole count).
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },

    /// Gas name that does not match any known gas.
    #[error("Unknown gas: {name}")]
    UnknownGas { name: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
