//! Error types for cylinder configuration and gas transfer.

use gx_gases::GasError;
use thiserror::Error;

/// Errors encountered while validating a configuration or equalizing cylinders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    #[error("Invalid {side} cylinder pressure {pressure_bar} bar: {reason}")]
    InvalidPressureRange {
        side: &'static str,
        pressure_bar: f64,
        reason: &'static str,
    },

    #[error(
        "Invalid {side} cylinder volume {volume_l} l: must be greater than 0 and at most 1000"
    )]
    InvalidVolumeRange { side: &'static str, volume_l: f64 },

    #[error("Invalid temperature {celsius} C: must be within -30 and 80")]
    InvalidTemperatureRange { celsius: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Cannot equalize an empty cylinder group")]
    EmptyGroup,

    #[error(transparent)]
    Gas(#[from] GasError),
}

pub type TransferResult<T> = Result<T, TransferError>;
