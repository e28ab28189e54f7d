//! Cylinder configuration and its validation.

use crate::error::{TransferError, TransferResult};
use crate::scenario::ScenarioLabel;
use gx_core::units::{Pressure, Temperature, Volume};
use gx_core::units::{in_bar, in_celsius, in_liters};

/// Highest fill pressure accepted on either side [bar].
pub const MAX_PRESSURE_BAR: f64 = 350.0;
/// Largest cylinder (or twinset) volume accepted [L].
pub const MAX_VOLUME_L: f64 = 1000.0;
/// Coldest gas temperature accepted [°C].
pub const MIN_TEMPERATURE_C: f64 = -30.0;
/// Warmest gas temperature accepted [°C].
pub const MAX_TEMPERATURE_C: f64 = 80.0;

/// Source and destination cylinders before any transfer.
///
/// Twinset volumes are the combined water volume of both halves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderConfiguration {
    pub source_volume: Volume,
    pub source_pressure: Pressure,
    pub source_twinset: bool,
    pub destination_volume: Volume,
    pub destination_pressure: Pressure,
    pub destination_twinset: bool,
}

impl CylinderConfiguration {
    /// Check pressures and volumes against the accepted envelope.
    ///
    /// The source must be strictly pressurized and at least as full as the
    /// destination; an empty destination is fine.
    pub fn validate(&self) -> TransferResult<()> {
        let source_bar = in_bar(self.source_pressure);
        let destination_bar = in_bar(self.destination_pressure);

        if !(source_bar > 0.0 && source_bar <= MAX_PRESSURE_BAR) {
            return Err(TransferError::InvalidPressureRange {
                side: "source",
                pressure_bar: source_bar,
                reason: "must be greater than 0 and at most 350",
            });
        }
        if !(destination_bar >= 0.0 && destination_bar <= MAX_PRESSURE_BAR) {
            return Err(TransferError::InvalidPressureRange {
                side: "destination",
                pressure_bar: destination_bar,
                reason: "must be between 0 and 350",
            });
        }
        if source_bar < destination_bar {
            return Err(TransferError::InvalidPressureRange {
                side: "source",
                pressure_bar: source_bar,
                reason: "must not be lower than the destination pressure",
            });
        }

        check_volume("source", self.source_volume)?;
        check_volume("destination", self.destination_volume)
    }

    /// Same cylinders with the twinset flags replaced.
    pub fn with_twinsets(&self, source: bool, destination: bool) -> Self {
        Self {
            source_twinset: source,
            destination_twinset: destination,
            ..*self
        }
    }

    /// The configurations worth comparing for this setup.
    ///
    /// The configuration itself always comes first. Opening a twinset
    /// manifold merges its halves into one cylinder, so each twinset side adds
    /// the variant with that manifold open.
    pub fn manifold_configurations(&self) -> Vec<Self> {
        let mut configurations = vec![*self];
        if self.source_twinset {
            configurations.push(self.with_twinsets(false, self.destination_twinset));
        }
        if self.destination_twinset {
            configurations.push(self.with_twinsets(self.source_twinset, false));
        }
        if self.source_twinset || self.destination_twinset {
            configurations.push(self.with_twinsets(false, false));
        }
        configurations
    }

    pub fn label(&self) -> ScenarioLabel {
        ScenarioLabel::from_twinsets(self.source_twinset, self.destination_twinset)
    }
}

/// Check the gas temperature against the accepted envelope (bounds inclusive).
pub fn validate_temperature(temperature: Temperature) -> TransferResult<()> {
    let celsius = in_celsius(temperature);
    if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&celsius) {
        return Err(TransferError::InvalidTemperatureRange { celsius });
    }
    Ok(())
}

fn check_volume(side: &'static str, volume: Volume) -> TransferResult<()> {
    let volume_l = in_liters(volume);
    if !(volume_l > 0.0 && volume_l <= MAX_VOLUME_L) {
        return Err(TransferError::InvalidVolumeRange { side, volume_l });
    }
    Ok(())
}
