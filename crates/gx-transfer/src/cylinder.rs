//! Cylinders and the per-side cylinder lists built from a configuration.

use crate::config::CylinderConfiguration;
use crate::error::{TransferError, TransferResult};
use gx_core::units::{Amount, Mass, Pressure, Volume};
use gx_core::units::{grams, in_bar, in_liters, liters};
use gx_gases::GasModel;

/// One physical vessel.
///
/// Only the pressure changes after construction, and only through
/// [`crate::equalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    description: String,
    volume: Volume,
    pressure: Pressure,
}

impl Cylinder {
    pub fn new(
        description: impl Into<String>,
        volume: Volume,
        pressure: Pressure,
    ) -> TransferResult<Self> {
        let v = in_liters(volume);
        if !v.is_finite() || v <= 0.0 {
            return Err(TransferError::InvalidArg {
                what: "cylinder volume must be positive",
            });
        }
        let p = in_bar(pressure);
        if !p.is_finite() || p < 0.0 {
            return Err(TransferError::InvalidArg {
                what: "cylinder pressure must be non-negative",
            });
        }
        Ok(Self {
            description: description.into(),
            volume,
            pressure,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub(crate) fn set_pressure(&mut self, pressure: Pressure) {
        self.pressure = pressure;
    }

    /// Conserved quantity held by this cylinder under `model`.
    pub fn content(&self, model: &dyn GasModel) -> TransferResult<f64> {
        Ok(model.content(self.volume, self.pressure)?)
    }

    pub fn gas_volume(&self, model: &dyn GasModel) -> TransferResult<Volume> {
        Ok(model.gas_volume(self.volume, self.pressure)?)
    }

    pub fn moles(&self, model: &dyn GasModel) -> TransferResult<Amount> {
        Ok(model.moles(self.volume, self.pressure)?)
    }

    pub fn gas_weight(&self, model: &dyn GasModel) -> TransferResult<Mass> {
        Ok(model.gas_weight(self.volume, self.pressure)?)
    }
}

/// Ordered cylinders making up one side of a transfer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CylinderList {
    cylinders: Vec<Cylinder>,
}

impl CylinderList {
    pub fn new(cylinders: Vec<Cylinder>) -> Self {
        Self { cylinders }
    }

    /// A single cylinder, or a twinset with its manifold open.
    pub fn single(
        description: impl Into<String>,
        volume: Volume,
        pressure: Pressure,
    ) -> TransferResult<Self> {
        Ok(Self::new(vec![Cylinder::new(description, volume, pressure)?]))
    }

    /// A twinset with its manifold closed: two halves of `volume / 2`.
    pub fn twinset(volume: Volume, pressure: Pressure) -> TransferResult<Self> {
        let half = volume / 2.0;
        Ok(Self::new(vec![
            Cylinder::new("left", half, pressure)?,
            Cylinder::new("right", half, pressure)?,
        ]))
    }

    /// Source and destination lists for a configuration.
    pub fn from_configuration(config: &CylinderConfiguration) -> TransferResult<(Self, Self)> {
        let source = if config.source_twinset {
            Self::twinset(config.source_volume, config.source_pressure)?
        } else {
            Self::single("source", config.source_volume, config.source_pressure)?
        };
        let destination = if config.destination_twinset {
            Self::twinset(config.destination_volume, config.destination_pressure)?
        } else {
            Self::single(
                "destination",
                config.destination_volume,
                config.destination_pressure,
            )?
        };
        Ok((source, destination))
    }

    pub fn len(&self) -> usize {
        self.cylinders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }

    pub fn is_twinset(&self) -> bool {
        self.cylinders.len() > 1
    }

    pub fn cylinders(&self) -> &[Cylinder] {
        &self.cylinders
    }

    pub(crate) fn cylinders_mut(&mut self) -> &mut [Cylinder] {
        &mut self.cylinders
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cylinder> {
        self.cylinders.iter()
    }

    /// Combined water volume.
    pub fn total_volume(&self) -> Volume {
        self.iter().fold(liters(0.0), |acc, c| acc + c.volume())
    }

    pub fn total_content(&self, model: &dyn GasModel) -> TransferResult<f64> {
        self.iter().try_fold(0.0, |acc, c| Ok(acc + c.content(model)?))
    }

    pub fn total_gas_volume(&self, model: &dyn GasModel) -> TransferResult<Volume> {
        self.iter()
            .try_fold(liters(0.0), |acc, c| Ok(acc + c.gas_volume(model)?))
    }

    pub fn total_gas_weight(&self, model: &dyn GasModel) -> TransferResult<Mass> {
        self.iter()
            .try_fold(grams(0.0), |acc, c| Ok(acc + c.gas_weight(model)?))
    }

    /// Pressure the side settles to once all of its cylinders are connected.
    ///
    /// Does not modify the cylinders.
    pub fn equalized_pressure(&self, model: &dyn GasModel) -> TransferResult<Pressure> {
        if self.is_empty() {
            return Err(TransferError::EmptyGroup);
        }
        let content = self.total_content(model)?;
        Ok(model.pressure_from_content(self.total_volume(), content)?)
    }
}

/// Validate `config` and build its source and destination lists.
pub fn build_cylinder_lists(
    config: &CylinderConfiguration,
) -> TransferResult<(CylinderList, CylinderList)> {
    config.validate()?;
    CylinderList::from_configuration(config)
}
