//! Conversion of a plan into the types the transfer engine runs on.

use crate::PlanResult;
use crate::schema::{GasSystemDef, RunPlan};
use gx_core::units::{Temperature, bar, celsius, liters};
use gx_gases::{Gas, GasComposition, GasResult, GasSystem};
use gx_transfer::{CylinderConfiguration, validate_temperature};

/// A plan checked and converted into engine inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlan {
    pub configuration: CylinderConfiguration,
    pub composition: GasComposition,
    pub temperature: Temperature,
    pub gas_system: GasSystem,
}

impl RunPlan {
    pub fn configuration(&self) -> CylinderConfiguration {
        CylinderConfiguration {
            source_volume: liters(self.source.volume_l),
            source_pressure: bar(self.source.pressure_bar),
            source_twinset: self.source.twinset,
            destination_volume: liters(self.destination.volume_l),
            destination_pressure: bar(self.destination.pressure_bar),
            destination_twinset: self.destination.twinset,
        }
    }

    pub fn composition(&self) -> GasResult<GasComposition> {
        let mut explicit = Vec::with_capacity(self.gas.len());
        for (key, fraction) in &self.gas {
            let gas: Gas = key.parse()?;
            explicit.push((gas, *fraction));
        }
        GasComposition::from_fractions(&explicit)
    }

    pub fn temperature(&self) -> Temperature {
        celsius(self.temperature_c)
    }

    pub fn gas_system(&self) -> GasSystem {
        match self.gas_system {
            GasSystemDef::Ideal => GasSystem::IdealGas,
            GasSystemDef::VanDerWaals => GasSystem::VanDerWaals,
        }
    }

    /// Validate cylinders, temperature and mix, and convert them.
    pub fn resolve(&self) -> PlanResult<ResolvedPlan> {
        let configuration = self.configuration();
        configuration.validate()?;
        let temperature = self.temperature();
        validate_temperature(temperature)?;
        Ok(ResolvedPlan {
            configuration,
            composition: self.composition()?,
            temperature,
            gas_system: self.gas_system(),
        })
    }
}
