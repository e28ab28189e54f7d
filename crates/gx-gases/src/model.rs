//! Gas model trait and the two equations of state behind it.

use crate::composition::{GasComposition, partial_pressure};
use crate::error::{GasError, GasResult};
use crate::gas::{AtomicWeight, Gas};
use crate::{ideal, vdw};
use gx_core::numeric::ensure_positive;
use gx_core::units::constants::{MOLAR_VOLUME_L, R_L_BAR};
use gx_core::units::{Amount, Mass, Pressure, Temperature, Volume};
use gx_core::units::{bar, grams, in_bar, in_kelvin, in_liters, in_moles, liters, mol};

/// Equation of state used for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GasSystem {
    /// Ideal gas law; pressure scales linearly with gas volume.
    IdealGas,
    /// Van der Waals real gas, compensating for pressure and temperature.
    #[default]
    VanDerWaals,
}

impl GasSystem {
    pub fn name(&self) -> &'static str {
        match self {
            GasSystem::IdealGas => "ideal gas",
            GasSystem::VanDerWaals => "Van der Waals",
        }
    }

    /// Build the model for this system, bound to one mix and one temperature.
    pub fn model(self, composition: &GasComposition, temperature: Temperature) -> Box<dyn GasModel> {
        match self {
            GasSystem::IdealGas => Box::new(IdealGas::new(composition.clone(), temperature)),
            GasSystem::VanDerWaals => Box::new(VanDerWaals::new(composition.clone(), temperature)),
        }
    }
}

/// Trait for gas models.
///
/// A model is bound to one composition and one temperature for the duration of
/// a run. Equalization only needs the conserved `content` of a cylinder and the
/// inverse mapping back to pressure; everything else is reporting.
pub trait GasModel: Send + Sync {
    fn system(&self) -> GasSystem;

    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str {
        self.system().name()
    }

    fn composition(&self) -> &GasComposition;

    fn temperature(&self) -> Temperature;

    /// Quantity conserved when cylinders are connected.
    ///
    /// Free gas volume in liters for the ideal gas, moles for Van der Waals.
    fn content(&self, volume: Volume, pressure: Pressure) -> GasResult<f64>;

    /// Pressure at which `volume` holds exactly `content` (inverse of [`GasModel::content`]).
    fn pressure_from_content(&self, volume: Volume, content: f64) -> GasResult<Pressure>;

    /// Free gas volume at reference conditions, for reporting.
    fn gas_volume(&self, volume: Volume, pressure: Pressure) -> GasResult<Volume>;

    /// Moles of one component making up `fraction` of the mix.
    fn component_moles(
        &self,
        gas: Gas,
        fraction: f64,
        volume: Volume,
        pressure: Pressure,
    ) -> GasResult<Amount>;

    /// Total moles in the mix.
    fn moles(&self, volume: Volume, pressure: Pressure) -> GasResult<Amount> {
        let mut total = mol(0.0);
        for (gas, fraction) in self.composition().iter() {
            total += self.component_moles(gas, fraction, volume, pressure)?;
        }
        Ok(total)
    }

    /// Weight of the gas held at the given state.
    fn gas_weight(&self, volume: Volume, pressure: Pressure) -> GasResult<Mass> {
        let mut total = grams(0.0);
        for (gas, fraction) in self.composition().iter() {
            let moles = self.component_moles(gas, fraction, volume, pressure)?;
            total += gas_weight_from_moles(moles, gas.atomic_weight());
        }
        Ok(total)
    }
}

/// Weight of `moles` of a gas with the given molar weight.
pub fn gas_weight_from_moles(moles: Amount, atomic_weight: AtomicWeight) -> Mass {
    grams(in_moles(moles) * atomic_weight)
}

/// Ideal gas model: conserves free gas volume.
#[derive(Debug, Clone)]
pub struct IdealGas {
    composition: GasComposition,
    temperature: Temperature,
}

impl IdealGas {
    pub fn new(composition: GasComposition, temperature: Temperature) -> Self {
        Self {
            composition,
            temperature,
        }
    }
}

impl GasModel for IdealGas {
    fn system(&self) -> GasSystem {
        GasSystem::IdealGas
    }

    fn composition(&self) -> &GasComposition {
        &self.composition
    }

    fn temperature(&self) -> Temperature {
        self.temperature
    }

    fn content(&self, volume: Volume, pressure: Pressure) -> GasResult<f64> {
        Ok(in_liters(ideal::gas_volume(volume, pressure)))
    }

    fn pressure_from_content(&self, volume: Volume, content: f64) -> GasResult<Pressure> {
        ensure_positive(in_liters(volume), "cylinder volume")?;
        Ok(ideal::pressure_from_volumes(liters(content), volume))
    }

    fn gas_volume(&self, volume: Volume, pressure: Pressure) -> GasResult<Volume> {
        Ok(ideal::gas_volume(volume, pressure))
    }

    fn component_moles(
        &self,
        _gas: Gas,
        fraction: f64,
        volume: Volume,
        pressure: Pressure,
    ) -> GasResult<Amount> {
        Ok(ideal::moles(
            volume,
            partial_pressure(pressure, fraction),
            self.temperature,
        ))
    }
}

/// Van der Waals model: conserves moles, each component at its Dalton partial pressure.
#[derive(Debug, Clone)]
pub struct VanDerWaals {
    composition: GasComposition,
    temperature: Temperature,
}

impl VanDerWaals {
    const MAX_ITER: usize = 50;
    const REL_TOL: f64 = 1e-12;
    /// Floor for the mole residual when the target itself is vanishingly small.
    const ABS_TOL_MOL: f64 = 1e-18;

    pub fn new(composition: GasComposition, temperature: Temperature) -> Self {
        Self {
            composition,
            temperature,
        }
    }

    /// Sum of component pressures, each component fed `moles × fraction`.
    ///
    /// Exact for a single gas. For a mix it treats pressure fractions as mole
    /// fractions, which real gases do not honour, so it only approximates the
    /// inverse of [`GasModel::moles`].
    pub fn dalton_pressure_from_moles(&self, volume: Volume, moles: Amount) -> GasResult<Pressure> {
        let mut total = bar(0.0);
        for (gas, fraction) in self.composition.iter() {
            total += vdw::pressure_from_moles(
                volume,
                moles * fraction,
                self.temperature,
                gas.vdw_constants(),
            )?;
        }
        Ok(total)
    }

    /// Pressure at which the mix in `volume` holds exactly `moles`.
    ///
    /// Newton iteration on the total mole count, seeded with the Dalton estimate.
    pub fn pressure_from_moles(&self, volume: Volume, moles: Amount) -> GasResult<Pressure> {
        let target = in_moles(moles);
        if target <= 0.0 {
            return Ok(bar(0.0));
        }
        let v = ensure_positive(in_liters(volume), "cylinder volume")?;
        if self.composition.is_pure().is_some() {
            return self.dalton_pressure_from_moles(volume, moles);
        }

        let ideal_guess = target * R_L_BAR * in_kelvin(self.temperature) / v;
        let mut p = self
            .dalton_pressure_from_moles(volume, moles)
            .map(in_bar)
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(ideal_guess);

        for iteration in 0..Self::MAX_ITER {
            let (n, dn_dp) = self.moles_and_slope(volume, p)?;
            let residual = n - target;
            tracing::trace!(iteration, pressure_bar = p, residual, "mixture pressure step");
            if residual.abs() <= Self::REL_TOL * target + Self::ABS_TOL_MOL {
                return Ok(bar(p));
            }
            let next = p - residual / dn_dp;
            p = if next > 0.0 { next } else { 0.5 * p };
        }

        Err(GasError::ConvergenceFailed {
            what: "mixture pressure from moles",
        })
    }

    /// Total moles at `p_bar` and their derivative with respect to pressure.
    fn moles_and_slope(&self, volume: Volume, p_bar: f64) -> GasResult<(f64, f64)> {
        let mut n = 0.0;
        let mut dn_dp = 0.0;
        for (gas, fraction) in self.composition.iter() {
            let constants = gas.vdw_constants();
            let n_i = vdw::moles_from_state(volume, bar(p_bar * fraction), constants, self.temperature)?;
            n += in_moles(n_i);
            dn_dp += fraction / vdw::pressure_slope(volume, n_i, self.temperature, constants);
        }
        Ok((n, dn_dp))
    }
}

impl GasModel for VanDerWaals {
    fn system(&self) -> GasSystem {
        GasSystem::VanDerWaals
    }

    fn composition(&self) -> &GasComposition {
        &self.composition
    }

    fn temperature(&self) -> Temperature {
        self.temperature
    }

    fn content(&self, volume: Volume, pressure: Pressure) -> GasResult<f64> {
        Ok(in_moles(self.moles(volume, pressure)?))
    }

    fn pressure_from_content(&self, volume: Volume, content: f64) -> GasResult<Pressure> {
        self.pressure_from_moles(volume, mol(content))
    }

    fn gas_volume(&self, volume: Volume, pressure: Pressure) -> GasResult<Volume> {
        let moles = self.moles(volume, pressure)?;
        Ok(liters(in_moles(moles) * MOLAR_VOLUME_L))
    }

    fn component_moles(
        &self,
        gas: Gas,
        fraction: f64,
        volume: Volume,
        pressure: Pressure,
    ) -> GasResult<Amount> {
        vdw::moles_from_state(
            volume,
            partial_pressure(pressure, fraction),
            gas.vdw_constants(),
            self.temperature,
        )
    }
}
