//! Gas composition of a breathing mix.

use crate::error::{GasError, GasResult};
use crate::gas::Gas;
use gx_core::numeric::{Tolerances, nearly_equal};
use gx_core::units::Pressure;

/// Slack allowed when explicit fractions add up to exactly 100% in decimal
/// but not in binary floating point.
const SUM_SLACK: f64 = 1e-12;

/// Gas fractions of a mix, summing to 1.0.
///
/// Nitrogen is never given explicitly; it makes up whatever the explicit
/// fractions leave over. Once built the composition is immutable and is shared
/// by reference between all cylinders of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GasComposition {
    /// Gases with a positive fraction, in `Gas::ALL` order.
    items: Vec<(Gas, f64)>,
}

impl GasComposition {
    /// Create a single-gas composition.
    pub fn pure(gas: Gas) -> Self {
        Self {
            items: vec![(gas, 1.0)],
        }
    }

    /// Air as the gas tables see it: 21% oxygen, balance nitrogen.
    pub fn air() -> Self {
        Self {
            items: vec![(Gas::Oxygen, 0.21), (Gas::Nitrogen, 0.79)],
        }
    }

    /// Create a composition from explicit fractions, nitrogen taking the remainder.
    ///
    /// Fails with [`GasError::InvalidGasComposition`] when the explicit fractions
    /// sum above 1.0, and with [`GasError::InvalidFraction`] for negative or
    /// non-finite fractions or an explicit nitrogen entry.
    pub fn from_fractions(explicit: &[(Gas, f64)]) -> GasResult<Self> {
        let mut fractions = [0.0_f64; Gas::ALL.len()];
        let mut sum = 0.0;
        for &(gas, fraction) in explicit {
            if gas == Gas::Nitrogen || !fraction.is_finite() || fraction < 0.0 {
                return Err(GasError::InvalidFraction {
                    gas: gas.display_name(),
                    fraction,
                });
            }
            fractions[slot(gas)] += fraction;
            sum += fraction;
        }

        if sum > 1.0 + SUM_SLACK {
            return Err(GasError::InvalidGasComposition { sum });
        }
        fractions[slot(Gas::Nitrogen)] = (1.0 - sum).max(0.0);

        let items = Gas::ALL
            .iter()
            .zip(fractions)
            .filter(|(_, f)| *f > 0.0)
            .map(|(gas, f)| (*gas, f))
            .collect();
        Ok(Self { items })
    }

    /// Get the fraction of a gas (0.0 if not present).
    pub fn fraction(&self, gas: Gas) -> f64 {
        self.items
            .iter()
            .find(|(g, _)| *g == gas)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Returns `Some(gas)` if exactly one gas has fraction ≈1.0.
    pub fn is_pure(&self) -> Option<Gas> {
        if self.items.len() == 1 {
            let (gas, frac) = self.items[0];
            let tol = Tolerances {
                abs: 1e-10,
                rel: 1e-10,
            };
            if nearly_equal(frac, 1.0, tol) {
                return Some(gas);
            }
        }
        None
    }

    /// Iterate over all gases with non-zero fractions.
    pub fn iter(&self) -> impl Iterator<Item = (Gas, f64)> + '_ {
        self.items.iter().copied()
    }
}

/// Partial pressure of a component making up `fraction` of the mix (Dalton's law).
pub fn partial_pressure(pressure: Pressure, fraction: f64) -> Pressure {
    pressure * fraction
}

fn slot(gas: Gas) -> usize {
    Gas::ALL.iter().position(|g| *g == gas).unwrap_or_default()
}
