//! Ideal gas helpers.
//!
//! Gas volume here is free gas at 1 bar: a 12 L cylinder at 200 bar holds
//! 2400 L of gas, and pressure is simply gas volume over cylinder volume.

use gx_core::units::constants::R_L_BAR;
use gx_core::units::{Amount, Pressure, Temperature, Volume};
use gx_core::units::{bar, in_bar, in_kelvin, in_liters, liters, mol};

/// Pressure reached when `gas_volume` of free gas is packed into `total_volume`.
pub fn pressure_from_volumes(gas_volume: Volume, total_volume: Volume) -> Pressure {
    bar(in_liters(gas_volume) / in_liters(total_volume))
}

/// Free gas volume held by a cylinder of `volume` at `pressure`.
pub fn gas_volume(volume: Volume, pressure: Pressure) -> Volume {
    liters(in_liters(volume) * in_bar(pressure))
}

/// Moles of ideal gas at the given state, `n = P·V / (R·T)`.
pub fn moles(volume: Volume, pressure: Pressure, temperature: Temperature) -> Amount {
    mol(in_bar(pressure) * in_liters(volume) / (R_L_BAR * in_kelvin(temperature)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gx_core::units::{celsius, in_moles};

    #[test]
    fn pressure_from_gas_and_cylinder_volume() {
        let p = pressure_from_volumes(liters(2000.0), liters(12.0));
        assert!((in_bar(p) - 166.667).abs() < 1e-3);
    }

    #[test]
    fn gas_volume_is_volume_times_pressure() {
        let gv = gas_volume(liters(12.0), bar(210.0));
        assert!((in_liters(gv) - 2520.0).abs() < 1e-9);
    }

    #[test]
    fn ideal_moles() {
        let n = moles(liters(12.0), bar(200.0), celsius(20.0));
        assert!((in_moles(n) - 98.519).abs() < 1e-3);
    }
}
