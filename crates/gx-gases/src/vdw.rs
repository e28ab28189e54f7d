//! Van der Waals equation of state for a single gas component.
//!
//! `(P + a·n²/V²)(V − n·b) = n·R·T`
//!
//! Volumes are in liters, pressures in bar, temperatures in kelvin and amounts
//! in moles. The mole count for a given state is the real root of a cubic in
//! `n`; it is seeded in closed form (Cardano) and polished with Newton steps.

use crate::error::{GasError, GasResult};
use crate::gas::VanDerWaalsConstant;
use gx_core::numeric::ensure_finite;
use gx_core::units::constants::R_L_BAR;
use gx_core::units::{Amount, Pressure, Temperature, Volume};
use gx_core::units::{bar, in_bar, in_kelvin, in_liters, in_moles, mol};

/// Below this reduced density `p·b/(R·T)` the Cardano terms cancel to a tiny
/// difference, so the root is seeded from the ideal gas estimate instead.
const DILUTE_LIMIT: f64 = 1e-3;

const MAX_REFINE_STEPS: usize = 20;

/// Number of moles of one component at the given state.
///
/// Non-positive pressure means no gas and returns zero without touching the
/// cube root. Inputs whose cubic discriminant is negative, or whose root would
/// pack the molecules tighter than the co-volume `b` allows, are rejected with
/// [`GasError::OutsideEnvelope`]. The seed root (Cardano, or ideal gas when
/// dilute) is finished with Newton steps on the pressure equation.
pub fn moles_from_state(
    volume: Volume,
    partial_pressure: Pressure,
    constants: VanDerWaalsConstant,
    temperature: Temperature,
) -> GasResult<Amount> {
    let p = in_bar(partial_pressure);
    if p <= 0.0 {
        return Ok(mol(0.0));
    }

    let VanDerWaalsConstant { a, b } = constants;
    let v = in_liters(volume);
    let rt = R_L_BAR * in_kelvin(temperature);

    let seed = if p * b / rt < DILUTE_LIMIT {
        p * v / rt
    } else {
        cardano_root(v, p, a, b, rt)?
    };
    let n = ensure_finite(refine_root(v, p, a, b, rt, seed), "van der waals mole count")?;

    if n < 0.0 || n * b >= v {
        return Err(GasError::OutsideEnvelope {
            what: "mole count outside the physical range",
        });
    }
    Ok(mol(n))
}

/// Closed-form real root of the cubic in `n`.
fn cardano_root(v: f64, p: f64, a: f64, b: f64, rt: f64) -> GasResult<f64> {
    let s1 = v.powi(3) * (2.0 * a.powi(3) + 18.0 * a * a * b * b * p - 9.0 * a * a * b * rt);
    let s2 = v * v * (3.0 * a * b * (b * p + rt) - a * a);
    let discriminant = 4.0 * s2.powi(3) + s1 * s1;
    if discriminant < 0.0 {
        return Err(GasError::OutsideEnvelope {
            what: "cubic has three real roots",
        });
    }

    let s = (s1 + discriminant.sqrt()).cbrt();
    if s == 0.0 {
        return Err(GasError::OutsideEnvelope {
            what: "degenerate cubic root",
        });
    }
    let cbrt2 = 2.0_f64.cbrt();
    Ok(s / (3.0 * cbrt2 * a * b) - cbrt2 * s2 / (3.0 * a * b * s) + v / (3.0 * b))
}

/// Newton steps on `P(n) = p` from `n`, stopping at round-off.
///
/// A step that leaves `0 < n·b < V` or meets a non-positive slope keeps the
/// last good root.
fn refine_root(v: f64, p: f64, a: f64, b: f64, rt: f64, mut n: f64) -> f64 {
    for _ in 0..MAX_REFINE_STEPS {
        let free = v - b * n;
        if !(n > 0.0 && free > 0.0) {
            break;
        }
        let pressure = -a * n * n / (v * v) + n * rt / free;
        let slope = -2.0 * a * n / (v * v) + rt * v / (free * free);
        if !(slope > 0.0) {
            break;
        }
        let step = (pressure - p) / slope;
        let next = n - step;
        if !(next > 0.0 && next * b < v) {
            break;
        }
        n = next;
        if step.abs() <= 4.0 * f64::EPSILON * n {
            break;
        }
    }
    n
}

/// Pressure of one component holding `moles` in `volume`.
pub fn pressure_from_moles(
    volume: Volume,
    moles: Amount,
    temperature: Temperature,
    constants: VanDerWaalsConstant,
) -> GasResult<Pressure> {
    let n = in_moles(moles);
    if n <= 0.0 {
        return Ok(bar(0.0));
    }

    let VanDerWaalsConstant { a, b } = constants;
    let v = in_liters(volume);
    if b * n >= v {
        return Err(GasError::OutsideEnvelope {
            what: "moles exceed the co-volume limit",
        });
    }
    let rt = R_L_BAR * in_kelvin(temperature);
    Ok(bar(n * (-(a * n) / (v * v) - rt / (b * n - v))))
}

/// Slope dP/dn [bar/mol] of [`pressure_from_moles`] at fixed volume and temperature.
pub fn pressure_slope(
    volume: Volume,
    moles: Amount,
    temperature: Temperature,
    constants: VanDerWaalsConstant,
) -> f64 {
    let VanDerWaalsConstant { a, b } = constants;
    let v = in_liters(volume);
    let n = in_moles(moles);
    let rt = R_L_BAR * in_kelvin(temperature);
    let free = v - b * n;
    -2.0 * a * n / (v * v) + rt * v / (free * free)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gas::Gas;
    use gx_core::numeric::{Tolerances, nearly_equal};
    use gx_core::units::{celsius, k, liters};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        }
    }

    #[test]
    fn zero_pressure_is_zero_moles() {
        let n = moles_from_state(liters(12.0), bar(0.0), Gas::Oxygen.vdw_constants(), k(293.15))
            .unwrap();
        assert_eq!(in_moles(n), 0.0);

        let n = moles_from_state(liters(12.0), bar(-5.0), Gas::Oxygen.vdw_constants(), k(293.15))
            .unwrap();
        assert_eq!(in_moles(n), 0.0);
    }

    #[test]
    fn zero_moles_is_zero_pressure() {
        let p = pressure_from_moles(liters(12.0), mol(0.0), k(293.15), Gas::Helium.vdw_constants())
            .unwrap();
        assert_eq!(in_bar(p), 0.0);
    }

    #[test]
    fn nitrogen_at_200_bar_is_below_ideal() {
        let t = celsius(20.0);
        let n = moles_from_state(liters(12.0), bar(200.0), Gas::Nitrogen.vdw_constants(), t)
            .unwrap();
        let ideal = 200.0 * 12.0 / (R_L_BAR * in_kelvin(t));
        let n = in_moles(n);
        assert!(n < ideal, "n = {n}, ideal = {ideal}");
        assert!((n - 98.199).abs() < 1e-2, "n = {n}");
    }

    #[test]
    fn helium_is_less_compressible_than_ideal() {
        let t = celsius(20.0);
        let n = in_moles(
            moles_from_state(liters(12.0), bar(232.0), Gas::Helium.vdw_constants(), t).unwrap(),
        );
        let ideal = 232.0 * 12.0 / (R_L_BAR * in_kelvin(t));
        assert!(n < ideal);
        assert!(n > 0.8 * ideal);
    }

    #[test]
    fn roundtrip_every_gas() {
        for gas in Gas::ALL {
            for p in [1.0, 50.0, 200.0, 350.0] {
                for t in [-30.0, 20.0, 80.0] {
                    let c = gas.vdw_constants();
                    let n = moles_from_state(liters(12.0), bar(p), c, celsius(t)).unwrap();
                    let back = pressure_from_moles(liters(12.0), n, celsius(t), c).unwrap();
                    assert!(
                        nearly_equal(in_bar(back), p, tol()),
                        "{gas} at {p} bar, {t} C: {}",
                        in_bar(back)
                    );
                }
            }
        }
    }

    #[test]
    fn trace_pressures_follow_ideal_gas() {
        let t = celsius(20.0);
        for gas in Gas::ALL {
            for v in [0.5, 12.0, 1000.0] {
                for p in [1e-12, 1e-14] {
                    let n = in_moles(
                        moles_from_state(liters(v), bar(p), gas.vdw_constants(), t).unwrap(),
                    );
                    let ideal = p * v / (R_L_BAR * in_kelvin(t));
                    assert!(
                        nearly_equal(n, ideal, Tolerances { abs: 0.0, rel: 1e-9 }),
                        "{gas} {v} l at {p} bar: n = {n}, ideal = {ideal}"
                    );
                }
            }
        }
    }

    #[test]
    fn roundtrip_in_a_large_bank() {
        let t = celsius(-30.0);
        let c = Gas::Helium.vdw_constants();
        let n = moles_from_state(liters(1000.0), bar(1.0), c, t).unwrap();
        let back = in_bar(pressure_from_moles(liters(1000.0), n, t, c).unwrap());
        let tight = Tolerances {
            abs: 0.0,
            rel: 1e-13,
        };
        assert!(nearly_equal(back, 1.0, tight), "back = {back}");
    }

    #[test]
    fn too_many_moles_are_rejected() {
        let c = Gas::Nitrogen.vdw_constants();
        let result = pressure_from_moles(liters(1.0), mol(2.0 / c.b), k(293.15), c);
        assert!(matches!(result, Err(GasError::OutsideEnvelope { .. })));
    }

    #[test]
    fn slope_matches_finite_difference() {
        let c = Gas::Oxygen.vdw_constants();
        let t = celsius(15.0);
        let v = liters(10.0);
        let n = 40.0;
        let h = 1e-4;
        let p_hi = in_bar(pressure_from_moles(v, mol(n + h), t, c).unwrap());
        let p_lo = in_bar(pressure_from_moles(v, mol(n - h), t, c).unwrap());
        let fd = (p_hi - p_lo) / (2.0 * h);
        let slope = pressure_slope(v, mol(n), t, c);
        assert!((fd - slope).abs() < 1e-5 * slope.abs(), "fd={fd} slope={slope}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::gas::Gas;
    use gx_core::numeric::{Tolerances, nearly_equal};
    use gx_core::units::{celsius, liters};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip_across_diving_envelope(
            gas_index in 0usize..Gas::ALL.len(),
            p in 1.0_f64..350.0,
            t in -30.0_f64..80.0,
            v in 1.0_f64..50.0,
        ) {
            let c = Gas::ALL[gas_index].vdw_constants();
            let n = moles_from_state(liters(v), bar(p), c, celsius(t)).unwrap();
            let back = in_bar(pressure_from_moles(liters(v), n, celsius(t), c).unwrap());
            let tol = Tolerances { abs: 1e-9, rel: 1e-8 };
            prop_assert!(nearly_equal(back, p, tol), "p={} back={}", p, back);
        }

        #[test]
        fn dilute_roundtrip(
            gas_index in 0usize..Gas::ALL.len(),
            exponent in -15.0_f64..0.0,
            v in 0.5_f64..1000.0,
        ) {
            let c = Gas::ALL[gas_index].vdw_constants();
            let t = celsius(20.0);
            let p = 10f64.powf(exponent);
            let n = moles_from_state(liters(v), bar(p), c, t).unwrap();
            let back = in_bar(pressure_from_moles(liters(v), n, t, c).unwrap());
            let tol = Tolerances { abs: 0.0, rel: 1e-12 };
            prop_assert!(nearly_equal(back, p, tol), "p={} back={}", p, back);
        }

        #[test]
        fn moles_increase_with_pressure(
            gas_index in 0usize..Gas::ALL.len(),
            p in 1.0_f64..340.0,
        ) {
            let c = Gas::ALL[gas_index].vdw_constants();
            let t = celsius(20.0);
            let lo = in_moles(moles_from_state(liters(12.0), bar(p), c, t).unwrap());
            let hi = in_moles(moles_from_state(liters(12.0), bar(p + 10.0), c, t).unwrap());
            prop_assert!(hi > lo);
        }
    }
}
