//! Pressure equalization between connected cylinders.

use crate::cylinder::{Cylinder, CylinderList};
use crate::error::{TransferError, TransferResult};
use gx_core::units::{Pressure, in_bar, in_liters, liters};
use gx_gases::GasModel;
use tracing::debug;

/// Connect every cylinder in `group` and let the pressures settle.
///
/// The conserved content of the group is summed and mapped back to the one
/// pressure at which the combined volume holds it; every cylinder is then set
/// to that pressure. The group must not be empty.
pub fn equalize(group: &mut [&mut Cylinder], model: &dyn GasModel) -> TransferResult<Pressure> {
    if group.is_empty() {
        return Err(TransferError::EmptyGroup);
    }

    let mut total_volume = liters(0.0);
    let mut total_content = 0.0;
    for cylinder in group.iter() {
        total_volume += cylinder.volume();
        total_content += cylinder.content(model)?;
    }

    let pressure = model.pressure_from_content(total_volume, total_content)?;
    debug!(
        model = model.name(),
        cylinders = group.len(),
        volume_l = in_liters(total_volume),
        content = total_content,
        pressure_bar = in_bar(pressure),
        "equalized"
    );

    for cylinder in group.iter_mut() {
        cylinder.set_pressure(pressure);
    }
    Ok(pressure)
}

/// Equalize two cylinders through a single whip.
pub fn equalize_pair(
    a: &mut Cylinder,
    b: &mut Cylinder,
    model: &dyn GasModel,
) -> TransferResult<Pressure> {
    equalize(&mut [a, b], model)
}

/// Equalize every cylinder of a list, as when its manifold is opened.
pub fn equalize_list(list: &mut CylinderList, model: &dyn GasModel) -> TransferResult<Pressure> {
    let mut group: Vec<&mut Cylinder> = list.cylinders_mut().iter_mut().collect();
    equalize(&mut group, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gx_core::numeric::{Tolerances, nearly_equal};
    use gx_core::units::{bar, celsius};
    use gx_gases::{Gas, GasComposition, GasSystem};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        }
    }

    #[test]
    fn empty_group_is_rejected() {
        let model = GasSystem::IdealGas.model(&GasComposition::air(), celsius(20.0));
        let mut group: Vec<&mut Cylinder> = Vec::new();
        assert_eq!(
            equalize(&mut group, model.as_ref()),
            Err(TransferError::EmptyGroup)
        );
    }

    #[test]
    fn ideal_pair_is_volume_weighted() {
        let model = GasSystem::IdealGas.model(&GasComposition::air(), celsius(20.0));
        let mut a = Cylinder::new("a", liters(12.0), bar(210.0)).unwrap();
        let mut b = Cylinder::new("b", liters(8.5), bar(80.0)).unwrap();
        let p = equalize_pair(&mut a, &mut b, model.as_ref()).unwrap();

        let expected = (12.0 * 210.0 + 8.5 * 80.0) / 20.5;
        assert!(nearly_equal(in_bar(p), expected, tol()));
        assert_eq!(a.pressure(), p);
        assert_eq!(b.pressure(), p);
    }

    #[test]
    fn single_cylinder_is_unchanged() {
        let comp = GasComposition::from_fractions(&[(Gas::Oxygen, 0.32)]).unwrap();
        let model = GasSystem::VanDerWaals.model(&comp, celsius(20.0));
        let mut list = CylinderList::single("destination", liters(15.0), bar(180.0)).unwrap();
        let p = equalize_list(&mut list, model.as_ref()).unwrap();
        assert!(nearly_equal(in_bar(p), 180.0, tol()));
    }

    #[test]
    fn vdw_pair_conserves_moles() {
        let comp = GasComposition::from_fractions(&[(Gas::Oxygen, 0.18), (Gas::Helium, 0.45)])
            .unwrap();
        let model = GasSystem::VanDerWaals.model(&comp, celsius(20.0));
        let mut a = Cylinder::new("a", liters(12.0), bar(232.0)).unwrap();
        let mut b = Cylinder::new("b", liters(7.0), bar(20.0)).unwrap();
        let before = a.content(model.as_ref()).unwrap() + b.content(model.as_ref()).unwrap();

        let p = equalize_pair(&mut a, &mut b, model.as_ref()).unwrap();
        let after = a.content(model.as_ref()).unwrap() + b.content(model.as_ref()).unwrap();
        assert!(nearly_equal(before, after, tol()), "{before} vs {after}");
        assert!(in_bar(p) > 20.0 && in_bar(p) < 232.0);
    }
}
