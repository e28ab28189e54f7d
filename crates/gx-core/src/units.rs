// gx-core/src/units.rs

use uom::si::f64::{
    AmountOfSubstance as UomAmountOfSubstance, Mass as UomMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
};

// Public canonical unit types (f64). Values are stored in SI by uom; the
// constructors and accessors below speak the diving convention of liters,
// bar, kelvin, grams and moles.
pub type Amount = UomAmountOfSubstance;
pub type Mass = UomMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    k(v + constants::ZERO_CELSIUS_K)
}

#[inline]
pub fn grams(v: f64) -> Mass {
    use uom::si::mass::gram;
    Mass::new::<gram>(v)
}

#[inline]
pub fn mol(v: f64) -> Amount {
    use uom::si::amount_of_substance::mole;
    Amount::new::<mole>(v)
}

#[inline]
pub fn in_liters(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}

#[inline]
pub fn in_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

#[inline]
pub fn in_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn in_celsius(t: Temperature) -> f64 {
    in_kelvin(t) - constants::ZERO_CELSIUS_K
}

#[inline]
pub fn in_grams(m: Mass) -> f64 {
    use uom::si::mass::gram;
    m.get::<gram>()
}

#[inline]
pub fn in_moles(n: Amount) -> f64 {
    use uom::si::amount_of_substance::mole;
    n.get::<mole>()
}

pub mod constants {
    /// Gas constant in L·bar/(mol·K), at the precision the gas tables use.
    pub const R_L_BAR: f64 = 0.0831;

    /// Molar volume at reference conditions [L/mol].
    pub const MOLAR_VOLUME_L: f64 = 22.4;

    pub const ZERO_CELSIUS_K: f64 = 273.15;
}
