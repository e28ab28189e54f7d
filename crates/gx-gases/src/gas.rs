//! Gas definitions and their constant tables.

use crate::error::GasError;

/// Molar weight [g/mol] as listed in the gas tables.
///
/// The tables hold per-atom weights for the diatomic gases, so weights derived
/// from them are per mole of atoms.
pub type AtomicWeight = f64;

/// Van der Waals equation constants.
///
/// `a` is in L²·bar/mol², `b` in L/mol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanDerWaalsConstant {
    pub a: f64,
    pub b: f64,
}

/// Gases a breathing mix may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gas {
    /// Helium (He)
    Helium,
    /// Oxygen (O₂)
    Oxygen,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Argon (Ar)
    Argon,
    /// Neon (Ne)
    Neon,
    /// Hydrogen (H₂)
    Hydrogen,
}

impl Gas {
    pub const ALL: [Gas; 6] = [
        Gas::Helium,
        Gas::Oxygen,
        Gas::Nitrogen,
        Gas::Argon,
        Gas::Neon,
        Gas::Hydrogen,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Gas::Helium => "He",
            Gas::Oxygen => "O2",
            Gas::Nitrogen => "N2",
            Gas::Argon => "Ar",
            Gas::Neon => "Ne",
            Gas::Hydrogen => "H2",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gas::Helium => "Helium",
            Gas::Oxygen => "Oxygen",
            Gas::Nitrogen => "Nitrogen",
            Gas::Argon => "Argon",
            Gas::Neon => "Neon",
            Gas::Hydrogen => "Hydrogen",
        }
    }

    pub fn vdw_constants(&self) -> VanDerWaalsConstant {
        let (a, b) = match self {
            Gas::Helium => (0.0346, 0.0238),
            Gas::Oxygen => (1.382, 0.03186),
            Gas::Nitrogen => (1.370, 0.0387),
            Gas::Argon => (1.355, 0.03201),
            Gas::Neon => (0.2135, 0.01709),
            Gas::Hydrogen => (0.2476, 0.02661),
        };
        VanDerWaalsConstant { a, b }
    }

    pub fn atomic_weight(&self) -> AtomicWeight {
        match self {
            Gas::Helium => 4.002602,
            Gas::Oxygen => 15.999,
            Gas::Nitrogen => 14.0067,
            Gas::Argon => 39.948,
            Gas::Neon => 20.1797,
            Gas::Hydrogen => 1.00784,
        }
    }
}

impl std::fmt::Display for Gas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Gas {
    type Err = GasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HE" | "HELIUM" => Ok(Gas::Helium),
            "O2" | "OXYGEN" => Ok(Gas::Oxygen),
            "N2" | "NITROGEN" => Ok(Gas::Nitrogen),
            "AR" | "ARGON" => Ok(Gas::Argon),
            "NE" | "NEON" => Ok(Gas::Neon),
            "H2" | "HYDROGEN" => Ok(Gas::Hydrogen),
            _ => Err(GasError::UnknownGas {
                name: s.to_string(),
            }),
        }
    }
}
