//! Run plan schema definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A saved transfer setup: both sides, the mix, temperature and gas system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunPlan {
    pub version: u32,
    pub name: String,
    pub source: CylinderDef,
    pub destination: CylinderDef,
    /// Explicit gas fractions keyed by gas (`"He"`, `"O2"`, ...); nitrogen is
    /// the remainder.
    #[serde(default = "default_gas")]
    pub gas: BTreeMap<String, f64>,
    #[serde(default = "default_temperature_c")]
    pub temperature_c: f64,
    #[serde(default)]
    pub gas_system: GasSystemDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CylinderDef {
    /// Combined volume; for a twinset both halves together.
    pub volume_l: f64,
    pub pressure_bar: f64,
    #[serde(default)]
    pub twinset: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GasSystemDef {
    Ideal,
    #[default]
    VanDerWaals,
}

fn default_gas() -> BTreeMap<String, f64> {
    BTreeMap::from([("O2".to_string(), 0.21)])
}

fn default_temperature_c() -> f64 {
    20.0
}
