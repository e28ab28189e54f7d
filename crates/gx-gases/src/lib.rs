//! gx-gases: gas property calculations for gasxfer.
//!
//! Provides:
//! - Gas definitions with Van der Waals constants and molar weights
//! - Composition handling (explicit fractions, nitrogen remainder)
//! - Van der Waals solver for a single component (closed-form cubic root)
//! - Ideal gas helpers
//! - `GasModel` trait selecting the equation of state for a run
//!
//! # Example
//!
//! ```
//! use gx_core::units::{bar, celsius, in_bar, liters};
//! use gx_gases::{GasComposition, GasModel, GasSystem};
//!
//! let model = GasSystem::VanDerWaals.model(&GasComposition::air(), celsius(20.0));
//! let moles = model.content(liters(12.0), bar(232.0)).unwrap();
//! let p = model.pressure_from_content(liters(12.0), moles).unwrap();
//! assert!((in_bar(p) - 232.0).abs() < 1e-6);
//! ```

pub mod composition;
pub mod error;
pub mod gas;
pub mod ideal;
pub mod model;
pub mod vdw;

// Re-exports for ergonomics
pub use composition::{GasComposition, partial_pressure};
pub use error::{GasError, GasResult};
pub use gas::{AtomicWeight, Gas, VanDerWaalsConstant};
pub use ideal::pressure_from_volumes;
pub use model::{GasModel, GasSystem, IdealGas, VanDerWaals, gas_weight_from_moles};
