//! gx-core: stable foundation for gasxfer.
//!
//! Contains:
//! - units (uom types in the liter/bar/kelvin/gram/mole convention + constructors)
//! - numeric (comparison slack and finite/positive guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
