//! Gas transfer between cylinders.
//!
//! Builds source and destination cylinder lists from a configuration,
//! equalizes them pair by pair through a single whip and finally across the
//! destination manifold, and summarizes the end state of both sides. The
//! equation of state is supplied as a [`gx_gases::GasModel`].

pub mod config;
pub mod cylinder;
pub mod equalize;
pub mod error;
pub mod scenario;

pub use config::{CylinderConfiguration, validate_temperature};
pub use cylinder::{Cylinder, CylinderList, build_cylinder_lists};
pub use equalize::{equalize, equalize_list, equalize_pair};
pub use error::{TransferError, TransferResult};
pub use scenario::{
    CylinderSummary, ScenarioLabel, SideSummary, TransferOrder, TransferStep, run_configuration,
    run_scenario, run_scenario_with_order,
};
