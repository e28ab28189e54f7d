//! One transfer scenario: pairwise whip transfers, then the destination
//! manifold is opened.

use std::fmt;

use crate::config::CylinderConfiguration;
use crate::cylinder::CylinderList;
use crate::equalize::{equalize_list, equalize_pair};
use crate::error::{TransferError, TransferResult};
use gx_core::units::{Mass, Pressure, Volume};
use gx_core::units::{in_bar, in_liters};
use gx_gases::GasModel;
use tracing::{debug, info};

/// Which manifolds are closed in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioLabel {
    BothManifoldsClosed,
    SourceManifoldClosed,
    DestinationManifoldClosed,
    AllManifoldsOpen,
}

impl ScenarioLabel {
    pub fn from_twinsets(source: bool, destination: bool) -> Self {
        match (source, destination) {
            (true, true) => ScenarioLabel::BothManifoldsClosed,
            (true, false) => ScenarioLabel::SourceManifoldClosed,
            (false, true) => ScenarioLabel::DestinationManifoldClosed,
            (false, false) => ScenarioLabel::AllManifoldsOpen,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioLabel::BothManifoldsClosed => "both manifolds closed",
            ScenarioLabel::SourceManifoldClosed => "source manifold closed",
            ScenarioLabel::DestinationManifoldClosed => "destination manifold closed",
            ScenarioLabel::AllManifoldsOpen => "all manifolds open",
        }
    }
}

impl fmt::Display for ScenarioLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which source/destination pairs are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferOrder {
    /// Each source cylinder is emptied into every destination cylinder in turn.
    #[default]
    SourceMajor,
    /// Each destination cylinder is filled from every source cylinder in turn.
    DestinationMajor,
}

impl TransferOrder {
    /// `(source, destination)` index pairs in visiting order.
    pub fn pairs(self, sources: usize, destinations: usize) -> Vec<(usize, usize)> {
        match self {
            TransferOrder::SourceMajor => (0..sources)
                .flat_map(|i| (0..destinations).map(move |j| (i, j)))
                .collect(),
            TransferOrder::DestinationMajor => (0..destinations)
                .flat_map(|j| (0..sources).map(move |i| (i, j)))
                .collect(),
        }
    }
}

/// One whip transfer between a source and a destination cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferStep {
    /// 1-based step number.
    pub step: usize,
    pub from: String,
    pub to: String,
    /// Gas volume gained by the destination cylinder.
    pub transferred: Volume,
    /// Pressure both cylinders settled to.
    pub pressure: Pressure,
}

/// End state of one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideSummary {
    pub volume: Volume,
    pub initial_gas_volume: Volume,
    pub gas_volume: Volume,
    /// Pressure the side settles to with its manifold open.
    pub pressure: Pressure,
    pub gas_weight: Mass,
}

/// Result of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderSummary {
    pub label: ScenarioLabel,
    pub source: SideSummary,
    pub destination: SideSummary,
    pub steps: Vec<TransferStep>,
}

/// Run the transfer in source-major order.
pub fn run_scenario(
    source: CylinderList,
    destination: CylinderList,
    model: &dyn GasModel,
) -> TransferResult<CylinderSummary> {
    run_scenario_with_order(source, destination, model, TransferOrder::SourceMajor)
}

/// Equalize every source/destination pair in `order`, then the whole
/// destination group.
///
/// The final state does not depend on the order: the two orders only swap
/// steps that touch disjoint cylinders.
pub fn run_scenario_with_order(
    mut source: CylinderList,
    mut destination: CylinderList,
    model: &dyn GasModel,
    order: TransferOrder,
) -> TransferResult<CylinderSummary> {
    if source.is_empty() || destination.is_empty() {
        return Err(TransferError::EmptyGroup);
    }

    let label = ScenarioLabel::from_twinsets(source.is_twinset(), destination.is_twinset());
    info!(scenario = %label, model = model.name(), "running transfer");

    let source_initial = source.total_gas_volume(model)?;
    let destination_initial = destination.total_gas_volume(model)?;

    let mut steps = Vec::new();
    for (n, (i, j)) in order
        .pairs(source.len(), destination.len())
        .into_iter()
        .enumerate()
    {
        let before = destination.cylinders()[j].gas_volume(model)?;
        let pressure = equalize_pair(
            &mut source.cylinders_mut()[i],
            &mut destination.cylinders_mut()[j],
            model,
        )?;
        let after = destination.cylinders()[j].gas_volume(model)?;

        let step = TransferStep {
            step: n + 1,
            from: source.cylinders()[i].description().to_string(),
            to: destination.cylinders()[j].description().to_string(),
            transferred: after - before,
            pressure,
        };
        debug!(
            step = step.step,
            from = %step.from,
            to = %step.to,
            transferred_l = in_liters(step.transferred),
            pressure_bar = in_bar(pressure),
            "transfer step"
        );
        steps.push(step);
    }

    equalize_list(&mut destination, model)?;

    let summary = CylinderSummary {
        label,
        source: side_summary(&source, source_initial, model)?,
        destination: side_summary(&destination, destination_initial, model)?,
        steps,
    };
    info!(
        scenario = %label,
        source_bar = in_bar(summary.source.pressure),
        destination_bar = in_bar(summary.destination.pressure),
        "transfer finished"
    );
    Ok(summary)
}

/// Validate a configuration and run its scenario.
pub fn run_configuration(
    config: &CylinderConfiguration,
    model: &dyn GasModel,
) -> TransferResult<CylinderSummary> {
    config.validate()?;
    let (source, destination) = CylinderList::from_configuration(config)?;
    run_scenario(source, destination, model)
}

fn side_summary(
    list: &CylinderList,
    initial_gas_volume: Volume,
    model: &dyn GasModel,
) -> TransferResult<SideSummary> {
    Ok(SideSummary {
        volume: list.total_volume(),
        initial_gas_volume,
        gas_volume: list.total_gas_volume(model)?,
        pressure: list.equalized_pressure(model)?,
        gas_weight: list.total_gas_weight(model)?,
    })
}
