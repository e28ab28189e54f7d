//! Plain-text report of the scenarios run for one setup.
//!
//! Each report is a [`fmt::Display`] view over the summaries, printed as-is by
//! the binary.

use std::fmt;

use gx_core::units::{in_bar, in_grams, in_liters};
use gx_transfer::{CylinderConfiguration, CylinderSummary};

/// Gas held by both sides before anything is connected.
pub struct BeforeTransfers<'a> {
    pub config: &'a CylinderConfiguration,
    pub summary: &'a CylinderSummary,
}

impl fmt::Display for BeforeTransfers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Before any transfers:")?;
        writeln!(
            f,
            "Source cylinders: {:.0}l of gas, pressure {:.0}bar",
            in_liters(self.summary.source.initial_gas_volume),
            in_bar(self.config.source_pressure)
        )?;
        writeln!(
            f,
            "Destination cylinders: {:.0}l of gas, pressure {:.0}bar",
            in_liters(self.summary.destination.initial_gas_volume),
            in_bar(self.config.destination_pressure)
        )?;
        writeln!(f)
    }
}

/// End state of one scenario, with the individual whip transfers when verbose.
pub struct Scenario<'a> {
    pub summary: &'a CylinderSummary,
    pub verbose: bool,
}

impl fmt::Display for Scenario<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "Equalizing with {}", summary.label)?;
        if self.verbose {
            for step in &summary.steps {
                writeln!(
                    f,
                    "Step {}: from {} to {}; transferred {:.0}l of gas",
                    step.step,
                    step.from,
                    step.to,
                    in_liters(step.transferred)
                )?;
            }
        }
        writeln!(
            f,
            "Source cylinders: {:.0}l, {:.0}bar",
            in_liters(summary.source.gas_volume),
            in_bar(summary.source.pressure)
        )?;
        writeln!(
            f,
            "Destination cylinders: {:.0}l, {:.0}bar",
            in_liters(summary.destination.gas_volume),
            in_bar(summary.destination.pressure)
        )?;
        writeln!(f)
    }
}

/// Comparison table; improvement is relative to the lowest destination pressure.
pub struct SummaryTable<'a> {
    pub summaries: &'a [CylinderSummary],
    pub verbose: bool,
}

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let worst = self
            .summaries
            .iter()
            .map(|s| in_bar(s.destination.pressure))
            .fold(f64::INFINITY, f64::min);

        writeln!(f, "{:>30} src bar  src l  dst bar  dst l improvement", "")?;
        for summary in self.summaries {
            let destination_bar = in_bar(summary.destination.pressure);
            let improvement = if worst > 0.0 {
                100.0 * (destination_bar - worst) / worst
            } else {
                0.0
            };
            writeln!(
                f,
                "{:>30} {:>7.0} {:>6.0} {:>8.0} {:>6.0} {:>10.2}%",
                summary.label.as_str(),
                in_bar(summary.source.pressure),
                in_liters(summary.source.gas_volume),
                destination_bar,
                in_liters(summary.destination.gas_volume),
                improvement
            )?;
            if self.verbose {
                writeln!(
                    f,
                    "{:>28}Gas weight {:>6.0}g         {:>6.0}g",
                    "",
                    in_grams(summary.source.gas_weight),
                    in_grams(summary.destination.gas_weight)
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gx_core::units::{bar, celsius, liters};
    use gx_gases::{GasComposition, GasSystem};
    use gx_transfer::run_configuration;

    fn config() -> CylinderConfiguration {
        CylinderConfiguration {
            source_volume: liters(24.0),
            source_pressure: bar(210.0),
            source_twinset: true,
            destination_volume: liters(17.0),
            destination_pressure: bar(80.0),
            destination_twinset: true,
        }
    }

    fn summaries() -> Vec<CylinderSummary> {
        let model = GasSystem::IdealGas.model(&GasComposition::air(), celsius(20.0));
        config()
            .manifold_configurations()
            .iter()
            .map(|c| run_configuration(c, model.as_ref()).unwrap())
            .collect()
    }

    #[test]
    fn scenario_report() {
        let all = summaries();
        let text = Scenario { summary: &all[0], verbose: true }.to_string();
        assert!(text.starts_with("Equalizing with both manifolds closed\n"));
        assert!(text.contains("Step 1: from left to left; transferred"));
        assert!(text.contains("Step 4: from right to right"));
        assert!(text.contains("Source cylinders: 3432l, 143bar"));
        assert!(text.contains("Destination cylinders: 2968l, 175bar"));

        let quiet = Scenario { summary: &all[0], verbose: false }.to_string();
        assert!(!quiet.contains("Step"));
    }

    #[test]
    fn before_report() {
        let all = summaries();
        let text = BeforeTransfers { config: &config(), summary: &all[0] }.to_string();
        assert!(text.contains("Source cylinders: 5040l of gas, pressure 210bar"));
        assert!(text.contains("Destination cylinders: 1360l of gas, pressure 80bar"));
    }

    #[test]
    fn before_report_matches_for_every_scenario() {
        let setups = config().manifold_configurations();
        let all = summaries();
        assert_eq!(setups.len(), all.len());
        for (setup, summary) in setups.iter().zip(&all) {
            let text = BeforeTransfers { config: setup, summary }.to_string();
            assert!(text.starts_with("Before any transfers:\n"), "{}", summary.label);
            assert!(text.contains("5040l of gas, pressure 210bar"), "{}", summary.label);
            assert!(text.contains("1360l of gas, pressure 80bar"), "{}", summary.label);
        }
    }

    #[test]
    fn improvement_is_relative_to_worst() {
        let text = SummaryTable { summaries: &summaries(), verbose: false }.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("src bar  src l  dst bar  dst l improvement"));

        let open = lines[4];
        assert!(open.trim_start().starts_with("all manifolds open"));
        assert!(open.ends_with("0.00%"));

        // 174.5674 / 156.0976 - 1
        assert!(lines[1].ends_with("11.83%"), "{}", lines[1]);
    }

    #[test]
    fn verbose_table_adds_weights() {
        let text = SummaryTable { summaries: &summaries(), verbose: true }.to_string();
        assert_eq!(text.lines().filter(|l| l.contains("Gas weight")).count(), 4);
    }
}
