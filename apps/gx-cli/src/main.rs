use clap::Parser;
use std::path::PathBuf;

use gx_core::units::{bar, celsius, in_celsius, liters};
use gx_gases::{Gas, GasComposition, GasSystem};
use gx_plan::ResolvedPlan;
use gx_transfer::{CylinderConfiguration, run_configuration, validate_temperature};
use tracing::Level;

mod error;
mod report;

use error::CliResult;
use report::{BeforeTransfers, Scenario, SummaryTable};

#[derive(Parser, Debug)]
#[command(name = "gx-cli")]
#[command(
    about = "Gas transfer planner - equalize cylinders and twinsets through a whip",
    long_about = None
)]
struct Cli {
    /// Source cylinder volume in liters (both halves for a twinset)
    #[arg(long, default_value_t = 24.0)]
    source_cylinder_volume: f64,

    /// Source cylinder pressure in bar
    #[arg(long, default_value_t = 232.0)]
    source_cylinder_pressure: f64,

    /// Source cylinder is a twinset with a closeable manifold
    #[arg(long)]
    source_cylinder_twinset: bool,

    /// Destination cylinder volume in liters (both halves for a twinset)
    #[arg(long, default_value_t = 24.0)]
    destination_cylinder_volume: f64,

    /// Destination cylinder pressure in bar
    #[arg(long, default_value_t = 100.0)]
    destination_cylinder_pressure: f64,

    /// Destination cylinder is a twinset with a closeable manifold
    #[arg(long)]
    destination_cylinder_twinset: bool,

    /// Gas temperature in celsius
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    temperature: f64,

    /// Fraction of helium (0..1)
    #[arg(long, default_value_t = 0.0)]
    helium: f64,

    /// Fraction of oxygen (0..1)
    #[arg(long, default_value_t = 0.21)]
    oxygen: f64,

    /// Fraction of neon (0..1)
    #[arg(long, default_value_t = 0.0)]
    neon: f64,

    /// Fraction of argon (0..1)
    #[arg(long, default_value_t = 0.0)]
    argon: f64,

    /// Fraction of hydrogen (0..1)
    #[arg(long, default_value_t = 0.0)]
    hydrogen: f64,

    /// Use ideal gas equations instead of Van der Waals
    #[arg(long)]
    use_ideal_gas: bool,

    /// Read cylinders, gas and temperature from a YAML or JSON plan file
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Print individual transfer steps and gas weights
    #[arg(long)]
    verbose: bool,

    /// Print debug information
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn configuration(&self) -> CylinderConfiguration {
        CylinderConfiguration {
            source_volume: liters(self.source_cylinder_volume),
            source_pressure: bar(self.source_cylinder_pressure),
            source_twinset: self.source_cylinder_twinset,
            destination_volume: liters(self.destination_cylinder_volume),
            destination_pressure: bar(self.destination_cylinder_pressure),
            destination_twinset: self.destination_cylinder_twinset,
        }
    }

    fn resolve(&self) -> CliResult<ResolvedPlan> {
        if let Some(path) = &self.plan {
            let mut resolved = gx_plan::load(path)?.resolve()?;
            if self.use_ideal_gas {
                resolved.gas_system = GasSystem::IdealGas;
            }
            return Ok(resolved);
        }

        let temperature = celsius(self.temperature);
        validate_temperature(temperature)?;
        let composition = GasComposition::from_fractions(&[
            (Gas::Helium, self.helium),
            (Gas::Oxygen, self.oxygen),
            (Gas::Neon, self.neon),
            (Gas::Argon, self.argon),
            (Gas::Hydrogen, self.hydrogen),
        ])?;
        let configuration = self.configuration();
        configuration.validate()?;

        Ok(ResolvedPlan {
            configuration,
            composition,
            temperature,
            gas_system: if self.use_ideal_gas {
                GasSystem::IdealGas
            } else {
                GasSystem::VanDerWaals
            },
        })
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> CliResult<()> {
    let inputs = cli.resolve()?;
    let model = inputs
        .gas_system
        .model(&inputs.composition, inputs.temperature);
    tracing::info!(
        model = model.name(),
        temperature_c = in_celsius(inputs.temperature),
        "starting"
    );

    let mut summaries = Vec::new();
    for config in inputs.configuration.manifold_configurations().iter() {
        let summary = run_configuration(config, model.as_ref())?;
        if cli.verbose {
            print!("{}", BeforeTransfers { config, summary: &summary });
        }
        print!("{}", Scenario { summary: &summary, verbose: cli.verbose });
        summaries.push(summary);
    }
    print!("{}", SummaryTable { summaries: &summaries, verbose: cli.verbose });
    Ok(())
}
