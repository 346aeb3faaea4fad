use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use nbody_core::{EnergyReport, Preset, Scenario, SimulationResult};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nbody")]
#[command(about = "Direct-summation N-body simulation with energy tracking", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario described in a YAML file
    Run {
        /// Path to the scenario file
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run one of the built-in scenarios
    Preset {
        /// Scenario name: three-body or binary
        #[arg(value_parser = parse_preset)]
        name: Preset,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Override the number of steps
    #[arg(long)]
    steps: Option<usize>,

    /// Override the time step
    #[arg(long)]
    dt: Option<f64>,

    /// Print one energy row every N steps (0 prints none)
    #[arg(long, default_value_t = 100)]
    every: usize,

    /// Print the final position of each body
    #[arg(long)]
    positions: bool,
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::from_name(name).ok_or_else(|| {
        let known: Vec<_> = Preset::ALL.iter().map(Preset::name).collect();
        format!("unknown preset '{}', expected one of: {}", name, known.join(", "))
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Run { file, output } => {
            load_scenario(&file).and_then(|scenario| run_scenario(scenario, &output))
        }
        Commands::Preset { name, output } => run_scenario(name.scenario(), &output),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let scenario: Scenario = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    log::debug!("loaded scenario {} with {} bodies", path.display(), scenario.bodies.len());
    Ok(scenario)
}

fn run_scenario(mut scenario: Scenario, output: &OutputArgs) -> Result<()> {
    if let Some(steps) = output.steps {
        scenario.parameters.steps = steps;
    }
    if let Some(dt) = output.dt {
        scenario.parameters.dt = dt;
    }

    let system = scenario.build().context("Invalid configuration")?;
    let initial = system.energy().context("Energy error in initial state")?;
    let result = system.run().context("Energy error")?;

    print_energy_rows(&result, output.every);
    if output.positions {
        print_positions(&result);
    }

    println!("{}", EnergyReport::new(initial, &result));
    Ok(())
}

fn print_energy_rows(result: &SimulationResult, every: usize) {
    if every == 0 || result.steps() == 0 {
        return;
    }

    println!("{:>8} {:>22} {:>22} {:>22}", "step", "kinetic", "potential", "total");
    for (k, (kinetic, potential)) in result
        .kinetic_energy
        .iter()
        .zip(&result.potential_energy)
        .enumerate()
    {
        let step = k + 1;
        if step % every == 0 || step == result.steps() {
            println!(
                "{:>8} {:>22.12e} {:>22.12e} {:>22.12e}",
                step,
                kinetic,
                potential,
                kinetic + potential
            );
        }
    }
}

fn print_positions(result: &SimulationResult) {
    for (i, trajectory) in result.trajectories.iter().enumerate() {
        if let Some(last) = trajectory.last() {
            println!("body {} = ({:.9}, {:.9}, {:.9})", i, last.x, last.y, last.z);
        }
    }
}
