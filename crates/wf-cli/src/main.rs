//! WheelForge command-line driver
//!
//! Usage:
//!   wheelforge simulate --preset 1M        - Run a simulation and print statistics
//!   wheelforge predict --anchor 17         - Simulate, then predict the next number
//!   wheelforge presets                     - List simulation presets
//!
//! `RUST_LOG=debug` shows runner and worker activity.

mod report;

use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use wf_core::WheelNumber;
use wf_predict::{PredictionResult, predict};
use wf_sim::{SimulationConfig, SimulationController, SimulationResult, SimulationSize};
use wf_stats::{Statistics, compute_statistics};

#[derive(Parser)]
#[command(name = "wheelforge", about = "European roulette simulator and statistics", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print its statistics
    Simulate {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Run a simulation, then predict the next number
    Predict {
        /// Number just spun (0-36); defaults to the last simulated spin
        #[arg(short, long)]
        anchor: Option<u8>,

        /// How many trailing spins count as recent history
        #[arg(short, long, default_value_t = 20)]
        recent: usize,

        #[command(flatten)]
        run: RunArgs,
    },
    /// List simulation presets
    Presets,
}

#[derive(Args)]
struct RunArgs {
    /// Number of spins
    #[arg(short, long, conflicts_with = "preset")]
    size: Option<usize>,

    /// Preset size (10K, 150K, 350K, 500K, 1M)
    #[arg(short, long)]
    preset: Option<SimulationSize>,

    /// JSON simulation config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SimulationConfig::default(),
        };
        if let Some(preset) = self.preset {
            config.size = preset.as_usize();
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        config.validate().context("Invalid simulation config")?;
        Ok(config)
    }
}

#[derive(Serialize)]
struct SimulationReport<'a> {
    total_spins: usize,
    timestamp_ms: i64,
    statistics: &'a Statistics,
}

#[derive(Serialize)]
struct PredictionReport<'a> {
    anchor: Option<WheelNumber>,
    recent: &'a [WheelNumber],
    prediction: &'a PredictionResult,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { run } => simulate(&run),
        Commands::Predict { anchor, recent, run } => run_prediction(&run, anchor, recent),
        Commands::Presets => {
            list_presets();
            Ok(())
        }
    }
}

fn simulate(args: &RunArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let result = run_simulation(config, !args.json)?;
    let stats = compute_statistics(&result.spins).context("Failed to compute statistics")?;

    if args.json {
        let report = SimulationReport {
            total_spins: result.total_spins,
            timestamp_ms: result.timestamp_ms,
            statistics: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_statistics(&stats);
    }
    Ok(())
}

fn run_prediction(args: &RunArgs, anchor: Option<u8>, recent: usize) -> Result<()> {
    let anchor = anchor
        .map(WheelNumber::new)
        .transpose()
        .context("Anchor must be between 0 and 36")?;

    let config = args.resolve_config()?;
    let result = run_simulation(config, !args.json)?;
    let stats = compute_statistics(&result.spins).context("Failed to compute statistics")?;
    let recent_spins = result.spins.recent(recent);
    let prediction = predict(anchor, &stats, recent_spins);

    if args.json {
        let report = PredictionReport {
            anchor,
            recent: recent_spins,
            prediction: &prediction,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_prediction(anchor, recent_spins, &prediction);
    }
    Ok(())
}

/// Run to completion, drawing a progress line on stderr when `show_progress`
fn run_simulation(config: SimulationConfig, show_progress: bool) -> Result<SimulationResult> {
    let size = config.size;
    if show_progress {
        eprintln!("🎲 Simulating {} spins...", size);
    }

    let mut controller = SimulationController::new(config);
    controller.start(size).context("Failed to start simulation")?;

    if controller.in_background() {
        while !controller.poll().context("Simulation failed")? {
            if show_progress {
                let progress = controller.progress();
                eprint!("\r   {:>6.1}%  {}/{}", progress.percentage, progress.current, progress.total);
                let _ = std::io::stderr().flush();
            }
            thread::sleep(Duration::from_millis(50));
        }
        if show_progress {
            eprintln!();
        }
    }

    let Some(result) = controller.take_result() else {
        bail!("Simulation finished without a result");
    };
    if show_progress {
        eprintln!("✅ {} spins complete\n", result.total_spins);
    }
    Ok(result)
}

fn list_presets() {
    let default = SimulationSize::default();
    for preset in SimulationSize::ALL {
        let marker = if preset == default { " (default)" } else { "" };
        println!("  {:<5} {:>9} spins{}", preset.label(), preset.as_usize(), marker);
    }
}
