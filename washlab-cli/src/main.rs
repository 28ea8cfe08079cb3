//! WashLab CLI: run, params, and config commands.
//!
//! Commands:
//! - `run`: generate the wash-trade sequence, print narrative, tape and chart
//! - `params`: list every parameter with its range, step and default
//! - `init-config`: write a default TOML config

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use washlab_core::{ParamId, SimulationParameters};
use washlab_runner::reporting::ChartSize;
use washlab_runner::{
    export_json, render_event_table, render_narrative, render_price_chart, run_simulation,
    save_artifacts, SimulationConfig, SimulationRun,
};

#[derive(Parser)]
#[command(
    name = "washlab",
    about = "WashLab CLI: wash-trade pump simulator for an illiquid option"
)]
struct Cli {
    /// Log progress to stderr (info level).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the event sequence and print it.
    Run {
        /// Path to a TOML config file. Flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: ParamOverrides,

        /// Save manifest, run JSON and CSVs under this directory.
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Also write a Markdown report (requires --output-dir).
        #[arg(long, default_value_t = false)]
        report: bool,

        /// Print the whole run as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Skip the ASCII price chart.
        #[arg(long, default_value_t = false)]
        no_chart: bool,
    },
    /// List parameter ranges, steps and defaults.
    Params,
    /// Write a default TOML config.
    InitConfig {
        /// Destination file.
        #[arg(default_value = "washlab.toml")]
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

/// Per-parameter overrides, applied on top of the config or the defaults.
#[derive(Args, Debug, Default)]
struct ParamOverrides {
    #[arg(long)]
    fair_price: Option<f64>,
    #[arg(long)]
    algo_bid: Option<f64>,
    #[arg(long)]
    algo_ask: Option<f64>,
    #[arg(long)]
    human_limit_buy_price: Option<f64>,
    #[arg(long)]
    pump_start_price: Option<f64>,
    #[arg(long)]
    pump_step: Option<f64>,
    #[arg(long)]
    pump_trade_size: Option<f64>,
    #[arg(long)]
    normal_buyer_size: Option<f64>,
}

impl ParamOverrides {
    fn value(&self, id: ParamId) -> Option<f64> {
        match id {
            ParamId::FairPrice => self.fair_price,
            ParamId::AlgoBid => self.algo_bid,
            ParamId::AlgoAsk => self.algo_ask,
            ParamId::HumanLimitBuyPrice => self.human_limit_buy_price,
            ParamId::PumpStartPrice => self.pump_start_price,
            ParamId::PumpStep => self.pump_step,
            ParamId::PumpTradeSize => self.pump_trade_size,
            ParamId::NormalBuyerSize => self.normal_buyer_size,
        }
    }

    fn apply(&self, mut params: SimulationParameters) -> SimulationParameters {
        for id in ParamId::ALL {
            if let Some(value) = self.value(id) {
                debug!(param = id.name(), value, "override");
                params = params.with(id, value);
            }
        }
        params
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            overrides,
            output_dir,
            report,
            json,
            no_chart,
        } => run_cmd(
            config.as_deref(),
            &overrides,
            output_dir.as_deref(),
            report,
            json,
            no_chart,
        ),
        Commands::Params => {
            print_params();
            Ok(())
        }
        Commands::InitConfig { path, force } => run_init_config(&path, force),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Config (or defaults), then flag overrides, then validation.
fn resolve_params(
    config_path: Option<&Path>,
    overrides: &ParamOverrides,
) -> Result<SimulationParameters> {
    let base = match config_path {
        Some(path) => {
            let config = SimulationConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            info!(path = %path.display(), "config loaded");
            config.parameters
        }
        None => SimulationParameters::default(),
    };

    let params = overrides.apply(base);
    params.validate()?;
    params.check_ranges()?;
    Ok(params)
}

fn run_cmd(
    config_path: Option<&Path>,
    overrides: &ParamOverrides,
    output_dir: Option<&Path>,
    report: bool,
    json: bool,
    no_chart: bool,
) -> Result<()> {
    if report && output_dir.is_none() {
        bail!("--report requires --output-dir");
    }

    let params = resolve_params(config_path, overrides)?;
    let run = run_simulation(&params)?;

    if json {
        println!("{}", export_json(&run)?);
    } else {
        print_run(&run, !no_chart);
    }

    if let Some(dir) = output_dir {
        let paths = save_artifacts(&run, dir, report)?;
        // Keep stdout pure JSON under --json.
        if json {
            eprintln!("Artifacts saved to: {}", paths.dir.display());
        } else {
            println!();
            println!("Artifacts saved to: {}", paths.dir.display());
        }
    }

    Ok(())
}

fn print_run(run: &SimulationRun, with_chart: bool) {
    println!("Run {}", run.short_id());
    println!();
    print!("{}", render_narrative(run));
    println!();
    print!("{}", render_event_table(&run.events));
    if with_chart {
        println!();
        print!("{}", render_price_chart(&run.prices, ChartSize::default()));
    }
}

fn print_params() {
    println!(
        "{:<24} {:<18} {:>8} {:>8} {:>6} {:>8}",
        "Parameter", "Label", "Min", "Max", "Step", "Default"
    );
    println!("{}", "-".repeat(77));
    for id in ParamId::ALL {
        let spec = id.spec();
        println!(
            "{:<24} {:<18} {:>8.2} {:>8.2} {:>6.2} {:>8.2}",
            id.name(),
            spec.label,
            spec.min,
            spec.max,
            spec.step,
            spec.default
        );
    }
}

fn run_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    SimulationConfig::default().write_file(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
