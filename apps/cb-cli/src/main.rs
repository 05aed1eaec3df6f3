use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use cb_catalog::{DeviceRole, DEVICES};
use cb_core::{CbError, ComponentId};
use cb_project::{load_into, load_json, load_yaml, BenchFile, ProjectError};
use cb_sim::{display_reading, Fluctuations};
use cb_store::{Action, ErrorFlag, Store};

#[derive(Parser)]
#[command(name = "cb-cli")]
#[command(about = "CalBench CLI - virtual calibration bench simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate bench file syntax and structure
    Validate {
        /// Path to the bench file (.yaml or .json)
        bench_path: PathBuf,
    },
    /// List the built-in device catalog
    Catalog,
    /// Show the devices and wires in a bench file
    Show {
        /// Path to the bench file (.yaml or .json)
        bench_path: PathBuf,
    },
    /// Load a bench file and stream one device's readings over time
    Read {
        /// Path to the bench file (.yaml or .json)
        bench_path: PathBuf,
        /// Component id of the measuring device
        device: u64,
        /// Simulated duration in seconds
        #[arg(long, default_value_t = 10.0)]
        duration: f64,
        /// Simulated step between readings in seconds
        #[arg(long, default_value_t = 0.25)]
        step: f64,
        /// Seed for deterministic runs
        #[arg(long)]
        seed: Option<u64>,
        /// Enable the wire-loading error model
        #[arg(long)]
        loading_error: bool,
        /// Enable resolution-uncertainty jitter
        #[arg(long)]
        uncertainty: bool,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Core(#[from] CbError),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { bench_path } => cmd_validate(&bench_path),
        Commands::Catalog => cmd_catalog(),
        Commands::Show { bench_path } => cmd_show(&bench_path),
        Commands::Read {
            bench_path,
            device,
            duration,
            step,
            seed,
            loading_error,
            uncertainty,
        } => cmd_read(
            &bench_path,
            device,
            duration,
            step,
            seed,
            loading_error,
            uncertainty,
        ),
    }
}

fn load_bench(path: &Path) -> CliResult<BenchFile> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let file = if is_yaml {
        load_yaml(path)?
    } else {
        load_json(path)?
    };
    Ok(file)
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    let file = load_bench(path)?;
    println!(
        "OK: {} devices, {} wires (version {})",
        file.components.len(),
        file.connections.len(),
        file.version
    );
    Ok(())
}

fn cmd_catalog() -> CliResult<()> {
    println!("{:<14} {:<26} {:<12} inputs", "kind", "label", "role");
    for spec in DEVICES {
        let role = match spec.role {
            DeviceRole::Calibrator => "calibrator",
            DeviceRole::Uuc => "uuc",
            DeviceRole::Analyzer => "analyzer",
        };
        println!(
            "{:<14} {:<26} {:<12} {}",
            spec.kind,
            spec.label,
            role,
            spec.terminal_pairs.len()
        );
    }
    Ok(())
}

fn cmd_show(path: &Path) -> CliResult<()> {
    let file = load_bench(path)?;
    let mut store = Store::new();
    load_into(&mut store, &file);

    println!("bench: {}", if file.name.is_empty() { "(unnamed)" } else { &file.name });
    for comp in store.components() {
        let label = comp.spec().map_or("?", |s| s.label);
        println!(
            "  [{}] {} ({}) at ({:.0}, {:.0}) power={}",
            comp.id,
            label,
            comp.kind,
            comp.x,
            comp.y,
            comp.state.power()
        );
    }
    for (index, conn) in store.connections().iter().enumerate() {
        println!(
            "  wire {}: {} -> {} {:?} ({:?}, {} Ω)",
            index, conn.from, conn.to, conn.polarity, conn.wire.kind, conn.wire.resistance
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_read(
    path: &Path,
    device: u64,
    duration: f64,
    step: f64,
    seed: Option<u64>,
    loading_error: bool,
    uncertainty: bool,
) -> CliResult<()> {
    if !(step > 0.0) || !(duration >= 0.0) {
        return Err(CbError::InvalidArg {
            what: "duration must be >= 0 and step > 0",
        }
        .into());
    }

    let file = load_bench(path)?;
    let mut store = match seed {
        Some(seed) => Store::with_seed(seed),
        None => Store::new(),
    };
    load_into(&mut store, &file);

    let id = ComponentId::new(device);
    if store.component(id).is_none() {
        return Err(CbError::UnknownDevice { id: device }.into());
    }

    if loading_error {
        store.dispatch(Action::ToggleErrorFlag(ErrorFlag::LoadingError));
    }
    if uncertainty {
        store.dispatch(Action::ToggleErrorFlag(ErrorFlag::ResolutionUncertainty));
    }

    let mut fluctuations = match seed {
        Some(seed) => Fluctuations::with_seed(seed),
        None => Fluctuations::new(),
    };

    let mut t = 0.0;
    while t <= duration {
        fluctuations.tick(t, &store.snapshot());
        match display_reading(&store.snapshot(), id, &fluctuations) {
            Some(reading) => {
                let jitter = if reading.fluctuating { " ~" } else { "" };
                println!(
                    "t={:7.2} s  {:>16.8} {:<3} [{}]{}",
                    t,
                    reading.value,
                    reading.unit,
                    reading.mode.label(),
                    jitter
                );
            }
            None => println!("t={t:7.2} s  {:>16} ---", "-.--------"),
        }
        t += step;
    }
    Ok(())
}
