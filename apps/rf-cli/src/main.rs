use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rf_project::{Scenario, SystemKindDef};
use rf_sim::{SimProgress, run_sim_with_progress};
use tracing_subscriber::EnvFilter;

mod compile;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "rf-cli")]
#[command(about = "rodflow CLI - rod, rigid body and surface contact simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// List systems and contact pairs in a scenario
    Inspect {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Run a scenario
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Time step in seconds (overrides the scenario)
        #[arg(long)]
        dt: Option<f64>,
        /// End time in seconds (overrides the scenario)
        #[arg(long)]
        t_end: Option<f64>,
        /// Synchronize periodic boundaries on one thread
        #[arg(long)]
        serial: bool,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Inspect { scenario_path } => cmd_inspect(&scenario_path),
        Commands::Run {
            scenario_path,
            dt,
            t_end,
            serial,
        } => cmd_run(&scenario_path, dt, t_end, serial),
    }
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = rf_project::load(scenario_path)?;
    compile::compile(&scenario)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_inspect(scenario_path: &Path) -> CliResult<()> {
    let scenario = rf_project::load(scenario_path)?;
    println!("Scenario: {} (version {})", scenario.name, scenario.version);

    if scenario.systems.is_empty() {
        println!("No systems found in scenario");
    } else {
        println!("Systems:");
        for sys in &scenario.systems {
            println!("  {} - {}", sys.id, describe(&sys.kind));
        }
    }

    if !scenario.contacts.is_empty() {
        println!("Contacts:");
        for contact in &scenario.contacts {
            println!(
                "  {} -> {} ({:?})",
                contact.first, contact.second, contact.model
            );
        }
    }
    print_run(&scenario);
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    dt: Option<f64>,
    t_end: Option<f64>,
    serial: bool,
) -> CliResult<()> {
    let mut scenario = rf_project::load(scenario_path)?;
    if let Some(dt) = dt {
        scenario.run.dt = dt;
    }
    if let Some(t_end) = t_end {
        scenario.run.t_end = t_end;
    }
    if serial {
        scenario.run.parallel = false;
    }
    rf_project::validate_scenario(&scenario).map_err(rf_project::ProjectError::from)?;

    println!("Running scenario: {}", scenario.name);
    print_run(&scenario);

    let mut compiled = compile::compile(&scenario)?;
    let opts = compile::sim_options(&scenario.run);

    let started = Instant::now();
    let mut last_emit = Instant::now();
    let record = run_sim_with_progress(&mut compiled.sim, &opts, |p| {
        if last_emit.elapsed().as_millis() >= 100 {
            render_progress(&p);
            last_emit = Instant::now();
        }
    })?;
    clear_progress_line();

    let last = record.last().copied().unwrap_or_default();
    println!("✓ Simulation completed in {:.2?}", started.elapsed());
    println!("  Steps: {}", last.step);
    println!("  Final time: {:.6} s", last.time);
    println!("  Time points: {}", record.len());
    println!("  Periodic rods: {}", last.periodic_rods);
    println!("  Contact pairs: {}", last.contacts);
    Ok(())
}

fn describe(kind: &SystemKindDef) -> String {
    match kind {
        SystemKindDef::Rod {
            n_elems,
            periodic: true,
            ring_radius,
            ..
        } => format!(
            "periodic rod, {} elements, ring radius {}",
            n_elems,
            ring_radius.unwrap_or_default()
        ),
        SystemKindDef::Rod {
            n_elems, length, ..
        } => format!("open rod, {} elements, length {}", n_elems, length),
        SystemKindDef::RigidBody { center, radius } => {
            format!("rigid body at {:?}, radius {}", center, radius)
        }
        SystemKindDef::Surface { origin, normal } => {
            format!("plane through {:?}, normal {:?}", origin, normal)
        }
    }
}

fn print_run(scenario: &Scenario) {
    let run = &scenario.run;
    println!(
        "  dt = {} s, t_end = {} s, max_steps = {}, record_every = {}, parallel = {}",
        run.dt, run.t_end, run.max_steps, run.record_every, run.parallel
    );
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}

fn render_progress(p: &SimProgress) {
    let width = 28usize;
    let fraction = p.fraction();
    let filled = ((fraction * width as f64).round() as usize).min(width);
    print!(
        "\r[{}{}] {:>6.2}%  t={:.4}/{:.4}s  step={}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled)),
        fraction * 100.0,
        p.time,
        p.t_end,
        p.step
    );
    let _ = io::stdout().flush();
}
