//! Kitting CLI - run and score behavior trees in the kitting simulation.
//!
//! - `kitting run` - evaluate a tree and print a JSON report
//! - `kitting check` - validate a tree file
//! - `kitting init` - write a default settings file

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use kitting_core::{load_tokens, Environment, Evaluation, RunSettings};

#[derive(Parser)]
#[command(name = "kitting")]
#[command(about = "Behavior trees for a conveyor-kitting robot", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a tree and print the report as JSON
    Run {
        /// Token file, one token per line
        #[arg(short, long)]
        tree: PathBuf,

        /// Settings YAML (defaults when omitted)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Override the settings' seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the settings' tick budget
        #[arg(long)]
        max_ticks: Option<u64>,

        /// Write per-tick world snapshots to this JSON file
        #[arg(long)]
        trajectory: Option<PathBuf>,
    },

    /// Validate a tree and print its size
    Check {
        /// Token file, one token per line
        #[arg(short, long)]
        tree: PathBuf,
    },

    /// Write a default settings file
    Init {
        #[arg(short, long, default_value = "kitting.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Serialize)]
struct CheckReport {
    length: usize,
    depth: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    if cli.log_json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Run {
            tree,
            settings,
            seed,
            max_ticks,
            trajectory,
        } => run_tree(&tree, settings.as_deref(), seed, max_ticks, trajectory.as_deref()),
        Commands::Check { tree } => check_tree(&tree),
        Commands::Init { output, force } => init_settings(&output, force),
    }
}

fn run_tree(
    tree_path: &Path,
    settings_path: Option<&Path>,
    seed: Option<u64>,
    max_ticks: Option<u64>,
    trajectory_path: Option<&Path>,
) -> Result<()> {
    let mut settings = match settings_path {
        Some(path) => RunSettings::load(path)?,
        None => RunSettings::default(),
    };
    if let Some(seed) = seed {
        settings.seed = seed;
    }
    if let Some(max_ticks) = max_ticks {
        settings.run.max_ticks = max_ticks;
    }
    settings.validate()?;

    let tokens = load_tokens(tree_path)?;
    tracing::info!(
        tree = %tree_path.display(),
        tokens = tokens.len(),
        seed = settings.seed,
        "Evaluating tree"
    );

    let env = Environment::new(settings);
    let evaluation: Evaluation = match trajectory_path {
        Some(path) => {
            let (evaluation, trajectory) = env.evaluate_with_trajectory(&tokens)?;
            let json = serde_json::to_string_pretty(&trajectory)?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write trajectory to {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                snapshots = trajectory.len(),
                "Trajectory written"
            );
            evaluation
        }
        None => env.evaluate(&tokens)?,
    };

    tracing::info!(
        ticks = evaluation.ticks,
        termination = ?evaluation.termination,
        fitness = evaluation.fitness,
        "Run finished"
    );
    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}

fn check_tree(tree_path: &Path) -> Result<()> {
    let tokens = load_tokens(tree_path)?;
    let tree = kitting_bt::build(&tokens)
        .with_context(|| format!("Invalid tree in {}", tree_path.display()))?;

    print!("{tree}");
    let report = CheckReport {
        length: tree.length(),
        depth: tree.depth(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_settings(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output.display());
    }

    let yaml = RunSettings::default().to_yaml()?;
    let content = format!("# Kitting run settings\n\n{yaml}");
    std::fs::write(output, content)
        .with_context(|| format!("Failed to write settings to {}", output.display()))?;

    println!("Wrote default settings to {}", output.display());
    Ok(())
}
