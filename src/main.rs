mod allocator;
mod cli;
mod config;
mod eligibility;
mod error;
mod model;
mod roster;
mod shaping;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use allocator::{AllocationPolicy, Allocator};
use cli::{Cli, Command};
use config::MontagemConfig;
use roster::Roster;
use ui::AssemblyView;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = MontagemConfig::load()?;

    // RUST_LOG wins; --verbose forces debug over the configured level.
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut policy = config.policy();
    if let Some(variant) = cli.variant {
        policy.variant = variant.into();
    }
    if cli.no_interview {
        policy.interview_phase = false;
    }

    match cli.command {
        Command::Assemble { file, json, write } => assemble(&file, policy, json, write),
        Command::Validate { file } => {
            let roster = load(&file)?;
            AssemblyView::default().print_summary(&roster);
            Ok(())
        }
        Command::Clear { file } => {
            let mut roster = load(&file)?;
            roster.clear_assignments();
            roster
                .save(&file)
                .with_context(|| format!("failed to write {}", file.display()))?;
            info!(path = %file.display(), "Assignments cleared");
            Ok(())
        }
        Command::Sample => {
            println!("{}", Roster::sample().export()?);
            Ok(())
        }
    }
}

fn load(path: &std::path::Path) -> Result<Roster> {
    Roster::load(path).with_context(|| format!("failed to load roster {}", path.display()))
}

fn assemble(path: &std::path::Path, policy: AllocationPolicy, json: bool, write: bool) -> Result<()> {
    let mut roster = load(path)?;
    let allocator = Allocator::new(policy);
    let assignments = shaping::shape(
        allocator.allocate(&roster.workers, &roster.rooms),
        &roster.workers,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&assignments)?);
    } else {
        let report = shaping::occupancy(&roster.rooms, &roster.workers, &assignments);
        AssemblyView::default().print_report(&report);
    }

    if write {
        roster.apply(&assignments);
        roster
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), assigned = assignments.len(), "Assembly saved");
    }
    Ok(())
}
