//! Encounter difficulty command-line client.
//!
//! Composition root: loads configuration from the environment, applies the
//! party and creatures given on the command line to a fresh session, and
//! prints the resulting difficulty.
//!
//! ```bash
//! # Five level 3 players against three CR 1/2 enemies and a CR 2 ally
//! encounter --size 5 --level 3 --enemy 1/2x3 --ally 2
//! ```

mod args;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use encounter_core::{
    CreatureGroup, DifficultyReport, EncounterSession, describe_enemies, describe_party,
};

use crate::args::Args;
use crate::config::CliConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging()?;

    let args = Args::parse();
    let config = CliConfig::from_env();

    tracing::debug!("Encounter config: {:?}", config.encounter);

    let mut session =
        EncounterSession::new(&config.encounter).context("Failed to start encounter session")?;

    if let Some(size) = args.size {
        session
            .set_party_size(size)
            .context("Failed to set party size")?;
    }
    if let Some(level) = args.level {
        session
            .set_party_level(level)
            .with_context(|| format!("Failed to set party level to {level}"))?;
    }

    for (group, specs) in [
        (CreatureGroup::Enemies, &args.enemies),
        (CreatureGroup::Allies, &args.allies),
    ] {
        for spec in specs {
            session
                .add_creatures(group, *spec)
                .with_context(|| format!("Failed to add CR {} {}", spec.cr, group))?;
        }
    }

    let report = session.report();
    tracing::info!(
        "Encounter scored: {} ({}% hit points)",
        report.label(),
        report.hp_cost
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_summary(&session, report);
    }

    Ok(())
}

fn print_summary(session: &EncounterSession, report: &DifficultyReport) {
    let roster = session.roster();
    println!("{}", describe_party(session.party(), &roster.allies()));
    println!("{}", describe_enemies(&roster.enemies()));
    println!("{}", report.description());
    if let Some(resources) = report.resources_description() {
        println!("{resources}");
    }
    if let Some(warning) = report.ko_warning() {
        println!("{warning}");
    }
}
