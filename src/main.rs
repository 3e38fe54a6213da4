// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{Context, Result};
use scalecollider::analysis::{Analysis, CollisionMode};
use scalecollider::config::AnalysisConfig;
use std::env;
use std::io::{self, Write};

fn print_usage() {
    println!("SCALECOLLIDER - Diatonic scale collision finder");
    println!();
    println!("Usage: scalecollider [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <FILE>   Load settings from a YAML file");
    println!("  --dedup           Report each colliding pair once");
    println!("  --pitch-classes   Compare pitch classes instead of spellings");
    println!("  --modes           Annotate scales with church-mode names");
    println!("  --verbose         Log and count unspellable scales");
    println!("  --help            Show this help message");
}

/// Apply command-line flags on top of the loaded configuration
fn parse_args(args: &[String]) -> Result<Option<(AnalysisConfig, bool)>> {
    let mut config = AnalysisConfig::default();
    let mut verbose = false;
    let mut dedup = false;
    let mut pitch_classes = false;
    let mut modes = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let path = args.get(i + 1).ok_or_else(|| {
                    anyhow::anyhow!("--config requires a file path")
                })?;
                config = AnalysisConfig::load(path)?;
                i += 1;
            }
            "--dedup" => dedup = true,
            "--pitch-classes" => pitch_classes = true,
            "--modes" => modes = true,
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Flags win over file values regardless of order
    config.deduplicate |= dedup;
    config.annotate_modes |= modes;
    config.report_skipped |= verbose;
    if pitch_classes {
        config.collision_mode = CollisionMode::PitchClass;
    }

    Ok(Some((config, verbose)))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let Some((config, verbose)) = parse_args(&args)? else {
        return Ok(());
    };

    let level = if verbose {
        tracing::Level::DEBUG.max(config.level()?)
    } else {
        config.level()?
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let analysis = Analysis::run(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    analysis
        .write_report(&mut out)
        .context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    Ok(())
}
