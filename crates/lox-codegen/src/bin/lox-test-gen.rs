//! Test-suite generator

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use lox_codegen::{scan_fixtures, write_suite, FixtureKind};
use std::path::{Path, PathBuf};

/// Generate a test-suite file from a directory of .lox fixtures.
///
/// Scans FIXTURE_DIR (non-recursive) for .lox files, classifies each as an
/// expected-error or expected-success case, and writes one test_fail! or
/// test_succeed! invocation per executable fixture into
/// rlox_core/src/tests/<dir name>.rs, overwriting previous contents.
///
/// EXAMPLES:
///     lox-test-gen test-scripts/for
#[derive(Parser)]
#[command(name = "lox-test-gen")]
#[command(version)]
struct Cli {
    /// Directory containing .lox fixture files
    fixture_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fixtures = scan_fixtures(&cli.fixture_dir)
        .with_context(|| format!("Failed to scan {}", cli.fixture_dir.display()))?;

    let mut errors = 0usize;
    let mut successes = 0usize;
    let mut skipped = 0usize;
    for fixture in &fixtures {
        match &fixture.kind {
            FixtureKind::Error => errors += 1,
            FixtureKind::Success { expected } if expected.is_empty() => skipped += 1,
            FixtureKind::Success { .. } => successes += 1,
        }
    }

    let out_path = write_suite(Path::new("."), &cli.fixture_dir, &fixtures)
        .context("Failed to write test suite")?;

    println!("{} {}", "Generated".green().bold(), out_path.display());
    println!(
        "  {} success, {} error, {} skipped (no expect markers)",
        successes.to_string().green(),
        errors.to_string().red(),
        skipped.to_string().yellow()
    );
    Ok(())
}
