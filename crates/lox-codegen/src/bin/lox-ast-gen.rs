//! AST definition generator

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use lox_codegen::{write_grammar_files, GrammarSpec};
use std::path::PathBuf;

/// Generate the Expr/Stmt node definitions for the rlox front end.
///
/// Renders the built-in grammar schema into one Rust source file per
/// grammar and writes both into OUT_DIR, overwriting previous contents.
/// The two files reference each other and are always written as a pair.
///
/// EXAMPLES:
///     lox-ast-gen rlox/src/grammar
#[derive(Parser)]
#[command(name = "lox-ast-gen")]
#[command(version)]
struct Cli {
    /// Directory the generated grammar files are written into
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let expr = GrammarSpec::expression().context("Failed to load expression grammar schema")?;
    let stmt = GrammarSpec::statement().context("Failed to load statement grammar schema")?;

    let written = write_grammar_files(&cli.out_dir, &expr, &stmt)
        .with_context(|| format!("Failed to write grammar files to {}", cli.out_dir.display()))?;

    for path in &written {
        println!("{} {}", "Generated".green().bold(), path.display());
    }
    Ok(())
}
