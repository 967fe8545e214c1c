#![warn(clippy::pedantic)]

//! # polyglot CLI
//!
//! Parses source files into polyglot syntax trees and prints what was found.
//!
//! * `--sexp` – the tree as an S-expression.
//! * `--json` – the tree as JSON (the same form `Tree` deserializes from).
//! * `--calls` / `--functions` – call sites and functions, one per line.
//! * `--check-roundtrip` – fail unless the tree reproduces the file exactly.
//!
//! When the path is a directory every file with a recognized extension below
//! it is parsed, in file name order.
//!
//! ## Exit codes
//! * 0 – success.
//! * 1 – usage / IO / parse / query failure.
//!
//! ## Example
//! ```bash
//! polyglot src/main.c --calls
//! ```

mod parser;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use polyglot::semantics::{calls, functions};
use polyglot::{Language, LowerOptions, Tree, parse_file_as};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use parser::Cli;

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);
    if !args.path.exists() {
        eprintln!("Error: path not found");
        process::exit(1);
    }
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let options = LowerOptions {
        variation_points: args.variation_points,
    };
    let inputs = inputs(args)?;
    if inputs.is_empty() {
        bail!("no source files with a recognized extension under {}", args.path.display());
    }
    for (path, language) in inputs {
        let tree = parse_file_as(&path, language, &options)?;
        report(args, &path, &tree)?;
    }
    Ok(())
}

/// Files to parse with the language of each.
fn inputs(args: &Cli) -> anyhow::Result<Vec<(PathBuf, Language)>> {
    if args.path.is_file() {
        let language = args
            .language
            .or_else(|| Language::from_path(&args.path))
            .ok_or_else(|| {
                anyhow!(
                    "cannot determine the language of {}, pass --language",
                    args.path.display()
                )
            })?;
        return Ok(vec![(args.path.clone(), language)]);
    }
    let mut inputs = Vec::new();
    for entry in WalkDir::new(&args.path).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", args.path.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(detected) = Language::from_path(entry.path()) {
            inputs.push((entry.into_path(), args.language.unwrap_or(detected)));
        } else {
            debug!(path = %entry.path().display(), "skipped, unknown extension");
        }
    }
    Ok(inputs)
}

fn report(args: &Cli, path: &Path, tree: &Tree) -> anyhow::Result<()> {
    if args.check_roundtrip {
        let original = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if tree.to_source() != original {
            bail!("round-trip mismatch for {}", path.display());
        }
    }

    let mut printed = false;
    if args.sexp {
        println!("{}", tree.root().to_sexp());
        printed = true;
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(tree)?);
        printed = true;
    }
    if args.calls {
        for call in calls(tree) {
            let call = call.with_context(|| format!("Failed to read a call in {}", path.display()))?;
            let arguments: Vec<&str> = call.arguments.iter().map(|a| a.text()).collect();
            println!(
                "{}:{}: {}({})",
                path.display(),
                call.node.location(),
                call.function.text(),
                arguments.join(", ")
            );
        }
        printed = true;
    }
    if args.functions {
        for function in functions(tree) {
            let function = function
                .with_context(|| format!("Failed to read a function in {}", path.display()))?;
            let parameters: Vec<&str> = function.parameters.iter().map(|p| p.text()).collect();
            println!(
                "{}:{}: {}({})",
                path.display(),
                function.node.location(),
                function.name.unwrap_or("<anonymous>"),
                parameters.join(", ")
            );
        }
        printed = true;
    }
    if !printed {
        let errors = tree.nodes().filter(|node| node.is_error()).count();
        println!(
            "Parsed: {} ({}, {} nodes, {errors} error nodes)",
            path.display(),
            tree.language(),
            tree.len()
        );
    }
    Ok(())
}
