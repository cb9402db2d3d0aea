//=====================================================
// File: bin/bhanai_examples.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai example runner
// Objective: Run every .bhn script in a directory, each with its own environment,
//            and report which ones completed
//=====================================================

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bhanai::{Interpreter, InterpreterConfig, StdConsole, has_source_extension, logging};
use clap::Parser;

const SEPARATOR: &str = "------------------------------------------------------";

#[derive(Parser, Debug)]
#[command(name = "bhanai_examples", about = "Run every Bhanai script in a directory")]
struct Args {
    /// Directory holding the .bhn scripts.
    #[arg(default_value = "demos")]
    dir: PathBuf,

    /// Configuration file to use instead of the per-user config.toml.
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of scripts that failed.
fn run(args: &Args) -> Result<usize> {
    let config = InterpreterConfig::load(args.config.as_deref())?;
    logging::init(config.log_filter.as_deref());

    let scripts = collect_scripts(&args.dir)?;
    if scripts.is_empty() {
        println!("No .bhn files found to test.");
        return Ok(0);
    }

    let mut failures = 0;
    for path in &scripts {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("{SEPARATOR}");
        println!("Testing {}:", path.display());
        let mut interpreter = Interpreter::with_config(StdConsole::new(), config.clone());
        match interpreter.run_path(path) {
            Ok(()) => println!("Test passed for {name}."),
            Err(err) => {
                failures += 1;
                eprintln!("Test failed for {name}: {err:#}");
            }
        }
    }
    println!("{SEPARATOR}");
    println!("All tests completed.");
    Ok(failures)
}

fn collect_scripts(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading example directory {}", dir.display()))?;
    let mut scripts = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_source_extension(&path) {
            scripts.push(path);
        }
    }
    scripts.sort();
    Ok(scripts)
}

//=====================================================
// End of file
//=====================================================
