//=====================================================
// File: main.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: chalau command-line entry point
// Objective: Validate the script path, load configuration, install tracing and
//            run one .bhn file with a fresh environment
//=====================================================

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use bhanai::{Interpreter, InterpreterConfig, StdConsole, has_source_extension, logging};
use clap::Parser;
use clap::error::ErrorKind;

const USAGE: &str = "Usage: chalau <file.bhn>";

#[derive(Parser, Debug)]
#[command(name = "chalau", version, about = "Run a Bhanai script")]
pub struct Args {
    /// Path to the .bhn script to execute.
    pub script: PathBuf,

    /// Configuration file to use instead of the per-user config.toml.
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if !has_source_extension(&args.script) {
        eprintln!("Error: Please provide a valid .bhn file.");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Runtime Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = InterpreterConfig::load(args.config.as_deref())?;
    logging::init(config.log_filter.as_deref());

    let completion_message = config.completion_message;
    let mut interpreter = Interpreter::with_config(StdConsole::new(), config);
    interpreter.run_path(&args.script)?;

    if completion_message {
        println!("Execution completed successfully.");
    }
    Ok(())
}

//=====================================================
// End of file
//=====================================================
