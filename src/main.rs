//! rename-regions: prefix region names in an XML layout with their row and column code.
#![allow(clippy::multiple_crate_versions)]

use clap::{CommandFactory, Parser};
use rename_regions::cli::{Invocation, EXTRA_ARGS_WARNING};
use rename_regions::{renamer, RenameError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rename-regions")]
#[command(about = "Prefix region names with their row and column code", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Input file, optionally followed by an output file
    #[arg(value_name = "FILE", num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let program = Args::command().get_name().to_string();

    let invocation = match Invocation::from_paths(&program, args.paths) {
        Ok(invocation) => invocation,
        Err(RenameError::Usage(usage)) => {
            println!("{usage}");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    init_tracing();

    if invocation.ignored > 0 {
        println!("{EXTRA_ARGS_WARNING}");
    }

    match renamer::rename_regions(&invocation.input, invocation.output()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
