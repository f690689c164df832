//! CLI Adapter.

mod generate;
mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "talendroutine")]
#[command(version)]
#[command(
    about = "Generate Talend Open Studio routine manifests during a build",
    long_about = None
)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "project-dir", global = true, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write <label>_<version>.properties and talend.project
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Create a starter talendroutine.toml
    #[clap(visible_alias = "i")]
    Init {
        /// Replace an existing talendroutine.toml
        #[arg(short, long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match project_dir(cli.project_dir) {
        Ok(dir) => match cli.command {
            Commands::Generate(args) => generate::run_generate(dir, args),
            Commands::Init { force } => init::run_init(dir, force),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn project_dir(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}
