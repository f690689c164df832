//! Generate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, GenerateOptions};
use crate::domain::AppError;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Config file (defaults to talendroutine.toml in the project directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Routine label shown in the studio (defaults to the project name)
    #[arg(short, long)]
    pub label: Option<String>,
    /// Routine description
    #[arg(long)]
    pub description: Option<String>,
    /// Routine purpose
    #[arg(long)]
    pub purpose: Option<String>,
    /// Routine version as major.minor
    #[arg(long = "routine-version", value_name = "VERSION")]
    pub routine_version: Option<String>,
    /// Directory receiving the generated files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Repository folder of the routine inside the Talend project
    #[arg(long)]
    pub path: Option<String>,
    /// Dependency list file (.json array or mvn dependency:list output)
    #[arg(long = "dependencies", value_name = "FILE")]
    pub dependency_files: Vec<PathBuf>,
    /// Dependency coordinate groupId:artifactId:type[:classifier]:version[:scope]
    #[arg(short, long = "dependency", value_name = "COORD")]
    pub dependency: Vec<String>,
}

pub fn run_generate(project_dir: PathBuf, args: GenerateArgs) -> Result<(), AppError> {
    let options = GenerateOptions {
        project_dir,
        config_path: args.config,
        label: args.label,
        description: args.description,
        purpose: args.purpose,
        version: args.routine_version,
        output_dir: args.output_dir,
        path: args.path,
        dependency_files: args.dependency_files,
        coordinates: args.dependency,
    };

    let outcome = api::generate(&options)?;
    println!("✅ Generated {}", outcome.properties_path.display());
    println!("✅ Generated {}", outcome.project_path.display());
    println!("  {} import(s)", outcome.import_count);
    Ok(())
}
