//! PluginCI CLI tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pluginci")]
#[command(about = "Generate CI build settings for plugin projects", long_about = None)]
struct Cli {
    /// KDL file with `param "name" "value"` entries
    #[arg(long, env = "PLUGINCI_PARAMS", global = true)]
    params: Option<PathBuf>,

    /// Set a parameter, overriding the parameter file (repeatable)
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", global = true)]
    param: Vec<String>,

    /// Absolute id of the project the settings are applied to
    #[arg(long, env = "PLUGINCI_PROJECT_ID", global = true)]
    project_id: Option<String>,

    /// Log generation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the project settings as JSON
    Generate {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Check that the parameters produce valid settings
    Validate,
    /// Show the parameters a build runs with
    Params {
        /// Build id, e.g. Build1 or ReportCodeQuality
        build_id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let params = commands::load_parameters(cli.params.as_deref(), &cli.param)?;
    let options = pluginci_config::GenerateOptions {
        project_id: cli.project_id,
    };

    match cli.command {
        Commands::Generate { output, compact } => {
            commands::generate(&params, &options, output.as_deref(), compact)?;
        }
        Commands::Validate => {
            commands::validate(&params, &options)?;
        }
        Commands::Params { build_id } => {
            commands::params(&params, &options, &build_id)?;
        }
    }

    Ok(())
}
