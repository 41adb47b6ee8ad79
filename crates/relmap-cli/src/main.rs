use relmap_cli::{gen, logging, model};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate TypeORM entities for every configured table
    Gen {
        /// Introspected rows, as JSON
        #[arg(short, long)]
        rows: PathBuf,

        /// Generation configuration, as JSON
        #[arg(short, long)]
        config: PathBuf,

        /// Add swagger model property decorators
        #[arg(long)]
        swagger: bool,

        /// Directory to write the entity files to
        target: PathBuf,
    },
    /// Print the raw model assembled from introspected rows
    Model {
        #[arg(short, long)]
        rows: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    match cli.command {
        Command::Gen {
            rows,
            config,
            swagger,
            target,
        } => gen::exec(&rows, &config, &target, swagger).await,
        Command::Model { rows } => model::exec(&rows).await,
    }
}
