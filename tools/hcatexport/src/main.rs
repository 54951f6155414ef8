mod commands;
mod writer;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{export::ExportArgs, schema::SchemaArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hcatexport", about = "Export catalog table rows as keyed Avro-style records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcode JSONL rows into keyed JSONL records
    Export(ExportArgs),
    /// Print the derived record schema for a table
    Schema(SchemaArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => args.run(),
        Commands::Schema(args) => args.run(),
    }
}
