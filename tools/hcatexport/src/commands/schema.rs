use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use hcat2avro::{ExportConfig, Transcoder, core::format_field_defs};

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the table descriptor (JSON)
    table: PathBuf,

    /// Name of the top-level record (table name if not specified)
    #[arg(short, long)]
    record_name: Option<String>,

    /// Validate this column as the routing key
    #[arg(short, long)]
    key: Option<String>,

    /// Print the catalog column schema instead of the derived one
    #[arg(long)]
    source: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let table = super::read_table(&self.table)?;
        let record_name = self.record_name.as_deref().unwrap_or(table.name());

        let mut config = ExportConfig::builder(record_name);
        if let Some(key) = self.key {
            config = config.with_key_field(key);
        }
        let transcoder = Transcoder::new(table.columns().clone(), &config.build())?;

        let text = if self.source {
            format_field_defs(transcoder.source_schema())?
        } else {
            transcoder.target_schema().to_string()
        };

        let text = text.trim_end();
        match self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
