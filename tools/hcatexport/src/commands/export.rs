use std::{
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use hcat2avro::{ErrorPolicy, ExportConfig, ExportError, ExportPartition, record_from_str};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::writer::JsonlChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OnError {
    /// Stop at the first record that fails to transcode
    Abort,
    /// Log and skip records that fail to transcode
    Skip,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => ErrorPolicy::Abort,
            OnError::Skip => ErrorPolicy::Skip,
        }
    }
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the input rows (one JSON object or array per line)
    input: PathBuf,

    /// Path to the table descriptor (JSON)
    #[arg(short, long)]
    table: PathBuf,

    /// Name of the top-level record (table name if not specified)
    #[arg(short, long)]
    record_name: Option<String>,

    /// Column whose value becomes the message key (keyless if not specified)
    #[arg(short, long)]
    key: Option<String>,

    /// What to do with rows that fail to transcode
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    on_error: OnError,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let table = super::read_table(&self.table)?;
        let record_name = self.record_name.as_deref().unwrap_or(table.name());

        let mut config = ExportConfig::builder(record_name).with_error_policy(self.on_error.into());
        if let Some(key) = &self.key {
            config = config.with_key_field(key);
        }
        let columns = table.columns().clone();
        let partition = ExportPartition::new(columns, &config.build())?;

        let pb = match self.output {
            Some(_) => {
                let pb = ProgressBar::new(count_rows(&self.input)?);
                pb.set_style(
                    ProgressStyle::with_template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})",
                    )?
                    .progress_chars("=>-"),
                );
                pb
            }
            None => ProgressBar::hidden(),
        };

        let input = fs::File::open(&self.input)
            .with_context(|| format!("failed to open {}", self.input.display()))?;
        let columns = partition.transcoder().source_schema();
        let records = BufReader::new(input)
            .lines()
            .filter(|line| !matches!(line, Ok(text) if text.trim().is_empty()))
            .inspect(|_| pb.inc(1))
            .map(|line| {
                let line = line.map_err(ExportError::Io)?;
                record_from_str(&line, columns)
            });

        let mut channel = JsonlChannel::new(self.output.as_deref())?;
        let summary = partition.try_run(records, &mut channel)?;
        channel.finish()?;
        pb.finish_with_message("done");

        info!(sent = summary.sent, rejected = summary.rejected, "export finished");
        Ok(())
    }
}

fn count_rows(path: &Path) -> Result<u64> {
    let input = fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut count = 0;
    for line in BufReader::new(input).lines() {
        if !line?.trim().is_empty() {
            count += 1;
        }
    }
    Ok(count)
}
