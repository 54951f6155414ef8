//! Error types for the export facade.

use hcat2avro_avro::TranscodeError;
use hcat2avro_core::{ShapeError, TypeParseError};

/// Errors produced while setting up or running an export partition.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Schema derivation, key validation or per-record transcoding failed.
    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    /// I/O error while reading source records.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The table descriptor is not valid JSON or misses required members.
    #[error("invalid table descriptor: {0}")]
    Descriptor(#[source] serde_json::Error),

    /// A column's catalog type string could not be parsed.
    #[error("invalid type for column '{column}': {source}")]
    ColumnType {
        column: String,
        #[source]
        source: TypeParseError,
    },

    /// The table descriptor declares the same column twice.
    #[error("duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// A source record line is not valid JSON.
    #[error("malformed record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    /// A JSON record does not fit the table's columns.
    #[error("record value at '{path}' does not match table: {detail}")]
    Record { path: String, detail: String },

    /// A per-record failure under [`ErrorPolicy::Abort`](crate::ErrorPolicy::Abort),
    /// tagged with the zero-based position of the record in the partition.
    #[error("record {index}: {source}")]
    AtRecord {
        index: u64,
        #[source]
        source: Box<ExportError>,
    },

    /// An error returned by the [`OutputChannel`](crate::OutputChannel).
    #[error(transparent)]
    Channel(Box<dyn std::error::Error + Send + Sync>),
}

impl ExportError {
    /// Whether the error concerns a single record rather than the partition
    /// setup or the output channel.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            ExportError::Transcode(
                TranscodeError::SchemaMismatch { .. } | TranscodeError::Conversion { .. }
            ) | ExportError::MalformedRecord(_)
                | ExportError::Record { .. }
        )
    }
}

impl From<ShapeError> for ExportError {
    fn from(e: ShapeError) -> Self {
        ExportError::Record {
            path: e.path,
            detail: e.detail,
        }
    }
}
