//! Streaming one partition of catalog records into an output channel.

use hcat2avro_core::{FieldDefs, SourceRecord};
use tracing::{debug, trace, warn};

use crate::{
    channel::OutputChannel,
    config::{ErrorPolicy, ExportConfig},
    error::ExportError,
    transcoder::Transcoder,
};

/// Counts reported by [`ExportPartition::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Records handed to the channel.
    pub sent: u64,
    /// Records dropped under [`ErrorPolicy::Skip`].
    pub rejected: u64,
}

/// One sequential stream of records sharing a single setup.
#[derive(Debug, Clone)]
pub struct ExportPartition {
    transcoder: Transcoder,
    error_policy: ErrorPolicy,
}

impl ExportPartition {
    /// Derive the target schema and validate the key column once for the
    /// whole partition.
    pub fn new(source: FieldDefs, config: &ExportConfig) -> Result<Self, ExportError> {
        let transcoder = Transcoder::new(source, config)?;
        debug!(
            record = %transcoder.target_schema().name,
            policy = %config.error_policy(),
            "partition setup complete"
        );
        Ok(Self {
            transcoder,
            error_policy: config.error_policy(),
        })
    }

    pub fn transcoder(&self) -> &Transcoder {
        &self.transcoder
    }

    /// Transcode `records` in order and send each result to `channel`.
    pub fn run<C>(
        &self,
        records: impl IntoIterator<Item = SourceRecord>,
        channel: &mut C,
    ) -> Result<ExportSummary, ExportError>
    where
        C: OutputChannel + ?Sized,
    {
        self.try_run(records.into_iter().map(Ok), channel)
    }

    /// Like [`run`](Self::run), for sources whose reads can fail per record.
    ///
    /// Record-level failures (see [`ExportError::is_record_level`]) follow the
    /// configured [`ErrorPolicy`]. Channel and I/O errors always stop the
    /// partition.
    pub fn try_run<C>(
        &self,
        records: impl IntoIterator<Item = Result<SourceRecord, ExportError>>,
        channel: &mut C,
    ) -> Result<ExportSummary, ExportError>
    where
        C: OutputChannel + ?Sized,
    {
        let mut summary = ExportSummary::default();

        for (index, record) in (0u64..).zip(records) {
            let outcome = record.and_then(|record| Ok(self.transcoder.transcode(&record)?));
            match outcome {
                Ok((key, value)) => {
                    channel.send(key, value).map_err(ExportError::Channel)?;
                    summary.sent += 1;
                    trace!(index, "record sent");
                }
                Err(e) if e.is_record_level() && self.error_policy == ErrorPolicy::Skip => {
                    warn!(index, error = %e, "skipping record");
                    summary.rejected += 1;
                }
                Err(e) => {
                    return Err(ExportError::AtRecord {
                        index,
                        source: Box::new(e),
                    });
                }
            }
        }

        debug!(sent = summary.sent, rejected = summary.rejected, "partition finished");
        Ok(summary)
    }
}
