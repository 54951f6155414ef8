use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Result;
use base64::Engine;
use hcat2avro::{ChannelError, GenericRecord, OutputChannel, core::BASE64};
use serde_json::json;

/// Writes one `{"key": ..., "value": ...}` object per line.
///
/// Keys that are not valid UTF-8 are written as `"key_base64"` instead.
pub struct JsonlChannel {
    dest: Box<dyn Write>,
    flush_each_record: bool,
}

impl JsonlChannel {
    pub fn new(output: Option<&Path>) -> Result<Self> {
        let flush_each_record = output.is_none();
        let dest: Box<dyn Write> = match output {
            Some(path) => Box::new(BufWriter::new(fs::File::create(path)?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        Ok(Self {
            dest,
            flush_each_record,
        })
    }

    pub fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}

impl OutputChannel for JsonlChannel {
    fn send(&mut self, key: Option<Vec<u8>>, record: GenericRecord) -> Result<(), ChannelError> {
        let line = match key.map(String::from_utf8) {
            None => json!({ "key": null, "value": record }),
            Some(Ok(text)) => json!({ "key": text, "value": record }),
            Some(Err(e)) => json!({ "key_base64": BASE64.encode(e.into_bytes()), "value": record }),
        };
        serde_json::to_writer(&mut self.dest, &line)?;
        self.dest.write_all(b"\n")?;
        if self.flush_each_record {
            self.dest.flush()?;
        }
        Ok(())
    }
}
