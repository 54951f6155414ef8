pub mod export;
pub mod schema;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use hcat2avro::TableDescriptor;

fn read_table(path: &Path) -> Result<TableDescriptor> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read table descriptor {}", path.display()))?;
    Ok(TableDescriptor::from_json(&text)?)
}
