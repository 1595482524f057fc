use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::PokemonRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("output I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes one CSV row per record, header first, overwriting any existing
/// file at `path`. The destination directory is created if absent.
pub fn export(records: &[PokemonRecord], path: &Path) -> Result<(), ExportError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
