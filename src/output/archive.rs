//! In-memory ZIP archive of batch results.

use crate::error::{Result, TldwError};
use crate::orchestrator::BatchResult;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Bundle every summary in the batch into a deflated ZIP, in memory.
///
/// Entry names are the batch file names, duplicates included.
pub fn zip_batch(batch: &BatchResult) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in batch.iter() {
        writer
            .start_file(entry.file_name.as_str(), options)
            .map_err(|e| TldwError::Archive(e.to_string()))?;
        writer.write_all(entry.content.as_bytes())?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| TldwError::Archive(e.to_string()))?;
    Ok(cursor.into_inner())
}
