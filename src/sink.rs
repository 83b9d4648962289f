// ABOUTME: Record sink that serializes one JobRecord as a CSV row.
// ABOUTME: Append mode creates the file with a header when absent, otherwise appends headerless rows.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::error;

use crate::error::ScrapeError;
use crate::record::JobRecord;

/// How to write the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Rewrite header + the single row, discarding prior content.
    Overwrite,
    /// Create with header when absent, append a headerless row otherwise.
    Append,
}

/// Serialize one record as a CSV row at `path`.
///
/// Unlike a single field's extraction, a persistence failure is never
/// swallowed: it is logged and returned as a `Persist`-class error.
pub fn persist(
    record: &JobRecord,
    path: impl AsRef<Path>,
    mode: WriteMode,
) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    write_record(record, path, mode).map_err(|e| {
        let err = ScrapeError::persist(path.display().to_string(), "Persist", Some(e));
        error!(path = %path.display(), error = %err, "failed to persist record");
        err
    })
}

fn write_record(record: &JobRecord, path: &Path, mode: WriteMode) -> Result<(), anyhow::Error> {
    let fresh = mode == WriteMode::Overwrite || !path.exists();

    if fresh {
        let mut writer = csv::Writer::from_path(path)?;
        writer.serialize(record)?;
        writer.flush()?;
    } else {
        let file = OpenOptions::new().append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
    }

    Ok(())
}
