//! Reading data files from disk.

use std::path::Path;

use chrono::{DateTime, Utc};
use labdash::DataFile;

use crate::error::{ClientError, ClientResult};

/// Load a file's content and modification time.
///
/// Falls back to the current time when the platform cannot report one.
pub async fn load_data_file(path: &Path) -> ClientResult<DataFile> {
    let io_err = |source: std::io::Error| ClientError::Io {
        path: path.display().to_string(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(io_err)?;
    let bytes = tokio::fs::read(path).await.map_err(io_err)?;

    let last_modified = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(DataFile::new(name, bytes, last_modified))
}
