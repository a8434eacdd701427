//! File-based test fixtures.
//!
//! The pipeline itself never touches disk. These helpers exist so the CLI
//! can feed it a real image and leave the result somewhere a person can
//! open it.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::AppError;

/// Read a test image from disk.
pub fn read_fixture(path: &Path) -> Result<Vec<u8>, AppError> {
    let data = std::fs::read(path).map_err(|source| AppError::ReadFixture {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = ?path, bytes = data.len(), "read fixture");
    Ok(data)
}

/// Write bytes to a new uniquely named file `<dir>/<prefix><random>.<extension>`.
///
/// The file is kept after the process exits. Returns its path.
pub fn write_fixture(dir: &Path, prefix: &str, extension: &str, data: &[u8]) -> Result<PathBuf, AppError> {
    let write_error = |source| AppError::WriteFixture {
        dir: dir.to_path_buf(),
        source,
    };

    let suffix = format!(".{extension}");
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(&suffix)
        .tempfile_in(dir)
        .map_err(write_error)?;

    file.write_all(data).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    let (_, path) = file.keep().map_err(|e| write_error(e.error))?;
    debug!(path = ?path, bytes = data.len(), "wrote fixture");
    Ok(path)
}
