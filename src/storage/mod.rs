use std::io::Write;
use std::path::Path;

use crate::error::SeedError;

pub fn ensure_dirs(data_folder: &Path, cert_folder: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(data_folder)?;
    std::fs::create_dir_all(cert_folder)?;
    Ok(())
}

/// Write through a sibling temp file and rename, so an interrupted write
/// never leaves a truncated record or document at the final key.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SeedError> {
    let dir = path.parent().ok_or_else(|| {
        SeedError::Storage(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "destination path has no parent directory",
        ))
    })?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| SeedError::Storage(e.error))?;
    Ok(())
}
