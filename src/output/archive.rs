//! ZIP packaging of a run's output files.
//!
//! The archive supplements the loose files: every file written during the
//! run is added under its bare file name, so unpacking reproduces the
//! output directory's banner set.

use crate::error::BannerError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Bundle `files` into a ZIP archive at `archive_path`.
pub fn write_archive(archive_path: &Path, files: &[PathBuf]) -> Result<(), BannerError> {
    let file = File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                BannerError::Archive(format!("invalid file name: {}", path.display()))
            })?;

        writer
            .start_file(name, options)
            .map_err(|e| BannerError::Archive(e.to_string()))?;
        let data = std::fs::read(path)?;
        writer.write_all(&data)?;
    }

    writer
        .finish()
        .map_err(|e| BannerError::Archive(e.to_string()))?;

    Ok(())
}
