//! Zip helpers shared by `backup --compress` and the pre-migration backup.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Write `src` as the single deflated entry of a new archive at `dest`.
pub fn zip_file(src: &Path, dest: &Path) -> AppResult<()> {
    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Export(format!("Not a file path: {}", src.display())))?;

    let file = fs::File::create(dest)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
