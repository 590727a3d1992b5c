use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::EncodeError;

/// Enumerate the files to encode under `root`.
///
/// Recursive mode yields every regular file at any depth, in walk order.
/// Flat mode yields only the immediate child files of `root`; directory
/// entries are filtered out so they never reach the encoder.
///
/// No ordering is guaranteed, only that every matching file appears exactly
/// once. The first directory-access failure aborts the enumeration.
pub fn enumerate_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, EncodeError> {
    let mut walker = WalkDir::new(root).follow_links(false).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn walk_error(err: walkdir::Error) -> EncodeError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    match err.into_io_error() {
        Some(io) => EncodeError::dir_access(&path, io),
        None => EncodeError::Unclassified(anyhow::anyhow!(
            "filesystem loop at {}",
            path.display()
        )),
    }
}
