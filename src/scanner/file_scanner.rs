//! Image file scanning and collection

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect all files with the given extension from a directory
///
/// # Arguments
/// * `dir` - Directory to scan
/// * `extension` - File extension to match, without the dot (case-insensitive)
/// * `recursive` - Whether to scan subdirectories recursively
///
/// # Returns
/// Sorted vector of matching file paths
pub fn collect_image_files(dir: &Path, extension: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let wanted = extension.to_lowercase();
    let mut image_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir).follow_links(false) {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path(), &wanted) {
                image_files.push(entry.path().to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() && has_extension(&entry.path(), &wanted) {
                image_files.push(entry.path());
            }
        }
    }

    // Directory iteration order is platform-dependent; sort so runs over the
    // same file set are deterministic.
    image_files.sort();

    Ok(image_files)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase() == wanted)
        .unwrap_or(false)
}
