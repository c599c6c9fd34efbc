//! Duplicate content detection using SHA-256 hashing

use anyhow::Result;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Two files with byte-identical contents were found
#[derive(Debug, Error)]
#[error(
    "duplicate content detected: {} and {} have identical bytes",
    existing.display(),
    duplicate.display()
)]
pub struct DuplicateContent {
    /// File first seen with this digest
    pub existing: PathBuf,
    /// File whose digest collided with it
    pub duplicate: PathBuf,
}

/// Compute SHA-256 hash of a file
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// Hex-encoded SHA-256 hash string
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}

/// Verify that no two files in the list have identical contents
///
/// Hashes each file and inserts digest -> path into a map. The first digest
/// already present in the map aborts the pass with [`DuplicateContent`]
/// naming both files. I/O failures propagate as-is.
///
/// # Arguments
/// * `paths` - List of file paths to check
///
/// # Returns
/// Number of files checked when all contents are distinct
pub fn check_uniqueness(paths: &[PathBuf]) -> Result<usize> {
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for path in paths {
        let hash = compute_file_hash(path)?;
        if let Some(existing) = seen.get(&hash) {
            return Err(DuplicateContent {
                existing: existing.clone(),
                duplicate: path.clone(),
            }
            .into());
        }
        seen.insert(hash, path.clone());
    }

    Ok(seen.len())
}
