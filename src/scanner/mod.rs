//! File scanning and uniqueness checking functionality

pub mod duplicate_detector;
pub mod file_scanner;

pub use duplicate_detector::{check_uniqueness, compute_file_hash, DuplicateContent};
pub use file_scanner::collect_image_files;
