//! Image Uniqueness Checker Library
//!
//! Scans a directory of image files and verifies none are byte-for-byte
//! duplicates by hashing file contents and failing on the first collision.

pub mod scanner;

pub use scanner::duplicate_detector;
pub use scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::scanner::duplicate_detector::{
        check_uniqueness, compute_file_hash, DuplicateContent,
    };
    pub use crate::scanner::file_scanner::collect_image_files;
}
