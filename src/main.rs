use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

// Import from our modularized library
use image_uniqueness_rs::prelude::*;

#[derive(Parser)]
#[command(name = "image_uniqueness_rs")]
#[command(about = "Verify no two image files in a directory are byte-for-byte duplicates", long_about = None)]
struct Cli {
    /// Target directory to scan for image files (default: current directory)
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// File extension to check, without the dot
    #[arg(short, long, default_value = "png")]
    extension: String,

    /// Scan directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Print each file's digest as it is computed
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Image Uniqueness Checker (Rust Edition)");
    println!("Scanning: {}", cli.directory.display());
    println!();

    let image_files = collect_image_files(&cli.directory, &cli.extension, cli.recursive)
        .with_context(|| format!("Failed to scan directory: {}", cli.directory.display()))?;

    println!("File count: {}", image_files.len());

    if cli.verbose {
        for path in &image_files {
            let hash = compute_file_hash(path)?;
            println!("  {}  {}", hash, path.display());
        }
    }

    let checked = check_uniqueness(&image_files)?;

    println!("Check successful, no duplicate files found.");
    println!("Checked {} file(s)", checked);

    Ok(())
}
