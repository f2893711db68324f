//! Directory-wide application of the convert and strip operations.

use crate::error::{Result, TileError};
use crate::types::{BatchSummary, Operation, StripOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Default directory holding the tilesets
pub const DEFAULT_TILESET_DIR: &str = "static/tilesets";

/// Rule printed between the phases of a batch run
pub const SEPARATOR: &str = "==================================================";

/// Suffix appended to a tile while its conversion is being written
const TEMP_SUFFIX: &str = ".temp";

/// Options shared by every batch run
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Run every transformation but never touch the files
    pub dry_run: bool,
}

/// Recursively find all .svg files under a directory
///
/// Entries that cannot be read are skipped. The result is sorted by path.
pub fn find_svg_files(dir: &Path) -> Vec<PathBuf> {
    let mut svg_files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".svg"))
        .map(|entry| entry.into_path())
        .collect();

    svg_files.sort();
    svg_files
}

/// Path of the temporary sibling used while converting `path`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Convert one tile in place
///
/// The converted document is written to a temporary sibling which then
/// replaces the original. On any failure the temporary file is removed and
/// the original is left untouched.
pub fn convert_in_place(path: &Path, options: BatchOptions) -> Result<usize> {
    if options.dry_run {
        let svg = fs::read_to_string(path)?;
        return Ok(crate::convert(&svg)?.sides);
    }

    let temp = temp_path(path);

    let result = crate::convert_file(path, &temp).and_then(|tile| {
        fs::rename(&temp, path)?;
        Ok(tile.sides)
    });

    if result.is_err() && temp.exists() {
        if let Err(e) = fs::remove_file(&temp) {
            warn!("Could not remove {}: {}", temp.display(), e);
        }
    }

    result
}

/// Apply an operation to a single file, logging the outcome
fn process_file(path: &Path, operation: Operation, options: BatchOptions) -> bool {
    let outcome = match operation {
        Operation::Convert => {
            info!("Converting: {}", path.display());
            convert_in_place(path, options).map(|sides| {
                info!("✅ Successfully converted: {} ({}-sided)", path.display(), sides);
            })
        }
        Operation::Strip => crate::strip::strip_file(path, options.dry_run).map(|outcome| match outcome {
            StripOutcome::Cleaned => info!("✅ Cleaned: {}", path.display()),
            StripOutcome::Unchanged => info!("⚪ No changes needed: {}", path.display()),
        }),
    };

    match outcome {
        Ok(()) => true,
        Err(e) => {
            warn!("❌ Failed to {} {}: {}", operation.verb(), path.display(), e);
            false
        }
    }
}

/// Apply an operation to every .svg file under `root`
///
/// Files are processed one at a time. A failing file is counted and the run
/// moves on to the next one.
///
/// # Arguments
/// * `root` - Tileset directory to walk
/// * `operation` - What to do with each file
/// * `options` - Batch options (dry run)
///
/// # Returns
/// * `Ok(BatchSummary)` - Success and failure counts
/// * `Err(TileError::RootNotFound)` - If `root` does not exist
pub fn run(root: &Path, operation: Operation, options: BatchOptions) -> Result<BatchSummary> {
    if !root.exists() {
        return Err(TileError::RootNotFound(root.to_path_buf()));
    }

    info!("Finding SVG files in {}...", root.display());
    let svg_files = find_svg_files(root);

    let mut summary = BatchSummary::default();

    if svg_files.is_empty() {
        info!("No SVG files found");
        return Ok(summary);
    }

    info!("Found {} SVG files", svg_files.len());
    if options.dry_run {
        info!("Dry run: no file will be modified");
    }
    info!("{}", operation.start_message());
    info!("{}", SEPARATOR);

    for svg_file in &svg_files {
        summary.record(process_file(svg_file, operation, options));
    }

    Ok(summary)
}
