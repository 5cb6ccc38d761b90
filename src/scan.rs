//! Directory scanning and image detection.
//!
//! Lists a directory (non-recursively) and sorts its entries into images and
//! everything else. Classification sniffs the first bytes of each file for a
//! known image signature, so a PNG named `photo.txt` is an image and a text
//! file named `photo.jpg` is not.
//!
//! ## Ordering
//!
//! Images are returned sorted by file name. The slideshow pairs every image
//! with its predecessor, so the order has to be stable across runs rather
//! than whatever the filesystem happens to enumerate.
//!
//! ## Rejects
//!
//! Anything that is not a recognised image lands in
//! [`ScannedDirectory::rejected`] to be reported to the user. That includes
//! sub-directories and files that cannot be read. Rejects are never an error.

use crate::naming;
use crate::types::ImageEntry;
use image::ImageFormat;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot list directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
}

/// Result of scanning one directory.
#[derive(Debug)]
pub struct ScannedDirectory {
    /// Absolute path of the directory.
    pub path: PathBuf,
    /// Base name of the directory, used to name the descriptor.
    pub name: String,
    /// Images, sorted by file name.
    pub images: Vec<ImageEntry>,
    /// Names of entries that are not images, sorted.
    pub rejected: Vec<String>,
}

/// Enough bytes for every signature `image::guess_format` checks.
const SNIFF_LEN: usize = 64;

/// Split command-line arguments into existing directories and the rest.
///
/// Relative arguments are checked against `cwd`. Order is preserved in both
/// halves and arguments are returned as given.
pub fn partition_directories(args: &[PathBuf], cwd: &Path) -> (Vec<PathBuf>, Vec<PathBuf>) {
    args.iter()
        .cloned()
        .partition(|arg| naming::absolute_path(arg, cwd).is_dir())
}

/// Scan `dir` for images. `cwd` anchors relative paths.
pub fn scan_directory(dir: &Path, cwd: &Path) -> Result<ScannedDirectory, ScanError> {
    let path = naming::absolute_path(dir, cwd);
    let name = naming::directory_name(&path);

    let read_dir = fs::read_dir(&path).map_err(|source| ScanError::ReadDir {
        path: path.clone(),
        source,
    })?;

    let mut images = Vec::new();
    let mut rejected = Vec::new();

    for entry in read_dir {
        let entry = entry.map_err(|source| ScanError::ReadDir {
            path: path.clone(),
            source,
        })?;
        // The lossy name is for display and sorting only; the path keeps the
        // raw OS bytes so non-UTF-8 names still open.
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let entry_path = entry.path();

        if is_image(&entry_path) {
            images.push(ImageEntry {
                file_name,
                path: entry_path,
            });
        } else {
            rejected.push(file_name);
        }
    }

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    rejected.sort();

    log::debug!(
        "scanned {}: {} image(s), {} rejected",
        path.display(),
        images.len(),
        rejected.len()
    );

    Ok(ScannedDirectory {
        path,
        name,
        images,
        rejected,
    })
}

/// Whether `path` is a regular file with a recognised image signature.
///
/// Only the formats with distinctive signatures count. `guess_format` also
/// knows two-to-four byte magics (PNM `P1`, ICO `\0\0\1\0`, ...) that plain
/// text and arbitrary binaries match.
pub fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match sniff_header(path) {
        Ok(header) => match image::guess_format(&header) {
            Ok(format) if is_accepted(format) => {
                log::trace!("{}: {format:?}", path.display());
                true
            }
            Ok(format) => {
                log::debug!("{}: ignoring {format:?} signature", path.display());
                false
            }
            Err(_) => false,
        },
        Err(err) => {
            log::warn!("cannot read {}: {err}", path.display());
            false
        }
    }
}

fn is_accepted(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg
            | ImageFormat::Png
            | ImageFormat::Gif
            | ImageFormat::WebP
            | ImageFormat::Bmp
            | ImageFormat::Tiff
    )
}

fn sniff_header(path: &Path) -> io::Result<Vec<u8>> {
    let mut header = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    Ok(header)
}
