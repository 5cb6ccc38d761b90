//! File and directory naming rules.
//!
//! ## Wallpaper Names
//!
//! The `<name>` of a wallpaper is its file name with the final extension
//! removed. Only the last `.` counts, so compound extensions keep their
//! first part:
//! - `dawn.jpg` → `dawn`
//! - `archive.tar.png` → `archive.tar`
//! - `README` → `README` (nothing to strip)
//!
//! ## Output Files
//!
//! Each scanned directory produces one descriptor named after the
//! directory's base name: `photos/` → `photos-wallpapers.xml` or
//! `photos-slideshow.xml`.

use crate::types::DocumentKind;
use std::path::{Component, Path, PathBuf};

/// Strip the final extension from a file name.
///
/// A name with no `.` is returned unchanged.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    }
}

/// Output file name for a directory with the given base name.
pub fn document_file_name(directory_name: &str, kind: DocumentKind) -> String {
    format!("{}{}", directory_name, kind.file_suffix())
}

/// Make `path` absolute against `cwd` and normalise `.` and `..` lexically.
///
/// Symlinks are not resolved, so the emitted paths match what the user
/// typed rather than where links point.
pub fn absolute_path(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Base name of a directory path, used to name its descriptor.
///
/// The root directory has no base name; it is named `root`.
pub fn directory_name(absolute: &Path) -> String {
    absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string())
}
