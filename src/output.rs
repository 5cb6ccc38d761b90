//! CLI output formatting.
//!
//! Every message shown to the user is built by a `format_*` function that
//! returns lines (`Vec<String>`) and does no I/O. The pipeline writes those
//! lines through the [`Prompter`](crate::prompt::Prompter) so messages and
//! questions share one stream and tests can capture both.
//!
//! ```text
//! The following arguments are not directories and will be ignored:
//!   missing/
//!
//! In directory photos, these files are not images and will be ignored:
//!   notes.txt
//!
//! photos-wallpapers.xml is created at /home/me/.local/share/gnome-background-properties with 2 image(s)
//! ```

use std::path::{Path, PathBuf};

/// Indent a list entry under its heading.
fn item(text: &str) -> String {
    format!("  {}", text)
}

/// Report arguments that were skipped because they are not directories.
///
/// Returns no lines when nothing was skipped.
pub fn format_invalid_directories(invalid: &[PathBuf]) -> Vec<String> {
    if invalid.is_empty() {
        return Vec::new();
    }
    let mut lines =
        vec!["The following arguments are not directories and will be ignored:".to_string()];
    lines.extend(invalid.iter().map(|p| item(&p.display().to_string())));
    lines.push(String::new());
    lines
}

/// Report directory entries that are not images.
///
/// Returns no lines when every entry was an image.
pub fn format_rejected_files(directory_name: &str, rejected: &[String]) -> Vec<String> {
    if rejected.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!(
        "In directory {}, these files are not images and will be ignored:",
        directory_name
    )];
    lines.extend(rejected.iter().map(|name| item(name)));
    lines.push(String::new());
    lines
}

/// Banner shown before the slideshow questions for each directory.
pub fn format_slideshow_banner(directory: &Path) -> Vec<String> {
    vec![
        String::new(),
        "-".repeat(30),
        format!(
            "         {}",
            directory.display().to_string().to_uppercase()
        ),
    ]
}

/// Success line for one written descriptor.
pub fn format_created(file_name: &str, location: &Path, image_count: usize) -> String {
    format!(
        "{} is created at {} with {} image(s)",
        file_name,
        location.display(),
        image_count
    )
}

/// Closing hint after slideshows have been written.
pub fn format_slideshow_guidance() -> Vec<String> {
    vec![
        String::new(),
        "Now you can go to GNOME Tweaks -> Appearance -> Background/Lock Screen \
         and choose the xml file"
            .to_string(),
    ]
}
