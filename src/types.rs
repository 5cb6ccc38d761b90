//! Shared types used across the scan → render → write pipeline.

use std::fmt;
use std::path::PathBuf;

/// Which kind of GNOME background descriptor is being produced.
///
/// The kind selects the output file suffix, the XML template, and the pair
/// of destination directories read from [`crate::config::Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A `<wallpapers>` list registering every image as a static wallpaper.
    Wallpapers,
    /// A `<background>` slideshow cycling through the images.
    Slideshow,
}

impl DocumentKind {
    /// Suffix appended to the directory name to form the output file name.
    pub fn file_suffix(self) -> &'static str {
        match self {
            DocumentKind::Wallpapers => "-wallpapers.xml",
            DocumentKind::Slideshow => "-slideshow.xml",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Wallpapers => write!(f, "wallpapers"),
            DocumentKind::Slideshow => write!(f, "slideshow"),
        }
    }
}

/// Where the descriptor is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Scope {
    /// System-wide directory; requires running as root.
    Global,
    /// Per-user directory under the home directory, created on demand.
    Local,
}

/// An image file found by the scanner.
///
/// Membership is decided by sniffing the file header, never by extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// File name as listed in the directory (`dawn.jpg`).
    pub file_name: String,
    /// Absolute path to the file.
    pub path: PathBuf,
}
