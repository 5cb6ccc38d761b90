//! Tool configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! reproduce the standard GNOME locations and wallpaper styling, so the file
//! is optional; a user file only needs the keys it overrides.
//!
//! ## Config File Location
//!
//! `$XDG_CONFIG_HOME/wallpaper-xml/config.toml` (usually
//! `~/.config/wallpaper-xml/config.toml`), or any path passed with
//! `--config`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [wallpapers]
//! global_dir = "/usr/share/gnome-background-properties/"
//! local_dir = "~/.local/share/gnome-background-properties/"
//! options = "zoom"          # How GNOME fits the picture to the screen
//! pcolor = "#000000"        # Primary shade color
//! scolor = "#000000"        # Secondary shade color
//! shade_type = "solid"
//!
//! [slideshow]
//! global_dir = "/usr/share/backgrounds/contest/"
//! local_dir = "~/.local/share/backgrounds/contest/"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{DocumentKind, Scope};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Values accepted by GNOME for `<options>`.
pub const PICTURE_OPTIONS: &[&str] = &[
    "none",
    "wallpaper",
    "centered",
    "scaled",
    "stretched",
    "zoom",
    "spanned",
];

/// Values accepted by GNOME for `<shade_type>`.
pub const SHADE_TYPES: &[&str] = &["solid", "horizontal-gradient", "vertical-gradient"];

/// Tool configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Destinations and styling for wallpaper lists.
    pub wallpapers: WallpapersConfig,
    /// Destinations for slideshows.
    pub slideshow: SlideshowConfig,
}

/// Wallpaper list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WallpapersConfig {
    /// System-wide directory scanned by GNOME's background picker.
    pub global_dir: String,
    /// Per-user directory scanned by GNOME's background picker.
    pub local_dir: String,
    /// How the picture is fitted to the screen.
    pub options: String,
    /// Primary shade color (`#rrggbb`).
    pub pcolor: String,
    /// Secondary shade color (`#rrggbb`).
    pub scolor: String,
    /// Shading used behind pictures that don't fill the screen.
    pub shade_type: String,
}

impl Default for WallpapersConfig {
    fn default() -> Self {
        Self {
            global_dir: "/usr/share/gnome-background-properties/".to_string(),
            local_dir: "~/.local/share/gnome-background-properties/".to_string(),
            options: "zoom".to_string(),
            pcolor: "#000000".to_string(),
            scolor: "#000000".to_string(),
            shade_type: "solid".to_string(),
        }
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    pub global_dir: String,
    pub local_dir: String,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            global_dir: "/usr/share/backgrounds/contest/".to_string(),
            local_dir: "~/.local/share/backgrounds/contest/".to_string(),
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dirs = [
            ("wallpapers.global_dir", &self.wallpapers.global_dir),
            ("wallpapers.local_dir", &self.wallpapers.local_dir),
            ("slideshow.global_dir", &self.slideshow.global_dir),
            ("slideshow.local_dir", &self.slideshow.local_dir),
        ];
        for (key, value) in dirs {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if !PICTURE_OPTIONS.contains(&self.wallpapers.options.as_str()) {
            return Err(ConfigError::Validation(format!(
                "wallpapers.options must be one of {}",
                PICTURE_OPTIONS.join(", ")
            )));
        }
        if !SHADE_TYPES.contains(&self.wallpapers.shade_type.as_str()) {
            return Err(ConfigError::Validation(format!(
                "wallpapers.shade_type must be one of {}",
                SHADE_TYPES.join(", ")
            )));
        }
        for (key, value) in [
            ("wallpapers.pcolor", &self.wallpapers.pcolor),
            ("wallpapers.scolor", &self.wallpapers.scolor),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a #rrggbb color, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Configured (unexpanded) output directory for a document kind and scope.
    pub fn destination_dir(&self, kind: DocumentKind, scope: Scope) -> &str {
        match (kind, scope) {
            (DocumentKind::Wallpapers, Scope::Global) => &self.wallpapers.global_dir,
            (DocumentKind::Wallpapers, Scope::Local) => &self.wallpapers.local_dir,
            (DocumentKind::Slideshow, Scope::Global) => &self.slideshow.global_dir,
            (DocumentKind::Slideshow, Scope::Local) => &self.slideshow.local_dir,
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Default location of the user config file, if a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wallpaper-xml").join("config.toml"))
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        log::debug!("no config file at {}", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    log::debug!("loaded config overrides from {}", path.display());
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<Config, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when absent.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    resolve_config(load_raw_config(path)?)
}

/// Load a config file the user named explicitly. A missing file is an error
/// here, unlike the implicit default location.
pub fn load_explicit_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    load_config(path)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# wallpaper-xml configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# A leading "~" in directory paths expands to your home directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Wallpaper lists (`wallpaper-xml wallpapers DIR...`)
# ---------------------------------------------------------------------------
[wallpapers]
# Where descriptors go with --scope global (requires root).
global_dir = "/usr/share/gnome-background-properties/"

# Where descriptors go with --scope local (created if missing).
local_dir = "~/.local/share/gnome-background-properties/"

# How the picture is fitted to the screen.
# One of: none, wallpaper, centered, scaled, stretched, zoom, spanned.
options = "zoom"

# Colors drawn behind pictures that don't cover the whole screen.
pcolor = "#000000"
scolor = "#000000"

# One of: solid, horizontal-gradient, vertical-gradient.
shade_type = "solid"

# ---------------------------------------------------------------------------
# Slideshows (`wallpaper-xml slideshow DIR...`)
# ---------------------------------------------------------------------------
[slideshow]
global_dir = "/usr/share/backgrounds/contest/"
local_dir = "~/.local/share/backgrounds/contest/"
"##
}
