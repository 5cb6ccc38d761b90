//! # wallpaper-xml
//!
//! Turns directories of pictures into the XML descriptors GNOME reads to
//! offer wallpapers: a plain wallpaper list, or a slideshow that cycles
//! through the pictures with crossfades.
//!
//! # Pipeline
//!
//! Every invocation runs the same straight-line pipeline:
//!
//! ```text
//! 1. Destination  scope (global/local) → output directory
//! 2. Scan         directory → sorted images + rejected entries
//! 3. Timing       slideshow only: interval mode, durations
//! 4. Generate     images → XML document
//! 5. Write        confirm overwrite → file on disk
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Runs the pipeline for one invocation and aggregates errors |
//! | [`config`] | `config.toml` loading, merging onto stock defaults, validation |
//! | [`destination`] | Scope prompt, privilege check, output directory creation |
//! | [`scan`] | Directory listing and image sniffing by file signature |
//! | [`timing`] | Random/fixed display durations for slideshows |
//! | [`generate`] | Wallpaper-list and slideshow XML rendering |
//! | [`writer`] | Overwrite confirmation and file writing |
//! | [`prompt`] | Validated interactive input over any reader/writer pair |
//! | [`naming`] | Extension stripping, output file names, path normalisation |
//! | [`output`] | User-facing message formatting |
//! | [`types`] | Shared types (`DocumentKind`, `Scope`, `ImageEntry`) |
//!
//! # Design Decisions
//!
//! ## Sniffing Over Extensions
//!
//! Files are classified by their leading bytes, not their names. Camera
//! exports and downloads are often misnamed; GNOME loads by content, so the
//! descriptor should too.
//!
//! ## Deterministic Order
//!
//! Images are sorted by file name before rendering. The slideshow links
//! each picture to its predecessor, and that chain must not depend on the
//! filesystem's enumeration order.
//!
//! ## Injectable Prompts
//!
//! All questions go through [`prompt::Prompter`], generic over its reader
//! and writer. The binary uses stdin/stdout; tests script the answers.

pub mod app;
pub mod config;
pub mod destination;
pub mod generate;
pub mod naming;
pub mod output;
pub mod prompt;
pub mod scan;
pub mod timing;
pub mod types;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_helpers;
