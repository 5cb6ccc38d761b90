//! Output directory resolution.
//!
//! The scope (global or local) is decided once per invocation, before any
//! directory is scanned, and the result is passed down the pipeline as a
//! plain [`Destination`] value.
//!
//! - **Global** writes into a system directory and requires the effective
//!   user to be root. Missing privilege is fatal.
//! - **Local** writes into a directory under the user's home, creating the
//!   whole path if needed.

use crate::config::Config;
use crate::naming;
use crate::prompt::{PromptError, Prompter};
use crate::types::{DocumentKind, Scope};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DestinationError {
    #[error("This command must be run as super user to install global {0}!")]
    NotSuperuser(DocumentKind),
    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolved output directory for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub kind: DocumentKind,
    pub scope: Scope,
    pub dir: PathBuf,
}

impl Destination {
    /// Full path of the descriptor for a directory with the given base name.
    pub fn file_path(&self, directory_name: &str) -> PathBuf {
        self.dir
            .join(naming::document_file_name(directory_name, self.kind))
    }
}

/// Whether the process runs with an effective uid of 0.
pub fn running_as_superuser() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Ask whether to install globally or locally.
pub fn ask_scope<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Scope, PromptError> {
    prompter.ask_choice(
        "Add wallpaper globally or locally? (G/L) ",
        &[
            ("g", Scope::Global),
            ("global", Scope::Global),
            ("l", Scope::Local),
            ("local", Scope::Local),
        ],
    )
}

/// Resolve the output directory for `kind` and `scope`.
///
/// `is_superuser` is passed in rather than queried so callers (and tests)
/// control the privilege check.
pub fn resolve(
    config: &Config,
    kind: DocumentKind,
    scope: Scope,
    is_superuser: bool,
) -> Result<Destination, DestinationError> {
    let configured = config.destination_dir(kind, scope);
    let dir = PathBuf::from(shellexpand::tilde(configured).as_ref());

    match scope {
        Scope::Global => {
            if !is_superuser {
                return Err(DestinationError::NotSuperuser(kind));
            }
        }
        Scope::Local => create_dir(&dir)?,
    }

    log::debug!("{kind} destination ({scope:?}): {}", dir.display());
    Ok(Destination { kind, scope, dir })
}

fn create_dir(dir: &Path) -> Result<(), DestinationError> {
    fs::create_dir_all(dir).map_err(|source| DestinationError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
