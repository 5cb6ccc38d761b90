//! Writing descriptors to disk.
//!
//! An existing file is only replaced after the user agrees. Declining is
//! reported as [`WriteError::Declined`] so the caller can stop the run
//! without touching the file.

use crate::prompt::{PromptError, Prompter};
use std::fs;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("User abortion")]
    Declined(PathBuf),
    #[error("Invalid file path: {0}")]
    InvalidPath(PathBuf),
    #[error("Permission denied writing {0}")]
    PermissionDenied(PathBuf),
    #[error("Cannot create file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Write `content` to `path`, asking before overwriting an existing file.
pub fn write_document<R: BufRead, W: Write>(
    path: &Path,
    content: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<(), WriteError> {
    if path.is_file() {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        prompter.say(&[format!("File {file_name} already exists")])?;
        if !prompter.ask_yes_no("Do you want to overwrite it? (y/n) ")? {
            return Err(WriteError::Declined(path.to_path_buf()));
        }
    }

    fs::write(path, content).map_err(|source| classify(path, source))?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn classify(path: &Path, source: io::Error) -> WriteError {
    let path = path.to_path_buf();
    match source.kind() {
        ErrorKind::NotFound => WriteError::InvalidPath(path),
        ErrorKind::PermissionDenied => WriteError::PermissionDenied(path),
        _ => WriteError::Io { path, source },
    }
}
