//! Shared test utilities.
//!
//! Provides minimal image headers (enough for signature sniffing, not
//! decodable pictures), temp-directory fixtures, and a prompter driven by a
//! script of answers.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = image_dir(&[("a.jpg", JPEG_HEADER), ("notes.txt", b"hello")]);
//! let mut prompter = scripted(&["L", "y"]);
//! ```

use crate::prompt::Prompter;
use std::io::Cursor;
use tempfile::TempDir;

pub const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x02\0\0\0";
pub const JPEG_HEADER: &[u8] = b"\xff\xd8\xff\xe0\0\x10JFIF\0\x01\x01\0\0\x01\0\x01\0\0";
pub const GIF_HEADER: &[u8] = b"GIF89a\x01\0\x01\0\x80\0\0";

/// Prompter whose input is `answers`, one per line, and whose output is
/// captured in memory.
pub fn scripted(answers: &[&str]) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = String::new();
    for answer in answers {
        input.push_str(answer);
        input.push('\n');
    }
    Prompter::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Everything the prompter has written so far, as text.
pub fn transcript(prompter: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8_lossy(prompter.output()).into_owned()
}

/// Temp directory populated with `(file name, contents)` pairs.
pub fn image_dir(files: &[(&str, &[u8])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, contents) in files {
        std::fs::write(tmp.path().join(name), contents).unwrap();
    }
    tmp
}
