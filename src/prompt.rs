//! Validated interactive input.
//!
//! Every question the tool asks goes through a [`Prompter`], which owns an
//! input reader and an output writer. The binary wires it to stdin/stdout;
//! tests wire it to an in-memory script and a `Vec<u8>`, so whole runs can
//! be driven without a terminal.
//!
//! Each `ask_*` method repeats the question until the answer is valid.
//! Answers are trimmed and compared case-insensitively. End of input while
//! waiting for an answer is an error, never a silent default.

use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Input closed while waiting for an answer to: {0}")]
    Closed(String),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far, for inspecting transcripts.
    #[cfg(test)]
    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write each line followed by a newline.
    pub fn say<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), PromptError> {
        for line in lines {
            writeln!(self.output, "{}", line.as_ref())?;
        }
        Ok(())
    }

    /// Ask once and return the raw trimmed answer.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(PromptError::Closed(question.trim().to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer matches one of `choices` (case-insensitive).
    ///
    /// Each choice is `(accepted spelling, value)`; several spellings may map
    /// to the same value.
    pub fn ask_choice<T: Copy>(
        &mut self,
        question: &str,
        choices: &[(&str, T)],
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(question)?;
            if let Some((_, value)) = choices
                .iter()
                .find(|(spelling, _)| spelling.eq_ignore_ascii_case(&answer))
            {
                return Ok(*value);
            }
            log::debug!("rejected answer {answer:?}");
        }
    }

    /// Ask a yes/no question. Accepts `y`, `yes`, `n`, `no`.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        self.ask_choice(
            question,
            &[("y", true), ("yes", true), ("n", false), ("no", false)],
        )
    }

    /// Ask until the answer parses as a finite floating-point number.
    pub fn ask_number(&mut self, question: &str) -> Result<f64, PromptError> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => writeln!(self.output, "Please enter a number, e.g. 30 or 12.5")?,
            }
        }
    }
}
