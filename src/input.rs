use std::collections::VecDeque;
use std::io::{BufRead, Write};

use thiserror::Error;

/// Why a raw answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0:?} is not a whole number")]
    NotANumber(String),

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// Parse `raw` as an integer in `min..=max`.
pub fn validate_int(raw: &str, min: u32, max: u32) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value < min as i64 || value > max as i64 {
        return Err(InputError::OutOfRange { value, min, max });
    }
    Ok(value as u32)
}

/// Source of answers to integer prompts.
///
/// Implementors only supply raw lines; validation and the fallback to the
/// default live in [`InputProvider::get_validated_int`].
pub trait InputProvider {
    /// Show `prompt` and return the next line, or `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Ask for an integer in `min..=max`. Never fails: anything unusable yields `default`.
    fn get_validated_int(&mut self, prompt: &str, default: u32, min: u32, max: u32) -> u32 {
        let Some(raw) = self.read_line(prompt) else {
            tracing::debug!(prompt, default, "no input available, using default");
            return default;
        };
        match validate_int(&raw, min, max) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, default, "invalid input, using default value");
                default
            }
        }
    }
}

/// Interactive prompts over a reader/writer pair, normally stdin and stdout.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if write!(self.writer, "{prompt}").and_then(|_| self.writer.flush()).is_err() {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

/// Canned answers handed out in order. Used for scripted runs and tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.answers.pop_front()
    }
}

/// Never answers, so every prompt resolves to its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultInput;

impl InputProvider for DefaultInput {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        None
    }
}
