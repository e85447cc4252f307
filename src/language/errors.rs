use crate::language::token::SourceLocation;
use std::sync::Arc;
use thiserror::Error;

/// A fatal error found while turning source text into a [`Program`].
///
/// The full list of source lines travels with the error so that it can be
/// rendered without going back to the input.
///
/// [`Program`]: crate::language::ast::Program
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
    pub source_lines: Arc<[String]>,
}

impl ParseError {
    pub fn new(
        message: impl Into<String>,
        location: SourceLocation,
        source_lines: Arc<[String]>,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            source_lines,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn source_line(&self) -> &str {
        self.source_lines
            .get(self.location.line)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Byte offset of the error location within the joined source text.
    pub fn offset(&self) -> usize {
        let preceding: usize = self
            .source_lines
            .iter()
            .take(self.location.line)
            .map(|line| line.len() + 1)
            .sum();
        preceding + self.location.column
    }

    /// Three-line plain-text rendering: message, offending line, caret.
    pub fn show(&self) -> String {
        [
            format!("L{} {}", self.location.line + 1, self.message),
            format!("| {}", self.source_line()),
            format!("| {}^", " ".repeat(self.location.column)),
        ]
        .join("\n")
    }
}
