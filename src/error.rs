use crate::cursor::Location;
use std::fmt;
use thiserror::Error;

/// Failure payload of a parser: an ordered list of human readable messages
///
/// Combinators that run a single sub-parser pass this through untouched.
/// Alternation appends the messages of every failed branch, left branch first,
/// so the list reads in the order the alternatives were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct ParseError {
    messages: Vec<String>,
}

impl ParseError {
    /// Create an error holding a single message
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            messages: vec![message.into()],
        }
    }

    /// Create an error with no messages, as produced by an empty choice
    pub fn empty() -> Self {
        ParseError::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Append the messages of `other` after the messages of `self`
    pub fn merge(mut self, other: ParseError) -> Self {
        self.messages.extend(other.messages);
        self
    }
}

impl From<Vec<String>> for ParseError {
    fn from(messages: Vec<String>) -> Self {
        ParseError { messages }
    }
}

/// Result of applying a parser once: `Ok` is success, `Err` carries the messages
pub type Outcome<T> = Result<T, ParseError>;

/// Errors raised while building a grammar, before any input is parsed
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A failed top-level parse together with where in the input it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    line: usize,
    column: usize,
    position: usize,
    source_line: String,
    error: ParseError,
}

impl ParseFailure {
    pub fn new(location: Location<'_>, position: usize, error: ParseError) -> Self {
        ParseFailure {
            line: location.line,
            column: location.column,
            position,
            source_line: location.source_line.to_string(),
            error,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Absolute byte offset of the failure
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn messages(&self) -> &[String] {
        self.error.messages()
    }

    pub fn into_error(self) -> ParseError {
        self.error
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.line, self.column, self.error
        )?;
        writeln!(f)?;

        let prefix = format!("  > {} | ", self.line);
        writeln!(f, "{}{}", prefix, self.source_line)?;
        // Columns are 1-based, the pointer offset is not
        let pointer_offset = prefix.len() + self.column - 1;
        writeln!(f, "{}^--- here", " ".repeat(pointer_offset))
    }
}

impl std::error::Error for ParseFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
