//! Parse-error types.
//!
//! Lexical problems never surface here; the tokenizer reports them inline as
//! [`TokenKind::Error`](crate::lexer::TokenKind::Error) tokens. Everything
//! the parser records lands in a [`ParseError`], tagged with a
//! [`ParseErrorKind`] so callers can tell recovered entries apart from the
//! failure that aborted a parse.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_SEQUENCE: AtomicU32 = AtomicU32::new(1);

/// Hands out 1-based, insertion-ordered sequence numbers. The counter is
/// process-wide and never reused, even across repeated parses.
pub(crate) fn next_sequence() -> u32 {
    NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Severity and origin of a recorded deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A keyword inside the tournament header that is not a known attribute.
    /// Non-fatal; the attribute is ignored.
    UnknownAttribute,
    /// A leaf entry (team, player, match, scorer) failed structurally and
    /// was dropped. Non-fatal; the surrounding section kept parsing.
    MalformedEntry,
    /// A structural failure above leaf level. The parse was aborted and no
    /// model is exposed.
    Fatal,
}

impl ParseErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ParseErrorKind::UnknownAttribute => "unknown attribute",
            ParseErrorKind::MalformedEntry => "malformed entry",
            ParseErrorKind::Fatal => "syntax error",
        }
    }

    /// Whether the parse continued past this error.
    pub fn is_recoverable(self) -> bool {
        !matches!(self, ParseErrorKind::Fatal)
    }
}

/// One recorded deviation, with its 1-based insertion sequence number and
/// the source position of the offending token (0,0 when the input ended
/// before the position was known).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub sequence: u32,
    pub kind: ParseErrorKind,
    pub description: String,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (line {}, column {})",
            self.kind.label(),
            self.description,
            self.line,
            self.column
        )
    }
}

impl std::error::Error for ParseError {}

/// Internal structural-failure signal raised by `expect` and friends.
///
/// Carried inside `anyhow::Error` while the recursive descent unwinds; the
/// entry boundaries and the top-level `parse()` downcast it back to recover
/// the source position.
#[derive(Debug, Clone)]
pub struct Structural {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl Structural {
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Failure at end of input, where no token position remains.
    pub fn at_eof(message: impl Into<String>) -> Self {
        Self::new(message, 0, 0)
    }
}

impl fmt::Display for Structural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Structural {}
