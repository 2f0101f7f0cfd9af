mod entries;
mod sections;

use crate::error::{ParseError, ParseErrorKind, Structural, next_sequence};
use crate::lexer::{Token, TokenKind};
use crate::model::Tournament;
use anyhow::{Result, bail};

/// Result of a full parse.
///
/// `success` is false only after a structural failure above leaf level; in
/// that case no model is exposed and the last recorded error carries the
/// failure reason and position. A best-effort model with some entries
/// dropped still reports `success: true`, with the drops listed in `errors`.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub success: bool,
    pub tournament: Option<Tournament>,
    pub errors: Vec<ParseError>,
}

/// Outcome of one leaf entry (team, player, match, scorer).
///
/// A structural failure inside a leaf is caught at the entry boundary and
/// converted to `Recovered`: the entry is omitted, the error recorded, and
/// the surrounding section keeps parsing.
#[derive(Debug)]
pub(crate) enum Entry<T> {
    Parsed(T),
    Recovered(ParseError),
}

/// Recursive-descent parser over the token sequence, one routine per
/// grammar production. Operates through an index cursor; tokens are never
/// mutated or re-scanned.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    #[inline]
    pub(crate) fn at_keyword(&self, word: &str) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Keyword && t.text == word)
    }

    /// Consumes a comma if one is next. The grammar treats commas between
    /// entries and attributes as separators, and their absence ends the
    /// enclosing list.
    #[inline]
    pub(crate) fn eat_comma(&mut self) -> bool {
        if self.at(TokenKind::Comma) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Asserts the current token's kind, advances past it and returns it.
    ///
    /// On mismatch the cursor stays on the offending token and a
    /// [`Structural`] failure is raised; the caller decides whether that is
    /// fatal (section level) or recoverable (leaf entry boundary). Leaving
    /// the token unconsumed lets the section skip loops resynchronize after
    /// a dropped entry.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {}
            Some(token) => bail!(Structural::new(
                format!("expected {}, got {}", kind.label(), token.display_name()),
                token.line,
                token.column,
            )),
            None => bail!(Structural::at_eof(format!(
                "expected {}, got end of input",
                kind.label()
            ))),
        }
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        Ok(token)
    }

    /// Like [`expect`](Self::expect), additionally requiring the exact
    /// keyword text.
    pub(crate) fn expect_keyword(&mut self, word: &str) -> Result<Token> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Keyword && token.text == word => {}
            Some(token) => bail!(Structural::new(
                format!("expected keyword '{}', got {}", word, token.display_name()),
                token.line,
                token.column,
            )),
            None => bail!(Structural::at_eof(format!(
                "expected keyword '{}', got end of input",
                word
            ))),
        }
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        Ok(token)
    }

    pub(crate) fn record(
        &mut self,
        kind: ParseErrorKind,
        description: String,
        line: u32,
        column: u32,
    ) -> ParseError {
        let error = ParseError {
            sequence: next_sequence(),
            kind,
            description,
            line,
            column,
        };
        self.errors.push(error.clone());
        error
    }

    /// Converts a caught leaf failure into a recorded `MalformedEntry`.
    pub(crate) fn recovered(&mut self, entry: &str, err: anyhow::Error) -> ParseError {
        let cause = structural(&err);
        self.record(
            ParseErrorKind::MalformedEntry,
            format!("{} dropped: {}", entry, cause.message),
            cause.line,
            cause.column,
        )
    }

    fn document(&mut self) -> Result<Tournament> {
        let mut tournament = Tournament::new();
        self.tournament_section(&mut tournament)?;
        self.teams_section(&mut tournament)?;
        self.elimination_section(&mut tournament)?;
        Ok(tournament)
    }
}

fn structural(err: &anyhow::Error) -> Structural {
    err.downcast_ref::<Structural>()
        .cloned()
        .unwrap_or_else(|| Structural::at_eof(err.to_string()))
}

/// Parses a token sequence into a tournament model.
///
/// Never raises past this boundary: structural failures are converted into
/// the returned [`ParseOutcome`].
pub fn parse(tokens: Vec<Token>) -> ParseOutcome {
    let mut parser = Parser::new(tokens);

    match parser.document() {
        Ok(tournament) => ParseOutcome {
            success: true,
            tournament: Some(tournament),
            errors: parser.errors,
        },
        Err(err) => {
            let cause = structural(&err);
            parser.record(ParseErrorKind::Fatal, cause.message, cause.line, cause.column);
            ParseOutcome {
                success: false,
                tournament: None,
                errors: parser.errors,
            }
        }
    }
}
