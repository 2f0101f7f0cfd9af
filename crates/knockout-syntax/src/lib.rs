//! # Knockout Syntax
//!
//! Tokenizer, parser, and domain model for the knockout tournament notation.
//!
//! ## Overview
//!
//! This crate provides the front half of the knockout pipeline:
//!
//! - **Lexer**: scans a document once into a stream of position-tagged
//!   tokens; lexical problems surface inline as error tokens, never as
//!   failures
//! - **Parser**: recursive-descent over the token stream, with best-effort
//!   recovery for malformed leaf entries
//! - **Model**: the tournament aggregate (teams, players, phases, matches)
//!   with parse-time derived match outcomes
//!
//! ## Architecture
//!
//! ```text
//! Source text
//!     ↓
//! Lexer (tokenize)
//!     ↓
//! Vec<Token>
//!     ↓
//! Parser (parse)
//!     ↓
//! ParseOutcome { success, tournament, errors }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use knockout_syntax::{tokenize, parse};
//!
//! let source = r#"
//!     tournament { name: "Copa Demo", teams: 2 }
//!     teams {
//!         team: "Cobras" [
//!             player: "Ana Silva" [position: "FORWARD", number: 9, age: 24]
//!         ]
//!     }
//!     elimination {
//!         final: [
//!             match: "Cobras" vs "Lobos" [result: "2-1"]
//!         ]
//!     }
//! "#;
//!
//! let tokens = tokenize(source);
//! let outcome = parse(tokens);
//!
//! assert!(outcome.success);
//! let tournament = outcome.tournament.unwrap();
//! assert_eq!(tournament.phases[0].matches[0].winner, "Cobras");
//! ```
//!
//! ## Error model
//!
//! Lexical errors (unrecognized character, unterminated string) become
//! [`TokenKind::Error`](lexer::TokenKind::Error) tokens in the stream.
//! Parse errors accumulate in the outcome: recoverable ones (unknown header
//! attribute, malformed leaf entry) leave `success` true with the offending
//! entry omitted; a structural failure above leaf level aborts the parse
//! with `success` false and no model.

pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Token, TokenKind, tokenize};
pub use model::{Match, Phase, Player, Scorer, Team, Tournament};
pub use parser::{ParseOutcome, parse};
