//! Section-level productions: tournament header, team roster, elimination
//! bracket. Failures here are fatal; only leaf entries recover.

use super::{Entry, Parser};
use crate::error::ParseErrorKind;
use crate::lexer::TokenKind;
use crate::model::{Phase, Tournament};
use anyhow::Result;

impl Parser {
    /// `TournamentSection := KEYWORD("tournament") ':'? '{' AttrList '}'`
    ///
    /// The header body is attribute-driven: `KEYWORD ':' value` pairs in any
    /// order, optionally comma-separated. Unknown attribute keywords are
    /// recorded as non-fatal errors; their value falls to the skip arm.
    pub(super) fn tournament_section(&mut self, out: &mut Tournament) -> Result<()> {
        self.expect_keyword("tournament")?;
        if self.at(TokenKind::Colon) {
            self.advance();
        }
        self.expect(TokenKind::BraceOpen)?;

        while let Some(token) = self.peek() {
            if token.kind == TokenKind::BraceClose {
                break;
            }

            if token.kind == TokenKind::Keyword {
                let attr = token.clone();
                self.advance();
                self.expect(TokenKind::Colon)?;

                match attr.text.as_str() {
                    "name" => out.name = self.expect(TokenKind::Str)?.text,
                    "venue" => out.venue = self.expect(TokenKind::Str)?.text,
                    "teams" => {
                        let count = self.expect(TokenKind::Number)?;
                        out.declared_team_count = count.text.parse().unwrap_or(0);
                    }
                    other => {
                        self.record(
                            ParseErrorKind::UnknownAttribute,
                            format!("attribute '{}' is not recognized in the tournament header", other),
                            attr.line,
                            attr.column,
                        );
                    }
                }

                self.eat_comma();
            } else {
                // Best-effort recovery: anything that is not an attribute
                // start is dropped one token at a time.
                self.advance();
            }
        }

        self.expect(TokenKind::BraceClose)?;
        Ok(())
    }

    /// `TeamsSection := KEYWORD("teams") '{' TeamEntry* '}'`
    pub(super) fn teams_section(&mut self, out: &mut Tournament) -> Result<()> {
        self.expect_keyword("teams")?;
        self.expect(TokenKind::BraceOpen)?;

        while let Some(token) = self.peek() {
            if token.kind == TokenKind::BraceClose {
                break;
            }

            if self.at_keyword("team") {
                if let Entry::Parsed(team) = self.team_entry() {
                    out.teams.push(team);
                }
            } else {
                self.advance();
            }
        }

        self.expect(TokenKind::BraceClose)?;
        Ok(())
    }

    /// `EliminationSection := KEYWORD("elimination") '{' PhaseEntry* '}'`
    pub(super) fn elimination_section(&mut self, out: &mut Tournament) -> Result<()> {
        self.expect_keyword("elimination")?;
        self.expect(TokenKind::BraceOpen)?;

        while let Some(token) = self.peek() {
            if token.kind == TokenKind::BraceClose {
                break;
            }

            if token.kind == TokenKind::Keyword {
                let phase = self.phase_entry()?;
                out.phases.push(phase);
            } else {
                self.advance();
            }
        }

        self.expect(TokenKind::BraceClose)?;
        Ok(())
    }

    /// `PhaseEntry := KEYWORD ':' '[' MatchEntry (',' MatchEntry)* ']'`
    ///
    /// Any keyword names a phase; declaration order defines bracket
    /// progression. Phase entries are section level, so failures are fatal.
    fn phase_entry(&mut self) -> Result<Phase> {
        let name = self.expect(TokenKind::Keyword)?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::BracketOpen)?;

        let mut matches = Vec::new();
        loop {
            let Some(token) = self.peek() else { break };
            if token.kind == TokenKind::BracketClose {
                break;
            }

            if self.at_keyword("match") {
                if let Entry::Parsed(m) = self.match_entry() {
                    matches.push(m);
                }
            }

            if !self.eat_comma() {
                break;
            }
        }

        self.expect(TokenKind::BracketClose)?;
        Ok(Phase {
            name: name.text,
            matches,
        })
    }
}
