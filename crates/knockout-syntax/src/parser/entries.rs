//! Leaf entry productions: team, player, match, scorer. Each catches its
//! own structural failures at the entry boundary and converts them into a
//! recorded [`Entry::Recovered`], so one malformed entry degrades the model
//! instead of aborting the surrounding section.

use super::{Entry, Parser};
use crate::lexer::TokenKind;
use crate::model::{Match, Player, Scorer, Team};
use anyhow::Result;
use smallvec::SmallVec;

impl Parser {
    pub(super) fn team_entry(&mut self) -> Entry<Team> {
        match self.try_team_entry() {
            Ok(team) => Entry::Parsed(team),
            Err(err) => Entry::Recovered(self.recovered("team entry", err)),
        }
    }

    /// `TeamEntry := KEYWORD("team") ':' STRING '[' PlayerEntry (',' PlayerEntry)* ']'`
    fn try_team_entry(&mut self) -> Result<Team> {
        self.expect_keyword("team")?;
        self.expect(TokenKind::Colon)?;
        let name = self.expect(TokenKind::Str)?;
        self.expect(TokenKind::BracketOpen)?;

        let mut players = Vec::new();
        loop {
            let Some(token) = self.peek() else { break };
            if token.kind == TokenKind::BracketClose {
                break;
            }

            if self.at_keyword("player") {
                if let Entry::Parsed(player) = self.player_entry() {
                    players.push(player);
                }
            }

            if !self.eat_comma() {
                break;
            }
        }

        self.expect(TokenKind::BracketClose)?;
        Ok(Team::new(name.text, players))
    }

    fn player_entry(&mut self) -> Entry<Player> {
        match self.try_player_entry() {
            Ok(player) => Entry::Parsed(player),
            Err(err) => Entry::Recovered(self.recovered("player entry", err)),
        }
    }

    /// `PlayerEntry := KEYWORD("player") ':' STRING '[' AttrList ']'`
    fn try_player_entry(&mut self) -> Result<Player> {
        self.expect_keyword("player")?;
        self.expect(TokenKind::Colon)?;
        let name = self.expect(TokenKind::Str)?;
        self.expect(TokenKind::BracketOpen)?;

        let mut position = String::new();
        let mut number = 0;
        let mut age = 0;

        loop {
            let Some(token) = self.peek() else { break };
            if token.kind == TokenKind::BracketClose {
                break;
            }

            if token.kind == TokenKind::Keyword {
                let attr = token.text.clone();
                self.advance();
                self.expect(TokenKind::Colon)?;

                match attr.as_str() {
                    "position" => position = self.expect(TokenKind::Str)?.text,
                    "number" => number = self.number_value()?,
                    "age" => age = self.number_value()?,
                    // Stray attribute: no value is consumed, so the comma
                    // check below ends the list.
                    _ => {}
                }
            }

            if !self.eat_comma() {
                break;
            }
        }

        self.expect(TokenKind::BracketClose)?;
        Ok(Player {
            name: name.text,
            position,
            number,
            age,
            goals: Vec::new(),
        })
    }

    pub(super) fn match_entry(&mut self) -> Entry<Match> {
        match self.try_match_entry() {
            Ok(m) => Entry::Parsed(m),
            Err(err) => Entry::Recovered(self.recovered("match entry", err)),
        }
    }

    /// `MatchEntry := KEYWORD("match") ':' STRING KEYWORD("vs") STRING '[' AttrList ']'`
    ///
    /// Goals and winner are derived immediately from the result text (see
    /// [`Match::new`]); a match without a `result` attribute keeps the
    /// `0-0` placeholder.
    fn try_match_entry(&mut self) -> Result<Match> {
        self.expect_keyword("match")?;
        self.expect(TokenKind::Colon)?;
        let team1 = self.expect(TokenKind::Str)?;
        self.expect_keyword("vs")?;
        let team2 = self.expect(TokenKind::Str)?;
        self.expect(TokenKind::BracketOpen)?;

        let mut result_text = crate::model::PLACEHOLDER_RESULT.to_string();
        let mut scorers: SmallVec<[Scorer; 4]> = SmallVec::new();

        loop {
            let Some(token) = self.peek() else { break };
            if token.kind == TokenKind::BracketClose {
                break;
            }

            if token.kind == TokenKind::Keyword {
                let attr = token.text.clone();
                self.advance();
                self.expect(TokenKind::Colon)?;

                match attr.as_str() {
                    "result" => result_text = self.expect(TokenKind::Str)?.text,
                    "scorers" => {
                        self.expect(TokenKind::BracketOpen)?;
                        loop {
                            let Some(token) = self.peek() else { break };
                            if token.kind == TokenKind::BracketClose {
                                break;
                            }

                            if self.at_keyword("scorer") {
                                if let Entry::Parsed(scorer) = self.scorer_entry() {
                                    scorers.push(scorer);
                                }
                            }

                            if !self.eat_comma() {
                                break;
                            }
                        }
                        self.expect(TokenKind::BracketClose)?;
                    }
                    _ => {}
                }
            }

            if !self.eat_comma() {
                break;
            }
        }

        self.expect(TokenKind::BracketClose)?;
        Ok(Match::new(team1.text, team2.text, result_text, scorers))
    }

    fn scorer_entry(&mut self) -> Entry<Scorer> {
        match self.try_scorer_entry() {
            Ok(scorer) => Entry::Parsed(scorer),
            Err(err) => Entry::Recovered(self.recovered("scorer entry", err)),
        }
    }

    /// `ScorerEntry := KEYWORD("scorer") ':' STRING '[' KEYWORD("minute") ':' NUMBER ']'`
    fn try_scorer_entry(&mut self) -> Result<Scorer> {
        self.expect_keyword("scorer")?;
        self.expect(TokenKind::Colon)?;
        let name = self.expect(TokenKind::Str)?;
        self.expect(TokenKind::BracketOpen)?;
        self.expect_keyword("minute")?;
        self.expect(TokenKind::Colon)?;
        let minute = self.number_value()?;
        self.expect(TokenKind::BracketClose)?;

        Ok(Scorer {
            name: name.text,
            minute,
        })
    }

    /// Consumes a NUMBER token and converts its digit run, defaulting to 0
    /// when the literal overflows.
    fn number_value(&mut self) -> Result<u32> {
        let token = self.expect(TokenKind::Number)?;
        Ok(token.text.parse().unwrap_or(0))
    }
}
