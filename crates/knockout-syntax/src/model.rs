//! Domain model for a parsed tournament.
//!
//! The parser materializes these types directly; the statistics pass in
//! `knockout-stats` consumes a [`Tournament`] and returns a new one with the
//! derived counters filled in.

use smallvec::SmallVec;

/// Outcome sentinel for a tied match. A match winner is always one of the
/// two team names or this value, never empty.
pub const DRAW: &str = "Draw";

/// Result text of a match that has not been played yet.
pub const PENDING_RESULT: &str = "Pending";

/// Default result text assigned when a match declares no `result` attribute.
pub const PLACEHOLDER_RESULT: &str = "0-0";

/// Phase reported for a team before any match has been attributed to it.
pub const FIRST_ROUND: &str = "First Round";

/// Current-phase sentinel for a tournament with no declared phases.
pub const NO_PHASE: &str = "none";

/// Root aggregate. Owns all teams and phases.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub name: String,
    pub venue: String,
    /// Declared in the header; advisory only, never validated against
    /// `teams.len()`.
    pub declared_team_count: u32,
    pub teams: Vec<Team>,
    pub phases: Vec<Phase>,
}

impl Tournament {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            venue: String::new(),
            declared_team_count: 0,
            teams: Vec::new(),
            phases: Vec::new(),
        }
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

/// A roster entry of the teams section. Counters start at zero and are
/// overwritten, not accumulated, by the statistics pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub reached_phase: String,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            name: name.into(),
            players,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
            goals_for: 0,
            goals_against: 0,
            reached_phase: FIRST_ROUND.to_string(),
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// Owned by exactly one team. `goals` holds the minutes of every goal the
/// statistics pass attributed to this player.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub position: String,
    pub number: u32,
    pub age: u32,
    pub goals: Vec<u32>,
}

/// One bracket round. Phase order is parse order and defines bracket
/// progression: phase *i* feeds phase *i + 1*.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub name: String,
    pub matches: Vec<Match>,
}

/// A single fixture. `team1`/`team2` are names, not ownership references;
/// teams are resolved by name when statistics are derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub team1: String,
    pub team2: String,
    pub result_text: String,
    pub goals1: u32,
    pub goals2: u32,
    pub scorers: SmallVec<[Scorer; 4]>,
    /// One of the two team names, or [`DRAW`].
    pub winner: String,
}

impl Match {
    /// Builds a match, deriving goals and winner from the result text.
    ///
    /// The result splits on `-`; a side that is absent or non-numeric
    /// defaults to 0. The winner is decided by strict comparison, ties map
    /// to [`DRAW`].
    pub fn new(
        team1: impl Into<String>,
        team2: impl Into<String>,
        result_text: impl Into<String>,
        scorers: SmallVec<[Scorer; 4]>,
    ) -> Self {
        let team1 = team1.into();
        let team2 = team2.into();
        let result_text = result_text.into();

        let mut sides = result_text.split('-');
        let goals1 = sides.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let goals2 = sides.next().and_then(|s| s.parse().ok()).unwrap_or(0);

        let winner = if goals1 > goals2 {
            team1.clone()
        } else if goals2 > goals1 {
            team2.clone()
        } else {
            DRAW.to_string()
        };

        Self {
            team1,
            team2,
            result_text,
            goals1,
            goals2,
            scorers,
            winner,
        }
    }

    /// A match counts as completed once its result is neither the `0-0`
    /// placeholder nor the pending sentinel.
    pub fn is_completed(&self) -> bool {
        self.result_text != PLACEHOLDER_RESULT && self.result_text != PENDING_RESULT
    }
}

/// A goal credit inside one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorer {
    pub name: String,
    pub minute: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn winner_is_team1_on_higher_score() {
        let m = Match::new("A", "B", "2-1", smallvec![]);
        assert_eq!(m.goals1, 2);
        assert_eq!(m.goals2, 1);
        assert_eq!(m.winner, "A");
    }

    #[test]
    fn winner_is_team2_on_higher_score() {
        let m = Match::new("A", "B", "1-2", smallvec![]);
        assert_eq!(m.winner, "B");
    }

    #[test]
    fn tie_maps_to_draw_sentinel() {
        assert_eq!(Match::new("A", "B", "0-0", smallvec![]).winner, DRAW);
        assert_eq!(Match::new("A", "B", "1-1", smallvec![]).winner, DRAW);
    }

    #[test]
    fn malformed_result_sides_default_to_zero() {
        let m = Match::new("A", "B", "x-3", smallvec![]);
        assert_eq!(m.goals1, 0);
        assert_eq!(m.goals2, 3);

        let m = Match::new("A", "B", "2", smallvec![]);
        assert_eq!(m.goals1, 2);
        assert_eq!(m.goals2, 0);

        let m = Match::new("A", "B", "", smallvec![]);
        assert_eq!(m.goals1, 0);
        assert_eq!(m.goals2, 0);
        assert_eq!(m.winner, DRAW);
    }

    #[test]
    fn completion_excludes_placeholder_and_pending() {
        assert!(!Match::new("A", "B", "0-0", smallvec![]).is_completed());
        assert!(!Match::new("A", "B", "Pending", smallvec![]).is_completed());
        assert!(Match::new("A", "B", "3-1", smallvec![]).is_completed());
    }

    #[test]
    fn new_team_counters_are_zero() {
        let t = Team::new("A", Vec::new());
        assert_eq!(t.matches_played, 0);
        assert_eq!(t.matches_won, 0);
        assert_eq!(t.matches_lost, 0);
        assert_eq!(t.goals_for, 0);
        assert_eq!(t.goals_against, 0);
        assert_eq!(t.reached_phase, FIRST_ROUND);
    }
}
