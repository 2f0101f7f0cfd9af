//! Statistics derivation.
//!
//! [`derive_statistics`] is a pure function from a parsed tournament to a
//! new tournament with per-team counters and per-player goal minutes filled
//! in. Counters are rebuilt from zero on every call, so deriving twice from
//! the same input is identical by construction.

use crate::index::TeamIndex;
use knockout_syntax::model::DRAW;
use knockout_syntax::{Match, Tournament};

/// Returns a copy of the tournament with all derived statistics populated.
///
/// For every match, in phase declaration order: both sides are resolved by
/// exact name through the [`TeamIndex`]; a side naming no declared team
/// contributes nothing and raises no error. Each resolved team gets its
/// played/won/lost and goal counters bumped and its `reached_phase`
/// overwritten with the capitalized phase name, so the last phase a team
/// appears in wins. Scorer names are matched against every roster in team
/// order; the first player with that exact name collects the minute,
/// unmatched scorers are dropped silently.
pub fn derive_statistics(tournament: &Tournament) -> Tournament {
    let index = TeamIndex::build(tournament);
    let mut derived = tournament.clone();

    for team in &mut derived.teams {
        team.matches_played = 0;
        team.matches_won = 0;
        team.matches_lost = 0;
        team.goals_for = 0;
        team.goals_against = 0;
    }
    for team in &mut derived.teams {
        for player in &mut team.players {
            player.goals.clear();
        }
    }

    // Walk the input's phases while mutating the copy's teams; the two
    // share identical match lists.
    for phase in &tournament.phases {
        let phase_name = capitalize(&phase.name);

        for m in &phase.matches {
            if let Some(id) = index.get(&m.team1) {
                apply_side(&mut derived, id, m, true, &phase_name);
            }
            if let Some(id) = index.get(&m.team2) {
                apply_side(&mut derived, id, m, false, &phase_name);
            }

            for scorer in &m.scorers {
                credit_scorer(&mut derived, &scorer.name, scorer.minute);
            }
        }
    }

    derived
}

fn apply_side(out: &mut Tournament, id: crate::index::TeamId, m: &Match, is_team1: bool, phase: &str) {
    let (own, other, scored, conceded) = if is_team1 {
        (&m.team1, &m.team2, m.goals1, m.goals2)
    } else {
        (&m.team2, &m.team1, m.goals2, m.goals1)
    };

    let team = &mut out.teams[id.0];
    team.matches_played += 1;
    team.goals_for += scored;
    team.goals_against += conceded;
    team.reached_phase = phase.to_string();

    // A draw matches neither name, leaving both counters untouched.
    debug_assert!(m.winner == *own || m.winner == *other || m.winner == DRAW);
    if m.winner == *own {
        team.matches_won += 1;
    }
    if m.winner == *other {
        team.matches_lost += 1;
    }
}

/// First roster match wins; unmatched names are dropped without error.
fn credit_scorer(out: &mut Tournament, name: &str, minute: u32) {
    for team in &mut out.teams {
        if let Some(player) = team.players.iter_mut().find(|p| p.name == name) {
            player.goals.push(minute);
            return;
        }
    }
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
