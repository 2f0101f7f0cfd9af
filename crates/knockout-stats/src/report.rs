//! Read-only report queries over a derived tournament.

use knockout_syntax::Tournament;
use knockout_syntax::model::NO_PHASE;

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingRow {
    pub position: usize,
    pub team: String,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub reached_phase: String,
}

/// One row of the top-scorers table.
#[derive(Debug, Clone, PartialEq)]
pub struct TopScorerRow {
    pub position: usize,
    pub player: String,
    pub team: String,
    pub goals: usize,
    pub minutes: Vec<u32>,
}

impl TopScorerRow {
    /// Minute list as shown in the report, e.g. `15, 88'`.
    pub fn minutes_display(&self) -> String {
        let joined = self
            .minutes
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}'", joined)
    }
}

/// Tournament-wide summary figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub tournament_name: String,
    pub venue: String,
    pub declared_team_count: u32,
    pub total_matches: usize,
    pub completed_matches: usize,
    pub total_goals: u32,
    /// Averaged over all matches, completed or not.
    pub average_goals_per_match: f64,
    pub average_player_age: f64,
    pub current_phase: String,
}

/// Teams ranked by wins, then goal difference.
///
/// The sort is stable, so teams tied on both criteria keep their roster
/// declaration order.
pub fn standings(tournament: &Tournament) -> Vec<StandingRow> {
    let mut ranked: Vec<_> = tournament.teams.iter().collect();
    ranked.sort_by(|a, b| {
        b.matches_won
            .cmp(&a.matches_won)
            .then(b.goal_difference().cmp(&a.goal_difference()))
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, team)| StandingRow {
            position: i + 1,
            team: team.name.clone(),
            matches_played: team.matches_played,
            matches_won: team.matches_won,
            matches_lost: team.matches_lost,
            goals_for: team.goals_for,
            goals_against: team.goals_against,
            goal_difference: team.goal_difference(),
            reached_phase: team.reached_phase.clone(),
        })
        .collect()
}

/// Players with at least one goal, ranked by goal count. Stable on roster
/// order for ties.
pub fn top_scorers(tournament: &Tournament) -> Vec<TopScorerRow> {
    let mut rows = Vec::new();
    for team in &tournament.teams {
        for player in &team.players {
            if !player.goals.is_empty() {
                rows.push((player, team.name.as_str()));
            }
        }
    }

    rows.sort_by(|a, b| b.0.goals.len().cmp(&a.0.goals.len()));

    rows.into_iter()
        .enumerate()
        .map(|(i, (player, team))| TopScorerRow {
            position: i + 1,
            player: player.name.clone(),
            team: team.to_string(),
            goals: player.goals.len(),
            minutes: player.goals.clone(),
        })
        .collect()
}

/// Aggregate figures over the whole tournament.
pub fn summary(tournament: &Tournament) -> Summary {
    let mut total_age: u64 = 0;
    let mut total_players: u64 = 0;
    for team in &tournament.teams {
        for player in &team.players {
            total_age += u64::from(player.age);
            total_players += 1;
        }
    }

    let total_matches: usize = tournament.phases.iter().map(|p| p.matches.len()).sum();
    let completed_matches: usize = tournament
        .phases
        .iter()
        .flat_map(|p| &p.matches)
        .filter(|m| m.is_completed())
        .count();
    let total_goals: u32 = tournament
        .phases
        .iter()
        .flat_map(|p| &p.matches)
        .map(|m| m.goals1 + m.goals2)
        .sum();

    Summary {
        tournament_name: tournament.name.clone(),
        venue: tournament.venue.clone(),
        declared_team_count: tournament.declared_team_count,
        total_matches,
        completed_matches,
        total_goals,
        average_goals_per_match: if total_matches > 0 {
            f64::from(total_goals) / total_matches as f64
        } else {
            0.0
        },
        average_player_age: if total_players > 0 {
            total_age as f64 / total_players as f64
        } else {
            0.0
        },
        current_phase: tournament
            .phases
            .last()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| NO_PHASE.to_string()),
    }
}
