//! Name-to-handle index for teams.
//!
//! Matches reference their teams by name, not ownership. Resolving those
//! names once into stable integer handles avoids a linear string search per
//! match side and pins down which team wins when names collide.

use knockout_syntax::Tournament;
use rustc_hash::FxHashMap;

/// Stable handle into `Tournament::teams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamId(pub usize);

/// Mapping from team name to handle, built once per tournament.
///
/// Duplicate team names keep the first handle, so statistics for a
/// duplicated name always accumulate on the first declared team.
#[derive(Debug, Clone, Default)]
pub struct TeamIndex {
    by_name: FxHashMap<String, TeamId>,
}

impl TeamIndex {
    pub fn build(tournament: &Tournament) -> Self {
        let mut by_name =
            FxHashMap::with_capacity_and_hasher(tournament.teams.len(), Default::default());
        for (i, team) in tournament.teams.iter().enumerate() {
            by_name.entry(team.name.clone()).or_insert(TeamId(i));
        }
        Self { by_name }
    }

    /// Resolves a team name. A name no declared team carries resolves to
    /// `None`; the caller treats that side of a match as a no-op.
    pub fn get(&self, name: &str) -> Option<TeamId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
