// Greedy team balancing: each player goes to the team with the lowest total.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{TeamBoard, TeamData};
use crate::scoring::score::PlayerScore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("no team available for assignment of player {player_id}")]
    NoTeamAvailable { player_id: String },
}

/// How to choose between teams that share the lowest total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Fewest assigned players, then first in board order.
    #[default]
    FewestPlayers,
    /// First in board order.
    FirstInOrder,
}

/// One placement made by the balancer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub player_id: String,
    pub team_name: String,
}

impl TieBreak {
    fn compare(self, a: &TeamData, b: &TeamData) -> Ordering {
        let by_total = a.total_score.total_cmp(&b.total_score);
        match self {
            TieBreak::FewestPlayers => by_total.then_with(|| a.size().cmp(&b.size())),
            TieBreak::FirstInOrder => by_total,
        }
    }
}

/// Index of the team that should receive the next player. Ties that survive
/// the policy go to the earliest team on the board.
pub fn select_team(teams: &[TeamData], tie_break: TieBreak) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, team) in teams.iter().enumerate() {
        match best {
            Some(b) if tie_break.compare(team, &teams[b]) != Ordering::Less => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Assign `players` one at a time, in the order given, to the team currently
/// holding the lowest total. Callers pass players sorted by descending score.
///
/// Returns the assignments in the order they were made.
pub fn assign_players(
    board: &mut TeamBoard,
    players: &[PlayerScore],
    tie_break: TieBreak,
) -> Result<Vec<Assignment>, OperationError> {
    let mut assignments = Vec::with_capacity(players.len());

    for player in players {
        let teams = board.teams_mut();
        let idx = select_team(teams, tie_break).ok_or_else(|| OperationError::NoTeamAvailable {
            player_id: player.player_id.clone(),
        })?;
        let team = &mut teams[idx];
        team.push(player.clone());

        debug!(
            "Player {} => {} (score={:.4}, team total={:.4})",
            player.player_id, team.team_name, player.score, team.total_score
        );
        assignments.push(Assignment {
            player_id: player.player_id.clone(),
            team_name: team.team_name.clone(),
        });
    }

    Ok(assignments)
}
