// Per-run team board: every known team with its running total and roster.

use crate::scoring::score::PlayerScore;

/// The state of a single team during balancing.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamData {
    /// Team name (unique within a board).
    pub team_name: String,
    /// Sum of the scores of every assigned player.
    pub total_score: f64,
    /// Assigned players in assignment order.
    pub players: Vec<PlayerScore>,
}

impl TeamData {
    pub fn new(team_name: impl Into<String>) -> Self {
        TeamData {
            team_name: team_name.into(),
            total_score: 0.0,
            players: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    /// Mean player score, or `None` for a team with no players.
    pub fn average_score(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        Some(self.total_score / self.players.len() as f64)
    }

    /// Append a player and add its score to the running total.
    pub fn push(&mut self, player: PlayerScore) {
        self.total_score += player.score;
        self.players.push(player);
    }
}

/// All teams for one run, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamBoard {
    teams: Vec<TeamData>,
}

impl TeamBoard {
    /// Build a board of empty teams. Repeated names are collapsed onto the
    /// first occurrence.
    pub fn new<I, S>(team_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut teams: Vec<TeamData> = Vec::new();
        for name in team_names {
            let name = name.into();
            if teams.iter().any(|t| t.team_name == name) {
                continue;
            }
            teams.push(TeamData::new(name));
        }
        TeamBoard { teams }
    }

    pub fn teams(&self) -> &[TeamData] {
        &self.teams
    }

    pub(crate) fn teams_mut(&mut self) -> &mut [TeamData] {
        &mut self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Look up a team by name.
    pub fn team(&self, team_name: &str) -> Option<&TeamData> {
        self.teams.iter().find(|t| t.team_name == team_name)
    }

    /// Sum of every team's running total.
    pub fn total_score(&self) -> f64 {
        self.teams.iter().map(|t| t.total_score).sum()
    }

    /// Number of players assigned across all teams.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(TeamData::size).sum()
    }
}
