// Composite player scores.

use crate::players::record::{PlayerRecord, NORMALIZED_FIELDS};

/// A player's composite activity score. `current_team_name` is the team the
/// player was on before balancing and is kept for record-keeping only.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerScore {
    pub player_id: String,
    pub current_team_name: String,
    pub score: f64,
}

/// Sum of the scored fields' current values.
pub fn composite_score(record: &PlayerRecord) -> f64 {
    NORMALIZED_FIELDS.iter().map(|field| field.get(record)).sum()
}

/// One score per record, in input order. Expects normalized records.
pub fn calculate_scores(records: &[PlayerRecord]) -> Vec<PlayerScore> {
    records
        .iter()
        .map(|record| PlayerScore {
            player_id: record.player_id.clone(),
            current_team_name: record.current_team_name.clone(),
            score: composite_score(record),
        })
        .collect()
}

/// Highest score first. Stable, so equal scores keep input order.
pub fn sort_by_score_desc(scores: &mut [PlayerScore]) {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
}
