// One balancing run: teams -> normalize -> score -> sort -> assign.

use tracing::info;

use crate::players::record::{PlayerRecord, NORMALIZED_FIELDS};
use crate::scoring::normalize::{normalize_columns, ValidationError};
use crate::scoring::score::{calculate_scores, sort_by_score_desc, PlayerScore};
use crate::teams::balance::{assign_players, Assignment, OperationError, TieBreak};
use crate::teams::board::TeamBoard;
use crate::teams::extract::extract_team_names;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("normalization failed")]
    Validation(#[from] ValidationError),

    #[error("assignment failed")]
    Operation(#[from] OperationError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub tie_break: TieBreak,
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    /// Placements in the order they were made.
    pub assignments: Vec<Assignment>,
    pub board: TeamBoard,
    /// Player scores, highest first.
    pub scores: Vec<PlayerScore>,
}

/// Balance `records` across the teams they already name.
///
/// The board is built from the raw records before normalization, so the team
/// set is fixed before any scoring happens. Any failure aborts the run with no
/// partial result.
pub fn run(
    mut records: Vec<PlayerRecord>,
    options: &PipelineOptions,
) -> Result<BalanceOutcome, PipelineError> {
    let team_names = extract_team_names(&records);
    info!("found {} teams across {} players", team_names.len(), records.len());
    let mut board = TeamBoard::new(team_names);

    normalize_columns(&mut records, &NORMALIZED_FIELDS)?;

    let mut scores = calculate_scores(&records);
    sort_by_score_desc(&mut scores);

    let assignments = assign_players(&mut board, &scores, options.tie_break)?;
    info!(
        "assigned {} players using {:?} tie-break",
        assignments.len(),
        options.tie_break
    );

    Ok(BalanceOutcome {
        assignments,
        board,
        scores,
    })
}
