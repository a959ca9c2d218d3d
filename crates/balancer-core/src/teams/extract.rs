// Distinct team names from the roster.

use std::collections::HashSet;

use crate::players::record::PlayerRecord;

/// Distinct `current_team_name` values in order of first appearance.
pub fn extract_team_names(records: &[PlayerRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.current_team_name.as_str()))
        .map(|r| r.current_team_name.clone())
        .collect()
}
