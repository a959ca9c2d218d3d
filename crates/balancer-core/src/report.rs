// Text report: one line per assignment, then a per-team summary.

use std::io::{self, Write};

use crate::teams::balance::Assignment;
use crate::teams::board::TeamBoard;

pub const SEPARATOR: &str = "------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_average: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions { show_average: true }
    }
}

/// Display figures for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub team_name: String,
    pub size: usize,
    pub total_score: f64,
    /// `None` when the team has no players.
    pub average_score: Option<f64>,
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-team figures in board order, rounded for display.
pub fn summarize(board: &TeamBoard) -> Vec<TeamSummary> {
    board
        .teams()
        .iter()
        .map(|team| TeamSummary {
            team_name: team.team_name.clone(),
            size: team.size(),
            total_score: round2(team.total_score),
            average_score: team.average_score().map(round2),
        })
        .collect()
}

pub fn write_assignments<W: Write>(out: &mut W, assignments: &[Assignment]) -> io::Result<()> {
    for a in assignments {
        writeln!(out, "Player {} => {}", a.player_id, a.team_name)?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(
    out: &mut W,
    summaries: &[TeamSummary],
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "\nTeams Summary:\n")?;

    for s in summaries {
        writeln!(out, "Team: {},", s.team_name)?;
        writeln!(out, "Size: {},", s.size)?;
        if options.show_average {
            match s.average_score {
                Some(avg) => writeln!(out, "Users Average Score: {avg:.2},")?,
                None => writeln!(out, "Users Average Score: n/a,")?,
            }
        }
        writeln!(out, "Total Score: {:.2}\n", s.total_score)?;
    }
    Ok(())
}

/// Full report: assignments, separator, then team summaries.
pub fn write_report<W: Write>(
    out: &mut W,
    assignments: &[Assignment],
    board: &TeamBoard,
    options: ReportOptions,
) -> io::Result<()> {
    write_assignments(out, assignments)?;
    write_summary(out, &summarize(board), options)
}
