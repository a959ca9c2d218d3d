// Roster CSV loading.
//
// The whole file is read into memory before parsing: normalization needs the
// global min/max of every scored column, so rows are never streamed onward.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::record::PlayerRecord;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("row {row}: column `{field}` is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Failure from the reader-based loader before a path is attached.
#[derive(Debug)]
enum ReadFailure {
    Csv(csv::Error),
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },
}

impl ReadFailure {
    fn with_path(self, path: &Path) -> LoadError {
        match self {
            ReadFailure::Csv(source) => LoadError::Csv {
                path: path.display().to_string(),
                source,
            },
            ReadFailure::InvalidNumber { row, field, value } => {
                LoadError::InvalidNumber { row, field, value }
            }
        }
    }
}

impl From<csv::Error> for ReadFailure {
    fn from(e: csv::Error) -> Self {
        ReadFailure::Csv(e)
    }
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

/// Numeric columns are kept as text here so coercion failures can report the
/// original cell contents. Extra columns are ignored by serde.
#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    historical_events_participated: String,
    historical_event_engagements: String,
    historical_points_earned: String,
    historical_points_spent: String,
    historical_messages_sent: String,
    current_total_points: String,
    days_active_last_30: String,
    current_streak_value: String,
    last_active_ts: String,
    current_team_id: String,
    current_team_name: String,
    player_id: String,
}

/// Coerce a scored cell. Unparseable text becomes NaN so the normalizer can
/// reject it with the field name attached.
fn coerce_scored(row: usize, field: &'static str, raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            warn!("row {}: column `{}` has non-numeric value {:?}", row, field, raw);
            f64::NAN
        }
    }
}

/// Coerce an unscored cell. These never reach the normalizer, so bad text is
/// rejected here.
fn coerce_unscored(row: usize, field: &'static str, raw: &str) -> Result<f64, ReadFailure> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ReadFailure::InvalidNumber {
            row,
            field,
            value: raw.to_string(),
        }),
    }
}

impl RawPlayerRow {
    fn into_record(self, row: usize) -> Result<PlayerRecord, ReadFailure> {
        Ok(PlayerRecord {
            historical_events_participated: coerce_scored(
                row,
                "historical_events_participated",
                &self.historical_events_participated,
            ),
            historical_event_engagements: coerce_scored(
                row,
                "historical_event_engagements",
                &self.historical_event_engagements,
            ),
            historical_points_earned: coerce_scored(
                row,
                "historical_points_earned",
                &self.historical_points_earned,
            ),
            historical_points_spent: coerce_unscored(
                row,
                "historical_points_spent",
                &self.historical_points_spent,
            )?,
            historical_messages_sent: coerce_scored(
                row,
                "historical_messages_sent",
                &self.historical_messages_sent,
            ),
            current_total_points: coerce_unscored(
                row,
                "current_total_points",
                &self.current_total_points,
            )?,
            days_active_last_30: coerce_scored(
                row,
                "days_active_last_30",
                &self.days_active_last_30,
            ),
            current_streak_value: coerce_unscored(
                row,
                "current_streak_value",
                &self.current_streak_value,
            )?,
            last_active_ts: self.last_active_ts,
            current_team_id: self.current_team_id,
            current_team_name: self.current_team_name,
            player_id: self.player_id,
        })
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

fn load_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, ReadFailure> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawPlayerRow>().enumerate() {
        let raw = result?;
        records.push(raw.into_record(idx + 1)?);
    }
    Ok(records)
}

/// Parse player records from any reader. Rows are numbered from 1, excluding
/// the header, in error messages.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, LoadError> {
    load_from_reader(rdr).map_err(|e| e.with_path(Path::new("<reader>")))
}

/// Read the roster CSV at `path` in full, then parse it.
pub async fn load_players(path: &Path) -> Result<Vec<PlayerRecord>, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    let records = load_from_reader(bytes.as_slice()).map_err(|e| e.with_path(path))?;
    info!("loaded {} player records from {}", records.len(), path.display());
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
