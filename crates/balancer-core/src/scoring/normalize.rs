// Min-max normalization of the scored activity columns.

use tracing::debug;

use crate::players::record::{PlayerRecord, ScoredField};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("no numeric data for column `{field}`")]
    NoNumericData { field: ScoredField },

    #[error("invalid value in column `{field}` for player {player_id}: {value}")]
    InvalidValue {
        field: ScoredField,
        player_id: String,
        value: f64,
    },
}

/// Observed range of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    /// Rescale `value` into [0, 1]. A degenerate range (min == max) carries
    /// no signal and maps everything to 0.
    pub fn scale(&self, value: f64) -> f64 {
        if self.min == self.max {
            return 0.0;
        }
        // Halved so a span wider than f64::MAX stays finite.
        let half_span = self.max / 2.0 - self.min / 2.0;
        (value / 2.0 - self.min / 2.0) / half_span
    }
}

/// Validate one column and return its range over the current values.
pub fn column_range(
    records: &[PlayerRecord],
    field: ScoredField,
) -> Result<ColumnRange, ValidationError> {
    if records.is_empty() {
        return Err(ValidationError::NoNumericData { field });
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        let value = field.get(record);
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field,
                player_id: record.player_id.clone(),
                value,
            });
        }
        min = min.min(value);
        max = max.max(value);
    }
    Ok(ColumnRange { min, max })
}

/// Rescale each of `fields` in place so its minimum maps to 0 and its maximum
/// to 1. A field listed more than once is rescaled once.
///
/// Every range is computed from the original values before any column is
/// rewritten, so a failure leaves `records` untouched. Running this twice is
/// only a no-op when each column already spans exactly [0, 1].
pub fn normalize_columns(
    records: &mut [PlayerRecord],
    fields: &[ScoredField],
) -> Result<(), ValidationError> {
    let mut unique: Vec<ScoredField> = Vec::with_capacity(fields.len());
    for &field in fields {
        if !unique.contains(&field) {
            unique.push(field);
        }
    }

    let original: &[PlayerRecord] = records;
    let ranges = unique
        .into_iter()
        .map(|field| column_range(original, field).map(|range| (field, range)))
        .collect::<Result<Vec<_>, _>>()?;

    for (field, range) in ranges {
        debug!("normalizing {}: min={} max={}", field, range.min, range.max);
        for record in records.iter_mut() {
            let scaled = range.scale(field.get(record));
            field.set(record, scaled);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::record::test_support::blank_record;
    use crate::players::record::NORMALIZED_FIELDS;

    const EPS: f64 = 1e-12;

    fn with_events(values: &[f64]) -> Vec<PlayerRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let mut r = blank_record(&format!("p{i}"), "Red");
                r.historical_events_participated = v;
                r
            })
            .collect()
    }

    #[test]
    fn scales_to_unit_interval() {
        let mut records = with_events(&[10.0, 20.0, 30.0]);
        normalize_columns(&mut records, &[ScoredField::HistoricalEventsParticipated]).unwrap();
        let out: Vec<f64> = records.iter().map(|r| r.historical_events_participated).collect();
        assert!((out[0] - 0.0).abs() < EPS);
        assert!((out[1] - 0.5).abs() < EPS);
        assert!((out[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn min_and_max_land_on_zero_and_one() {
        let mut records = with_events(&[7.0, -3.0, 42.5, 0.0, 11.0]);
        for (i, r) in records.iter_mut().enumerate() {
            r.historical_points_earned = (i * i) as f64 * 3.5;
            r.days_active_last_30 = 30.0 - i as f64;
        }
        normalize_columns(&mut records, &NORMALIZED_FIELDS).unwrap();

        for field in [
            ScoredField::HistoricalEventsParticipated,
            ScoredField::HistoricalPointsEarned,
            ScoredField::DaysActiveLast30,
        ] {
            let values: Vec<f64> = records.iter().map(|r| field.get(r)).collect();
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(min.abs() < EPS, "{field} min = {min}");
            assert!((max - 1.0).abs() < EPS, "{field} max = {max}");
        }
    }

    #[test]
    fn constant_column_becomes_zero() {
        let mut records = with_events(&[0.0, 0.0, 0.0]);
        for r in &mut records {
            r.historical_messages_sent = 9.0;
        }
        normalize_columns(&mut records, &NORMALIZED_FIELDS).unwrap();
        for r in &records {
            assert_eq!(r.historical_events_participated, 0.0);
            assert_eq!(r.historical_messages_sent, 0.0);
        }
    }

    #[test]
    fn single_record_becomes_zero() {
        let mut records = with_events(&[123.0]);
        normalize_columns(&mut records, &NORMALIZED_FIELDS).unwrap();
        assert_eq!(records[0].historical_events_participated, 0.0);
    }

    #[test]
    fn unscored_fields_untouched() {
        let mut records = with_events(&[1.0, 2.0]);
        records[0].historical_points_spent = 500.0;
        records[1].current_total_points = 77.0;
        records[1].current_streak_value = 4.0;
        normalize_columns(&mut records, &NORMALIZED_FIELDS).unwrap();
        assert_eq!(records[0].historical_points_spent, 500.0);
        assert_eq!(records[1].current_total_points, 77.0);
        assert_eq!(records[1].current_streak_value, 4.0);
    }

    #[test]
    fn fields_scaled_independently() {
        let mut records = with_events(&[0.0, 100.0]);
        records[0].historical_event_engagements = 5.0;
        records[1].historical_event_engagements = 10.0;
        normalize_columns(
            &mut records,
            &[
                ScoredField::HistoricalEventsParticipated,
                ScoredField::HistoricalEventEngagements,
            ],
        )
        .unwrap();
        assert_eq!(records[0].historical_event_engagements, 0.0);
        assert_eq!(records[1].historical_event_engagements, 1.0);
        assert_eq!(records[1].historical_events_participated, 1.0);
    }

    #[test]
    fn empty_input_has_no_numeric_data() {
        let mut records: Vec<PlayerRecord> = Vec::new();
        let err = normalize_columns(&mut records, &NORMALIZED_FIELDS).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NoNumericData {
                field: ScoredField::HistoricalEventsParticipated
            }
        );
    }

    #[test]
    fn nan_value_rejected_with_field_and_player() {
        let mut records = with_events(&[1.0, 2.0, 3.0]);
        records[1].days_active_last_30 = f64::NAN;
        let err = normalize_columns(&mut records, &NORMALIZED_FIELDS).unwrap_err();
        match err {
            ValidationError::InvalidValue {
                field,
                player_id,
                value,
            } => {
                assert_eq!(field, ScoredField::DaysActiveLast30);
                assert_eq!(player_id, "p1");
                assert!(value.is_nan());
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn failure_leaves_records_unmodified() {
        let mut records = with_events(&[1.0, 2.0, 3.0]);
        records[2].historical_messages_sent = f64::INFINITY;
        let before = records.clone();
        assert!(normalize_columns(&mut records, &NORMALIZED_FIELDS).is_err());
        assert_eq!(records[0], before[0]);
        assert_eq!(records[1].historical_events_participated, 2.0);
    }

    #[test]
    fn renormalizing_is_noop_only_on_unit_span() {
        let mut records = with_events(&[2.0, 4.0, 6.0]);
        let field = [ScoredField::HistoricalEventsParticipated];
        normalize_columns(&mut records, &field).unwrap();
        let once: Vec<f64> = records.iter().map(|r| r.historical_events_participated).collect();
        normalize_columns(&mut records, &field).unwrap();
        let twice: Vec<f64> = records.iter().map(|r| r.historical_events_participated).collect();
        assert_eq!(once, twice);
        assert_ne!(once, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn repeated_field_scaled_once() {
        let mut records = with_events(&[10.0, 20.0]);
        let field = ScoredField::HistoricalEventsParticipated;
        normalize_columns(&mut records, &[field, field]).unwrap();
        assert_eq!(records[0].historical_events_participated, 0.0);
        assert_eq!(records[1].historical_events_participated, 1.0);
    }

    #[test]
    fn range_wider_than_f64_max_stays_in_unit_interval() {
        let mut records = with_events(&[0.0, 0.0, 0.0]);
        for (r, v) in records.iter_mut().zip([-1e308, 0.0, 1e308]) {
            r.historical_points_earned = v;
        }
        normalize_columns(&mut records, &NORMALIZED_FIELDS).unwrap();
        let out: Vec<f64> = records.iter().map(|r| r.historical_points_earned).collect();
        assert!(out.iter().all(|v| v.is_finite()), "{out:?}");
        assert!(out[0].abs() < EPS);
        assert!((out[1] - 0.5).abs() < 1e-9);
        assert!((out[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn degenerate_range_scales_to_zero() {
        let range = ColumnRange { min: 3.0, max: 3.0 };
        assert_eq!(range.scale(3.0), 0.0);
    }
}
