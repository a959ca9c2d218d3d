// Player records and the fixed set of scored activity fields.

use serde::{Deserialize, Serialize};

/// One row of the roster CSV after numeric coercion.
///
/// The five fields named by [`ScoredField`] are overwritten in place by
/// normalization; the remaining numeric fields are carried but never scored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub historical_events_participated: f64,
    pub historical_event_engagements: f64,
    pub historical_points_earned: f64,
    pub historical_points_spent: f64,
    pub historical_messages_sent: f64,
    pub current_total_points: f64,
    pub days_active_last_30: f64,
    pub current_streak_value: f64,

    pub last_active_ts: String,
    pub current_team_id: String,
    pub current_team_name: String,
    pub player_id: String,
}

/// Activity fields that feed the composite score.
///
/// Points spent, current total points and current streak are deliberately
/// absent: they are not activity signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoredField {
    HistoricalEventsParticipated,
    HistoricalEventEngagements,
    HistoricalPointsEarned,
    HistoricalMessagesSent,
    DaysActiveLast30,
}

/// Scored fields in canonical order.
pub const NORMALIZED_FIELDS: [ScoredField; 5] = [
    ScoredField::HistoricalEventsParticipated,
    ScoredField::HistoricalEventEngagements,
    ScoredField::HistoricalPointsEarned,
    ScoredField::HistoricalMessagesSent,
    ScoredField::DaysActiveLast30,
];

impl ScoredField {
    /// CSV column name for this field.
    pub fn column(self) -> &'static str {
        match self {
            ScoredField::HistoricalEventsParticipated => "historical_events_participated",
            ScoredField::HistoricalEventEngagements => "historical_event_engagements",
            ScoredField::HistoricalPointsEarned => "historical_points_earned",
            ScoredField::HistoricalMessagesSent => "historical_messages_sent",
            ScoredField::DaysActiveLast30 => "days_active_last_30",
        }
    }

    pub fn get(self, record: &PlayerRecord) -> f64 {
        match self {
            ScoredField::HistoricalEventsParticipated => record.historical_events_participated,
            ScoredField::HistoricalEventEngagements => record.historical_event_engagements,
            ScoredField::HistoricalPointsEarned => record.historical_points_earned,
            ScoredField::HistoricalMessagesSent => record.historical_messages_sent,
            ScoredField::DaysActiveLast30 => record.days_active_last_30,
        }
    }

    pub fn set(self, record: &mut PlayerRecord, value: f64) {
        let slot = match self {
            ScoredField::HistoricalEventsParticipated => &mut record.historical_events_participated,
            ScoredField::HistoricalEventEngagements => &mut record.historical_event_engagements,
            ScoredField::HistoricalPointsEarned => &mut record.historical_points_earned,
            ScoredField::HistoricalMessagesSent => &mut record.historical_messages_sent,
            ScoredField::DaysActiveLast30 => &mut record.days_active_last_30,
        };
        *slot = value;
    }
}

impl std::fmt::Display for ScoredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::blank_record;
    use super::*;

    #[test]
    fn normalized_fields_are_distinct_and_ordered() {
        let columns: Vec<&str> = NORMALIZED_FIELDS.iter().map(|f| f.column()).collect();
        assert_eq!(
            columns,
            vec![
                "historical_events_participated",
                "historical_event_engagements",
                "historical_points_earned",
                "historical_messages_sent",
                "days_active_last_30",
            ]
        );
    }

    #[test]
    fn set_then_get_touches_only_that_field() {
        let mut record = blank_record("p1", "Red");
        for (i, field) in NORMALIZED_FIELDS.iter().enumerate() {
            field.set(&mut record, (i + 1) as f64);
        }
        assert_eq!(record.historical_events_participated, 1.0);
        assert_eq!(record.historical_event_engagements, 2.0);
        assert_eq!(record.historical_points_earned, 3.0);
        assert_eq!(record.historical_messages_sent, 4.0);
        assert_eq!(record.days_active_last_30, 5.0);
        // Unscored fields untouched
        assert_eq!(record.historical_points_spent, 0.0);
        assert_eq!(record.current_total_points, 0.0);
        assert_eq!(record.current_streak_value, 0.0);
    }

    #[test]
    fn display_uses_column_name() {
        assert_eq!(ScoredField::DaysActiveLast30.to_string(), "days_active_last_30");
    }
}
