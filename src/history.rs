use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{AlertCategory, HealthScore};

/// Scores in the order they were produced. Entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthHistory {
    entries: Vec<HealthScore>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub checks: usize,
    pub average_score: f64,
    pub best_score: f64,
    pub worst_score: f64,
    pub latest_score: f64,
    pub improvement: f64,
    pub streak_days: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertCount {
    pub category: AlertCategory,
    pub count: usize,
}

impl HealthHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, score: HealthScore) {
        self.entries.push(score);
    }

    pub fn entries(&self) -> &[HealthScore] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HealthScore> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> Option<HistorySummary> {
        let latest = self.latest()?;
        let total: f64 = self.entries.iter().map(|entry| entry.score).sum();
        let average_score = total / self.entries.len() as f64;
        let best_score = self
            .entries
            .iter()
            .map(|entry| entry.score)
            .fold(f64::MIN, f64::max);
        let worst_score = self
            .entries
            .iter()
            .map(|entry| entry.score)
            .fold(f64::MAX, f64::min);

        Some(HistorySummary {
            checks: self.entries.len(),
            average_score,
            best_score,
            worst_score,
            latest_score: latest.score,
            improvement: latest.score - average_score,
            streak_days: self.streak_days(),
        })
    }

    /// Consecutive days with at least one check, counted back from the day of
    /// the latest check.
    pub fn streak_days(&self) -> usize {
        let Some(latest) = self.latest() else {
            return 0;
        };

        let mut days: Vec<NaiveDate> = self
            .entries
            .iter()
            .map(|entry| entry.last_updated.date_naive())
            .collect();
        days.sort_unstable();
        days.dedup();

        let mut expected = latest.last_updated.date_naive();
        let mut streak = 0;
        for day in days.iter().rev() {
            if *day > expected {
                continue;
            }
            if *day != expected {
                break;
            }
            streak += 1;
            expected = expected - Duration::days(1);
        }

        streak
    }

    pub fn alert_counts(&self) -> Vec<AlertCount> {
        let mut map: std::collections::HashMap<AlertCategory, usize> =
            std::collections::HashMap::new();

        for alert in self.entries.iter().flat_map(|entry| entry.alerts.iter()) {
            *map.entry(alert.category).or_insert(0) += 1;
        }

        let mut counts: Vec<AlertCount> = map
            .into_iter()
            .map(|(category, count)| AlertCount { category, count })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.category.cmp(&b.category)));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::evaluate_at;
    use crate::models::DailyInput;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap() + Duration::days(offset)
    }

    fn healthy() -> DailyInput {
        DailyInput {
            water_intake: Some(5),
            activity_level: Some(3),
            ..DailyInput::default()
        }
    }

    #[test]
    fn empty_history_has_no_summary() {
        let history = HealthHistory::new();
        assert!(history.summary().is_none());
        assert_eq!(history.streak_days(), 0);
        assert!(history.alert_counts().is_empty());
    }

    #[test]
    fn summary_tracks_average_best_and_improvement() {
        let mut history = HealthHistory::new();
        history.push(evaluate_at(&DailyInput::default(), 0.0, day(0)));
        history.push(evaluate_at(&healthy(), 0.0, day(1)));

        let summary = history.summary().unwrap();
        assert_eq!(summary.checks, 2);
        assert_eq!(summary.average_score, 89.0);
        assert_eq!(summary.best_score, 100.0);
        assert_eq!(summary.worst_score, 78.0);
        assert_eq!(summary.latest_score, 100.0);
        assert_eq!(summary.improvement, 11.0);
        assert_eq!(summary.streak_days, 2);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let mut history = HealthHistory::new();
        for offset in [0, 2, 3, 3, 4] {
            history.push(evaluate_at(&healthy(), 0.0, day(offset)));
        }
        assert_eq!(history.streak_days(), 3);
    }

    #[test]
    fn alert_counts_order_by_frequency() {
        let mut history = HealthHistory::new();
        history.push(evaluate_at(&DailyInput::default(), 0.0, day(0)));
        history.push(evaluate_at(
            &DailyInput {
                activity_level: Some(3),
                ..DailyInput::default()
            },
            0.0,
            day(1),
        ));

        let counts = history.alert_counts();
        assert_eq!(
            counts,
            vec![
                AlertCount {
                    category: AlertCategory::Hydration,
                    count: 2
                },
                AlertCount {
                    category: AlertCategory::Activity,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn serializes_as_a_plain_array() {
        let mut history = HealthHistory::new();
        history.push(evaluate_at(&healthy(), 0.0, day(0)));
        let value = serde_json::to_value(&history).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["level"], 11);
        assert!(value[0]["lastUpdated"].is_string());
    }
}
