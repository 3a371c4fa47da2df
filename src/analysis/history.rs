//! Bounded list of recent analyses.

use super::dispatch::Analysis;
use super::method::AnalysisMethod;
use crate::stats::{StatsError, StatsResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of entries kept.
pub const HISTORY_LIMIT: usize = 10;

/// What the history remembers about one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub method: AnalysisMethod,
    pub method_name: String,
    pub independent_var: String,
    pub dependent_var: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Analysis> for HistoryEntry {
    fn from(analysis: &Analysis) -> Self {
        Self {
            id: analysis.id.clone(),
            method: analysis.method,
            method_name: analysis.method.display_name().to_string(),
            independent_var: analysis.independent_var.clone(),
            dependent_var: analysis.dependent_var.clone(),
            timestamp: analysis.timestamp,
        }
    }
}

/// The [`HISTORY_LIMIT`] most recent analyses, newest first.
///
/// Persisting the JSON blob from [`to_json`](Self::to_json) is left to the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisHistory {
    entries: VecDeque<HistoryEntry>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an analysis, evicting the oldest entry beyond the limit.
    pub fn record(&mut self, analysis: &Analysis) {
        self.entries.push_front(HistoryEntry::from(analysis));
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize to the JSON array stored between sessions.
    pub fn to_json(&self) -> StatsResult<String> {
        serde_json::to_string(self).map_err(|e| StatsError::Serialization {
            reason: e.to_string(),
        })
    }

    /// Restore from a stored blob. Entries beyond the limit are dropped.
    pub fn from_json(json: &str) -> StatsResult<Self> {
        let mut history: Self = serde_json::from_str(json).map_err(|e| {
            StatsError::Serialization {
                reason: e.to_string(),
            }
        })?;
        if history.entries.len() > HISTORY_LIMIT {
            tracing::warn!(
                stored = history.entries.len(),
                limit = HISTORY_LIMIT,
                "dropping stored history entries beyond the limit"
            );
            history.entries.truncate(HISTORY_LIMIT);
        }
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisOutcome;
    use crate::stats::{CorrelationAlgorithms, StatsEngine};
    use chrono::TimeZone;

    fn analysis(i: i64) -> Analysis {
        let engine = StatsEngine::default();
        let outcome = AnalysisOutcome::Correlation(
            engine
                .pearson(&[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0])
                .unwrap(),
        );
        let timestamp = Utc.timestamp_opt(1_700_000_000 + i, 0).unwrap();
        Analysis {
            id: format!("analysis_{i}"),
            method: AnalysisMethod::Scatter,
            independent_var: "x".to_string(),
            dependent_var: "y".to_string(),
            timestamp,
            data_size: 3,
            outcome,
        }
    }

    #[test]
    fn test_record_newest_first_and_bounded() {
        let mut history = AnalysisHistory::new();
        assert!(history.is_empty());
        for i in 0..12 {
            history.record(&analysis(i));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.latest().unwrap().id, "analysis_11");
        assert_eq!(history.entries().last().unwrap().id, "analysis_2");
        assert_eq!(history.latest().unwrap().method_name, "Scatter plot");

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_json_blob() {
        let mut history = AnalysisHistory::new();
        history.record(&analysis(1));
        history.record(&analysis(2));

        let json = history.to_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"methodName\":\"Scatter plot\""));
        assert!(json.contains("\"method\":\"scatter\""));
        assert_eq!(AnalysisHistory::from_json(&json).unwrap(), history);

        assert!(matches!(
            AnalysisHistory::from_json("{not json"),
            Err(StatsError::Serialization { .. })
        ));
    }

    #[test]
    fn test_from_json_truncates() {
        let entries: Vec<HistoryEntry> = (0..15).map(|i| HistoryEntry::from(&analysis(i))).collect();
        let json = serde_json::to_string(&entries).unwrap();
        let history = AnalysisHistory::from_json(&json).unwrap();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.latest().unwrap().id, "analysis_0");
    }
}
