use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One attempt of the upstream refresh batch, read from
/// `pathway_refresh_log`. Consumed for freshness reporting only; this
/// engine never writes the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshLogEntry {
    pub status: String,
    pub source_row_count: i64,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
}

impl RefreshLogEntry {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    /// Parsed completion timestamp, None when missing or malformed.
    pub fn completed_time(&self) -> Option<NaiveDateTime> {
        self.completed_at
            .as_deref()
            .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M:%S").ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_completion_timestamp() {
        let entry = RefreshLogEntry {
            status: "completed".into(),
            source_row_count: 42,
            started_at: Some("2024-03-01T02:00:00".into()),
            completed_at: Some("2024-03-01T02:12:00".into()),
        };
        assert!(entry.is_completed());
        let time = entry.completed_time().unwrap();
        assert_eq!(time.format("%Y-%m-%d %H:%M").to_string(), "2024-03-01 02:12");
    }

    #[test]
    fn malformed_timestamp_is_none() {
        let entry = RefreshLogEntry {
            status: "failed".into(),
            source_row_count: 0,
            started_at: None,
            completed_at: Some("yesterday".into()),
        };
        assert!(!entry.is_completed());
        assert!(entry.completed_time().is_none());
    }
}
