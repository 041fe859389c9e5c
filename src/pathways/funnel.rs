//! Retention and stop-depth calculators over per-depth patient sums.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::round1;

/// One stage of the cumulative retention funnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    /// 1-based number of drugs reached (level − 2).
    pub depth: i64,
    pub label: String,
    pub patients: i64,
    /// Percentage of the depth-1 cohort, one decimal place.
    pub pct_of_first: f64,
}

/// One stage of the exclusive stop-depth distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopStage {
    pub depth: i64,
    pub label: String,
    /// Patients who reached this depth but not the next.
    pub stopped: i64,
    /// Percentage of the depth-1 cohort, one decimal place.
    pub pct_of_cohort: f64,
}

/// Cumulative retention: each depth's patient sum as reported, expressed
/// against the depth-1 total. The engine does not subtract; level sums
/// are assumed monotonically non-increasing with depth.
pub fn retention_funnel(depth_sums: &BTreeMap<i64, i64>) -> Vec<FunnelStage> {
    let first = depth_sums.get(&1).copied().unwrap_or(0);
    depth_sums
        .iter()
        .map(|(&depth, &patients)| FunnelStage {
            depth,
            label: stage_label(depth),
            patients,
            pct_of_first: percent(patients, first),
        })
        .collect()
}

/// Exclusive stops: `count(depth N) − count(depth N+1)`, the last depth
/// keeping its own sum. A negative gap means the upstream level sums are
/// not monotone; the count is clamped to zero and the anomaly logged.
pub fn stop_depth_distribution(depth_sums: &BTreeMap<i64, i64>) -> Vec<StopStage> {
    let cohort = depth_sums.get(&1).copied().unwrap_or(0);
    let ordered: Vec<(i64, i64)> = depth_sums.iter().map(|(&d, &p)| (d, p)).collect();

    ordered
        .iter()
        .enumerate()
        .map(|(i, &(depth, patients))| {
            let next = ordered.get(i + 1).map(|&(_, p)| p).unwrap_or(0);
            let mut stopped = patients - next;
            if stopped < 0 {
                tracing::warn!(
                    depth,
                    patients,
                    next,
                    "level sums increase with depth; clamping stop count to zero"
                );
                stopped = 0;
            }
            StopStage {
                depth,
                label: stage_label(depth),
                stopped,
                pct_of_cohort: percent(stopped, cohort),
            }
        })
        .collect()
}

fn stage_label(depth: i64) -> String {
    if depth == 1 {
        "1 drug".to_string()
    } else {
        format!("{depth} drugs")
    }
}

fn percent(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round1(part as f64 * 100.0 / whole as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sums(pairs: &[(i64, i64)]) -> BTreeMap<i64, i64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn funnel_percentages_relative_to_first_depth() {
        let stages = retention_funnel(&sums(&[(1, 1000), (2, 400), (3, 150)]));
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].patients, 1000);
        assert_eq!(stages[0].pct_of_first, 100.0);
        assert_eq!(stages[1].pct_of_first, 40.0);
        assert_eq!(stages[2].pct_of_first, 15.0);
        assert_eq!(stages[0].label, "1 drug");
        assert_eq!(stages[1].label, "2 drugs");
    }

    #[test]
    fn empty_funnel_is_empty() {
        assert!(retention_funnel(&BTreeMap::new()).is_empty());
        assert!(stop_depth_distribution(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn stop_distribution_is_exclusive() {
        let stages = stop_depth_distribution(&sums(&[(1, 1000), (2, 400), (3, 150)]));
        assert_eq!(stages[0].stopped, 600);
        assert_eq!(stages[0].pct_of_cohort, 60.0);
        assert_eq!(stages[1].stopped, 250);
        assert_eq!(stages[1].pct_of_cohort, 25.0);
        assert_eq!(stages[2].stopped, 150);
        assert_eq!(stages[2].pct_of_cohort, 15.0);
    }

    #[test]
    fn stop_percentages_sum_to_one_hundred() {
        let stages = stop_depth_distribution(&sums(&[(1, 997), (2, 401), (3, 149)]));
        let total: f64 = stages.iter().map(|s| s.pct_of_cohort).sum();
        assert!((total - 100.0).abs() < 0.2, "total was {total}");
    }

    #[test]
    fn non_monotone_sums_clamp_to_zero() {
        let stages = stop_depth_distribution(&sums(&[(1, 100), (2, 120), (3, 30)]));
        assert_eq!(stages[0].stopped, 0);
        assert_eq!(stages[1].stopped, 90);
        assert_eq!(stages[2].stopped, 30);
    }
}
