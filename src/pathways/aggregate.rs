//! Metric-combination rules for cross-organisation aggregation.
//!
//! Counts are summed; ratios are recomputed from summed numerator and
//! denominator, never averaged directly; continuous per-entity metrics
//! with no denominator of their own are combined as patient-weighted
//! means. Averaging ratios directly would bias results toward
//! organisations with small cohorts.

/// Patient-count-weighted mean of a per-row metric. Rows with zero or
/// missing patients, or a zero/missing metric value, do not contribute.
pub fn weighted_mean(samples: &[(Option<f64>, i64)]) -> Option<f64> {
    let mut numerator = 0.0;
    let mut denominator: i64 = 0;
    for (metric, patients) in samples {
        let value = match metric {
            Some(v) if *v > 0.0 => *v,
            _ => continue,
        };
        if *patients <= 0 {
            continue;
        }
        numerator += value * *patients as f64;
        denominator += *patients;
    }
    if denominator == 0 {
        None
    } else {
        Some(numerator / denominator as f64)
    }
}

/// Ratio of summed numerator to summed denominator, None when the
/// denominator is empty.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Proportion of `part` within `total`, rounded to 4 decimal places.
pub fn share(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round4(part as f64 / total as f64)
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// One decimal place, used for display percentages.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
