//! Decoders for the three mini-formats embedded in node attributes: the
//! dosing-cadence description text, the numeric-array-with-null dose
//! encoding, and the drug segments of the materialized path. All three
//! tolerate malformed input by returning an empty result; one bad row
//! must never abort a whole query.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{LEVEL_FIRST_DRUG, PATH_SEPARATOR};

/// One drug's dosing cadence parsed from `average_spacing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosingEntry {
    pub drug: String,
    pub dose_count: f64,
    pub weekly_interval: f64,
    pub total_weeks: f64,
}

static RE_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"<b>([^<]+)</b><br>On average given (\d+\.?\d*) times with a (\d+\.?\d*) weekly interval \((\d+\.?\d*) weeks total treatment length\)",
    )
    .unwrap()
});

static RE_BARE_NULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:nan|NaN|NAN|None|NULL)\b").unwrap());

/// Extracts every dosing description repetition found in the text.
/// Unmatched stretches are skipped silently.
pub fn parse_dosing_text(text: &str) -> Vec<DosingEntry> {
    RE_SPACING
        .captures_iter(text)
        .filter_map(|caps| {
            Some(DosingEntry {
                drug: caps[1].trim().to_string(),
                dose_count: caps[2].parse().ok()?,
                weekly_interval: caps[3].parse().ok()?,
                total_weeks: caps[4].parse().ok()?,
            })
        })
        .collect()
}

/// Decodes the numeric-array-with-null encoding (`"[6.0, nan, 3.5]"`).
/// Bare null tokens are normalized to JSON `null` before decoding;
/// anything that still fails yields an empty vec for that row.
pub fn parse_administered(text: &str) -> Vec<Option<f64>> {
    let normalized = RE_BARE_NULL.replace_all(text, "null");
    serde_json::from_str(&normalized).unwrap_or_default()
}

/// Drug names along a node's materialized path: segments after the
/// synthetic root, trust and directorate. Nodes above the first drug
/// level carry no drugs by definition.
pub fn drugs_from_path(ids: &str, level: i64) -> Vec<String> {
    if level < LEVEL_FIRST_DRUG {
        return Vec::new();
    }
    ids.split(PATH_SEPARATOR)
        .skip(LEVEL_FIRST_DRUG as usize)
        .map(str::to_string)
        .collect()
}
