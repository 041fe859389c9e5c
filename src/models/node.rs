use serde::{Deserialize, Serialize};

/// Separator joining segments of the materialized-path columns
/// (`parents`, `ids`).
pub const PATH_SEPARATOR: &str = " - ";

/// Separator between drug names in the denormalized `drug_sequence`
/// column.
pub const SEQUENCE_SEPARATOR: &str = "|";

/// Fixed tree depths. Levels 4+ are N-drug pathways; `level - 2` is the
/// number of drugs reached.
pub const LEVEL_ROOT: i64 = 0;
pub const LEVEL_TRUST: i64 = 1;
pub const LEVEL_DIRECTORY: i64 = 2;
pub const LEVEL_FIRST_DRUG: i64 = 3;

/// Which flavour of the materialized tree a row belongs to. Level 2 is a
/// trust directorate in the organisation variant and a clinical
/// indication in the indication variant. Rows for both variants coexist
/// in the store and must always be scoped before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Organisation,
    Indication,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Organisation => "organisation",
            ChartKind::Indication => "indication",
        }
    }
}

/// One node of the materialized pathway tree: a cohort of patients
/// sharing an organisation, directorate/indication and (at drug levels)
/// a specific ordered drug sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayNode {
    /// Materialized path of the immediate ancestor; empty for the root.
    pub parents: String,
    /// Materialized path of this node, segments joined by `PATH_SEPARATOR`.
    pub ids: String,
    /// Human-readable name of this node's own segment.
    pub labels: String,
    pub level: i64,
    /// Patient count. Always >= the sum over direct children: patients
    /// can stop before advancing deeper.
    pub value: i64,
    pub cost: Option<f64>,
    pub cost_pp: Option<f64>,
    pub cost_pp_pa: Option<f64>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
    pub first_seen_parent: Option<String>,
    pub last_seen_parent: Option<String>,
    /// Embedded dosing-cadence description text (one entry per drug).
    pub average_spacing: Option<String>,
    /// Numeric-array-with-null encoding; position 0 is the average
    /// administered-dose count for this node's drug.
    pub average_administered: Option<String>,
    pub avg_days: Option<f64>,
    pub trust_name: Option<String>,
    pub directory: Option<String>,
    /// Pipe-delimited ordered drug list, duplicated from `ids` for
    /// direct filtering.
    pub drug_sequence: Option<String>,
}

impl PathwayNode {
    /// Number of drugs reached by this node's pathway (0 above drug
    /// levels).
    pub fn depth(&self) -> i64 {
        (self.level - LEVEL_DIRECTORY).max(0)
    }
}
