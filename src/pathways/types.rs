//! View types returned by the query surface, serialised as-is for
//! charts. Every response carries an `error` slot so a failed store open
//! degrades to an empty-but-well-formed payload the dashboard can still
//! render.

use serde::{Deserialize, Serialize};

use super::funnel::{FunnelStage, StopStage};
use super::graph::{GraphLink, GraphNode};
use crate::models::RefreshLogEntry;

// ═══════════════════════════════════════════
// Tree view
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HierarchyResponse {
    pub nodes: Vec<HierarchyNode>,
    pub error: Option<String>,
}

/// One renderable tree row for icicle/sunburst charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub ids: String,
    pub parents: String,
    pub labels: String,
    pub level: i64,
    pub value: i64,
    pub cost: Option<f64>,
    pub cost_pp: Option<f64>,
    pub cost_pp_pa: Option<f64>,
    pub avg_days: Option<f64>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
}

// ═══════════════════════════════════════════
// Aggregated chart rows
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketShareResponse {
    pub rows: Vec<MarketShareRow>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShareRow {
    pub directory: String,
    pub drug: String,
    pub patients: i64,
    pub directory_total: i64,
    /// Proportion of the directorate's cohort, rounded to 4 dp.
    pub share: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostBreakdownResponse {
    pub rows: Vec<CostRow>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRow {
    pub drug: String,
    pub patients: i64,
    pub cost: f64,
    /// Recomputed from summed cost over summed patients, not averaged.
    pub cost_pp: Option<f64>,
    pub cost_pp_pa: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DosingResponse {
    pub rows: Vec<DosingRow>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosingRow {
    pub drug: String,
    pub patients: i64,
    pub dose_count: f64,
    pub weekly_interval: Option<f64>,
    pub total_weeks: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdministeredResponse {
    pub rows: Vec<AdministeredRow>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdministeredRow {
    pub drug: String,
    pub patients: i64,
    pub average_administered: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationResponse {
    pub rows: Vec<DurationRow>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationRow {
    pub drug: String,
    pub patients: i64,
    pub avg_days: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohortWindowsResponse {
    pub rows: Vec<CohortWindowRow>,
    pub error: Option<String>,
}

/// Timestamp bounds of one drug's cohort across the scoped slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortWindowRow {
    pub drug: String,
    pub patients: i64,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrustSummaryResponse {
    pub rows: Vec<TrustSummaryRow>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustSummaryRow {
    pub trust: String,
    pub patients: i64,
    pub cost: f64,
    pub cost_pp: Option<f64>,
}

// ═══════════════════════════════════════════
// Graph / funnel / pivot payloads
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphResponse {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunnelResponse {
    pub stages: Vec<FunnelStage>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopDistributionResponse {
    pub stages: Vec<StopStage>,
    pub error: Option<String>,
}

/// Directorate × drug patient-count pivot; `matrix[i][j]` pairs
/// `directories[i]` with `drugs[j]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PivotResponse {
    pub directories: Vec<String>,
    pub drugs: Vec<String>,
    pub matrix: Vec<Vec<i64>>,
    pub error: Option<String>,
}

// ═══════════════════════════════════════════
// Reference / freshness payloads
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub trusts: Vec<String>,
    pub directories: Vec<String>,
    pub drugs: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicationsResponse {
    pub indications: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshStatusResponse {
    /// Latest completed refresh attempt, None when the batch has never
    /// finished.
    pub refresh: Option<RefreshLogEntry>,
    pub error: Option<String>,
}
