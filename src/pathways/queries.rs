//! The analytical query surface. Each function opens its own read-only
//! connection, runs one pipeline over the scoped tree slice, and returns
//! a plain serialisable payload. A missing store or failed query never
//! propagates: the payload comes back empty with its `error` slot set,
//! so the dashboard always has something to render.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use rusqlite::Connection;

use super::aggregate::{ratio, share, weighted_mean};
use super::fetch::{
    fetch_distinct_dimension, fetch_indications, fetch_latest_refresh, fetch_nodes,
};
use super::funnel;
use super::graph;
use super::parse::{parse_administered, parse_dosing_text};
use super::prune::prune_orphan_ancestors;
use super::types::*;
use crate::db::{open_readonly, StoreError};
use crate::models::{
    ChartKind, PathwayFilter, PathwayNode, LEVEL_DIRECTORY, LEVEL_FIRST_DRUG, LEVEL_TRUST,
    SEQUENCE_SEPARATOR,
};

// ═══════════════════════════════════════════
// 1. Hierarchy view (icicle / sunburst)
// ═══════════════════════════════════════════

/// Filtered, pruned tree rows, parents before children.
pub fn hierarchy_view(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> HierarchyResponse {
    match open_readonly(store)
        .and_then(|conn| hierarchy_view_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => HierarchyResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn hierarchy_view_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<HierarchyResponse, StoreError> {
    let mut rows = fetch_nodes(conn, date_filter_id, chart, filter)?;
    if filter.needs_pruning() {
        rows = prune_orphan_ancestors(rows);
    }
    tracing::debug!(nodes = rows.len(), "hierarchy slice assembled");
    let nodes = rows
        .into_iter()
        .map(|r| HierarchyNode {
            ids: r.ids,
            parents: r.parents,
            labels: r.labels,
            level: r.level,
            value: r.value,
            cost: r.cost,
            cost_pp: r.cost_pp,
            cost_pp_pa: r.cost_pp_pa,
            avg_days: r.avg_days,
            first_seen: r.first_seen,
            last_seen: r.last_seen,
        })
        .collect();
    Ok(HierarchyResponse { nodes, error: None })
}

// ═══════════════════════════════════════════
// 2. Market share
// ═══════════════════════════════════════════

/// Per (directorate, drug): patients summed across trusts and each
/// drug's proportion of its directorate cohort.
pub fn market_share(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> MarketShareResponse {
    match open_readonly(store)
        .and_then(|conn| market_share_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => MarketShareResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn market_share_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<MarketShareResponse, StoreError> {
    let rows = fetch_nodes(conn, date_filter_id, chart, filter)?;

    let mut patients: BTreeMap<(String, String), i64> = BTreeMap::new();
    for row in first_drug_rows(&rows) {
        let directory = row.directory.clone().unwrap_or_default();
        *patients.entry((directory, row.labels.clone())).or_insert(0) += row.value;
    }

    let mut directory_totals: BTreeMap<String, i64> = BTreeMap::new();
    for ((directory, _), count) in &patients {
        *directory_totals.entry(directory.clone()).or_insert(0) += count;
    }

    let mut out: Vec<MarketShareRow> = patients
        .into_iter()
        .map(|((directory, drug), count)| {
            let total = directory_totals[&directory];
            MarketShareRow {
                share: share(count, total),
                directory_total: total,
                directory,
                drug,
                patients: count,
            }
        })
        .collect();
    out.sort_by(|a, b| {
        b.directory_total
            .cmp(&a.directory_total)
            .then_with(|| a.directory.cmp(&b.directory))
            .then_with(|| b.patients.cmp(&a.patients))
            .then_with(|| a.drug.cmp(&b.drug))
    });
    Ok(MarketShareResponse {
        rows: out,
        error: None,
    })
}

// ═══════════════════════════════════════════
// 3. Cost breakdown (waterfall)
// ═══════════════════════════════════════════

/// Per first-line drug: summed cost, with per-patient figures recomputed
/// from the summed numerator and denominator.
pub fn cost_breakdown(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> CostBreakdownResponse {
    match open_readonly(store)
        .and_then(|conn| cost_breakdown_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => CostBreakdownResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn cost_breakdown_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<CostBreakdownResponse, StoreError> {
    #[derive(Default)]
    struct CostAcc {
        patients: i64,
        cost_sum: f64,
        cost_patients: i64,
        pa_numerator: f64,
        pa_patients: i64,
    }

    let rows = fetch_nodes(conn, date_filter_id, chart, filter)?;
    let mut acc: BTreeMap<String, CostAcc> = BTreeMap::new();
    for row in first_drug_rows(&rows) {
        let slot = acc.entry(row.labels.clone()).or_default();
        slot.patients += row.value;
        if let Some(cost) = row.cost {
            slot.cost_sum += cost;
            slot.cost_patients += row.value;
        }
        if let Some(per_annum) = row.cost_pp_pa {
            slot.pa_numerator += per_annum * row.value as f64;
            slot.pa_patients += row.value;
        }
    }

    let mut out: Vec<CostRow> = acc
        .into_iter()
        .map(|(drug, slot)| CostRow {
            drug,
            patients: slot.patients,
            cost: slot.cost_sum,
            cost_pp: ratio(slot.cost_sum, slot.cost_patients as f64),
            cost_pp_pa: ratio(slot.pa_numerator, slot.pa_patients as f64),
        })
        .collect();
    out.sort_by(|a, b| {
        b.cost
            .partial_cmp(&a.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.drug.cmp(&b.drug))
    });
    Ok(CostBreakdownResponse {
        rows: out,
        error: None,
    })
}

// ═══════════════════════════════════════════
// 4–5. Sequence graphs
// ═══════════════════════════════════════════

/// Directed, line-position-aware drug transition graph for flow
/// diagrams.
pub fn transition_graph(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> GraphResponse {
    match open_readonly(store).and_then(|conn| {
        let rows = fetch_nodes(&conn, date_filter_id, chart, filter)?;
        Ok(graph::transition_graph(&rows))
    }) {
        Ok(data) => GraphResponse {
            nodes: data.nodes,
            links: data.links,
            error: None,
        },
        Err(e) => GraphResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

/// Undirected drug co-occurrence network, collapsing treatment-line
/// distinctions.
pub fn cooccurrence_network(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> GraphResponse {
    match open_readonly(store).and_then(|conn| {
        let rows = fetch_nodes(&conn, date_filter_id, chart, filter)?;
        Ok(graph::cooccurrence_graph(&rows))
    }) {
        Ok(data) => GraphResponse {
            nodes: data.nodes,
            links: data.links,
            error: None,
        },
        Err(e) => GraphResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

// ═══════════════════════════════════════════
// 6. Dosing cadence
// ═══════════════════════════════════════════

/// Per drug: patient-weighted mean dose count, weekly interval and total
/// weeks, parsed from the embedded dosing description text.
pub fn dosing_summary(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> DosingResponse {
    match open_readonly(store)
        .and_then(|conn| dosing_summary_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => DosingResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn dosing_summary_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<DosingResponse, StoreError> {
    #[derive(Default)]
    struct SpacingAcc {
        count: Vec<(Option<f64>, i64)>,
        interval: Vec<(Option<f64>, i64)>,
        weeks: Vec<(Option<f64>, i64)>,
        patients: i64,
    }

    let rows = fetch_nodes(conn, date_filter_id, chart, filter)?;
    let mut acc: BTreeMap<String, SpacingAcc> = BTreeMap::new();
    for row in drug_rows(&rows) {
        let Some(text) = &row.average_spacing else {
            continue;
        };
        for entry in parse_dosing_text(text) {
            let slot = acc.entry(entry.drug).or_default();
            slot.count.push((Some(entry.dose_count), row.value));
            slot.interval.push((Some(entry.weekly_interval), row.value));
            slot.weeks.push((Some(entry.total_weeks), row.value));
            slot.patients += row.value;
        }
    }

    let mut out = Vec::new();
    for (drug, slot) in acc {
        let Some(dose_count) = weighted_mean(&slot.count) else {
            continue;
        };
        out.push(DosingRow {
            drug,
            patients: slot.patients,
            dose_count,
            weekly_interval: weighted_mean(&slot.interval),
            total_weeks: weighted_mean(&slot.weeks),
        });
    }
    out.sort_by(|a, b| {
        b.patients
            .cmp(&a.patients)
            .then_with(|| a.drug.cmp(&b.drug))
    });
    Ok(DosingResponse {
        rows: out,
        error: None,
    })
}

// ═══════════════════════════════════════════
// 7. Administered doses
// ═══════════════════════════════════════════

/// Per drug: patient-weighted mean administered-dose count, decoded from
/// position 0 of the numeric-array field.
pub fn administered_doses(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> AdministeredResponse {
    match open_readonly(store)
        .and_then(|conn| administered_doses_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => AdministeredResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn administered_doses_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<AdministeredResponse, StoreError> {
    let rows = fetch_nodes(conn, date_filter_id, chart, filter)?;

    let mut samples: BTreeMap<String, Vec<(Option<f64>, i64)>> = BTreeMap::new();
    for row in drug_rows(&rows) {
        let Some(text) = &row.average_administered else {
            continue;
        };
        let Some(first) = parse_administered(text).first().copied().flatten() else {
            continue;
        };
        if first <= 0.0 {
            continue;
        }
        samples
            .entry(row.labels.clone())
            .or_default()
            .push((Some(first), row.value));
    }

    let mut out = Vec::new();
    for (drug, drug_samples) in samples {
        let Some(average) = weighted_mean(&drug_samples) else {
            continue;
        };
        out.push(AdministeredRow {
            drug,
            patients: drug_samples.iter().map(|(_, p)| p).sum(),
            average_administered: average,
        });
    }
    out.sort_by(|a, b| {
        b.patients
            .cmp(&a.patients)
            .then_with(|| a.drug.cmp(&b.drug))
    });
    Ok(AdministeredResponse {
        rows: out,
        error: None,
    })
}

// ═══════════════════════════════════════════
// 8–9. Retention funnel and stop-depth distribution
// ═══════════════════════════════════════════

/// Cumulative retention across treatment depths.
pub fn retention_funnel(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> FunnelResponse {
    match open_readonly(store).and_then(|conn| {
        let rows = fetch_nodes(&conn, date_filter_id, chart, filter)?;
        Ok(funnel::retention_funnel(&depth_sums(&rows)))
    }) {
        Ok(stages) => FunnelResponse {
            stages,
            error: None,
        },
        Err(e) => FunnelResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

/// Exclusive stop counts per treatment depth.
pub fn stop_depth_distribution(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> StopDistributionResponse {
    match open_readonly(store).and_then(|conn| {
        let rows = fetch_nodes(&conn, date_filter_id, chart, filter)?;
        Ok(funnel::stop_depth_distribution(&depth_sums(&rows)))
    }) {
        Ok(stages) => StopDistributionResponse {
            stages,
            error: None,
        },
        Err(e) => StopDistributionResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

fn depth_sums(rows: &[PathwayNode]) -> BTreeMap<i64, i64> {
    let mut sums = BTreeMap::new();
    for row in rows.iter().filter(|r| r.level >= LEVEL_FIRST_DRUG) {
        *sums.entry(row.depth()).or_insert(0) += row.value;
    }
    sums
}

// ═══════════════════════════════════════════
// 10. Treatment duration
// ═══════════════════════════════════════════

/// Per first-line drug: patient-weighted mean treatment duration in
/// days.
pub fn treatment_duration(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> DurationResponse {
    match open_readonly(store)
        .and_then(|conn| treatment_duration_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => DurationResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn treatment_duration_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<DurationResponse, StoreError> {
    let rows = fetch_nodes(conn, date_filter_id, chart, filter)?;

    let mut samples: BTreeMap<String, Vec<(Option<f64>, i64)>> = BTreeMap::new();
    for row in first_drug_rows(&rows) {
        let Some(days) = row.avg_days else { continue };
        if days <= 0.0 {
            continue;
        }
        samples
            .entry(row.labels.clone())
            .or_default()
            .push((Some(days), row.value));
    }

    let mut out = Vec::new();
    for (drug, drug_samples) in samples {
        let Some(avg_days) = weighted_mean(&drug_samples) else {
            continue;
        };
        out.push(DurationRow {
            drug,
            patients: drug_samples.iter().map(|(_, p)| p).sum(),
            avg_days,
        });
    }
    out.sort_by(|a, b| {
        b.patients
            .cmp(&a.patients)
            .then_with(|| a.drug.cmp(&b.drug))
    });
    Ok(DurationResponse {
        rows: out,
        error: None,
    })
}

// ═══════════════════════════════════════════
// 11. Directorate × drug pivot
// ═══════════════════════════════════════════

/// Patient-count matrix of first-line drug use per directorate.
pub fn directory_drug_matrix(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> PivotResponse {
    match open_readonly(store)
        .and_then(|conn| directory_drug_matrix_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => PivotResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn directory_drug_matrix_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<PivotResponse, StoreError> {
    let rows = fetch_nodes(conn, date_filter_id, chart, filter)?;

    let mut counts: BTreeMap<(String, String), i64> = BTreeMap::new();
    let mut directory_totals: BTreeMap<String, i64> = BTreeMap::new();
    let mut drug_totals: BTreeMap<String, i64> = BTreeMap::new();
    for row in first_drug_rows(&rows) {
        let directory = row.directory.clone().unwrap_or_default();
        let drug = row.labels.clone();
        *counts.entry((directory.clone(), drug.clone())).or_insert(0) += row.value;
        *directory_totals.entry(directory).or_insert(0) += row.value;
        *drug_totals.entry(drug).or_insert(0) += row.value;
    }

    let directories = by_total_desc(directory_totals);
    let drugs = by_total_desc(drug_totals);
    let matrix = directories
        .iter()
        .map(|directory| {
            drugs
                .iter()
                .map(|drug| {
                    counts
                        .get(&(directory.clone(), drug.clone()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    Ok(PivotResponse {
        directories,
        drugs,
        matrix,
        error: None,
    })
}

/// Axis order for pivot tables: biggest total first, name as tie-break.
fn by_total_desc(totals: BTreeMap<String, i64>) -> Vec<String> {
    let mut entries: Vec<(String, i64)> = totals.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.into_iter().map(|(name, _)| name).collect()
}

// ═══════════════════════════════════════════
// 12. Cohort windows (timeline)
// ═══════════════════════════════════════════

/// Per drug: earliest first-seen and latest last-seen timestamps of the
/// cohorts whose pathway ends at that drug.
pub fn cohort_windows(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> CohortWindowsResponse {
    match open_readonly(store)
        .and_then(|conn| cohort_windows_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => CohortWindowsResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn cohort_windows_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<CohortWindowsResponse, StoreError> {
    #[derive(Default)]
    struct WindowAcc {
        patients: i64,
        first_seen: Option<String>,
        last_seen: Option<String>,
    }

    let rows = fetch_nodes(conn, date_filter_id, chart, filter)?;
    let mut acc: BTreeMap<String, WindowAcc> = BTreeMap::new();
    for row in drug_rows(&rows) {
        let slot = acc.entry(row.labels.clone()).or_default();
        slot.patients += row.value;
        if let Some(first) = &row.first_seen {
            slot.first_seen = Some(match slot.first_seen.take() {
                Some(current) if current <= *first => current,
                _ => first.clone(),
            });
        }
        if let Some(last) = &row.last_seen {
            slot.last_seen = Some(match slot.last_seen.take() {
                Some(current) if current >= *last => current,
                _ => last.clone(),
            });
        }
    }

    let mut out: Vec<CohortWindowRow> = acc
        .into_iter()
        .map(|(drug, slot)| CohortWindowRow {
            drug,
            patients: slot.patients,
            first_seen: slot.first_seen,
            last_seen: slot.last_seen,
        })
        .collect();
    out.sort_by(|a, b| {
        b.patients
            .cmp(&a.patients)
            .then_with(|| a.drug.cmp(&b.drug))
    });
    Ok(CohortWindowsResponse {
        rows: out,
        error: None,
    })
}

// ═══════════════════════════════════════════
// 13. Trust summary
// ═══════════════════════════════════════════

/// Per trust: total patients, total cost, cost per patient.
pub fn trust_summary(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> TrustSummaryResponse {
    match open_readonly(store)
        .and_then(|conn| trust_summary_on(&conn, date_filter_id, chart, filter))
    {
        Ok(response) => response,
        Err(e) => TrustSummaryResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn trust_summary_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<TrustSummaryResponse, StoreError> {
    #[derive(Default)]
    struct TrustAcc {
        patients: i64,
        cost_sum: f64,
        cost_patients: i64,
    }

    let rows = fetch_nodes(conn, date_filter_id, chart, filter)?;
    let mut acc: BTreeMap<String, TrustAcc> = BTreeMap::new();
    for row in rows.iter().filter(|r| r.level == LEVEL_TRUST && r.value > 0) {
        let slot = acc.entry(row.labels.clone()).or_default();
        slot.patients += row.value;
        if let Some(cost) = row.cost {
            slot.cost_sum += cost;
            slot.cost_patients += row.value;
        }
    }

    let mut out: Vec<TrustSummaryRow> = acc
        .into_iter()
        .map(|(trust, slot)| TrustSummaryRow {
            trust,
            patients: slot.patients,
            cost: slot.cost_sum,
            cost_pp: ratio(slot.cost_sum, slot.cost_patients as f64),
        })
        .collect();
    out.sort_by(|a, b| {
        b.patients
            .cmp(&a.patients)
            .then_with(|| a.trust.cmp(&b.trust))
    });
    Ok(TrustSummaryResponse {
        rows: out,
        error: None,
    })
}

// ═══════════════════════════════════════════
// 14–16. Filter options, indications, freshness
// ═══════════════════════════════════════════

/// Distinct trusts, directorates and drugs available in the scoped
/// slice; feeds the dashboard's filter dropdowns.
pub fn filter_options(
    store: &Path,
    date_filter_id: i64,
    chart: ChartKind,
) -> FilterOptionsResponse {
    match open_readonly(store).and_then(|conn| filter_options_on(&conn, date_filter_id, chart)) {
        Ok(response) => response,
        Err(e) => FilterOptionsResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

pub(crate) fn filter_options_on(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
) -> Result<FilterOptionsResponse, StoreError> {
    let trusts = fetch_distinct_dimension(conn, "trust_name", LEVEL_TRUST, date_filter_id, chart)?;
    let directories =
        fetch_distinct_dimension(conn, "directory", LEVEL_DIRECTORY, date_filter_id, chart)?;

    let sequences =
        fetch_distinct_dimension(conn, "drug_sequence", LEVEL_FIRST_DRUG, date_filter_id, chart)?;
    let drugs: BTreeSet<String> = sequences
        .iter()
        .flat_map(|s| s.split(SEQUENCE_SEPARATOR))
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();

    Ok(FilterOptionsResponse {
        trusts,
        directories,
        drugs: drugs.into_iter().collect(),
        error: None,
    })
}

/// Distinct indications from the static drug→indication reference
/// mapping.
pub fn available_indications(store: &Path) -> IndicationsResponse {
    match open_readonly(store).and_then(|conn| fetch_indications(&conn)) {
        Ok(indications) => IndicationsResponse {
            indications,
            error: None,
        },
        Err(e) => IndicationsResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

/// Latest completed refresh attempt: freshness and source row count.
pub fn refresh_status(store: &Path) -> RefreshStatusResponse {
    match open_readonly(store).and_then(|conn| fetch_latest_refresh(&conn)) {
        Ok(refresh) => RefreshStatusResponse {
            refresh,
            error: None,
        },
        Err(e) => RefreshStatusResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

// ═══════════════════════════════════════════
// Row selectors shared by the pipelines
// ═══════════════════════════════════════════

/// Level-3 rows: one per (trust, directorate, first drug) cohort.
fn first_drug_rows(rows: &[PathwayNode]) -> impl Iterator<Item = &PathwayNode> {
    rows.iter()
        .filter(|r| r.level == LEVEL_FIRST_DRUG && r.value > 0)
}

/// All drug-level rows (level >= 3) with a live cohort.
fn drug_rows(rows: &[PathwayNode]) -> impl Iterator<Item = &PathwayNode> {
    rows.iter()
        .filter(|r| r.level >= LEVEL_FIRST_DRUG && r.value > 0)
}
