use rusqlite::types::ToSql;
use rusqlite::Connection;

use super::filter::NodePredicate;
use crate::db::StoreError;
use crate::models::{ChartKind, PathwayFilter, PathwayNode, RefreshLogEntry};

const NODE_COLUMNS: &str = "parents, ids, labels, level, value, cost, costpp, cost_pp_pa, \
     first_seen, last_seen, first_seen_parent, last_seen_parent, \
     average_spacing, average_administered, avg_days, \
     trust_name, directory, drug_sequence";

/// Fetches the scoped, filtered slice of the pathway tree, ordered by
/// level then path so parents precede their children.
pub(super) fn fetch_nodes(
    conn: &Connection,
    date_filter_id: i64,
    chart: ChartKind,
    filter: &PathwayFilter,
) -> Result<Vec<PathwayNode>, StoreError> {
    let predicate = NodePredicate::new(filter, 2);
    let sql = format!(
        "SELECT {NODE_COLUMNS}
         FROM pathway_nodes
         WHERE date_filter_id = ?1 AND chart_type = ?2{}
         ORDER BY level, ids",
        predicate.sql_suffix()
    );

    let chart_name = chart.as_str().to_string();
    let mut params: Vec<&dyn ToSql> = vec![&date_filter_id, &chart_name];
    params.extend(predicate.param_refs());

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params.as_slice(), node_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
}

fn node_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PathwayNode> {
    Ok(PathwayNode {
        parents: row.get("parents")?,
        ids: row.get("ids")?,
        labels: row.get("labels")?,
        level: row.get("level")?,
        value: row.get("value")?,
        cost: metric(row.get("cost")?),
        cost_pp: metric(row.get("costpp")?),
        cost_pp_pa: metric(row.get("cost_pp_pa")?),
        first_seen: row.get("first_seen")?,
        last_seen: row.get("last_seen")?,
        first_seen_parent: row.get("first_seen_parent")?,
        last_seen_parent: row.get("last_seen_parent")?,
        average_spacing: row.get("average_spacing")?,
        average_administered: row.get("average_administered")?,
        avg_days: row.get("avg_days")?,
        trust_name: row.get("trust_name")?,
        directory: row.get("directory")?,
        drug_sequence: row.get("drug_sequence")?,
    })
}

/// Cost columns carry a non-numeric sentinel where a level has no
/// costing; coerce to a number or drop to None.
fn metric(raw: Option<String>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Distinct non-empty values of one dimension column within the scoped
/// slice, alphabetically. Drives the dashboard's filter dropdowns.
pub(super) fn fetch_distinct_dimension(
    conn: &Connection,
    column: &str,
    min_level: i64,
    date_filter_id: i64,
    chart: ChartKind,
) -> Result<Vec<String>, StoreError> {
    let sql = format!(
        "SELECT DISTINCT {column}
         FROM pathway_nodes
         WHERE date_filter_id = ?1 AND chart_type = ?2 AND level >= {min_level}
           AND {column} IS NOT NULL AND {column} != ''
         ORDER BY {column}"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        rusqlite::params![date_filter_id, chart.as_str()],
        |row| row.get::<_, String>(0),
    )?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
}

/// Latest completed refresh attempt, or None when the batch has never
/// finished.
pub(super) fn fetch_latest_refresh(
    conn: &Connection,
) -> Result<Option<RefreshLogEntry>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT status, source_row_count, started_at, completed_at
         FROM pathway_refresh_log
         WHERE status = 'completed'
         ORDER BY id DESC
         LIMIT 1",
    )?;
    let mut rows = stmt.query_map([], |row| {
        Ok(RefreshLogEntry {
            status: row.get("status")?,
            source_row_count: row.get("source_row_count")?,
            started_at: row.get("started_at")?,
            completed_at: row.get("completed_at")?,
        })
    })?;
    rows.next().transpose().map_err(StoreError::from)
}

/// Distinct indications from the static drug→indication reference.
pub(super) fn fetch_indications(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT indication FROM drug_indication_clusters ORDER BY indication",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
}
