//! Hierarchical pathway analytics engine.
//!
//! Reads the flat, materialized-path encoding of the pathway tree
//! (organisation → directorate/indication → drug → drug sequence) and
//! produces the filtered, pruned and aggregated views behind each
//! dashboard chart: market share, cost breakdown, transition and
//! co-occurrence graphs, dosing, retention funnels, pivot tables,
//! cohort timelines and freshness reporting. All queries are read-only
//! and degrade to empty payloads with an `error` message when the store
//! is unavailable.

pub mod aggregate;
mod fetch;
mod filter;
pub mod funnel;
pub mod graph;
pub mod parse;
pub mod prune;
pub mod queries;
pub mod types;

pub use funnel::{FunnelStage, StopStage};
pub use graph::{GraphData, GraphLink, GraphNode};
pub use parse::DosingEntry;
pub use prune::prune_orphan_ancestors;
pub use queries::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
