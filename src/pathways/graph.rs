//! Derived-graph construction from parsed drug sequences: a directed,
//! line-position-aware transition graph for flow diagrams and an
//! undirected co-occurrence graph for network views.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::parse::drugs_from_path;
use crate::models::PathwayNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    /// Sum of the weights of all edges incident to this node.
    pub weight: i64,
}

/// One edge; `source`/`target` index into the sibling `nodes` vec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
    pub value: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Directed transition graph. Each node is a `(drug, line position)`
/// pair: "ADA (1st)" and "ADA (2nd)" are distinct because a drug's role
/// differs by treatment line. One edge per adjacent drug pair of every
/// pathway row with at least two drugs and a positive patient count,
/// weight accumulated across rows sharing that pair-at-position.
pub fn transition_graph(rows: &[PathwayNode]) -> GraphData {
    let mut edges: HashMap<((String, usize), (String, usize)), i64> = HashMap::new();
    for row in rows.iter().filter(|r| r.value > 0) {
        let drugs = drugs_from_path(&row.ids, row.level);
        if drugs.len() < 2 {
            continue;
        }
        for (position, pair) in drugs.windows(2).enumerate() {
            let from = (pair[0].clone(), position + 1);
            let to = (pair[1].clone(), position + 2);
            *edges.entry((from, to)).or_insert(0) += row.value;
        }
    }
    assemble(edges, |(drug, position)| {
        format!("{drug} ({})", ordinal(*position))
    })
}

/// Undirected co-occurrence graph over the same source rows. Edges are
/// keyed by the sorted drug-name pair regardless of position, collapsing
/// line-of-therapy distinctions. Adjacent repeats of the same drug
/// (re-treatment) carry no pairing information and are skipped.
pub fn cooccurrence_graph(rows: &[PathwayNode]) -> GraphData {
    let mut edges: HashMap<(String, String), i64> = HashMap::new();
    for row in rows.iter().filter(|r| r.value > 0) {
        let drugs = drugs_from_path(&row.ids, row.level);
        if drugs.len() < 2 {
            continue;
        }
        for pair in drugs.windows(2) {
            if pair[0] == pair[1] {
                continue;
            }
            let mut ends = [pair[0].clone(), pair[1].clone()];
            ends.sort();
            let [a, b] = ends;
            *edges.entry((a, b)).or_insert(0) += row.value;
        }
    }
    assemble(edges, |name| name.clone())
}

/// Folds an edge map into the `{nodes, links}` shape: node weight is the
/// sum of incident edge weights, nodes sorted weight-descending then by
/// name, links sorted weight-descending for deterministic rendering.
fn assemble<K, F>(edges: HashMap<(K, K), i64>, label: F) -> GraphData
where
    K: std::hash::Hash + Eq + Ord + Clone,
    F: Fn(&K) -> String,
{
    let mut node_weights: HashMap<K, i64> = HashMap::new();
    for ((from, to), weight) in &edges {
        *node_weights.entry(from.clone()).or_insert(0) += weight;
        *node_weights.entry(to.clone()).or_insert(0) += weight;
    }

    let mut keyed: Vec<(K, i64)> = node_weights.into_iter().collect();
    keyed.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let index: HashMap<K, usize> = keyed
        .iter()
        .enumerate()
        .map(|(i, (key, _))| (key.clone(), i))
        .collect();

    let nodes = keyed
        .iter()
        .map(|(key, weight)| GraphNode {
            name: label(key),
            weight: *weight,
        })
        .collect();

    let mut links: Vec<GraphLink> = edges
        .into_iter()
        .map(|((from, to), value)| GraphLink {
            source: index[&from],
            target: index[&to],
            value,
        })
        .collect();
    links.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });

    GraphData { nodes, links }
}

/// English ordinal for a 1-based treatment line ("1st", "2nd", "11th").
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
