use std::collections::HashSet;

use crate::models::{PathwayNode, LEVEL_FIRST_DRUG, LEVEL_ROOT};

/// Removes trust/directorate rows whose descendants were all filtered
/// away.
///
/// The filter composer keeps ancestor levels unconditionally so the tree
/// stays connected, which leaves empty shells once a drug or directorate
/// filter bites. Two set-based passes fix that: the first drops rows no
/// survivor points at, the second drops intermediates whose only child
/// fell in the first pass. The tree is bounded at two prunable levels,
/// so two passes reach the fixed point.
pub fn prune_orphan_ancestors(rows: Vec<PathwayNode>) -> Vec<PathwayNode> {
    prune_pass(prune_pass(rows))
}

fn prune_pass(rows: Vec<PathwayNode>) -> Vec<PathwayNode> {
    let referenced: HashSet<String> = rows
        .iter()
        .filter(|r| !r.parents.is_empty())
        .map(|r| r.parents.clone())
        .collect();

    rows.into_iter()
        .filter(|r| {
            r.level == LEVEL_ROOT
                || r.level >= LEVEL_FIRST_DRUG
                || referenced.contains(&r.ids)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PathwayNode;

    fn node(parents: &str, ids: &str, level: i64) -> PathwayNode {
        PathwayNode {
            parents: parents.to_string(),
            ids: ids.to_string(),
            labels: ids.rsplit(" - ").next().unwrap_or("").to_string(),
            level,
            value: 10,
            cost: None,
            cost_pp: None,
            cost_pp_pa: None,
            first_seen: None,
            last_seen: None,
            first_seen_parent: None,
            last_seen_parent: None,
            average_spacing: None,
            average_administered: None,
            avg_days: None,
            trust_name: None,
            directory: None,
            drug_sequence: None,
        }
    }

    fn ids_of(rows: &[PathwayNode]) -> Vec<&str> {
        rows.iter().map(|r| r.ids.as_str()).collect()
    }

    #[test]
    fn keeps_connected_branches() {
        let rows = vec![
            node("", "ROOT", 0),
            node("ROOT", "ROOT - TRUST1", 1),
            node("ROOT - TRUST1", "ROOT - TRUST1 - RHEUM", 2),
            node("ROOT - TRUST1 - RHEUM", "ROOT - TRUST1 - RHEUM - ETA", 3),
        ];
        let kept = prune_orphan_ancestors(rows);
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn drops_trust_with_no_matching_descendants() {
        // TRUST2's only directorate lost all its drug rows to the filter.
        let rows = vec![
            node("", "ROOT", 0),
            node("ROOT", "ROOT - TRUST1", 1),
            node("ROOT - TRUST1", "ROOT - TRUST1 - RHEUM", 2),
            node("ROOT - TRUST1 - RHEUM", "ROOT - TRUST1 - RHEUM - ETA", 3),
            node("ROOT", "ROOT - TRUST2", 1),
        ];
        let kept = prune_orphan_ancestors(rows);
        assert_eq!(
            ids_of(&kept),
            vec![
                "ROOT",
                "ROOT - TRUST1",
                "ROOT - TRUST1 - RHEUM",
                "ROOT - TRUST1 - RHEUM - ETA",
            ]
        );
    }

    #[test]
    fn second_pass_removes_trust_whose_only_child_was_pruned() {
        // TRUST2 keeps a directorate row, but that directorate has no
        // drug rows left; pass one removes the directorate, pass two the
        // trust.
        let rows = vec![
            node("", "ROOT", 0),
            node("ROOT", "ROOT - TRUST1", 1),
            node("ROOT - TRUST1", "ROOT - TRUST1 - RHEUM", 2),
            node("ROOT - TRUST1 - RHEUM", "ROOT - TRUST1 - RHEUM - ETA", 3),
            node("ROOT", "ROOT - TRUST2", 1),
            node("ROOT - TRUST2", "ROOT - TRUST2 - DERM", 2),
        ];
        let kept = prune_orphan_ancestors(rows);
        assert!(!ids_of(&kept).contains(&"ROOT - TRUST2"));
        assert!(!ids_of(&kept).contains(&"ROOT - TRUST2 - DERM"));
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn root_always_retained() {
        let rows = vec![node("", "ROOT", 0), node("ROOT", "ROOT - TRUST1", 1)];
        let kept = prune_orphan_ancestors(rows);
        assert_eq!(ids_of(&kept), vec!["ROOT"]);
    }

    #[test]
    fn pruning_is_idempotent() {
        let rows = vec![
            node("", "ROOT", 0),
            node("ROOT", "ROOT - TRUST1", 1),
            node("ROOT - TRUST1", "ROOT - TRUST1 - RHEUM", 2),
            node("ROOT - TRUST1 - RHEUM", "ROOT - TRUST1 - RHEUM - ETA", 3),
            node("ROOT", "ROOT - TRUST2", 1),
            node("ROOT - TRUST2", "ROOT - TRUST2 - DERM", 2),
        ];
        let once = prune_orphan_ancestors(rows);
        let twice = prune_orphan_ancestors(once.clone());
        assert_eq!(ids_of(&once), ids_of(&twice));
    }

    #[test]
    fn kept_intermediates_are_referenced_as_parents() {
        let rows = vec![
            node("", "ROOT", 0),
            node("ROOT", "ROOT - TRUST1", 1),
            node("ROOT - TRUST1", "ROOT - TRUST1 - RHEUM", 2),
            node("ROOT - TRUST1 - RHEUM", "ROOT - TRUST1 - RHEUM - ETA", 3),
            node("ROOT", "ROOT - TRUST2", 1),
            node("ROOT - TRUST2", "ROOT - TRUST2 - DERM", 2),
        ];
        let kept = prune_orphan_ancestors(rows);
        for row in kept.iter().filter(|r| r.level == 1 || r.level == 2) {
            assert!(
                kept.iter().any(|other| other.parents == row.ids),
                "{} kept without any kept child",
                row.ids
            );
        }
    }
}
