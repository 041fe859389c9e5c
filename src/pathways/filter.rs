use rusqlite::types::ToSql;

use crate::models::{PathwayFilter, LEVEL_DIRECTORY, LEVEL_FIRST_DRUG, LEVEL_TRUST};

/// Builds the WHERE-clause fragment for dimension filters over pathway
/// nodes.
///
/// Each active dimension contributes one conjunct of the form
/// `(level < natural OR attr IS NULL OR attr = '' OR <match>)`. Ancestor
/// levels always pass: a trust row must survive a drug filter or the
/// tree loses its connectivity for rendering.
pub(super) struct NodePredicate {
    offset: usize,
    clauses: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl NodePredicate {
    /// `offset` is the number of placeholders already taken by the base
    /// query (scoping params come first).
    pub(super) fn new(filter: &PathwayFilter, offset: usize) -> Self {
        let mut predicate = Self {
            offset,
            clauses: Vec::new(),
            params: Vec::new(),
        };
        predicate.push_in_set("trust_name", LEVEL_TRUST, &filter.trusts);
        predicate.push_in_set("directory", LEVEL_DIRECTORY, &filter.directories);
        predicate.push_sequence_contains(&filter.drugs);
        predicate
    }

    fn next_placeholder(&mut self, value: String) -> String {
        self.params.push(Box::new(value));
        format!("?{}", self.offset + self.params.len())
    }

    /// Exact-match dimension: the node's own attribute must be one of
    /// the selected values, unless the row sits above the dimension's
    /// natural level or carries no attribute at all.
    fn push_in_set(&mut self, column: &str, natural_level: i64, values: &[String]) {
        if values.is_empty() {
            return;
        }
        let placeholders: Vec<String> = values
            .iter()
            .map(|v| self.next_placeholder(v.clone()))
            .collect();
        self.clauses.push(format!(
            " AND (level < {natural_level} OR {column} IS NULL OR {column} = '' \
             OR {column} IN ({}))",
            placeholders.join(", ")
        ));
    }

    /// Drug dimension: a drug can sit at any position of a multi-drug
    /// pathway, so matching is substring containment against the full
    /// `drug_sequence` string rather than equality.
    fn push_sequence_contains(&mut self, drugs: &[String]) {
        if drugs.is_empty() {
            return;
        }
        let matches: Vec<String> = drugs
            .iter()
            .map(|d| {
                let placeholder = self.next_placeholder(d.clone());
                format!("instr(drug_sequence, {placeholder}) > 0")
            })
            .collect();
        self.clauses.push(format!(
            " AND (level < {LEVEL_FIRST_DRUG} OR drug_sequence IS NULL \
             OR drug_sequence = '' OR {})",
            matches.join(" OR ")
        ));
    }

    pub(super) fn sql_suffix(&self) -> String {
        self.clauses.join("")
    }

    pub(super) fn param_refs(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_emits_nothing() {
        let predicate = NodePredicate::new(&PathwayFilter::default(), 2);
        assert_eq!(predicate.sql_suffix(), "");
        assert!(predicate.param_refs().is_empty());
    }

    #[test]
    fn trust_filter_lets_root_pass() {
        let filter = PathwayFilter {
            trusts: vec!["TRUST1".into(), "TRUST2".into()],
            ..Default::default()
        };
        let predicate = NodePredicate::new(&filter, 2);
        let sql = predicate.sql_suffix();
        assert!(sql.contains("level < 1"));
        assert!(sql.contains("trust_name IN (?3, ?4)"));
        assert_eq!(predicate.param_refs().len(), 2);
    }

    #[test]
    fn drug_filter_uses_substring_containment() {
        let filter = PathwayFilter {
            drugs: vec!["ETA".into()],
            ..Default::default()
        };
        let predicate = NodePredicate::new(&filter, 2);
        let sql = predicate.sql_suffix();
        assert!(sql.contains("level < 3"));
        assert!(sql.contains("instr(drug_sequence, ?3) > 0"));
    }

    #[test]
    fn placeholders_continue_after_scoping_params() {
        let filter = PathwayFilter {
            directories: vec!["RHEUM".into()],
            drugs: vec!["ADA".into()],
            ..Default::default()
        };
        let predicate = NodePredicate::new(&filter, 2);
        let sql = predicate.sql_suffix();
        assert!(sql.contains("directory IN (?3)"));
        assert!(sql.contains("instr(drug_sequence, ?4) > 0"));
        assert_eq!(predicate.param_refs().len(), 2);
    }
}
