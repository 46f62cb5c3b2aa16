//! Rules with exactly one expected reference tuple per join key.

use std::collections::{HashMap, HashSet};

use facts::{Field, Relation};

use super::{AnchorColumns, AnchorRule};
use crate::diagnostics::Diagnostic;
use crate::session::MatchSession;

/// Joins source and reference on one key column and matches the atom
/// columns of the joined tuples.
///
/// Source keys absent from the reference are skipped. A key whose reference
/// tuples disagree on the atom columns is ambiguous: it is reported once and
/// skipped.
#[derive(Debug, Clone)]
pub struct KeyedAnchor {
    columns: AnchorColumns,
}

impl KeyedAnchor {
    /// See [`AnchorColumns::new`].
    pub fn new(relation: impl Into<String>, arity: usize, key: usize, atoms: Vec<usize>) -> Self {
        Self {
            columns: AnchorColumns::new(relation, arity, key, atoms),
        }
    }
}

impl AnchorRule for KeyedAnchor {
    fn relation(&self) -> &str {
        self.columns.relation()
    }

    fn arity(&self) -> usize {
        self.columns.arity()
    }

    fn apply(&self, source: &Relation, reference: &Relation, session: &mut MatchSession) {
        // key -> distinct atom projections, first seen first
        let mut lookup: HashMap<&str, Vec<Vec<&Field>>> = HashMap::new();
        for tuple in reference.tuples() {
            let projection = self.columns.project(tuple);
            let candidates = lookup.entry(self.columns.key_of(tuple)).or_default();
            if !candidates.contains(&projection) {
                candidates.push(projection);
            }
        }

        let mut reported = HashSet::new();
        for tuple in source.tuples() {
            let key = self.columns.key_of(tuple);
            let Some(candidates) = lookup.get(key) else {
                continue;
            };

            if let [projection] = candidates.as_slice() {
                for (&column, reference_field) in self.columns.atoms().iter().zip(projection) {
                    session.match_fields(self.name(), key, column, &tuple[column], reference_field);
                }
            } else if reported.insert(key) {
                session.record(Diagnostic::AmbiguousKey {
                    rule: self.name().to_string(),
                    key: key.to_string(),
                    candidates: candidates
                        .iter()
                        .map(|p| p.iter().map(|f| f.to_string()).collect())
                        .collect(),
                });
            }
        }
    }
}
