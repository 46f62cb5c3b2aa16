//! Rules where one join key carries several atoms on each side.

use itertools::Itertools;

use facts::{Relation, Tuple};

use super::{AnchorColumns, AnchorRule};
use crate::diagnostics::Diagnostic;
use crate::session::MatchSession;

/// Groups tuples by key column and pairs the groups' atoms by position.
///
/// Within a key, tuples keep their order of appearance, and the i-th source
/// tuple is paired with the i-th reference tuple. This is only right while
/// both runs emit the tuples of one key in the same order; nothing here can
/// detect a reordering. Keys whose groups differ in size are reported and
/// skipped.
#[derive(Debug, Clone)]
pub struct GroupedAnchor {
    columns: AnchorColumns,
}

impl GroupedAnchor {
    /// See [`AnchorColumns::new`].
    pub fn new(relation: impl Into<String>, arity: usize, key: usize, atoms: Vec<usize>) -> Self {
        Self {
            columns: AnchorColumns::new(relation, arity, key, atoms),
        }
    }
}

impl AnchorRule for GroupedAnchor {
    fn relation(&self) -> &str {
        self.columns.relation()
    }

    fn arity(&self) -> usize {
        self.columns.arity()
    }

    fn apply(&self, source: &Relation, reference: &Relation, session: &mut MatchSession) {
        let key_of = |tuple: &&Tuple| self.columns.key_of(tuple).to_owned();
        let source_groups = source.tuples().iter().into_group_map_by(key_of);
        let reference_groups = reference.tuples().iter().into_group_map_by(key_of);

        let keys = source.tuples().iter().map(|t| self.columns.key_of(t)).unique();
        for key in keys {
            let Some(reference_tuples) = reference_groups.get(key) else {
                continue;
            };
            let source_tuples = &source_groups[key];

            if source_tuples.len() != reference_tuples.len() {
                session.record(Diagnostic::CardinalityMismatch {
                    rule: self.name().to_string(),
                    key: key.to_string(),
                    source_count: source_tuples.len(),
                    reference_count: reference_tuples.len(),
                });
                continue;
            }

            for (src, dst) in source_tuples.iter().zip(reference_tuples) {
                for &column in self.columns.atoms() {
                    session.match_fields(self.name(), key, column, &src[column], &dst[column]);
                }
            }
        }
    }
}
