//! Mutable state of one matching run.

use facts::{Atom, Field};

use crate::correspondence::{CorrespondenceMap, Proposal};
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Owns the correspondence map and diagnostics while anchor rules run.
///
/// A session is created per run, passed by `&mut` to every rule, and frozen
/// into an [`Alignment`] once the last rule has run.
#[derive(Debug, Default)]
pub struct MatchSession {
    map: CorrespondenceMap,
    diagnostics: Diagnostics,
}

impl MatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Propose `source -> reference`. Returns whether the pair is in the map
    /// afterwards; conflicts are recorded as diagnostics.
    pub fn match_atoms(&mut self, rule: &str, source: &Atom, reference: &Atom) -> bool {
        match self.map.propose(source, reference, rule) {
            Proposal::Inserted | Proposal::Unchanged => true,
            Proposal::SourceTaken { existing } => {
                self.diagnostics.record(Diagnostic::AlreadyMapped {
                    rule: rule.to_string(),
                    source: source.to_string(),
                    existing: existing.to_string(),
                    proposed: reference.to_string(),
                });
                false
            }
            Proposal::TargetTaken { holder } => {
                self.diagnostics.record(Diagnostic::TargetTaken {
                    rule: rule.to_string(),
                    source: source.to_string(),
                    target: reference.to_string(),
                    holder: holder.to_string(),
                });
                false
            }
        }
    }

    /// Pair two fields found at the same column under the same join key.
    ///
    /// Atoms are proposed to the map; two literals need no mapping.
    pub fn match_fields(
        &mut self,
        rule: &str,
        key: &str,
        column: usize,
        source: &Field,
        reference: &Field,
    ) {
        match (source, reference) {
            (Field::Atom(src), Field::Atom(dst)) => {
                self.match_atoms(rule, src, dst);
            }
            (Field::Literal(_), Field::Literal(_)) => {}
            _ => self.record(Diagnostic::KindMismatch {
                rule: rule.to_string(),
                key: key.to_string(),
                column,
                source: source.to_string(),
                reference: reference.to_string(),
            }),
        }
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.record(diagnostic);
    }

    pub fn map(&self) -> &CorrespondenceMap {
        &self.map
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// End the matching phase. The map can no longer grow.
    pub fn freeze(self) -> Alignment {
        Alignment {
            map: self.map,
            diagnostics: self.diagnostics,
        }
    }
}

/// Frozen outcome of the matching phase.
#[derive(Debug)]
pub struct Alignment {
    map: CorrespondenceMap,
    diagnostics: Diagnostics,
}

impl Alignment {
    pub fn map(&self) -> &CorrespondenceMap {
        &self.map
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Read-only map plus the diagnostics log, which later phases keep appending to.
    pub fn into_parts(self) -> (CorrespondenceMap, Diagnostics) {
        (self.map, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts::Classifier;

    #[test]
    fn conflicts_are_diagnosed_not_applied() {
        let mut session = MatchSession::new();
        let (p0, p1, p9) = (Atom::new("p0"), Atom::new("p1"), Atom::new("p9"));

        assert!(session.match_atoms("path_is_var", &p0, &p9));
        assert!(session.match_atoms("path_is_var", &p0, &p9));
        assert!(session.diagnostics().is_empty());

        assert!(!session.match_atoms("path_is_var", &p1, &p9));
        assert_eq!(
            session.diagnostics().entries(),
            [Diagnostic::TargetTaken {
                rule: "path_is_var".into(),
                source: "p1".into(),
                target: "p9".into(),
                holder: "p0".into(),
            }]
        );
        assert_eq!(session.map().get(&p0), Some(&p9));
        assert_eq!(session.map().get(&p1), None);
    }

    #[test]
    fn match_fields_by_kind() {
        let classifier = Classifier::default();
        let mut session = MatchSession::new();

        session.match_fields("r", "k", 0, &classifier.classify("_1"), &classifier.classify("_1"));
        assert!(session.map().is_empty());
        assert!(session.diagnostics().is_empty());

        session.match_fields("r", "k", 0, &classifier.classify("mp0"), &classifier.classify("_2"));
        assert!(session.map().is_empty());
        assert!(matches!(
            session.diagnostics().entries(),
            [Diagnostic::KindMismatch { column: 0, .. }]
        ));

        session.match_fields("r", "k", 1, &classifier.classify("mp0"), &classifier.classify("mp5"));
        assert_eq!(session.map().len(), 1);
    }

    #[test]
    fn freeze_keeps_map_and_log() {
        let mut session = MatchSession::new();
        session.match_atoms("r", &Atom::new("a"), &Atom::new("b"));
        session.match_atoms("r", &Atom::new("a"), &Atom::new("c"));
        let alignment = session.freeze();
        assert_eq!(alignment.map().len(), 1);
        assert_eq!(alignment.diagnostics().len(), 1);
        let (map, diagnostics) = alignment.into_parts();
        assert_eq!(map.get(&Atom::new("a")), Some(&Atom::new("b")));
        assert_eq!(diagnostics.summary().conflicts, 1);
    }
}
