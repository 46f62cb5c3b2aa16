//! Partial injective mapping from source atoms to reference atoms.

use facts::Atom;
use std::collections::HashMap;

/// One accepted pair, with the rule that proposed it first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub source: Atom,
    pub reference: Atom,
    pub rule: String,
}

/// Result of proposing a pair to the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    /// New pair added.
    Inserted,
    /// Exactly this pair was already present.
    Unchanged,
    /// Source atom already maps to `existing`.
    SourceTaken { existing: Atom },
    /// Reference atom is already the image of `holder`.
    TargetTaken { holder: Atom },
}

/// The correspondence between two runs.
///
/// Both directions are indexed so that each insertion checks the functional
/// invariant (one image per source atom) and the injective invariant (one
/// preimage per reference atom). Entries are never replaced or removed.
#[derive(Debug, Clone, Default)]
pub struct CorrespondenceMap {
    forward: HashMap<Atom, Atom>,
    backward: HashMap<Atom, Atom>,
    entries: Vec<MapEntry>,
}

impl CorrespondenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to add `source -> reference`. Conflicting proposals leave the map untouched.
    pub fn propose(&mut self, source: &Atom, reference: &Atom, rule: &str) -> Proposal {
        if let Some(existing) = self.forward.get(source) {
            return if existing == reference {
                Proposal::Unchanged
            } else {
                Proposal::SourceTaken {
                    existing: existing.clone(),
                }
            };
        }
        if let Some(holder) = self.backward.get(reference) {
            return Proposal::TargetTaken {
                holder: holder.clone(),
            };
        }

        self.forward.insert(source.clone(), reference.clone());
        self.backward.insert(reference.clone(), source.clone());
        self.entries.push(MapEntry {
            source: source.clone(),
            reference: reference.clone(),
            rule: rule.to_string(),
        });
        Proposal::Inserted
    }

    pub fn get(&self, source: &Atom) -> Option<&Atom> {
        self.forward.get(source)
    }

    /// Accepted pairs in insertion order.
    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Atom {
        Atom::new(name)
    }

    #[test]
    fn identical_pair_is_idempotent() {
        let mut map = CorrespondenceMap::new();
        assert_eq!(map.propose(&atom("p0"), &atom("p9"), "a"), Proposal::Inserted);
        assert_eq!(map.propose(&atom("p0"), &atom("p9"), "b"), Proposal::Unchanged);
        assert_eq!(map.len(), 1);
        assert_eq!(map.entries()[0].rule, "a");
    }

    #[test]
    fn second_image_is_rejected() {
        let mut map = CorrespondenceMap::new();
        map.propose(&atom("p0"), &atom("p9"), "r");
        let outcome = map.propose(&atom("p0"), &atom("p8"), "r");
        assert_eq!(outcome, Proposal::SourceTaken { existing: atom("p9") });
        assert_eq!(map.get(&atom("p0")), Some(&atom("p9")));
        // p8 stays free for another source atom
        assert_eq!(map.propose(&atom("p1"), &atom("p8"), "r"), Proposal::Inserted);
    }

    #[test]
    fn shared_image_is_rejected() {
        let mut map = CorrespondenceMap::new();
        map.propose(&atom("p0"), &atom("p9"), "r");
        let outcome = map.propose(&atom("p1"), &atom("p9"), "r");
        assert_eq!(outcome, Proposal::TargetTaken { holder: atom("p0") });
        assert_eq!(map.get(&atom("p1")), None);
        assert_eq!(map.len(), 1);
    }
}
