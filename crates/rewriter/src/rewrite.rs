//! Renames every atom of a source store into the reference run's names.

use tracing::debug;

use aligner::{CorrespondenceMap, Diagnostic, Diagnostics};
use facts::{Atom, Field, Relation, RelationStore, Tuple};

/// Applies a frozen correspondence to relations.
///
/// Literals are copied, mapped atoms replaced, and unmapped atoms written as
/// `<placeholder_prefix><atom>` with one diagnostic per occurrence.
pub struct Rewriter<'a> {
    map: &'a CorrespondenceMap,
    placeholder_prefix: &'a str,
}

impl<'a> Rewriter<'a> {
    pub fn new(map: &'a CorrespondenceMap, placeholder_prefix: &'a str) -> Self {
        Self {
            map,
            placeholder_prefix,
        }
    }

    /// Rewrite every relation of `source`.
    pub fn rewrite_store(
        &self,
        source: &RelationStore,
        diagnostics: &mut Diagnostics,
    ) -> facts::Result<RelationStore> {
        let mut out = RelationStore::new();
        for relation in source.relations() {
            out.insert(self.rewrite_relation(relation, diagnostics)?);
        }
        Ok(out)
    }

    /// Rewrite one relation, keeping its tuple order.
    pub fn rewrite_relation(
        &self,
        relation: &Relation,
        diagnostics: &mut Diagnostics,
    ) -> facts::Result<Relation> {
        let unmapped_before = diagnostics.len();
        let mut out = Relation::new(relation.name());
        for (idx, tuple) in relation.tuples().iter().enumerate() {
            let rewritten = self.rewrite_tuple(relation.name(), tuple, diagnostics);
            out.push(rewritten, idx + 1)?;
        }
        debug!(
            "Rewrote relation '{}': {} tuple(s), {} unmapped field(s)",
            relation.name(),
            out.len(),
            diagnostics.len() - unmapped_before
        );
        Ok(out)
    }

    fn rewrite_tuple(&self, relation: &str, tuple: &Tuple, diagnostics: &mut Diagnostics) -> Tuple {
        tuple
            .iter()
            .map(|field| match field {
                Field::Literal(_) => field.clone(),
                Field::Atom(atom) => match self.map.get(atom) {
                    Some(mapped) => Field::Atom(mapped.clone()),
                    None => {
                        diagnostics.record(Diagnostic::Unmapped {
                            relation: relation.to_string(),
                            tuple: tuple.iter().map(|f| f.to_string()).collect(),
                            atom: atom.to_string(),
                        });
                        Field::Atom(Atom::new(format!("{}{}", self.placeholder_prefix, atom)))
                    }
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts::Classifier;

    fn relation(name: &str, rows: &[&[&str]]) -> Relation {
        let classifier = Classifier::default();
        let mut rel = Relation::new(name);
        for (idx, row) in rows.iter().enumerate() {
            rel.push(row.iter().map(|f| classifier.classify(*f)).collect(), idx + 1)
                .unwrap();
        }
        rel
    }

    fn texts(rel: &Relation) -> Vec<Vec<&str>> {
        rel.tuples()
            .iter()
            .map(|t| t.iter().map(Field::text).collect())
            .collect()
    }

    fn map_of(pairs: &[(&str, &str)]) -> CorrespondenceMap {
        let mut map = CorrespondenceMap::new();
        for (src, dst) in pairs {
            map.propose(&Atom::new(*src), &Atom::new(*dst), "test");
        }
        map
    }

    #[test]
    fn maps_atoms_and_copies_literals() {
        let map = map_of(&[("'?0", "'?7"), ("bw0", "bw3")]);
        let source = relation(
            "loan_killed_at",
            &[&["bw0", "Start(bb1[0])"], &["bw0", "Mid(bb1[2])"]],
        );
        let mut diagnostics = Diagnostics::new();
        let out = Rewriter::new(&map, "OLD:")
            .rewrite_relation(&source, &mut diagnostics)
            .unwrap();

        assert_eq!(
            texts(&out),
            [["bw3", "Start(bb1[0])"], ["bw3", "Mid(bb1[2])"]]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn unmapped_atoms_get_placeholder_and_one_diagnostic_each() {
        let map = map_of(&[("'?0", "'?7")]);
        let source = relation(
            "subset_base",
            &[&["'?0", "'?1", "Mid(bb0[0])"], &["'?1", "'?1", "Mid(bb0[1])"]],
        );
        let mut diagnostics = Diagnostics::new();
        let out = Rewriter::new(&map, "OLD:")
            .rewrite_relation(&source, &mut diagnostics)
            .unwrap();

        assert_eq!(
            texts(&out),
            [
                ["'?7", "OLD:'?1", "Mid(bb0[0])"],
                ["OLD:'?1", "OLD:'?1", "Mid(bb0[1])"]
            ]
        );
        assert_eq!(diagnostics.summary().unmapped, 3);
        assert_eq!(
            diagnostics.entries()[0],
            Diagnostic::Unmapped {
                relation: "subset_base".into(),
                tuple: vec!["'?0".into(), "'?1".into(), "Mid(bb0[0])".into()],
                atom: "'?1".into(),
            }
        );
    }

    #[test]
    fn custom_placeholder_prefix() {
        let map = CorrespondenceMap::new();
        let source = relation("var_used_at", &[&["_1", "mp0"]]);
        let mut diagnostics = Diagnostics::new();
        let out = Rewriter::new(&map, "UNMAPPED#")
            .rewrite_relation(&source, &mut diagnostics)
            .unwrap();
        assert_eq!(texts(&out), [["_1", "UNMAPPED#mp0"]]);
    }

    #[test]
    fn rewrite_store_keeps_every_relation() {
        let map = map_of(&[("mp0", "mp9")]);
        let mut source = RelationStore::new();
        source.insert(relation("path_is_var", &[&["mp0", "_1"]]));
        source.insert(Relation::new("empty"));

        let mut diagnostics = Diagnostics::new();
        let out = Rewriter::new(&map, "OLD:")
            .rewrite_store(&source, &mut diagnostics)
            .unwrap();
        assert_eq!(out.names().collect::<Vec<_>>(), ["empty", "path_is_var"]);
        assert!(out.get("empty").unwrap().is_empty());
        assert_eq!(texts(out.get("path_is_var").unwrap()), [["mp9", "_1"]]);
    }
}
