//! Loading and saving directories of relation files.
//!
//! A store is one run's view of the analysis output: every `<name>.facts`
//! file of a directory, decoded into tuples of classified fields. Stores are
//! built once and then only read.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::classify::Classifier;
use crate::codec::{decode_field, encode_field};
use crate::error::FactsError;
use crate::Result;
use crate::fs_utils::{ensure_dir, list_fact_files, relation_path};
use crate::relation::{Relation, Tuple};

/// Relations of one run, keyed and iterated by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationStore {
    relations: BTreeMap<String, Relation>,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every relation file of `dir`.
    pub fn load(dir: &Path, classifier: &Classifier) -> Result<Self> {
        let files = list_fact_files(dir).map_err(|e| FactsError::io(dir, e))?;

        let mut store = Self::new();
        for (name, path) in files {
            let relation = load_relation(&name, &path, classifier)?;
            debug!(
                "Loaded relation '{}': {} tuple(s) from {}",
                name,
                relation.len(),
                path.display()
            );
            store.insert(relation);
        }

        info!(
            "Loaded {} relation(s) from '{}'",
            store.relations.len(),
            dir.display()
        );
        Ok(store)
    }

    /// Write every relation to `dir`, one quoted, tab-separated tuple per line.
    ///
    /// `dir` is created if missing. Files of other relations already present
    /// in `dir` are left alone.
    pub fn save(&self, dir: &Path) -> Result<()> {
        ensure_dir(dir).map_err(|e| FactsError::io(dir, e))?;

        for relation in self.relations.values() {
            let path = relation_path(dir, relation.name());
            write_relation(relation, &path).map_err(|e| FactsError::io(&path, e))?;
        }

        info!(
            "Wrote {} relation(s) to '{}'",
            self.relations.len(),
            dir.display()
        );
        Ok(())
    }

    /// Add or replace a relation.
    pub fn insert(&mut self, relation: Relation) {
        self.relations.insert(relation.name().to_string(), relation);
    }

    pub fn get(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

fn load_relation(name: &str, path: &Path, classifier: &Classifier) -> Result<Relation> {
    let file = File::open(path).map_err(|e| FactsError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut relation = Relation::new(name);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| FactsError::io(path, e))?;
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tuple = parse_line(name, line_no, line, classifier)?;
        relation.push(tuple, line_no)?;
    }
    Ok(relation)
}

fn parse_line(
    relation: &str,
    line: usize,
    text: &str,
    classifier: &Classifier,
) -> Result<Tuple> {
    text.split('\t')
        .enumerate()
        .map(|(column, raw)| {
            decode_field(raw)
                .map(|value| classifier.classify(value))
                .map_err(|reason| FactsError::UndecodableField {
                    relation: relation.to_string(),
                    line,
                    column: column + 1,
                    text: raw.to_string(),
                    reason,
                })
        })
        .collect()
}

fn write_relation(relation: &Relation, path: &Path) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for tuple in relation.tuples() {
        let line = tuple
            .iter()
            .map(|field| encode_field(field.text()))
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(out, "{line}")?;
    }
    out.flush()
}
