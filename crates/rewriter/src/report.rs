//! JSON report of a run: the mapping and every diagnostic.

use serde::Serialize;
use std::io;
use std::path::Path;

use aligner::{CorrespondenceMap, DiagnosticSummary, Diagnostics};

#[derive(Serialize, Debug)]
struct MappingRecord<'a> {
    source: &'a str,
    reference: &'a str,
    rule: &'a str,
}

#[derive(Serialize, Debug)]
pub struct Report<'a> {
    mapping: Vec<MappingRecord<'a>>,
    diagnostics: &'a Diagnostics,
    summary: DiagnosticSummary,
}

impl<'a> Report<'a> {
    pub fn new(map: &'a CorrespondenceMap, diagnostics: &'a Diagnostics) -> Self {
        let mapping = map
            .entries()
            .iter()
            .map(|entry| MappingRecord {
                source: entry.source.name(),
                reference: entry.reference.name(),
                rule: &entry.rule,
            })
            .collect();
        Self {
            mapping,
            diagnostics,
            summary: diagnostics.summary(),
        }
    }

    /// Serialize the report to a pretty JSON file.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)
    }
}
