//! Append-only log of matching and coverage problems.
//!
//! Nothing recorded here aborts a run. Each entry is logged as a warning the
//! moment it is recorded, and the whole log is summarized (and optionally
//! serialized) once the run is over.

use serde::Serialize;
use std::fmt;
use tracing::warn;

/// One recorded problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The source atom is already mapped to a different reference atom.
    AlreadyMapped {
        rule: String,
        source: String,
        existing: String,
        proposed: String,
    },
    /// The reference atom is already the image of another source atom.
    TargetTaken {
        rule: String,
        source: String,
        target: String,
        holder: String,
    },
    /// The join key has several distinct reference tuples; no candidate is picked.
    AmbiguousKey {
        rule: String,
        key: String,
        candidates: Vec<Vec<String>>,
    },
    /// The join key groups a different number of atoms on each side.
    CardinalityMismatch {
        rule: String,
        key: String,
        source_count: usize,
        reference_count: usize,
    },
    /// One side has an atom where the other has a literal.
    KindMismatch {
        rule: String,
        key: String,
        column: usize,
        source: String,
        reference: String,
    },
    /// An atom met during rewriting has no mapping.
    Unmapped {
        relation: String,
        tuple: Vec<String>,
        atom: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyMapped {
                rule,
                source,
                existing,
                proposed,
            } => write!(
                f,
                "error: '{source}' matches both '{existing}' and '{proposed}' (rule {rule})"
            ),
            Self::TargetTaken {
                rule,
                source,
                target,
                holder,
            } => write!(
                f,
                "error: '{source}' matches '{target}', but '{target}' is already used by '{holder}' (rule {rule})"
            ),
            Self::AmbiguousKey {
                rule,
                key,
                candidates,
            } => write!(
                f,
                "error: key '{key}' has {} distinct reference tuples {candidates:?}; skipped (rule {rule})",
                candidates.len()
            ),
            Self::CardinalityMismatch {
                rule,
                key,
                source_count,
                reference_count,
            } => write!(
                f,
                "error: key '{key}' has {source_count} atom(s) in source but {reference_count} in reference; skipped (rule {rule})"
            ),
            Self::KindMismatch {
                rule,
                key,
                column,
                source,
                reference,
            } => write!(
                f,
                "error: key '{key}' column {column} pairs '{source}' with '{reference}', but only one is an atom (rule {rule})"
            ),
            Self::Unmapped {
                relation,
                tuple,
                atom,
            } => write!(
                f,
                "error: no mapping for '{atom}' (used in {relation}: {tuple:?})"
            ),
        }
    }
}

/// Per-kind counts over a diagnostics log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticSummary {
    pub conflicts: usize,
    pub ambiguous_keys: usize,
    pub cardinality_mismatches: usize,
    pub kind_mismatches: usize,
    pub unmapped: usize,
}

impl DiagnosticSummary {
    pub fn total(&self) -> usize {
        self.conflicts
            + self.ambiguous_keys
            + self.cardinality_mismatches
            + self.kind_mismatches
            + self.unmapped
    }

    /// Everything except unmapped atoms.
    pub fn matching_problems(&self) -> usize {
        self.total() - self.unmapped
    }
}

/// The diagnostics log of one run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and emit it on the operator channel.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> DiagnosticSummary {
        let mut summary = DiagnosticSummary::default();
        for entry in &self.entries {
            match entry {
                Diagnostic::AlreadyMapped { .. } | Diagnostic::TargetTaken { .. } => {
                    summary.conflicts += 1
                }
                Diagnostic::AmbiguousKey { .. } => summary.ambiguous_keys += 1,
                Diagnostic::CardinalityMismatch { .. } => summary.cardinality_mismatches += 1,
                Diagnostic::KindMismatch { .. } => summary.kind_mismatches += 1,
                Diagnostic::Unmapped { .. } => summary.unmapped += 1,
            }
        }
        summary
    }
}
