//! End-of-run summary on the operator channel.

use tracing::{info, warn};

use aligner::DiagnosticSummary;
use common::FailOn;

/// Exit status when output was written but the failure policy is violated.
pub const EXIT_DEGRADED: i32 = 2;
/// Exit status for structural errors.
pub const EXIT_FAILURE: i32 = 1;

/// Counts describing one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub relations: usize,
    pub tuples: usize,
    pub mapped_atoms: usize,
    pub diagnostics: DiagnosticSummary,
}

impl RunReport {
    /// Whether the diagnostics violate `policy`.
    pub fn is_degraded(&self, policy: FailOn) -> bool {
        match policy {
            FailOn::Never => false,
            FailOn::Unmapped => self.diagnostics.unmapped > 0,
            FailOn::Any => self.diagnostics.total() > 0,
        }
    }

    /// Process exit status under `policy`.
    pub fn exit_code(&self, policy: FailOn) -> i32 {
        if self.is_degraded(policy) {
            EXIT_DEGRADED
        } else {
            0
        }
    }

    pub fn log(&self) {
        let d = &self.diagnostics;
        info!("{}", "=".repeat(80));
        info!("SUMMARY:");
        info!("  Relations rewritten: {}", self.relations);
        info!("  Tuples rewritten: {}", self.tuples);
        info!("  Atoms matched: {}", self.mapped_atoms);
        if d.total() == 0 {
            info!("  No diagnostics.");
            return;
        }
        warn!("  Matching problems: {}", d.matching_problems());
        warn!("    Conflicts: {}", d.conflicts);
        warn!("    Ambiguous keys: {}", d.ambiguous_keys);
        warn!("    Cardinality mismatches: {}", d.cardinality_mismatches);
        warn!("    Kind mismatches: {}", d.kind_mismatches);
        warn!("  Unmapped atom occurrences: {}", d.unmapped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(unmapped: usize, conflicts: usize) -> RunReport {
        RunReport {
            relations: 1,
            tuples: 1,
            mapped_atoms: 0,
            diagnostics: DiagnosticSummary {
                conflicts,
                unmapped,
                ..DiagnosticSummary::default()
            },
        }
    }

    #[test]
    fn never_policy_always_succeeds() {
        assert_eq!(report(3, 2).exit_code(FailOn::Never), 0);
    }

    #[test]
    fn unmapped_policy_ignores_conflicts() {
        assert_eq!(report(0, 2).exit_code(FailOn::Unmapped), 0);
        assert_eq!(report(1, 0).exit_code(FailOn::Unmapped), EXIT_DEGRADED);
    }

    #[test]
    fn any_policy_counts_everything() {
        assert_eq!(report(0, 0).exit_code(FailOn::Any), 0);
        assert_eq!(report(0, 1).exit_code(FailOn::Any), EXIT_DEGRADED);
    }
}
