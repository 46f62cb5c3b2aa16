//! Rewrites a source run's relation files into a reference run's atom names.
//!
//! A run has four strictly sequential phases:
//! 1. load the source and reference directories,
//! 2. build the atom correspondence from the anchor relations,
//! 3. rewrite every source relation through the frozen mapping,
//! 4. save the destination directory (and optionally a JSON report).
//!
//! Only structural errors stop a run. Conflicts and unmapped atoms are
//! collected as diagnostics, and the output is always written in full.

mod error;
mod report;
mod rewrite;
mod summary;


pub use error::RunError;
pub use report::Report;
pub use rewrite::Rewriter;
pub use summary::{RunReport, EXIT_DEGRADED, EXIT_FAILURE};

use tracing::info;

use aligner::CorrespondenceBuilder;
use common::Config;
use facts::{Classifier, RelationStore};

/// Execute one complete run as described by `config`.
pub fn run(config: &Config) -> Result<RunReport, RunError> {
    let classifier = Classifier::with_extra_prefixes(config.literal_prefixes().iter().cloned());

    let source = RelationStore::load(config.source_dir(), &classifier)?;
    let reference = RelationStore::load(config.reference_dir(), &classifier)?;

    let builder = CorrespondenceBuilder::new();
    info!("Running anchor rules: {}", builder.rule_names().join(", "));
    let (map, mut diagnostics) = builder.build(&source, &reference)?.into_parts();

    let rewritten =
        Rewriter::new(&map, config.placeholder_prefix()).rewrite_store(&source, &mut diagnostics)?;
    rewritten.save(config.dest_dir())?;

    if let Some(path) = config.report_path() {
        Report::new(&map, &diagnostics)
            .write_json(path)
            .map_err(|source| RunError::Report {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Wrote report to '{}'", path.display());
    }

    let report = RunReport {
        relations: rewritten.len(),
        tuples: rewritten.relations().map(|r| r.len()).sum(),
        mapped_atoms: map.len(),
        diagnostics: diagnostics.summary(),
    };
    report.log();
    Ok(report)
}
