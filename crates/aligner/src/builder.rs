//! Runs the anchor rules over two stores.

use tracing::{debug, info, warn};

use facts::RelationStore;

use crate::rules::{standard_rules, AnchorRule};
use crate::session::{Alignment, MatchSession};

/// Builds the correspondence between a source and a reference run.
pub struct CorrespondenceBuilder {
    rules: Vec<Box<dyn AnchorRule>>,
}

impl Default for CorrespondenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrespondenceBuilder {
    /// Builder running [`standard_rules`].
    pub fn new() -> Self {
        Self::with_rules(standard_rules())
    }

    /// Builder running `rules` in the given order.
    pub fn with_rules(rules: Vec<Box<dyn AnchorRule>>) -> Self {
        Self { rules }
    }

    /// Rule names in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule in order and freeze the result.
    ///
    /// Fails only when an anchor relation does not have its rule's arity.
    /// Matching problems end up in the alignment's diagnostics.
    pub fn build(
        &self,
        source: &RelationStore,
        reference: &RelationStore,
    ) -> facts::Result<Alignment> {
        let mut session = MatchSession::new();
        for rule in &self.rules {
            run_rule(rule.as_ref(), source, reference, &mut session)?;
        }

        let alignment = session.freeze();
        info!(
            "Matched {} atom(s) using {} anchor rule(s), {} diagnostic(s)",
            alignment.map().len(),
            self.rules.len(),
            alignment.diagnostics().len()
        );
        Ok(alignment)
    }
}

fn run_rule(
    rule: &dyn AnchorRule,
    source: &RelationStore,
    reference: &RelationStore,
    session: &mut MatchSession,
) -> facts::Result<()> {
    let relation = rule.relation();
    let (Some(src), Some(dst)) = (source.get(relation), reference.get(relation)) else {
        warn!(
            "Skipping rule '{}': relation '{}' missing from {}",
            rule.name(),
            relation,
            match (source.get(relation), reference.get(relation)) {
                (None, None) => "both runs",
                (None, Some(_)) => "the source run",
                _ => "the reference run",
            }
        );
        return Ok(());
    };

    src.expect_arity(rule.arity())?;
    dst.expect_arity(rule.arity())?;

    let (mapped_before, diagnostics_before) = (session.map().len(), session.diagnostics().len());
    rule.apply(src, dst, session);
    debug!(
        "Rule '{}': {} new match(es), {} new diagnostic(s)",
        rule.name(),
        session.map().len() - mapped_before,
        session.diagnostics().len() - diagnostics_before
    );
    Ok(())
}
