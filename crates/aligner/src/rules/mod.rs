//! Anchor rules: relations whose shared join key pins atoms of both runs together.
//!
//! The standard rule list, in execution order:
//! 1. `path_is_var(path, var)` keyed by var
//! 2. `path_assigned_at_base(path, point)` keyed by point
//! 3. `loan_issued_at(origin, loan, point)` keyed by point
//! 4. `use_of_var_derefs_origin(var, origin)` grouped by var, paired by position
//!
//! Earlier rules win: once an atom is mapped, later proposals for it can
//! only agree or be reported as conflicts. The order is therefore part of
//! the observable behavior.

mod columns;
mod grouped;
mod keyed;

pub use columns::AnchorColumns;
pub use grouped::GroupedAnchor;
pub use keyed::KeyedAnchor;

use facts::Relation;

use crate::session::MatchSession;

pub const PATH_IS_VAR: &str = "path_is_var";
pub const PATH_ASSIGNED_AT_BASE: &str = "path_assigned_at_base";
pub const LOAN_ISSUED_AT: &str = "loan_issued_at";
pub const USE_OF_VAR_DEREFS_ORIGIN: &str = "use_of_var_derefs_origin";

/// A matching procedure over one relation present in both runs.
pub trait AnchorRule {
    /// Name used in diagnostics. Defaults to the relation name.
    fn name(&self) -> &str {
        self.relation()
    }

    /// Relation consumed from both stores.
    fn relation(&self) -> &str;

    /// Arity the relation must have.
    fn arity(&self) -> usize;

    /// Propose matches into `session`.
    ///
    /// Both relations must already have been checked against [`AnchorRule::arity`].
    fn apply(&self, source: &Relation, reference: &Relation, session: &mut MatchSession);
}

/// The four standard rules in their contractual order.
pub fn standard_rules() -> Vec<Box<dyn AnchorRule>> {
    vec![
        Box::new(KeyedAnchor::new(PATH_IS_VAR, 2, 1, vec![0])),
        Box::new(KeyedAnchor::new(PATH_ASSIGNED_AT_BASE, 2, 1, vec![0])),
        Box::new(KeyedAnchor::new(LOAN_ISSUED_AT, 3, 2, vec![0, 1])),
        Box::new(GroupedAnchor::new(USE_OF_VAR_DEREFS_ORIGIN, 2, 0, vec![1])),
    ]
}

#[cfg(test)]
pub(crate) mod test_utils {
    use facts::{Classifier, Relation};

    /// Build a relation from rows of raw field text.
    pub fn relation(name: &str, rows: &[&[&str]]) -> Relation {
        let classifier = Classifier::default();
        let mut rel = Relation::new(name);
        for (idx, row) in rows.iter().enumerate() {
            let tuple = row.iter().map(|f| classifier.classify(*f)).collect();
            rel.push(tuple, idx + 1).expect("consistent arity");
        }
        rel
    }
}
