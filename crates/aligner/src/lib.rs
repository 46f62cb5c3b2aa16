//! Cross-run atom alignment.
//!
//! Two runs of the same analysis name the same loans, origins and paths
//! differently. This crate derives a partial injective mapping from the
//! source run's atoms to the reference run's atoms by joining a few anchor
//! relations on fields both runs agree on (points and variables).
//!
//! - [`CorrespondenceBuilder`]: runs the anchor rules in a fixed order
//! - [`MatchSession`]: the mutable map and log threaded through the rules
//! - [`Alignment`]: the frozen result handed to the rewriter
//! - [`Diagnostics`]: conflicts, ambiguities and unmapped atoms

pub mod builder;
pub mod correspondence;
pub mod diagnostics;
pub mod rules;
pub mod session;

pub use builder::CorrespondenceBuilder;
pub use correspondence::{CorrespondenceMap, MapEntry, Proposal};
pub use diagnostics::{Diagnostic, DiagnosticSummary, Diagnostics};
pub use rules::{standard_rules, AnchorColumns, AnchorRule, GroupedAnchor, KeyedAnchor};
pub use session::{Alignment, MatchSession};
