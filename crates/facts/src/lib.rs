//! Relation directories produced by a fact-generating analysis.
//!
//! This crate reads and writes directories of `<relation>.facts` files and
//! decides, per field, whether a value is a renameable atom or a literal.
//! - [`RelationStore`]: all relations of one run
//! - [`Relation`]: one named, ordered sequence of tuples
//! - [`Classifier`]: the lexical atom/literal rule
//! - [`FactsError`]: structural failures (IO, malformed lines)

pub mod classify;
pub mod codec;
pub mod error;
mod fs_utils;
pub mod relation;
pub mod store;

pub use classify::{Atom, Classifier, Field, Literal, DEFAULT_LITERAL_PREFIXES};
pub use error::FactsError;
pub use fs_utils::{relation_path, FACTS_EXTENSION};
pub use relation::{Relation, Tuple};
pub use store::RelationStore;

pub type Result<T> = std::result::Result<T, FactsError>;
