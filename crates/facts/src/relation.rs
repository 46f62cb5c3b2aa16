//! A named, ordered sequence of tuples.

use crate::classify::Field;
use crate::error::FactsError;
use crate::Result;

/// One row of a relation.
pub type Tuple = Vec<Field>;

/// A relation as read from (or written to) one `<name>.facts` file.
///
/// Tuple order is kept as found in the file. Downstream tools diff relation
/// files line by line, so order is significant even though the relation is
/// logically a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    name: String,
    arity: Option<usize>,
    tuples: Vec<Tuple>,
}

impl Relation {
    /// An empty relation. Its arity is fixed by the first pushed tuple.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: None,
            tuples: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arity of the stored tuples, `None` while the relation is empty.
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Append a tuple; `line` only feeds the error message.
    pub fn push(&mut self, tuple: Tuple, line: usize) -> Result<()> {
        match self.arity {
            Some(expected) if expected != tuple.len() => {
                return Err(FactsError::ArityMismatch {
                    relation: self.name.clone(),
                    line,
                    expected,
                    found: tuple.len(),
                });
            }
            Some(_) => {}
            None => self.arity = Some(tuple.len()),
        }
        self.tuples.push(tuple);
        Ok(())
    }

    /// Check the relation against a schema arity. Empty relations always pass.
    pub fn expect_arity(&self, expected: usize) -> Result<()> {
        match self.arity {
            Some(found) if found != expected => Err(FactsError::SchemaMismatch {
                relation: self.name.clone(),
                expected,
                found,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;

    fn tuple(fields: &[&str]) -> Tuple {
        let classifier = Classifier::default();
        fields.iter().map(|f| classifier.classify(*f)).collect()
    }

    #[test]
    fn first_tuple_fixes_arity() {
        let mut rel = Relation::new("loan_issued_at");
        assert_eq!(rel.arity(), None);
        rel.push(tuple(&["'?1", "bw0", "Mid(bb0[1])"]), 1).unwrap();
        assert_eq!(rel.arity(), Some(3));

        let err = rel.push(tuple(&["'?2", "bw1"]), 2).unwrap_err();
        assert!(matches!(
            err,
            FactsError::ArityMismatch { line: 2, expected: 3, found: 2, .. }
        ));
        assert_eq!(rel.len(), 1);
    }

    #[test]
    fn expect_arity_accepts_empty_relations() {
        let mut rel = Relation::new("path_is_var");
        rel.expect_arity(2).unwrap();
        rel.push(tuple(&["mp0", "_1"]), 1).unwrap();
        rel.expect_arity(2).unwrap();
        assert!(matches!(
            rel.expect_arity(3),
            Err(FactsError::SchemaMismatch { expected: 3, found: 2, .. })
        ));
    }
}
