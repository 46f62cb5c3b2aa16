//! Column layout shared by the anchor rules.

use facts::Field;

/// Which relation a rule reads, its arity, the join key column and the
/// atom columns matched under that key.
#[derive(Debug, Clone)]
pub struct AnchorColumns {
    relation: String,
    arity: usize,
    key: usize,
    atoms: Vec<usize>,
}

impl AnchorColumns {
    /// `key` and `atoms` are column indices below `arity`.
    pub fn new(relation: impl Into<String>, arity: usize, key: usize, atoms: Vec<usize>) -> Self {
        debug_assert!(key < arity && atoms.iter().all(|&c| c < arity && c != key));
        Self {
            relation: relation.into(),
            arity,
            key,
            atoms,
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    /// Join key text of `tuple`.
    pub fn key_of<'a>(&self, tuple: &'a [Field]) -> &'a str {
        tuple[self.key].text()
    }

    /// Atom-column fields of `tuple`, in column order.
    pub fn project<'a>(&self, tuple: &'a [Field]) -> Vec<&'a Field> {
        self.atoms.iter().map(|&column| &tuple[column]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts::Classifier;

    #[test]
    fn key_and_projection_follow_columns() {
        let classifier = Classifier::default();
        let tuple: Vec<Field> = ["'?0", "bw0", "Mid(bb0[1])"]
            .into_iter()
            .map(|f| classifier.classify(f))
            .collect();
        let columns = AnchorColumns::new("loan_issued_at", 3, 2, vec![1, 0]);

        assert_eq!(columns.key_of(&tuple), "Mid(bb0[1])");
        let projected: Vec<&str> = columns.project(&tuple).iter().map(|f| f.text()).collect();
        assert_eq!(projected, ["bw0", "'?0"]);
        assert_eq!(columns.atoms(), [1, 0]);
    }
}
