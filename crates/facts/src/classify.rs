//! Field values and the lexical atom/literal classifier.
//!
//! Every decoded field is either an [`Atom`] (a per-run identifier for a
//! loan, origin or path, subject to renaming) or a [`Literal`] (a program
//! point marker, a variable, or any other token the analysis names
//! deterministically). The decision is purely lexical: it only looks at the
//! field text, never at the relation or column the field came from.

use std::fmt;

/// Prefixes recognized as literals out of the box: internal tokens such as
/// variables (`_1`) and the two point markers.
pub const DEFAULT_LITERAL_PREFIXES: [&str; 3] = ["_", "Start", "Mid"];

/// A renameable per-run identifier.
///
/// Atoms only support identity. They carry no ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom(String);

impl Atom {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A field copied verbatim between runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(String);

impl Literal {
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One decoded tuple field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Atom(Atom),
    Literal(Literal),
}

impl Field {
    /// Raw text of the field, regardless of its kind.
    pub fn text(&self) -> &str {
        match self {
            Self::Atom(atom) => atom.name(),
            Self::Literal(lit) => lit.text(),
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Self::Atom(atom) => Some(atom),
            Self::Literal(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Splits fields into atoms and literals by prefix.
#[derive(Debug, Clone)]
pub struct Classifier {
    literal_prefixes: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            literal_prefixes: DEFAULT_LITERAL_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl Classifier {
    /// Default prefixes plus `extra`. Empty prefixes are ignored, since they
    /// would turn every field into a literal.
    pub fn with_extra_prefixes<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classifier = Self::default();
        for prefix in extra.into_iter().map(Into::into) {
            if !prefix.is_empty() && !classifier.literal_prefixes.contains(&prefix) {
                classifier.literal_prefixes.push(prefix);
            }
        }
        classifier
    }

    pub fn literal_prefixes(&self) -> &[String] {
        &self.literal_prefixes
    }

    pub fn is_literal(&self, text: &str) -> bool {
        self.literal_prefixes
            .iter()
            .any(|prefix| text.starts_with(prefix.as_str()))
    }

    pub fn classify(&self, text: impl Into<String>) -> Field {
        let text = text.into();
        if self.is_literal(&text) {
            Field::Literal(Literal(text))
        } else {
            Field::Atom(Atom(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_and_internal_tokens_are_literals() {
        let classifier = Classifier::default();
        for text in ["Start(bb0[1])", "Mid(bb3[0])", "_1", "_"] {
            assert!(classifier.classify(text).is_literal(), "{text} should be literal");
        }
    }

    #[test]
    fn loans_origins_paths_are_atoms() {
        let classifier = Classifier::default();
        for text in ["bw0", "'?3", "mp12", "v1", "start", "middle"] {
            let field = classifier.classify(text);
            assert_eq!(field.as_atom().map(Atom::name), Some(text));
        }
    }

    #[test]
    fn extra_prefixes_extend_defaults() {
        let classifier = Classifier::with_extra_prefixes(["v", "", "_"]);
        assert_eq!(classifier.literal_prefixes(), ["_", "Start", "Mid", "v"]);
        assert!(classifier.classify("v1").is_literal());
        assert!(!classifier.classify("mp0").is_literal());
    }

    #[test]
    fn display_is_raw_text() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("Mid(bb0[2])").to_string(), "Mid(bb0[2])");
        assert_eq!(classifier.classify("'?0").to_string(), "'?0");
    }
}
