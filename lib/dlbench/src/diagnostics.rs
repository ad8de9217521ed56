//! Non-fatal conditions met while building a benchmark.

use serde::Serialize;
use std::fmt;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// A subsumption axiom whose left-hand side is not a named class.
    AnonymousSubject,
    /// A group without any `A ⊑ ∃r.B` axiom to ask about.
    MissingKeyAxiom,
    /// The reasoner failed; the entailment was recorded as not entailed.
    ReasonerFailure,
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Collects diagnostics in the order they are raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            kind,
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_in_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        diagnostics.push(DiagnosticKind::MissingKeyAxiom, "group Pizza");
        diagnostics.push(DiagnosticKind::AnonymousSubject, "A ⊓ B");
        let mut other = Diagnostics::new();
        other.push(DiagnosticKind::MissingKeyAxiom, "group Topping");
        diagnostics.extend(other);

        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.count(DiagnosticKind::MissingKeyAxiom), 2);
        assert_eq!(diagnostics.count(DiagnosticKind::ReasonerFailure), 0);
        let messages: Vec<_> = diagnostics.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            [
                "MissingKeyAxiom: group Pizza",
                "AnonymousSubject: A ⊓ B",
                "MissingKeyAxiom: group Topping"
            ]
        );
    }
}
