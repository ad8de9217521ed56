//! Ground-truth answers from a reasoner.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use oxowl::{Axiom, Ontology, OwlError, ReasonerConfig, ReasonerKind};
use tracing::{debug, warn};

/// Asks a fresh reasoner whether an ontology entails an axiom.
///
/// A reasoner is created for every check and dropped when the check returns.
#[derive(Debug, Clone, Default)]
pub struct EntailmentChecker {
    kind: ReasonerKind,
    config: ReasonerConfig,
    precompute: bool,
}

impl EntailmentChecker {
    pub fn new(kind: ReasonerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ReasonerConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the full classification before each entailment check.
    #[must_use]
    pub fn with_precompute(mut self, precompute: bool) -> Self {
        self.precompute = precompute;
        self
    }

    pub fn kind(&self) -> ReasonerKind {
        self.kind
    }

    /// Returns the reasoner verdict, or the reasoner error.
    pub fn check(&self, ontology: &Ontology, axiom: &Axiom) -> Result<bool, OwlError> {
        let mut reasoner = self.kind.create(ontology, self.config.clone());
        if self.precompute {
            reasoner.precompute_inferences()?;
        }
        reasoner.is_entailed(axiom)
    }

    /// Returns whether `axiom` is entailed, `false` if the reasoner fails.
    ///
    /// Failures are logged and recorded in `diagnostics`.
    pub fn is_entailed(
        &self,
        ontology: &Ontology,
        axiom: &Axiom,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        match self.check(ontology, axiom) {
            Ok(entailed) => {
                debug!(reasoner = %self.kind, %axiom, entailed, "entailment checked");
                entailed
            }
            Err(e) => {
                warn!(reasoner = %self.kind, %axiom, error = %e, "reasoner failed, answering No");
                diagnostics.push(
                    DiagnosticKind::ReasonerFailure,
                    format!("{axiom}: {e}"),
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxowl::{ClassExpression, ObjectProperty, ObjectPropertyExpression, OwlClass};
    use oxrdf::NamedNode;

    fn class(name: &str) -> OwlClass {
        OwlClass::new(NamedNode::new_unchecked(format!("http://example.org/{name}")))
    }

    fn pizza_ontology() -> Ontology {
        let has_base = ObjectProperty::new(NamedNode::new_unchecked("http://example.org/hasBase"));
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::subclass_of(class("Margherita"), class("Pizza")));
        ontology.add_axiom(Axiom::subclass_of(
            class("Pizza"),
            ClassExpression::some_values_from(has_base, class("PizzaBase")),
        ));
        ontology
    }

    #[test]
    fn test_asserted_and_unrelated_axioms() {
        let ontology = pizza_ontology();
        let mut diagnostics = Diagnostics::new();
        for kind in ReasonerKind::ALL {
            let checker = EntailmentChecker::new(kind).with_precompute(true);
            assert!(checker.is_entailed(
                &ontology,
                &Axiom::subclass_of(class("Margherita"), class("Pizza")),
                &mut diagnostics
            ));
            assert!(!checker.is_entailed(
                &ontology,
                &Axiom::subclass_of(class("Pizza"), class("Margherita")),
                &mut diagnostics
            ));
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_asserted_inverse_existential_is_entailed() {
        let has_part = ObjectProperty::new(NamedNode::new_unchecked("http://example.org/hasPart"));
        let axiom = Axiom::subclass_of(
            class("A"),
            ClassExpression::some_values_from(
                ObjectPropertyExpression::inverse(has_part),
                class("B"),
            ),
        );
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(axiom.clone());
        let mut diagnostics = Diagnostics::new();
        for kind in ReasonerKind::ALL {
            let checker = EntailmentChecker::new(kind).with_precompute(true);
            assert!(checker.is_entailed(&ontology, &axiom, &mut diagnostics));
            assert!(!checker.is_entailed(
                &ontology.without_axiom(&ontology.axioms()[0]),
                &axiom,
                &mut diagnostics
            ));
        }
        assert_eq!(diagnostics.count(DiagnosticKind::ReasonerFailure), 1);
    }

    #[test]
    fn test_failure_is_not_entailed() {
        let ontology = pizza_ontology();
        let checker = EntailmentChecker::new(ReasonerKind::El)
            .with_config(ReasonerConfig::default().with_max_iterations(0));
        let axiom = Axiom::subclass_of(class("Margherita"), class("Pizza"));
        assert!(checker.check(&ontology, &axiom).is_err());

        let mut diagnostics = Diagnostics::new();
        assert!(!checker.is_entailed(&ontology, &axiom, &mut diagnostics));
        assert_eq!(diagnostics.count(DiagnosticKind::ReasonerFailure), 1);
    }

    #[test]
    fn test_unsupported_axiom_is_not_entailed() {
        let ontology = pizza_ontology();
        let checker = EntailmentChecker::new(ReasonerKind::El);
        let axiom = Axiom::SymmetricObjectProperty(ObjectProperty::new(
            NamedNode::new_unchecked("http://example.org/hasBase"),
        ));
        let mut diagnostics = Diagnostics::new();
        assert!(!checker.is_entailed(&ontology, &axiom, &mut diagnostics));
        assert_eq!(diagnostics.len(), 1);
    }
}
