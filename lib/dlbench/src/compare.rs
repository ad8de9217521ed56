//! Side by side runs of the available reasoners.

use crate::diagnostics::Diagnostics;
use crate::group::group_by_subject;
use crate::query::find_key_axiom;
use oxowl::{Axiom, Ontology, OwlError, ReasonerConfig, ReasonerKind};
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of one reasoner on one axiom.
#[derive(Debug)]
pub struct ReasonerRun {
    pub reasoner: ReasonerKind,
    pub outcome: Result<bool, OwlError>,
    pub elapsed: Duration,
}

/// Reasoner runs on the key axiom of one group.
#[derive(Debug)]
pub struct Comparison<'a> {
    pub subject: &'a str,
    pub axiom: &'a Axiom,
    pub runs: Vec<ReasonerRun>,
}

impl Comparison<'_> {
    /// Whether every reasoner that answered gave the same verdict.
    pub fn agree(&self) -> bool {
        let mut verdicts = self.runs.iter().filter_map(|run| run.outcome.as_ref().ok());
        match verdicts.next() {
            Some(first) => verdicts.all(|verdict| verdict == first),
            None => true,
        }
    }
}

/// Checks `axiom` with every reasoner kind, timing each check.
///
/// Each reasoner is created, classified and queried inside its own timing.
pub fn compare_reasoners(
    ontology: &Ontology,
    axiom: &Axiom,
    config: &ReasonerConfig,
) -> Vec<ReasonerRun> {
    ReasonerKind::ALL
        .into_iter()
        .map(|kind| {
            let start = Instant::now();
            let mut reasoner = kind.create(ontology, config.clone());
            let outcome = reasoner
                .precompute_inferences()
                .and_then(|()| reasoner.is_entailed(axiom));
            let elapsed = start.elapsed();
            debug!(reasoner = %kind, %axiom, ?outcome, ?elapsed, "reasoner run");
            ReasonerRun {
                reasoner: kind,
                outcome,
                elapsed,
            }
        })
        .collect()
}

/// Runs [`compare_reasoners`] on the key axiom of every group of `ontology`.
pub fn compare_key_axioms<'a>(
    ontology: &'a Ontology,
    config: &ReasonerConfig,
) -> Vec<Comparison<'a>> {
    let groups = group_by_subject(ontology.axioms(), &mut Diagnostics::new());
    groups
        .iter()
        .filter_map(|group| {
            let axiom = find_key_axiom(group)?;
            Some(Comparison {
                subject: group.name(),
                axiom,
                runs: compare_reasoners(ontology, axiom, config),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxowl::{ClassExpression, ObjectProperty, OwlClass};
    use oxrdf::NamedNode;

    fn class(name: &str) -> OwlClass {
        OwlClass::new(NamedNode::new_unchecked(format!("http://example.org/{name}")))
    }

    #[test]
    fn test_compare_on_inherited_existential() {
        let has_base = ObjectProperty::new(NamedNode::new_unchecked("http://example.org/hasBase"));
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::subclass_of(class("Margherita"), class("Pizza")));
        ontology.add_axiom(Axiom::subclass_of(
            class("Pizza"),
            ClassExpression::some_values_from(has_base.clone(), class("PizzaBase")),
        ));
        let inherited = Axiom::subclass_of(
            class("Margherita"),
            ClassExpression::some_values_from(has_base, class("PizzaBase")),
        );

        let runs = compare_reasoners(&ontology, &inherited, &ReasonerConfig::default());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].reasoner, ReasonerKind::El);
        assert!(matches!(runs[0].outcome, Ok(true)));
        assert_eq!(runs[1].reasoner, ReasonerKind::Structural);

        let comparisons = compare_key_axioms(&ontology, &ReasonerConfig::default());
        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].subject, "Pizza");
        assert!(comparisons[0].agree());
    }
}
