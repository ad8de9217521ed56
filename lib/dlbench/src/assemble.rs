//! Benchmark construction from an ontology.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::entailment::EntailmentChecker;
use crate::group::{AxiomGroup, group_by_subject};
use crate::model::{PROFILE_EL, RenderedAxiom, TestCase, answer};
use crate::query::{find_key_axiom, generate_query, paraphrase_query, without_axiom};
use crate::render::render;
use oxowl::{Axiom, Ontology, ReasonerConfig, ReasonerKind};
use tracing::{debug, info, warn};

/// Variant tag of paraphrased test cases.
pub const MR_PARAPHRASE: &str = "MR-1";
/// Variant tag of test cases whose key axiom was removed.
pub const MR_REMOVE_KEY_AXIOM: &str = "MR-9";

/// Benchmark generation options.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub reasoner: ReasonerKind,
    pub reasoner_config: ReasonerConfig,
    /// Classify the ontology before each entailment check.
    pub precompute: bool,
    /// Emit a paraphrased copy of every test case.
    pub paraphrase_variants: bool,
    /// Emit a copy of every test case without its key axiom.
    pub remove_key_variants: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            reasoner: ReasonerKind::default(),
            reasoner_config: ReasonerConfig::default(),
            precompute: true,
            paraphrase_variants: false,
            remove_key_variants: false,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_reasoner(mut self, reasoner: ReasonerKind) -> Self {
        self.reasoner = reasoner;
        self
    }

    #[must_use]
    pub fn with_reasoner_config(mut self, reasoner_config: ReasonerConfig) -> Self {
        self.reasoner_config = reasoner_config;
        self
    }

    #[must_use]
    pub fn with_precompute(mut self, precompute: bool) -> Self {
        self.precompute = precompute;
        self
    }

    #[must_use]
    pub fn with_paraphrase_variants(mut self, paraphrase_variants: bool) -> Self {
        self.paraphrase_variants = paraphrase_variants;
        self
    }

    #[must_use]
    pub fn with_remove_key_variants(mut self, remove_key_variants: bool) -> Self {
        self.remove_key_variants = remove_key_variants;
        self
    }
}

/// Generated test cases and what was skipped on the way.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub test_cases: Vec<TestCase>,
    pub diagnostics: Diagnostics,
}

/// Turns every axiom group with an existential axiom into a test case.
#[derive(Debug, Clone)]
pub struct BenchmarkAssembler {
    config: GeneratorConfig,
    checker: EntailmentChecker,
}

impl BenchmarkAssembler {
    pub fn new(config: GeneratorConfig) -> Self {
        let checker = EntailmentChecker::new(config.reasoner)
            .with_config(config.reasoner_config.clone())
            .with_precompute(config.precompute);
        Self { config, checker }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the benchmark of `ontology`.
    ///
    /// Groups are visited in the order their subject first appears, and ids
    /// are `test_1`, `test_2`... in output order.
    pub fn assemble(&self, ontology: &Ontology) -> Assembly {
        let mut assembly = Assembly::default();
        let groups = group_by_subject(ontology.axioms(), &mut assembly.diagnostics);
        let mut next_id = 1;
        for group in &groups {
            let Some(key_axiom) = find_key_axiom(group) else {
                warn!(subject = group.name(), "no existential axiom, skipping group");
                assembly
                    .diagnostics
                    .push(DiagnosticKind::MissingKeyAxiom, group.name());
                continue;
            };
            debug!(subject = group.name(), axioms = group.len(), "building test case");
            let query = generate_query(group);
            let entailed = self
                .checker
                .is_entailed(ontology, key_axiom, &mut assembly.diagnostics);
            let base = TestCase {
                id: take_id(&mut next_id),
                dl_profile: PROFILE_EL.to_owned(),
                axioms: render_all(group.axioms()),
                query,
                expected: answer(entailed).to_owned(),
                mr: None,
            };

            let paraphrased = self.config.paraphrase_variants.then(|| TestCase {
                id: take_id(&mut next_id),
                query: paraphrase_query(&base.query),
                mr: Some(MR_PARAPHRASE.to_owned()),
                ..base.clone()
            });
            let without_key = self.config.remove_key_variants.then(|| {
                self.remove_key_variant(
                    ontology,
                    group,
                    key_axiom,
                    &base,
                    &mut next_id,
                    &mut assembly.diagnostics,
                )
            });

            assembly.test_cases.push(base);
            assembly.test_cases.extend(paraphrased);
            assembly.test_cases.extend(without_key);
        }
        info!(
            test_cases = assembly.test_cases.len(),
            groups = groups.len(),
            diagnostics = assembly.diagnostics.len(),
            "benchmark assembled"
        );
        assembly
    }

    fn remove_key_variant(
        &self,
        ontology: &Ontology,
        group: &AxiomGroup<'_>,
        key_axiom: &Axiom,
        base: &TestCase,
        next_id: &mut usize,
        diagnostics: &mut Diagnostics,
    ) -> TestCase {
        let reduced = ontology.without_axiom(key_axiom);
        let entailed = self.checker.is_entailed(&reduced, key_axiom, diagnostics);
        TestCase {
            id: take_id(next_id),
            axioms: render_all(&without_axiom(group, key_axiom)),
            expected: answer(entailed).to_owned(),
            mr: Some(MR_REMOVE_KEY_AXIOM.to_owned()),
            ..base.clone()
        }
    }
}

impl Default for BenchmarkAssembler {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

fn take_id(next_id: &mut usize) -> String {
    let id = TestCase::id_for(*next_id);
    *next_id += 1;
    id
}

fn render_all(axioms: &[&Axiom]) -> Vec<RenderedAxiom> {
    axioms.iter().map(|axiom| render(axiom)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ANSWER_NO, ANSWER_YES};
    use oxowl::{ClassExpression, ObjectProperty, OwlClass};
    use oxrdf::NamedNode;

    fn class(name: &str) -> OwlClass {
        OwlClass::new(NamedNode::new_unchecked(format!("http://example.org/{name}")))
    }

    fn some(property: &str, filler: &str) -> ClassExpression {
        ClassExpression::some_values_from(
            ObjectProperty::new(NamedNode::new_unchecked(format!(
                "http://example.org/{property}"
            ))),
            class(filler),
        )
    }

    fn ontology(axioms: Vec<Axiom>) -> Ontology {
        let mut ontology = Ontology::new(None);
        for axiom in axioms {
            ontology.add_axiom(axiom);
        }
        ontology
    }

    #[test]
    fn test_one_case_per_group_with_key_axiom() {
        let ontology = ontology(vec![
            Axiom::subclass_of(class("Car"), some("hasPart", "Engine")),
            Axiom::subclass_of(class("Engine"), class("Machine")),
            Axiom::subclass_of(class("Car"), class("Vehicle")),
        ]);
        let assembly = BenchmarkAssembler::default().assemble(&ontology);

        assert_eq!(assembly.test_cases.len(), 1);
        let case = &assembly.test_cases[0];
        assert_eq!(case.id, "test_1");
        assert_eq!(case.dl_profile, "EL");
        assert_eq!(case.query, "Does every Car have hasPart.Engine?");
        assert_eq!(case.expected, ANSWER_YES);
        let symbolic: Vec<_> = case.axioms.iter().map(|a| a.symbolic.as_str()).collect();
        assert_eq!(symbolic, ["Car ⊑ ∃hasPart.Engine", "Car ⊑ Vehicle"]);
        assert_eq!(assembly.diagnostics.count(DiagnosticKind::MissingKeyAxiom), 1);
    }

    #[test]
    fn test_variants_take_following_ids() {
        let ontology = ontology(vec![
            Axiom::subclass_of(class("A"), some("hasPart", "B")),
            Axiom::subclass_of(class("A"), class("C")),
            Axiom::subclass_of(class("D"), some("hasPart", "E")),
        ]);
        let config = GeneratorConfig::default()
            .with_paraphrase_variants(true)
            .with_remove_key_variants(true);
        let cases = BenchmarkAssembler::new(config).assemble(&ontology).test_cases;

        let ids: Vec<_> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            ["test_1", "test_2", "test_3", "test_4", "test_5", "test_6"]
        );
        let tags: Vec<_> = cases.iter().map(|c| c.mr.as_deref()).collect();
        assert_eq!(
            tags,
            [None, Some("MR-1"), Some("MR-9"), None, Some("MR-1"), Some("MR-9")]
        );

        assert_eq!(cases[1].query, "Is it true that all A contain hasPart.B?");
        assert_eq!(cases[1].axioms, cases[0].axioms);
        assert_eq!(cases[1].expected, ANSWER_YES);

        assert_eq!(cases[2].query, cases[0].query);
        assert_eq!(cases[2].axioms.len(), 1);
        assert_eq!(cases[2].axioms[0].symbolic, "A ⊑ C");
        assert_eq!(cases[2].expected, ANSWER_NO);
    }

    #[test]
    fn test_empty_ontology() {
        let assembly = BenchmarkAssembler::default().assemble(&Ontology::new(None));
        assert!(assembly.test_cases.is_empty());
        assert!(assembly.diagnostics.is_empty());
    }
}
