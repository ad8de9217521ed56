//! Description Logic entailment benchmarks for language models.
//!
//! The pipeline groups the subsumption axioms of an ontology by subject, asks
//! one yes/no question per group about an existential axiom, records the
//! answer given by a reasoner and renders the axioms in DL notation and in OWL
//! functional syntax. A second stage extends the EL benchmark to ELH by adding
//! role hierarchy axioms.
//!
//! # Example
//! ```
//! use dlbench::{BenchmarkAssembler, GeneratorConfig, extend};
//! use oxowl::{Axiom, ClassExpression, ObjectProperty, Ontology, OwlClass};
//!
//! let car = OwlClass::new_from_iri("http://example.org/Car")?;
//! let engine = OwlClass::new_from_iri("http://example.org/Engine")?;
//! let has_part = ObjectProperty::new_from_iri("http://example.org/hasPart")?;
//! let mut ontology = Ontology::new(None);
//! ontology.add_axiom(Axiom::subclass_of(
//!     car,
//!     ClassExpression::some_values_from(has_part, engine),
//! ));
//!
//! let assembly = BenchmarkAssembler::new(GeneratorConfig::default()).assemble(&ontology);
//! let case = &assembly.test_cases[0];
//! assert_eq!(case.query, "Does every Car have hasPart.Engine?");
//! assert_eq!(case.expected, "Yes");
//!
//! let extended = extend(&assembly.test_cases);
//! assert_eq!(extended[0].dl_profile, "ELH");
//! assert_eq!(extended[0].axioms[1].symbolic, "hasPart ⊑ superOfHasPart");
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod assemble;
mod compare;
mod diagnostics;
mod entailment;
mod error;
mod evaluate;
mod extend;
mod group;
mod io;
mod model;
mod prompt;
mod query;
mod render;

pub use assemble::{
    Assembly, BenchmarkAssembler, GeneratorConfig, MR_PARAPHRASE, MR_REMOVE_KEY_AXIOM,
};
pub use compare::{Comparison, ReasonerRun, compare_key_axioms, compare_reasoners};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use entailment::EntailmentChecker;
pub use error::BenchmarkError;
pub use evaluate::{CaseResult, EvaluationReport, score};
pub use extend::{capitalize, extend, extend_test_case, extract_role};
pub use group::{AxiomGroup, AxiomGroups, group_by_subject};
pub use io::{
    load_ontology, read_benchmark, read_benchmark_from, write_benchmark, write_benchmark_to,
};
pub use model::{ANSWER_NO, ANSWER_YES, PROFILE_EL, PROFILE_ELH, RenderedAxiom, TestCase};
pub use prompt::{build_prompt, profile_description};
pub use query::{
    NO_QUERY, find_key_axiom, generate_query, paraphrase_query, role_label, without_axiom,
};
pub use render::{class_name, individual_name, property_name, render, render_class_expression};
