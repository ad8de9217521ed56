//! End to end runs of the generator and the profile extension.

use dlbench::{
    BenchmarkAssembler, DiagnosticKind, Diagnostics, EntailmentChecker, GeneratorConfig,
    RenderedAxiom, TestCase, extend, read_benchmark_from, write_benchmark_to,
};
use oxowl::{Axiom, Ontology, OwlClass, ParserConfig, ReasonerKind, parse_ontology_from_reader};
use oxrdfio::RdfFormat;

const PREFIXES: &str = "@prefix : <http://example.org/onto#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
";

fn load(body: &str) -> Ontology {
    parse_ontology_from_reader(
        format!("{PREFIXES}{body}").as_bytes(),
        RdfFormat::Turtle,
        None,
        ParserConfig::new(),
    )
    .unwrap()
}

fn generate(ontology: &Ontology) -> Vec<TestCase> {
    BenchmarkAssembler::new(GeneratorConfig::default())
        .assemble(ontology)
        .test_cases
}

fn class(name: &str) -> OwlClass {
    OwlClass::new_from_iri(format!("http://example.org/onto#{name}")).unwrap()
}

#[test]
fn test_car_engine_is_extended_to_elh() {
    let ontology = load(
        ":hasPart a owl:ObjectProperty .
:Car rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :hasPart ; owl:someValuesFrom :Engine ] .",
    );
    let cases = generate(&ontology);
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].dl_profile, "EL");
    assert_eq!(cases[0].axioms.len(), 1);
    assert_eq!(cases[0].axioms[0].symbolic, "Car ⊑ ∃hasPart.Engine");

    let extended = extend(&cases);
    assert_eq!(extended[0].dl_profile, "ELH");
    assert_eq!(
        extended[0].axioms,
        [
            cases[0].axioms[0].clone(),
            RenderedAxiom::new(
                "hasPart ⊑ superOfHasPart",
                "SubObjectPropertyOf(hasPart superOfHasPart)"
            )
        ]
    );
}

#[test]
fn test_group_without_existential_is_skipped() {
    let ontology = load(":A rdfs:subClassOf :B , :C .");
    let assembly = BenchmarkAssembler::default().assemble(&ontology);
    assert!(assembly.test_cases.is_empty());
    assert_eq!(
        assembly.diagnostics.count(DiagnosticKind::MissingKeyAxiom),
        1
    );
}

#[test]
fn test_query_names_subject_role_and_filler() {
    let ontology = load(
        ":hasPart a owl:ObjectProperty .
:A rdfs:subClassOf :C ,
    [ a owl:Restriction ; owl:onProperty :hasPart ; owl:someValuesFrom :B ] .",
    );
    let cases = generate(&ontology);
    assert_eq!(cases[0].query, "Does every A have hasPart.B?");
    assert_eq!(cases[0].axioms.len(), 2);
}

#[test]
fn test_query_with_inverse_role() {
    let ontology = load(
        ":hasPart a owl:ObjectProperty .
:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty [ owl:inverseOf :hasPart ] ; owl:someValuesFrom :B ] .",
    );
    let assembly = BenchmarkAssembler::default().assemble(&ontology);
    assert!(assembly.diagnostics.is_empty());
    let cases = assembly.test_cases;
    assert_eq!(cases[0].query, "Does every A have hasPart^-1.B?");
    assert_eq!(cases[0].expected, "Yes");
    assert_eq!(cases[0].axioms[0].symbolic, "A ⊑ ∃AnonymousProperty.B");
    assert!(
        cases[0].axioms[0]
            .functional
            .contains("ObjectInverseOf(<http://example.org/onto#hasPart>)")
    );
}

#[test]
fn test_ground_truth_from_reasoner() {
    let ontology = load(":Margherita rdfs:subClassOf :Pizza .");
    let mut diagnostics = Diagnostics::new();
    for kind in ReasonerKind::ALL {
        let checker = EntailmentChecker::new(kind);
        assert!(checker.is_entailed(
            &ontology,
            &Axiom::subclass_of(class("Margherita"), class("Pizza")),
            &mut diagnostics
        ));
        assert!(!checker.is_entailed(
            &ontology,
            &Axiom::subclass_of(class("Pizza"), class("Topping")),
            &mut diagnostics
        ));
    }
    assert!(diagnostics.is_empty());
}

#[test]
fn test_paraphrase_variant() {
    let ontology = load(
        ":hasPart a owl:ObjectProperty .
:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :hasPart ; owl:someValuesFrom :B ] .",
    );
    let cases = BenchmarkAssembler::new(GeneratorConfig::default().with_paraphrase_variants(true))
        .assemble(&ontology)
        .test_cases;
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[1].query, "Is it true that all A contain hasPart.B?");
    assert_eq!(cases[1].mr.as_deref(), Some("MR-1"));
}

#[test]
fn test_inherited_existential_needs_reasoning() {
    let ontology = load(
        ":hasBase a owl:ObjectProperty .
:Margherita rdfs:subClassOf :Pizza ,
    [ a owl:Restriction ; owl:onProperty :hasBase ; owl:someValuesFrom :ThinBase ] .
:ThinBase rdfs:subClassOf :PizzaBase .",
    );
    let config = GeneratorConfig::default().with_remove_key_variants(true);
    let el = BenchmarkAssembler::new(config.clone()).assemble(&ontology);
    let structural =
        BenchmarkAssembler::new(config.with_reasoner(ReasonerKind::Structural)).assemble(&ontology);

    assert_eq!(el.test_cases.len(), 2);
    assert_eq!(el.test_cases[0].expected, "Yes");
    assert_eq!(el.test_cases[1].expected, "No");
    assert_eq!(el.test_cases[1].axioms.len(), 1);
    assert_eq!(structural.test_cases, el.test_cases);
}

#[test]
fn test_generation_is_deterministic() {
    let body = ":r a owl:ObjectProperty .
:s a owl:ObjectProperty .
:B rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :s ; owl:someValuesFrom :C ] .
:A rdfs:subClassOf :B , [ a owl:Restriction ; owl:onProperty :r ; owl:someValuesFrom :D ] .
:E rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :r ; owl:someValuesFrom :A ] .";
    let first = generate(&load(body));
    let second = generate(&load(body));
    assert_eq!(first, second);
    let ids: Vec<_> = first.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["test_1", "test_2", "test_3"]);
    let queries: Vec<_> = first.iter().map(|c| c.query.as_str()).collect();
    assert_eq!(
        queries,
        [
            "Does every B have s.C?",
            "Does every A have r.D?",
            "Does every E have r.A?"
        ]
    );
}

#[test]
fn test_extension_properties() {
    let ontology = load(
        ":r a owl:ObjectProperty .
:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :r ; owl:someValuesFrom :B ] , :C .",
    );
    let mut cases = generate(&ontology);
    cases.push(TestCase {
        id: "test_2".into(),
        dl_profile: "ELH".into(),
        axioms: vec![RenderedAxiom::new("X ⊑ Y", "SubClassOf(<X> <Y>)")],
        query: "Does every X have r.Y?".into(),
        expected: "No".into(),
        mr: None,
    });

    let once = extend(&cases);
    assert_eq!(extend(&once), once);
    for (before, after) in cases.iter().zip(&once) {
        assert_eq!(after.axioms[..before.axioms.len()], before.axioms[..]);
        assert_eq!(after.id, before.id);
        assert_eq!(after.query, before.query);
        assert_eq!(after.expected, before.expected);
    }
    assert_eq!(once[0].dl_profile, "ELH");
    assert_eq!(once[1].dl_profile, "ELH");
    assert_eq!(once[1].axioms.len(), 1);
}

#[test]
fn test_benchmark_file_round_trip_after_extension() {
    let ontology = load(
        ":r a owl:ObjectProperty .
:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :r ; owl:someValuesFrom :B ] .",
    );
    let mut buffer = Vec::new();
    write_benchmark_to(&mut buffer, &generate(&ontology)).unwrap();
    let cases = read_benchmark_from(buffer.as_slice()).unwrap();
    let extended = extend(&cases);
    assert_eq!(extended[0].axioms[1].symbolic, "r ⊑ superOfR");
}
