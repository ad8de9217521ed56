//! Integration tests for the ontology model and the RDF loader.

use oxowl::{
    Axiom, ClassExpression, Individual, ObjectProperty, ObjectPropertyExpression, Ontology,
    OwlClass, OwlError, ParseErrorKind, ParserConfig, parse_ontology, parse_ontology_from_reader,
};
use oxrdf::{Graph, NamedNode, TripleRef};
use oxrdfio::RdfFormat;

const PIZZA: &str = r#"@prefix : <http://example.org/pizza#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

<http://example.org/pizza> a owl:Ontology .
:hasBase a owl:ObjectProperty .
:hasTopping a owl:ObjectProperty .
:Pizza a owl:Class .
:Margherita a owl:Class ;
    rdfs:subClassOf :Pizza ,
        [ a owl:Restriction ; owl:onProperty :hasTopping ; owl:someValuesFrom :TomatoTopping ] .
:Pizza rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :hasBase ; owl:someValuesFrom :PizzaBase ] .
:myPizza a :Margherita ;
    :hasBase :myBase .
"#;

fn class(name: &str) -> OwlClass {
    OwlClass::new(NamedNode::new_unchecked(format!(
        "http://example.org/pizza#{name}"
    )))
}

fn load(document: &str) -> Result<Ontology, OwlError> {
    parse_ontology_from_reader(
        document.as_bytes(),
        RdfFormat::Turtle,
        None,
        ParserConfig::new(),
    )
}

#[test]
fn test_create_empty_ontology() {
    let ontology = Ontology::new(None);
    assert!(ontology.iri().is_none());
    assert_eq!(ontology.axiom_count(), 0);
}

#[test]
fn test_add_class_declaration() {
    let mut ontology = Ontology::new(None);
    let pizza = class("Pizza");
    ontology.add_axiom(Axiom::DeclareClass(pizza.clone()));
    assert!(ontology.contains_class(&pizza));
    assert_eq!(ontology.classes().count(), 1);
}

#[test]
fn test_class_assertion() {
    let mut ontology = Ontology::new(None);
    let my_pizza = Individual::Named(NamedNode::new_unchecked("http://example.org/pizza#p1"));
    ontology.add_axiom(Axiom::class_assertion(class("Margherita"), my_pizza.clone()));
    assert!(ontology.contains_individual(&my_pizza));
    assert_eq!(ontology.types_of(&my_pizza).count(), 1);
}

#[test]
fn test_ontology_merge() {
    let mut ontology1 = Ontology::new(None);
    let mut ontology2 = Ontology::new(None);
    ontology1.add_axiom(Axiom::DeclareClass(class("Pizza")));
    ontology2.add_axiom(Axiom::DeclareClass(class("PizzaBase")));
    ontology1.merge(ontology2);
    assert_eq!(ontology1.axiom_count(), 2);
}

#[test]
fn test_load_pizza() -> Result<(), OwlError> {
    let ontology = load(PIZZA)?;
    assert_eq!(
        ontology.iri().map(NamedNode::as_str),
        Some("http://example.org/pizza")
    );
    let rendered: Vec<String> = ontology.axioms().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "Declaration(ObjectProperty(<http://example.org/pizza#hasBase>))",
            "Declaration(ObjectProperty(<http://example.org/pizza#hasTopping>))",
            "Declaration(Class(<http://example.org/pizza#Pizza>))",
            "Declaration(Class(<http://example.org/pizza#Margherita>))",
            "SubClassOf(<http://example.org/pizza#Margherita> <http://example.org/pizza#Pizza>)",
            "SubClassOf(<http://example.org/pizza#Margherita> ObjectSomeValuesFrom(<http://example.org/pizza#hasTopping> <http://example.org/pizza#TomatoTopping>))",
            "SubClassOf(<http://example.org/pizza#Pizza> ObjectSomeValuesFrom(<http://example.org/pizza#hasBase> <http://example.org/pizza#PizzaBase>))",
            "ClassAssertion(<http://example.org/pizza#Margherita> <http://example.org/pizza#myPizza>)",
            "ObjectPropertyAssertion(<http://example.org/pizza#hasBase> <http://example.org/pizza#myPizza> <http://example.org/pizza#myBase>)",
        ]
    );
    Ok(())
}

#[test]
fn test_load_with_base_iri() -> Result<(), OwlError> {
    let ontology = parse_ontology_from_reader(
        "<A> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <B> .".as_bytes(),
        RdfFormat::Turtle,
        Some("http://example.org/pizza/"),
        ParserConfig::new(),
    )?;
    let resolved = |name: &str| {
        OwlClass::new(NamedNode::new_unchecked(format!(
            "http://example.org/pizza/{name}"
        )))
    };
    assert_eq!(
        ontology.axioms(),
        [Axiom::subclass_of(resolved("A"), resolved("B"))]
    );
    Ok(())
}

#[test]
fn test_invalid_document() {
    let result = load(":A rdfs:subClassOf");
    assert!(matches!(result, Err(OwlError::Rdf(_))));
}

#[test]
fn test_malformed_list() {
    let result = load(
        "@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
[] a owl:AllDisjointClasses ; owl:members [ rdf:first <http://example.org/pizza#A> ] .",
    );
    match result {
        Err(OwlError::Parse(e)) => assert_eq!(e.kind(), ParseErrorKind::MalformedList),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_inverse_restriction() -> Result<(), OwlError> {
    let ontology = load(
        "@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix : <http://example.org/pizza#> .
:PizzaBase rdfs:subClassOf [ owl:onProperty [ owl:inverseOf :hasBase ] ; owl:someValuesFrom :Pizza ] .",
    )?;
    let Axiom::SubClassOf { super_class, .. } = &ontology.axioms()[0] else {
        panic!("expected a subclass axiom");
    };
    let (property, filler) = super_class
        .as_some_values_from()
        .expect("existential restriction");
    assert_eq!(
        property,
        &ObjectPropertyExpression::inverse(ObjectProperty::new(NamedNode::new_unchecked(
            "http://example.org/pizza#hasBase"
        )))
    );
    assert_eq!(filler, &ClassExpression::class(class("Pizza")));
    Ok(())
}

#[test]
fn test_parse_from_graph() -> Result<(), OwlError> {
    let mut graph = Graph::new();
    let sub_class_of = NamedNode::new_unchecked("http://www.w3.org/2000/01/rdf-schema#subClassOf");
    let margherita = class("Margherita");
    let pizza = class("Pizza");
    graph.insert(TripleRef::new(
        margherita.iri(),
        &sub_class_of,
        pizza.iri(),
    ));
    let ontology = parse_ontology(&graph)?;
    assert!(ontology.contains_axiom(&Axiom::subclass_of(margherita, pizza)));
    Ok(())
}
