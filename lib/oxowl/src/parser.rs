//! OWL 2 parser from RDF graphs.
//!
//! This module builds an [`Ontology`] from the RDF mapping of OWL 2
//! (Turtle, RDF/XML, N-Triples, ...). Axioms are produced in the order of the
//! triples they come from, so documents read with
//! [`parse_ontology_from_reader`] keep their source order.

use crate::axiom::Axiom;
use crate::entity::{Individual, ObjectProperty, OwlClass};
use crate::error::{OwlError, OwlParseError, ParseErrorKind};
use crate::expression::{ClassExpression, ObjectPropertyExpression};
use crate::ontology::Ontology;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{
    BlankNodeRef, Graph, NamedNode, NamedNodeRef, NamedOrBlankNodeRef, TermRef, Triple, TripleRef,
};
use oxrdfio::{RdfFormat, RdfParser};
use rustc_hash::FxHashSet;
use std::io::Read;

/// OWL 2 namespace.
pub const OWL_NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

mod vocab {
    use oxrdf::NamedNodeRef;

    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    pub const ANNOTATION_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#AnnotationProperty");
    pub const NAMED_INDIVIDUAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#NamedIndividual");
    pub const RESTRICTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Restriction");
    pub const ALL_DISJOINT_CLASSES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#AllDisjointClasses");
    pub const MEMBERS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#members");

    pub const EQUIVALENT_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentClass");
    pub const DISJOINT_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#disjointWith");
    pub const EQUIVALENT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentProperty");
    pub const INVERSE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#inverseOf");
    pub const SAME_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#sameAs");
    pub const DIFFERENT_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#differentFrom");

    pub const ON_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onProperty");
    pub const SOME_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#someValuesFrom");
    pub const ALL_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#allValuesFrom");
    pub const HAS_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#hasValue");
    pub const HAS_SELF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#hasSelf");
    pub const MIN_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#minCardinality");
    pub const MAX_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#maxCardinality");
    pub const CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#cardinality");
    pub const MIN_QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#minQualifiedCardinality");
    pub const MAX_QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#maxQualifiedCardinality");
    pub const QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#qualifiedCardinality");
    pub const ON_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onClass");

    pub const INTERSECTION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#intersectionOf");
    pub const UNION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#unionOf");
    pub const COMPLEMENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#complementOf");
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#oneOf");

    pub const FUNCTIONAL_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#FunctionalProperty");
    pub const INVERSE_FUNCTIONAL_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#InverseFunctionalProperty");
    pub const TRANSITIVE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#TransitiveProperty");
    pub const SYMMETRIC_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#SymmetricProperty");
    pub const ASYMMETRIC_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#AsymmetricProperty");
    pub const REFLEXIVE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ReflexiveProperty");
    pub const IRREFLEXIVE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#IrreflexiveProperty");
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum depth for parsing nested expressions.
    pub max_depth: usize,
    /// Maximum length for RDF lists.
    pub max_list_length: usize,
    /// Whether to skip axioms that cannot be mapped instead of failing.
    pub lenient: bool,
}

impl ParserConfig {
    /// Creates a new parser configuration with default values.
    pub fn new() -> Self {
        Self {
            max_depth: 100,
            max_list_length: 10000,
            lenient: false,
        }
    }

    /// Sets lenient mode.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an OWL ontology from an RDF graph.
pub struct OntologyParser<'a> {
    graph: &'a Graph,
    config: ParserConfig,
    object_properties: FxHashSet<NamedNode>,
    other_properties: FxHashSet<NamedNode>,
}

impl<'a> OntologyParser<'a> {
    /// Creates a new parser for the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_config(graph, ParserConfig::new())
    }

    /// Creates a new parser with custom configuration.
    pub fn with_config(graph: &'a Graph, config: ParserConfig) -> Self {
        Self {
            graph,
            config,
            object_properties: FxHashSet::default(),
            other_properties: FxHashSet::default(),
        }
    }

    /// Parses the ontology from the graph, in graph iteration order.
    pub fn parse(&mut self) -> Result<Ontology, OwlParseError> {
        let triples: Vec<Triple> = self.graph.iter().map(TripleRef::into_owned).collect();
        self.parse_in_order(&triples)
    }

    /// Parses the ontology, emitting axioms in the order of `triples`.
    ///
    /// `triples` must be the content of the parser graph.
    fn parse_in_order(&mut self, triples: &[Triple]) -> Result<Ontology, OwlParseError> {
        self.collect_property_kinds();
        let mut ontology = Ontology::new(None);
        for triple in triples {
            let axioms = self.parse_triple(triple.as_ref(), &mut ontology);
            match axioms {
                Ok(axioms) => {
                    for axiom in axioms {
                        ontology.add_axiom(axiom);
                    }
                }
                Err(_) if self.config.lenient => ontology.record_skipped_triple(),
                Err(e) => return Err(e),
            }
        }
        Ok(ontology)
    }

    /// Splits properties into object properties and data or annotation ones.
    fn collect_property_kinds(&mut self) {
        for triple in self.graph.triples_for_predicate(rdf::TYPE) {
            let (NamedOrBlankNodeRef::NamedNode(subject), TermRef::NamedNode(kind)) =
                (triple.subject, triple.object)
            else {
                continue;
            };
            if kind == vocab::OBJECT_PROPERTY
                || kind == vocab::TRANSITIVE_PROPERTY
                || kind == vocab::SYMMETRIC_PROPERTY
                || kind == vocab::ASYMMETRIC_PROPERTY
                || kind == vocab::REFLEXIVE_PROPERTY
                || kind == vocab::IRREFLEXIVE_PROPERTY
                || kind == vocab::INVERSE_FUNCTIONAL_PROPERTY
            {
                self.object_properties.insert(subject.into_owned());
            } else if kind == vocab::DATATYPE_PROPERTY || kind == vocab::ANNOTATION_PROPERTY {
                self.other_properties.insert(subject.into_owned());
            }
        }
        for triple in self.graph.triples_for_predicate(vocab::INVERSE_OF) {
            if let NamedOrBlankNodeRef::NamedNode(subject) = triple.subject {
                self.object_properties.insert(subject.into_owned());
            }
            if let TermRef::NamedNode(object) = triple.object {
                self.object_properties.insert(object.into_owned());
            }
        }
    }

    fn is_object_property(&self, property: NamedNodeRef<'_>) -> bool {
        self.object_properties.contains(&property.into_owned())
    }

    fn is_other_property(&self, property: NamedNodeRef<'_>) -> bool {
        self.other_properties.contains(&property.into_owned())
    }

    /// Maps a single triple to the axioms it stands for.
    fn parse_triple(
        &self,
        triple: TripleRef<'_>,
        ontology: &mut Ontology,
    ) -> Result<Vec<Axiom>, OwlParseError> {
        let subject = triple.subject;
        let predicate = triple.predicate;
        let object = triple.object;

        if predicate == rdf::TYPE {
            return self.parse_type(subject, object, ontology);
        }
        if predicate == rdfs::SUB_CLASS_OF {
            return Ok(vec![Axiom::SubClassOf {
                sub_class: self.parse_class_expression(subject.into(), 0)?,
                super_class: self.parse_class_expression(object, 0)?,
            }]);
        }
        if predicate == vocab::EQUIVALENT_CLASS {
            return Ok(vec![Axiom::EquivalentClasses(vec![
                self.parse_class_expression(subject.into(), 0)?,
                self.parse_class_expression(object, 0)?,
            ])]);
        }
        if predicate == vocab::DISJOINT_WITH {
            return Ok(vec![Axiom::DisjointClasses(vec![
                self.parse_class_expression(subject.into(), 0)?,
                self.parse_class_expression(object, 0)?,
            ])]);
        }
        if predicate == rdfs::SUB_PROPERTY_OF {
            let (NamedOrBlankNodeRef::NamedNode(sub), TermRef::NamedNode(sup)) = (subject, object)
            else {
                return Ok(Vec::new());
            };
            if self.is_other_property(sub) || self.is_other_property(sup) {
                return Ok(Vec::new());
            }
            return Ok(vec![Axiom::sub_object_property_of(
                ObjectProperty::new(sub.into_owned()),
                ObjectProperty::new(sup.into_owned()),
            )]);
        }
        if predicate == vocab::EQUIVALENT_PROPERTY {
            let (NamedOrBlankNodeRef::NamedNode(p1), TermRef::NamedNode(p2)) = (subject, object)
            else {
                return Ok(Vec::new());
            };
            if self.is_other_property(p1) || self.is_other_property(p2) {
                return Ok(Vec::new());
            }
            return Ok(vec![Axiom::EquivalentObjectProperties(vec![
                ObjectProperty::new(p1.into_owned()),
                ObjectProperty::new(p2.into_owned()),
            ])]);
        }
        if predicate == vocab::INVERSE_OF {
            // Blank subjects are inverse property expressions used by restrictions
            if let (NamedOrBlankNodeRef::NamedNode(p1), TermRef::NamedNode(p2)) = (subject, object) {
                return Ok(vec![Axiom::InverseObjectProperties(
                    ObjectProperty::new(p1.into_owned()),
                    ObjectProperty::new(p2.into_owned()),
                )]);
            }
            return Ok(Vec::new());
        }
        if predicate == rdfs::DOMAIN || predicate == rdfs::RANGE {
            let NamedOrBlankNodeRef::NamedNode(property) = subject else {
                return Ok(Vec::new());
            };
            if self.is_other_property(property) {
                return Ok(Vec::new());
            }
            let property = ObjectProperty::new(property.into_owned());
            let class = self.parse_class_expression(object, 0)?;
            return Ok(vec![if predicate == rdfs::DOMAIN {
                Axiom::ObjectPropertyDomain {
                    property,
                    domain: class,
                }
            } else {
                Axiom::ObjectPropertyRange {
                    property,
                    range: class,
                }
            }]);
        }
        if predicate == vocab::SAME_AS {
            return Ok(vec![Axiom::SameIndividual(vec![
                subject_to_individual(subject),
                term_to_individual(object)?,
            ])]);
        }
        if predicate == vocab::DIFFERENT_FROM {
            return Ok(vec![Axiom::DifferentIndividuals(vec![
                subject_to_individual(subject),
                term_to_individual(object)?,
            ])]);
        }
        if self.is_object_property(predicate) {
            return Ok(vec![Axiom::object_property_assertion(
                ObjectProperty::new(predicate.into_owned()),
                subject_to_individual(subject),
                term_to_individual(object)?,
            )]);
        }
        Ok(Vec::new())
    }

    /// Maps an `rdf:type` triple: declarations, property characteristics and class assertions.
    fn parse_type(
        &self,
        subject: NamedOrBlankNodeRef<'_>,
        object: TermRef<'_>,
        ontology: &mut Ontology,
    ) -> Result<Vec<Axiom>, OwlParseError> {
        if let TermRef::NamedNode(kind) = object {
            if kind == vocab::ALL_DISJOINT_CLASSES {
                let NamedOrBlankNodeRef::BlankNode(node) = subject else {
                    return Ok(Vec::new());
                };
                let members = self
                    .graph
                    .object_for_subject_predicate(node, vocab::MEMBERS)
                    .ok_or_else(|| OwlParseError::missing_property("owl:members"))?;
                return Ok(vec![Axiom::DisjointClasses(
                    self.parse_class_list(members, 0)?,
                )]);
            }
            if let NamedOrBlankNodeRef::NamedNode(node) = subject {
                if kind == vocab::ONTOLOGY {
                    ontology.set_iri(Some(node.into_owned()));
                    return Ok(Vec::new());
                }
                if let Some(axiom) = declaration_or_characteristic(node, kind) {
                    if self.is_other_property(node) {
                        return Ok(Vec::new());
                    }
                    return Ok(vec![axiom]);
                }
            }
            let iri = kind.as_str();
            if iri.starts_with(OWL_NAMESPACE)
                || iri.starts_with(RDF_NAMESPACE)
                || iri.starts_with(RDFS_NAMESPACE)
            {
                return Ok(Vec::new());
            }
        }
        if let NamedOrBlankNodeRef::BlankNode(node) = subject {
            if self.is_structural_node(node) {
                return Ok(Vec::new());
            }
        }
        Ok(vec![Axiom::ClassAssertion {
            class: self.parse_class_expression(object, 0)?,
            individual: subject_to_individual(subject),
        }])
    }

    /// Blank nodes that encode a class expression or a list rather than an individual.
    fn is_structural_node(&self, node: BlankNodeRef<'_>) -> bool {
        self.graph.triples_for_subject(node).any(|t| {
            t.predicate == vocab::ON_PROPERTY
                || t.predicate == vocab::INTERSECTION_OF
                || t.predicate == vocab::UNION_OF
                || t.predicate == vocab::COMPLEMENT_OF
                || t.predicate == vocab::ONE_OF
                || t.predicate == rdf::FIRST
        })
    }

    /// Parses a class expression from a term.
    fn parse_class_expression(
        &self,
        term: TermRef<'_>,
        depth: usize,
    ) -> Result<ClassExpression, OwlParseError> {
        if depth > self.config.max_depth {
            return Err(OwlParseError::invalid_value(
                "Class expression nesting is too deep",
            ));
        }
        match term {
            TermRef::NamedNode(n) => Ok(ClassExpression::Class(OwlClass::new(n.into_owned()))),
            TermRef::BlankNode(b) => self.parse_anonymous_class(b, depth + 1),
            _ => Err(OwlParseError::invalid_value(format!(
                "{term} cannot be a class expression"
            ))),
        }
    }

    /// Parses an anonymous class expression (restriction or boolean).
    fn parse_anonymous_class(
        &self,
        bnode: BlankNodeRef<'_>,
        depth: usize,
    ) -> Result<ClassExpression, OwlParseError> {
        let mut is_restriction = false;
        for triple in self.graph.triples_for_subject(bnode) {
            if (triple.predicate == rdf::TYPE
                && triple.object == TermRef::NamedNode(vocab::RESTRICTION))
                || triple.predicate == vocab::ON_PROPERTY
            {
                is_restriction = true;
            }
        }
        if is_restriction {
            return self.parse_restriction(bnode, depth);
        }

        for triple in self.graph.triples_for_subject(bnode) {
            if triple.predicate == vocab::INTERSECTION_OF {
                let classes = self.parse_class_list(triple.object, depth)?;
                return Ok(ClassExpression::ObjectIntersectionOf(classes));
            } else if triple.predicate == vocab::UNION_OF {
                let classes = self.parse_class_list(triple.object, depth)?;
                return Ok(ClassExpression::ObjectUnionOf(classes));
            } else if triple.predicate == vocab::COMPLEMENT_OF {
                let class = self.parse_class_expression(triple.object, depth)?;
                return Ok(ClassExpression::ObjectComplementOf(Box::new(class)));
            } else if triple.predicate == vocab::ONE_OF {
                let individuals = self
                    .list_items(triple.object)?
                    .into_iter()
                    .map(term_to_individual)
                    .collect::<Result<_, _>>()?;
                return Ok(ClassExpression::ObjectOneOf(individuals));
            }
        }

        Err(OwlParseError::new(
            ParseErrorKind::UnknownConstruct,
            format!("Cannot parse anonymous class: {bnode}"),
        ))
    }

    /// Parses the `owl:onProperty` value of a restriction.
    fn parse_property_expression(
        &self,
        term: TermRef<'_>,
    ) -> Result<ObjectPropertyExpression, OwlParseError> {
        match term {
            TermRef::NamedNode(p) if self.is_other_property(p) => Err(OwlParseError::new(
                ParseErrorKind::UnknownConstruct,
                format!("Restriction on the data or annotation property {p}"),
            )),
            TermRef::NamedNode(p) => Ok(ObjectProperty::new(p.into_owned()).into()),
            TermRef::BlankNode(b) => {
                match self.graph.object_for_subject_predicate(b, vocab::INVERSE_OF) {
                    Some(TermRef::NamedNode(p)) => Ok(ObjectPropertyExpression::inverse(
                        ObjectProperty::new(p.into_owned()),
                    )),
                    _ => Err(OwlParseError::invalid_value(format!(
                        "Cannot parse property expression: {b}"
                    ))),
                }
            }
            _ => Err(OwlParseError::invalid_value(format!(
                "{term} cannot be a property expression"
            ))),
        }
    }

    /// Parses an OWL restriction.
    fn parse_restriction(
        &self,
        bnode: BlankNodeRef<'_>,
        depth: usize,
    ) -> Result<ClassExpression, OwlParseError> {
        let mut property = None;
        let mut some_values = None;
        let mut all_values = None;
        let mut has_value = None;
        let mut has_self = false;
        let mut min_card = None;
        let mut max_card = None;
        let mut exact_card = None;
        let mut on_class = None;

        for triple in self.graph.triples_for_subject(bnode) {
            let predicate = triple.predicate;
            if predicate == vocab::ON_PROPERTY {
                property = Some(self.parse_property_expression(triple.object)?);
            } else if predicate == vocab::SOME_VALUES_FROM {
                some_values = Some(self.parse_class_expression(triple.object, depth)?);
            } else if predicate == vocab::ALL_VALUES_FROM {
                all_values = Some(self.parse_class_expression(triple.object, depth)?);
            } else if predicate == vocab::HAS_VALUE {
                has_value = Some(term_to_individual(triple.object)?);
            } else if predicate == vocab::HAS_SELF {
                has_self = true;
            } else if predicate == vocab::MIN_CARDINALITY
                || predicate == vocab::MIN_QUALIFIED_CARDINALITY
            {
                min_card = Some(parse_cardinality(triple.object)?);
            } else if predicate == vocab::MAX_CARDINALITY
                || predicate == vocab::MAX_QUALIFIED_CARDINALITY
            {
                max_card = Some(parse_cardinality(triple.object)?);
            } else if predicate == vocab::CARDINALITY || predicate == vocab::QUALIFIED_CARDINALITY
            {
                exact_card = Some(parse_cardinality(triple.object)?);
            } else if predicate == vocab::ON_CLASS {
                on_class = Some(Box::new(self.parse_class_expression(triple.object, depth)?));
            }
        }

        let property = property.ok_or_else(|| OwlParseError::missing_property("owl:onProperty"))?;

        if let Some(filler) = some_values {
            return Ok(ClassExpression::ObjectSomeValuesFrom {
                property,
                filler: Box::new(filler),
            });
        }
        if let Some(filler) = all_values {
            return Ok(ClassExpression::ObjectAllValuesFrom {
                property,
                filler: Box::new(filler),
            });
        }
        if let Some(individual) = has_value {
            return Ok(ClassExpression::ObjectHasValue {
                property,
                individual,
            });
        }
        if has_self {
            return Ok(ClassExpression::ObjectHasSelf(property));
        }
        if let Some(cardinality) = min_card {
            return Ok(ClassExpression::ObjectMinCardinality {
                cardinality,
                property,
                filler: on_class,
            });
        }
        if let Some(cardinality) = max_card {
            return Ok(ClassExpression::ObjectMaxCardinality {
                cardinality,
                property,
                filler: on_class,
            });
        }
        if let Some(cardinality) = exact_card {
            return Ok(ClassExpression::ObjectExactCardinality {
                cardinality,
                property,
                filler: on_class,
            });
        }

        Err(OwlParseError::new(
            ParseErrorKind::UnknownConstruct,
            format!("Unknown restriction type: {bnode}"),
        ))
    }

    /// Parses an RDF list of class expressions.
    fn parse_class_list(
        &self,
        head: TermRef<'_>,
        depth: usize,
    ) -> Result<Vec<ClassExpression>, OwlParseError> {
        self.list_items(head)?
            .into_iter()
            .map(|item| self.parse_class_expression(item, depth))
            .collect()
    }

    /// Returns the elements of an RDF list.
    fn list_items<'t>(&self, head: TermRef<'t>) -> Result<Vec<TermRef<'t>>, OwlParseError>
    where
        'a: 't,
    {
        let mut items = Vec::new();
        let mut current = head;
        while !matches!(current, TermRef::NamedNode(n) if n == rdf::NIL) {
            if items.len() >= self.config.max_list_length {
                return Err(OwlParseError::malformed_list("List too long"));
            }
            let node: NamedOrBlankNodeRef<'t> = match current {
                TermRef::NamedNode(n) => n.into(),
                TermRef::BlankNode(b) => b.into(),
                _ => return Err(OwlParseError::malformed_list("List node is a literal")),
            };
            let graph: &'t Graph = self.graph;
            items.push(
                graph
                    .object_for_subject_predicate(node, rdf::FIRST)
                    .ok_or_else(|| OwlParseError::malformed_list("Missing rdf:first"))?,
            );
            current = graph
                .object_for_subject_predicate(node, rdf::REST)
                .ok_or_else(|| OwlParseError::malformed_list("Missing rdf:rest"))?;
        }
        Ok(items)
    }
}

fn declaration_or_characteristic(node: NamedNodeRef<'_>, kind: NamedNodeRef<'_>) -> Option<Axiom> {
    let property = || ObjectProperty::new(node.into_owned());
    Some(if kind == vocab::CLASS {
        Axiom::DeclareClass(OwlClass::new(node.into_owned()))
    } else if kind == vocab::OBJECT_PROPERTY {
        Axiom::DeclareObjectProperty(property())
    } else if kind == vocab::NAMED_INDIVIDUAL {
        Axiom::DeclareNamedIndividual(Individual::Named(node.into_owned()))
    } else if kind == vocab::FUNCTIONAL_PROPERTY {
        Axiom::FunctionalObjectProperty(property())
    } else if kind == vocab::INVERSE_FUNCTIONAL_PROPERTY {
        Axiom::InverseFunctionalObjectProperty(property())
    } else if kind == vocab::TRANSITIVE_PROPERTY {
        Axiom::TransitiveObjectProperty(property())
    } else if kind == vocab::SYMMETRIC_PROPERTY {
        Axiom::SymmetricObjectProperty(property())
    } else if kind == vocab::ASYMMETRIC_PROPERTY {
        Axiom::AsymmetricObjectProperty(property())
    } else if kind == vocab::REFLEXIVE_PROPERTY {
        Axiom::ReflexiveObjectProperty(property())
    } else if kind == vocab::IRREFLEXIVE_PROPERTY {
        Axiom::IrreflexiveObjectProperty(property())
    } else {
        return None;
    })
}

fn parse_cardinality(term: TermRef<'_>) -> Result<u32, OwlParseError> {
    match term {
        TermRef::Literal(literal) => literal.value().parse().map_err(|_| {
            OwlParseError::invalid_value(format!("Invalid cardinality: {literal}"))
        }),
        _ => Err(OwlParseError::invalid_value(format!(
            "Cardinality must be a literal, found {term}"
        ))),
    }
}

fn subject_to_individual(subject: NamedOrBlankNodeRef<'_>) -> Individual {
    match subject {
        NamedOrBlankNodeRef::NamedNode(n) => Individual::Named(n.into_owned()),
        NamedOrBlankNodeRef::BlankNode(b) => Individual::Anonymous(b.into_owned()),
    }
}

fn term_to_individual(term: TermRef<'_>) -> Result<Individual, OwlParseError> {
    match term {
        TermRef::NamedNode(n) => Ok(Individual::Named(n.into_owned())),
        TermRef::BlankNode(b) => Ok(Individual::Anonymous(b.into_owned())),
        _ => Err(OwlParseError::invalid_value(format!(
            "Expected individual, found {term}"
        ))),
    }
}

/// Parses an ontology from an RDF graph.
pub fn parse_ontology(graph: &Graph) -> Result<Ontology, OwlParseError> {
    OntologyParser::new(graph).parse()
}

/// Parses an ontology with custom configuration.
pub fn parse_ontology_with_config(
    graph: &Graph,
    config: ParserConfig,
) -> Result<Ontology, OwlParseError> {
    OntologyParser::with_config(graph, config).parse()
}

/// Reads an RDF document and parses the ontology it serializes.
///
/// Axioms follow the order of the document. Named graphs are merged into a
/// single graph.
///
/// ```
/// use oxowl::{parse_ontology_from_reader, ParserConfig};
/// use oxrdfio::RdfFormat;
///
/// let turtle = b"@prefix : <http://ex.com#> .
/// @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
/// :A rdfs:subClassOf :B .";
/// let ontology =
///     parse_ontology_from_reader(&turtle[..], RdfFormat::Turtle, None, ParserConfig::new())?;
/// assert_eq!(ontology.axiom_count(), 1);
/// # Result::<_, oxowl::OwlError>::Ok(())
/// ```
pub fn parse_ontology_from_reader(
    reader: impl Read,
    format: RdfFormat,
    base_iri: Option<&str>,
    config: ParserConfig,
) -> Result<Ontology, OwlError> {
    let mut parser = RdfParser::from_format(format);
    if let Some(base_iri) = base_iri {
        parser = parser.with_base_iri(base_iri)?;
    }
    let mut graph = Graph::new();
    let mut triples = Vec::new();
    for quad in parser.for_reader(reader) {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        if graph.insert(&triple) {
            triples.push(triple);
        }
    }
    Ok(OntologyParser::with_config(&graph, config).parse_in_order(&triples)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: &str = "@prefix : <http://ex.com#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
";

    fn parse(body: &str, config: ParserConfig) -> Result<Ontology, OwlError> {
        let document = format!("{PREFIXES}{body}");
        parse_ontology_from_reader(document.as_bytes(), RdfFormat::Turtle, None, config)
    }

    #[test]
    fn test_document_order_is_kept() -> Result<(), OwlError> {
        let ontology = parse(
            ":Z rdfs:subClassOf :Y .\n:A rdfs:subClassOf :B .\n:M rdfs:subClassOf :N .",
            ParserConfig::new(),
        )?;
        let subjects: Vec<_> = ontology
            .axioms()
            .iter()
            .filter_map(|a| match a {
                Axiom::SubClassOf { sub_class, .. } => sub_class.as_class(),
                _ => None,
            })
            .map(OwlClass::short_form)
            .collect();
        assert_eq!(subjects, ["Z", "A", "M"]);
        Ok(())
    }

    #[test]
    fn test_restrictions_and_assertions() -> Result<(), OwlError> {
        let ontology = parse(
            ":hasPart a owl:ObjectProperty .
:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :hasPart ; owl:someValuesFrom :B ] .
:C rdfs:subClassOf [ owl:onProperty [ owl:inverseOf :hasPart ] ; owl:someValuesFrom :A ] .
:a :hasPart :b .
:a a :A .",
            ParserConfig::new(),
        )?;
        let rendered: Vec<_> = ontology.axioms().iter().map(ToString::to_string).collect();
        assert!(rendered.contains(
            &"SubClassOf(<http://ex.com#A> ObjectSomeValuesFrom(<http://ex.com#hasPart> <http://ex.com#B>))".to_owned()
        ));
        assert!(rendered.contains(
            &"SubClassOf(<http://ex.com#C> ObjectSomeValuesFrom(ObjectInverseOf(<http://ex.com#hasPart>) <http://ex.com#A>))".to_owned()
        ));
        assert!(rendered.contains(
            &"ObjectPropertyAssertion(<http://ex.com#hasPart> <http://ex.com#a> <http://ex.com#b>)".to_owned()
        ));
        assert!(rendered.contains(&"ClassAssertion(<http://ex.com#A> <http://ex.com#a>)".to_owned()));
        Ok(())
    }

    #[test]
    fn test_data_restriction_is_rejected_unless_lenient() -> Result<(), OwlError> {
        let body = ":size a owl:DatatypeProperty .
:A rdfs:subClassOf [ owl:onProperty :size ; owl:someValuesFrom xsd:integer ] .
:A rdfs:subClassOf :B .";
        assert!(parse(body, ParserConfig::new()).is_err());
        let ontology = parse(body, ParserConfig::new().lenient())?;
        let subclass_count = ontology.subclass_axioms().count();
        assert_eq!(subclass_count, 1);
        assert_eq!(ontology.skipped_triples(), 1);
        assert_eq!(
            parse(":A rdfs:subClassOf :B .", ParserConfig::new().lenient())?.skipped_triples(),
            0
        );
        Ok(())
    }

    #[test]
    fn test_all_disjoint_classes() -> Result<(), OwlError> {
        let ontology = parse(
            "[] a owl:AllDisjointClasses ; owl:members ( :A :B :C ) .",
            ParserConfig::new(),
        )?;
        assert_eq!(
            ontology.axioms()[0].to_string(),
            "DisjointClasses(<http://ex.com#A> <http://ex.com#B> <http://ex.com#C>)"
        );
        Ok(())
    }

    #[test]
    fn test_ontology_iri_and_declarations() -> Result<(), OwlError> {
        let ontology = parse(
            "<http://ex.com/onto> a owl:Ontology .\n:A a owl:Class .\n:r a owl:TransitiveProperty .",
            ParserConfig::new(),
        )?;
        assert_eq!(
            ontology.iri().map(NamedNode::as_str),
            Some("http://ex.com/onto")
        );
        assert!(matches!(ontology.axioms()[0], Axiom::DeclareClass(_)));
        assert!(matches!(
            ontology.axioms()[1],
            Axiom::TransitiveObjectProperty(_)
        ));
        Ok(())
    }
}
