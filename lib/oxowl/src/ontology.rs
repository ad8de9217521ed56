//! OWL 2 Ontology - container for axioms and their signature.

use crate::axiom::Axiom;
use crate::entity::{Individual, ObjectProperty, OwlClass};
use crate::expression::{ClassExpression, ObjectPropertyExpression};
use oxrdf::NamedNode;
use rustc_hash::FxHashSet;

/// An OWL 2 ontology.
///
/// Axioms keep their insertion order, which is the order they were read from
/// the source document. The signature (classes, object properties and
/// individuals) is indexed as axioms are added and also keeps first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    iri: Option<NamedNode>,
    axioms: Vec<Axiom>,
    classes: Signature<OwlClass>,
    object_properties: Signature<ObjectProperty>,
    individuals: Signature<Individual>,
    skipped_triples: usize,
}

/// Insertion-ordered set of entities.
#[derive(Debug, Clone)]
struct Signature<T> {
    seen: FxHashSet<T>,
    ordered: Vec<T>,
}

impl<T> Default for Signature<T> {
    fn default() -> Self {
        Self {
            seen: FxHashSet::default(),
            ordered: Vec::new(),
        }
    }
}

impl<T: Clone + Eq + std::hash::Hash> Signature<T> {
    fn insert(&mut self, value: &T) {
        if self.seen.insert(value.clone()) {
            self.ordered.push(value.clone());
        }
    }

    fn contains(&self, value: &T) -> bool {
        self.seen.contains(value)
    }
}

impl Ontology {
    /// Creates a new empty ontology.
    pub fn new(iri: Option<NamedNode>) -> Self {
        Self {
            iri,
            ..Self::default()
        }
    }

    /// Creates a new ontology with the given IRI string.
    pub fn with_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self::new(Some(NamedNode::new(iri)?)))
    }

    /// Returns the ontology IRI.
    pub fn iri(&self) -> Option<&NamedNode> {
        self.iri.as_ref()
    }

    /// Sets the ontology IRI.
    pub fn set_iri(&mut self, iri: Option<NamedNode>) {
        self.iri = iri;
    }

    /// Adds an axiom to the ontology and indexes its signature.
    pub fn add_axiom(&mut self, axiom: Axiom) {
        self.index_axiom(&axiom);
        self.axioms.push(axiom);
    }

    fn index_axiom(&mut self, axiom: &Axiom) {
        match axiom {
            Axiom::DeclareClass(c) => self.classes.insert(c),
            Axiom::DeclareObjectProperty(p) => self.object_properties.insert(p),
            Axiom::DeclareNamedIndividual(i) => self.individuals.insert(i),
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => {
                self.index_expression(sub_class);
                self.index_expression(super_class);
            }
            Axiom::EquivalentClasses(classes) | Axiom::DisjointClasses(classes) => {
                for c in classes {
                    self.index_expression(c);
                }
            }
            Axiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => {
                self.index_property(sub_property);
                self.index_property(super_property);
            }
            Axiom::EquivalentObjectProperties(properties) => {
                for p in properties {
                    self.object_properties.insert(p);
                }
            }
            Axiom::ObjectPropertyDomain {
                property,
                domain: class,
            }
            | Axiom::ObjectPropertyRange {
                property,
                range: class,
            } => {
                self.object_properties.insert(property);
                self.index_expression(class);
            }
            Axiom::InverseObjectProperties(p1, p2) => {
                self.object_properties.insert(p1);
                self.object_properties.insert(p2);
            }
            Axiom::FunctionalObjectProperty(p)
            | Axiom::InverseFunctionalObjectProperty(p)
            | Axiom::ReflexiveObjectProperty(p)
            | Axiom::IrreflexiveObjectProperty(p)
            | Axiom::SymmetricObjectProperty(p)
            | Axiom::AsymmetricObjectProperty(p)
            | Axiom::TransitiveObjectProperty(p) => self.object_properties.insert(p),
            Axiom::ClassAssertion { class, individual } => {
                self.index_expression(class);
                self.individuals.insert(individual);
            }
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => {
                self.object_properties.insert(property);
                self.individuals.insert(source);
                self.individuals.insert(target);
            }
            Axiom::SameIndividual(individuals) | Axiom::DifferentIndividuals(individuals) => {
                for i in individuals {
                    self.individuals.insert(i);
                }
            }
        }
    }

    fn index_property(&mut self, property: &ObjectPropertyExpression) {
        self.object_properties.insert(property.base_property());
    }

    fn index_expression(&mut self, expr: &ClassExpression) {
        match expr {
            ClassExpression::Class(c) => self.classes.insert(c),
            ClassExpression::ObjectIntersectionOf(operands)
            | ClassExpression::ObjectUnionOf(operands) => {
                for operand in operands {
                    self.index_expression(operand);
                }
            }
            ClassExpression::ObjectComplementOf(operand) => self.index_expression(operand),
            ClassExpression::ObjectOneOf(individuals) => {
                for i in individuals {
                    self.individuals.insert(i);
                }
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler }
            | ClassExpression::ObjectAllValuesFrom { property, filler } => {
                self.index_property(property);
                self.index_expression(filler);
            }
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => {
                self.index_property(property);
                self.individuals.insert(individual);
            }
            ClassExpression::ObjectHasSelf(property) => self.index_property(property),
            ClassExpression::ObjectMinCardinality {
                property, filler, ..
            }
            | ClassExpression::ObjectMaxCardinality {
                property, filler, ..
            }
            | ClassExpression::ObjectExactCardinality {
                property, filler, ..
            } => {
                self.index_property(property);
                if let Some(filler) = filler {
                    self.index_expression(filler);
                }
            }
        }
    }

    /// Returns all axioms in the ontology, in insertion order.
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Returns an iterator over axioms.
    pub fn iter_axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter()
    }

    /// Returns the number of axioms.
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Number of source triples a lenient load could not turn into axioms.
    pub fn skipped_triples(&self) -> usize {
        self.skipped_triples
    }

    pub(crate) fn record_skipped_triple(&mut self) {
        self.skipped_triples += 1;
    }

    /// Returns true if an axiom equal to `axiom` is present.
    pub fn contains_axiom(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }

    /// Returns a copy of this ontology without `axiom`.
    ///
    /// `axiom` must be a reference into [`axioms`](Self::axioms): removal is by
    /// identity, so an equal axiom asserted twice keeps its other occurrence.
    /// A reference that does not point into this ontology removes nothing.
    pub fn without_axiom(&self, axiom: &Axiom) -> Self {
        let mut result = Self::new(self.iri.clone());
        result.skipped_triples = self.skipped_triples;
        for a in self.axioms.iter().filter(|a| !std::ptr::eq(*a, axiom)) {
            result.add_axiom(a.clone());
        }
        result
    }

    /// Returns all classes in the signature, in first-seen order.
    pub fn classes(&self) -> impl Iterator<Item = &OwlClass> {
        self.classes.ordered.iter()
    }

    /// Returns all object properties in the signature, in first-seen order.
    pub fn object_properties(&self) -> impl Iterator<Item = &ObjectProperty> {
        self.object_properties.ordered.iter()
    }

    /// Returns all individuals in the signature, in first-seen order.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.ordered.iter()
    }

    /// Checks if a class is in the signature of this ontology.
    pub fn contains_class(&self, class: &OwlClass) -> bool {
        self.classes.contains(class)
    }

    /// Checks if an object property is in the signature.
    pub fn contains_object_property(&self, property: &ObjectProperty) -> bool {
        self.object_properties.contains(property)
    }

    /// Checks if an individual is in the signature.
    pub fn contains_individual(&self, individual: &Individual) -> bool {
        self.individuals.contains(individual)
    }

    /// Returns all SubClassOf axioms.
    pub fn subclass_axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms
            .iter()
            .filter(|a| matches!(a, Axiom::SubClassOf { .. }))
    }

    /// Returns the asserted types of a given individual.
    pub fn types_of<'a>(
        &'a self,
        individual: &'a Individual,
    ) -> impl Iterator<Item = &'a ClassExpression> + 'a {
        self.axioms.iter().filter_map(move |a| match a {
            Axiom::ClassAssertion {
                class,
                individual: i,
            } if i == individual => Some(class),
            _ => None,
        })
    }

    /// Returns the asserted superclass expressions of a named class.
    pub fn direct_superclasses_of<'a>(
        &'a self,
        class: &'a OwlClass,
    ) -> impl Iterator<Item = &'a ClassExpression> + 'a {
        self.axioms.iter().flat_map(move |a| {
            let found: Vec<&ClassExpression> = match a {
                Axiom::SubClassOf {
                    sub_class: ClassExpression::Class(c),
                    super_class,
                } if c == class => vec![super_class],
                Axiom::EquivalentClasses(classes)
                    if classes.iter().any(|e| e.as_class() == Some(class)) =>
                {
                    classes
                        .iter()
                        .filter(|e| e.as_class() != Some(class))
                        .collect()
                }
                _ => Vec::new(),
            };
            found
        })
    }

    /// Merges another ontology into this one.
    pub fn merge(&mut self, other: Ontology) {
        for axiom in other.axioms {
            self.add_axiom(axiom);
        }
    }
}

impl std::fmt::Display for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(iri) = &self.iri {
            write!(f, "Ontology({iri})")?;
        } else {
            write!(f, "Ontology(anonymous)")?;
        }
        write!(f, " [{} axioms]", self.axioms.len())
    }
}
