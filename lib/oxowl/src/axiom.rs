//! OWL 2 axiom types.
//!
//! Axioms are the basic statements in an OWL 2 ontology.

use crate::entity::{Individual, ObjectProperty, OwlClass};
use crate::expression::{ClassExpression, ObjectPropertyExpression};

/// An OWL 2 axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    // === Class Axioms ===
    /// SubClassOf(sub, super) - sub is a subclass of super
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },

    /// EquivalentClasses(C1, C2, ...) - all classes are equivalent
    EquivalentClasses(Vec<ClassExpression>),

    /// DisjointClasses(C1, C2, ...) - classes have no common instances
    DisjointClasses(Vec<ClassExpression>),

    // === Object Property Axioms ===
    /// SubObjectPropertyOf(sub, super)
    SubObjectPropertyOf {
        sub_property: ObjectPropertyExpression,
        super_property: ObjectPropertyExpression,
    },

    /// EquivalentObjectProperties(P1, P2, ...)
    EquivalentObjectProperties(Vec<ObjectProperty>),

    /// ObjectPropertyDomain(P, C) - domain of P is C
    ObjectPropertyDomain {
        property: ObjectProperty,
        domain: ClassExpression,
    },

    /// ObjectPropertyRange(P, C) - range of P is C
    ObjectPropertyRange {
        property: ObjectProperty,
        range: ClassExpression,
    },

    /// InverseObjectProperties(P1, P2)
    InverseObjectProperties(ObjectProperty, ObjectProperty),

    /// FunctionalObjectProperty(P)
    FunctionalObjectProperty(ObjectProperty),

    /// InverseFunctionalObjectProperty(P)
    InverseFunctionalObjectProperty(ObjectProperty),

    /// ReflexiveObjectProperty(P)
    ReflexiveObjectProperty(ObjectProperty),

    /// IrreflexiveObjectProperty(P)
    IrreflexiveObjectProperty(ObjectProperty),

    /// SymmetricObjectProperty(P)
    SymmetricObjectProperty(ObjectProperty),

    /// AsymmetricObjectProperty(P)
    AsymmetricObjectProperty(ObjectProperty),

    /// TransitiveObjectProperty(P)
    TransitiveObjectProperty(ObjectProperty),

    // === Individual Axioms (Assertions) ===
    /// ClassAssertion(C, a) - a is an instance of C
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },

    /// ObjectPropertyAssertion(P, a, b) - (a, b) is in P
    ObjectPropertyAssertion {
        property: ObjectProperty,
        source: Individual,
        target: Individual,
    },

    /// SameIndividual(a1, a2, ...)
    SameIndividual(Vec<Individual>),

    /// DifferentIndividuals(a1, a2, ...)
    DifferentIndividuals(Vec<Individual>),

    // === Declaration Axioms ===
    /// Declaration(Class(C))
    DeclareClass(OwlClass),

    /// Declaration(ObjectProperty(P))
    DeclareObjectProperty(ObjectProperty),

    /// Declaration(NamedIndividual(a))
    DeclareNamedIndividual(Individual),
}

impl Axiom {
    /// Creates a SubClassOf axiom.
    pub fn subclass_of(sub: impl Into<ClassExpression>, sup: impl Into<ClassExpression>) -> Self {
        Self::SubClassOf {
            sub_class: sub.into(),
            super_class: sup.into(),
        }
    }

    /// Creates a ClassAssertion axiom.
    pub fn class_assertion(
        class: impl Into<ClassExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::ClassAssertion {
            class: class.into(),
            individual: individual.into(),
        }
    }

    /// Creates an ObjectPropertyAssertion axiom.
    pub fn object_property_assertion(
        property: ObjectProperty,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) -> Self {
        Self::ObjectPropertyAssertion {
            property,
            source: source.into(),
            target: target.into(),
        }
    }

    /// Creates a SubObjectPropertyOf axiom between named properties.
    pub fn sub_object_property_of(sub: ObjectProperty, sup: ObjectProperty) -> Self {
        Self::SubObjectPropertyOf {
            sub_property: sub.into(),
            super_property: sup.into(),
        }
    }

    /// Creates an EquivalentClasses axiom.
    pub fn equivalent_classes(classes: Vec<ClassExpression>) -> Self {
        Self::EquivalentClasses(classes)
    }

    /// Creates a DisjointClasses axiom.
    pub fn disjoint_classes(classes: Vec<ClassExpression>) -> Self {
        Self::DisjointClasses(classes)
    }

    /// Returns the functional-syntax name of the axiom kind, e.g. `SubClassOf`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::SubClassOf { .. } => "SubClassOf",
            Self::EquivalentClasses(_) => "EquivalentClasses",
            Self::DisjointClasses(_) => "DisjointClasses",
            Self::SubObjectPropertyOf { .. } => "SubObjectPropertyOf",
            Self::EquivalentObjectProperties(_) => "EquivalentObjectProperties",
            Self::ObjectPropertyDomain { .. } => "ObjectPropertyDomain",
            Self::ObjectPropertyRange { .. } => "ObjectPropertyRange",
            Self::InverseObjectProperties(..) => "InverseObjectProperties",
            Self::FunctionalObjectProperty(_) => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty(_) => "InverseFunctionalObjectProperty",
            Self::ReflexiveObjectProperty(_) => "ReflexiveObjectProperty",
            Self::IrreflexiveObjectProperty(_) => "IrreflexiveObjectProperty",
            Self::SymmetricObjectProperty(_) => "SymmetricObjectProperty",
            Self::AsymmetricObjectProperty(_) => "AsymmetricObjectProperty",
            Self::TransitiveObjectProperty(_) => "TransitiveObjectProperty",
            Self::ClassAssertion { .. } => "ClassAssertion",
            Self::ObjectPropertyAssertion { .. } => "ObjectPropertyAssertion",
            Self::SameIndividual(_) => "SameIndividual",
            Self::DifferentIndividuals(_) => "DifferentIndividuals",
            Self::DeclareClass(_)
            | Self::DeclareObjectProperty(_)
            | Self::DeclareNamedIndividual(_) => "Declaration",
        }
    }
}
