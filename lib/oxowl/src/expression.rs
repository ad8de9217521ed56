//! OWL 2 class expressions and object property expressions.

use crate::entity::{Individual, ObjectProperty, OwlClass};

/// An OWL 2 class expression.
///
/// Class expressions describe sets of individuals through various constructors.
/// Only object constructors are modelled; data restrictions are not produced
/// by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// A named class (atomic class)
    Class(OwlClass),

    /// ObjectIntersectionOf(C1, ..., Cn) - intersection of classes
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// ObjectUnionOf(C1, ..., Cn) - union of classes
    ObjectUnionOf(Vec<ClassExpression>),

    /// ObjectComplementOf(C) - complement of a class
    ObjectComplementOf(Box<ClassExpression>),

    /// ObjectOneOf(a1, ..., an) - enumeration of individuals
    ObjectOneOf(Vec<Individual>),

    /// ObjectSomeValuesFrom(P, C) - existential restriction
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// ObjectAllValuesFrom(P, C) - universal restriction
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// ObjectHasValue(P, a) - has-value restriction
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },

    /// ObjectHasSelf(P) - self restriction
    ObjectHasSelf(ObjectPropertyExpression),

    /// ObjectMinCardinality(n, P) or ObjectMinCardinality(n, P, C)
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectMaxCardinality(n, P) or ObjectMaxCardinality(n, P, C)
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectExactCardinality(n, P) or ObjectExactCardinality(n, P, C)
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    pub fn class(c: impl Into<OwlClass>) -> Self {
        Self::Class(c.into())
    }

    /// Creates an intersection of classes.
    pub fn intersection(classes: Vec<ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(classes)
    }

    /// Creates a union of classes.
    pub fn union(classes: Vec<ClassExpression>) -> Self {
        Self::ObjectUnionOf(classes)
    }

    /// Creates an existential restriction.
    pub fn some_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }

    /// Creates a universal restriction.
    pub fn all_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }

    /// Returns true if this is a named class.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the named class if this is one.
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the property and filler if this is an existential restriction.
    pub fn as_some_values_from(&self) -> Option<(&ObjectPropertyExpression, &ClassExpression)> {
        match self {
            Self::ObjectSomeValuesFrom { property, filler } => Some((property, filler)),
            _ => None,
        }
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(c: OwlClass) -> Self {
        Self::Class(c)
    }
}

/// An OWL 2 object property expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyExpression {
    /// A named object property
    ObjectProperty(ObjectProperty),

    /// ObjectInverseOf(P) - inverse of a property
    ObjectInverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Creates an inverse property expression.
    pub fn inverse(property: ObjectProperty) -> Self {
        Self::ObjectInverseOf(property)
    }

    /// Returns true if this is a named property.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::ObjectProperty(_))
    }

    /// Returns the named property, `None` for an inverse.
    pub fn as_property(&self) -> Option<&ObjectProperty> {
        match self {
            Self::ObjectProperty(p) => Some(p),
            Self::ObjectInverseOf(_) => None,
        }
    }

    /// Returns the base property (removing inverse if present).
    pub fn base_property(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(p) | Self::ObjectInverseOf(p) => p,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(p: ObjectProperty) -> Self {
        Self::ObjectProperty(p)
    }
}
