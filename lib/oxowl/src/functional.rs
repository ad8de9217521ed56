//! OWL 2 functional-style syntax rendering.
//!
//! The [`Display`](fmt::Display) implementations of [`Axiom`],
//! [`ClassExpression`] and [`ObjectPropertyExpression`] write the canonical
//! functional syntax with full IRIs, e.g.
//! `SubClassOf(<http://ex.com#A> ObjectSomeValuesFrom(<http://ex.com#r> <http://ex.com#B>))`.

use crate::axiom::Axiom;
use crate::expression::{ClassExpression, ObjectPropertyExpression};
use std::fmt;

fn write_all<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_cardinality(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    cardinality: u32,
    property: &ObjectPropertyExpression,
    filler: Option<&ClassExpression>,
) -> fmt::Result {
    write!(f, "{name}({cardinality} {property}")?;
    if let Some(filler) = filler {
        write!(f, " {filler}")?;
    }
    f.write_str(")")
}

impl fmt::Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectProperty(p) => write!(f, "{p}"),
            Self::ObjectInverseOf(p) => write!(f, "ObjectInverseOf({p})"),
        }
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(c) => write!(f, "{c}"),
            Self::ObjectIntersectionOf(classes) => {
                f.write_str("ObjectIntersectionOf(")?;
                write_all(f, classes)?;
                f.write_str(")")
            }
            Self::ObjectUnionOf(classes) => {
                f.write_str("ObjectUnionOf(")?;
                write_all(f, classes)?;
                f.write_str(")")
            }
            Self::ObjectComplementOf(c) => write!(f, "ObjectComplementOf({c})"),
            Self::ObjectOneOf(individuals) => {
                f.write_str("ObjectOneOf(")?;
                write_all(f, individuals)?;
                f.write_str(")")
            }
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => write!(f, "ObjectHasValue({property} {individual})"),
            Self::ObjectHasSelf(property) => write!(f, "ObjectHasSelf({property})"),
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectMinCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectMaxCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
            Self::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectExactCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
        }
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind_name();
        match self {
            Self::SubClassOf {
                sub_class,
                super_class,
            } => write!(f, "{name}({sub_class} {super_class})"),
            Self::EquivalentClasses(classes) | Self::DisjointClasses(classes) => {
                write!(f, "{name}(")?;
                write_all(f, classes)?;
                f.write_str(")")
            }
            Self::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => write!(f, "{name}({sub_property} {super_property})"),
            Self::EquivalentObjectProperties(properties) => {
                write!(f, "{name}(")?;
                write_all(f, properties)?;
                f.write_str(")")
            }
            Self::ObjectPropertyDomain { property, domain } => {
                write!(f, "{name}({property} {domain})")
            }
            Self::ObjectPropertyRange { property, range } => {
                write!(f, "{name}({property} {range})")
            }
            Self::InverseObjectProperties(p1, p2) => write!(f, "{name}({p1} {p2})"),
            Self::FunctionalObjectProperty(p)
            | Self::InverseFunctionalObjectProperty(p)
            | Self::ReflexiveObjectProperty(p)
            | Self::IrreflexiveObjectProperty(p)
            | Self::SymmetricObjectProperty(p)
            | Self::AsymmetricObjectProperty(p)
            | Self::TransitiveObjectProperty(p) => write!(f, "{name}({p})"),
            Self::ClassAssertion { class, individual } => {
                write!(f, "{name}({class} {individual})")
            }
            Self::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => write!(f, "{name}({property} {source} {target})"),
            Self::SameIndividual(individuals) | Self::DifferentIndividuals(individuals) => {
                write!(f, "{name}(")?;
                write_all(f, individuals)?;
                f.write_str(")")
            }
            Self::DeclareClass(c) => write!(f, "{name}(Class({c}))"),
            Self::DeclareObjectProperty(p) => write!(f, "{name}(ObjectProperty({p}))"),
            Self::DeclareNamedIndividual(i) => write!(f, "{name}(NamedIndividual({i}))"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axiom, ClassExpression, Individual, ObjectProperty, ObjectPropertyExpression, OwlClass};
    use oxrdf::NamedNode;

    fn class(name: &str) -> OwlClass {
        OwlClass::new(NamedNode::new_unchecked(format!("http://ex.com#{name}")))
    }

    fn property(name: &str) -> ObjectProperty {
        ObjectProperty::new(NamedNode::new_unchecked(format!("http://ex.com#{name}")))
    }

    #[test]
    fn test_subclass_of_existential() {
        let axiom = Axiom::subclass_of(
            class("A"),
            ClassExpression::some_values_from(property("hasPart"), class("B")),
        );
        assert_eq!(
            axiom.to_string(),
            "SubClassOf(<http://ex.com#A> ObjectSomeValuesFrom(<http://ex.com#hasPart> <http://ex.com#B>))"
        );
    }

    #[test]
    fn test_inverse_property() {
        let expr = ClassExpression::some_values_from(
            ObjectPropertyExpression::inverse(property("hasPart")),
            class("B"),
        );
        assert_eq!(
            expr.to_string(),
            "ObjectSomeValuesFrom(ObjectInverseOf(<http://ex.com#hasPart>) <http://ex.com#B>)"
        );
    }

    #[test]
    fn test_assertions_and_lists() {
        let a = Individual::Named(NamedNode::new_unchecked("http://ex.com#a"));
        let b = Individual::Named(NamedNode::new_unchecked("http://ex.com#b"));
        assert_eq!(
            Axiom::object_property_assertion(property("r"), a.clone(), b).to_string(),
            "ObjectPropertyAssertion(<http://ex.com#r> <http://ex.com#a> <http://ex.com#b>)"
        );
        assert_eq!(
            Axiom::disjoint_classes(vec![class("A").into(), class("B").into()]).to_string(),
            "DisjointClasses(<http://ex.com#A> <http://ex.com#B>)"
        );
        assert_eq!(
            Axiom::DeclareNamedIndividual(a).to_string(),
            "Declaration(NamedIndividual(<http://ex.com#a>))"
        );
        assert_eq!(
            ClassExpression::ObjectMinCardinality {
                cardinality: 2,
                property: property("r").into(),
                filler: None,
            }
            .to_string(),
            "ObjectMinCardinality(2 <http://ex.com#r>)"
        );
    }
}
