//! Dual rendering of axioms: compact DL notation and OWL functional syntax.

use crate::model::RenderedAxiom;
use oxowl::{Axiom, ClassExpression, Individual, ObjectPropertyExpression};

const ANONYMOUS_CLASS: &str = "AnonymousClass";
const ANONYMOUS_INDIVIDUAL: &str = "AnonymousIndividual";
const ANONYMOUS_PROPERTY: &str = "AnonymousProperty";

/// Renders an axiom in both notations.
///
/// Subsumptions and assertions get a compact symbolic form; every other
/// axiom kind uses its functional-syntax rendering in both fields.
pub fn render(axiom: &Axiom) -> RenderedAxiom {
    let functional = axiom.to_string();
    let symbolic = match axiom {
        Axiom::SubClassOf {
            sub_class,
            super_class,
        } => format!(
            "{} ⊑ {}",
            class_name(sub_class),
            render_class_expression(super_class)
        ),
        Axiom::ClassAssertion { class, individual } => {
            format!("{} : {}", individual_name(individual), class_name(class))
        }
        Axiom::ObjectPropertyAssertion {
            property,
            source,
            target,
        } => format!(
            "{} {} {}",
            individual_name(source),
            property.short_form(),
            individual_name(target)
        ),
        _ => functional.clone(),
    };
    RenderedAxiom {
        symbolic,
        functional,
    }
}

/// Renders the right-hand side of a subsumption.
pub fn render_class_expression(expression: &ClassExpression) -> String {
    match expression {
        ClassExpression::ObjectSomeValuesFrom { property, filler } => {
            format!("∃{}.{}", property_name(property), class_name(filler))
        }
        _ => class_name(expression).to_owned(),
    }
}

/// Short name of a class expression, a placeholder for anonymous ones.
pub fn class_name(expression: &ClassExpression) -> &str {
    expression
        .as_class()
        .map_or(ANONYMOUS_CLASS, |class| class.short_form())
}

/// Short name of a property expression, a placeholder for inverses.
pub fn property_name(property: &ObjectPropertyExpression) -> &str {
    property
        .as_property()
        .map_or(ANONYMOUS_PROPERTY, |property| property.short_form())
}

/// Short name of an individual, a placeholder for blank nodes.
pub fn individual_name(individual: &Individual) -> &str {
    individual.short_form().unwrap_or(ANONYMOUS_INDIVIDUAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxowl::{ObjectProperty, OwlClass};
    use oxrdf::{BlankNode, NamedNode};

    fn class(name: &str) -> OwlClass {
        OwlClass::new(NamedNode::new_unchecked(format!("http://example.org/{name}")))
    }

    fn property(name: &str) -> ObjectProperty {
        ObjectProperty::new(NamedNode::new_unchecked(format!("http://example.org#{name}")))
    }

    fn individual(name: &str) -> Individual {
        NamedNode::new_unchecked(format!("http://example.org/data#{name}")).into()
    }

    #[test]
    fn test_render_existential() {
        let rendered = render(&Axiom::subclass_of(
            class("Car"),
            ClassExpression::some_values_from(property("hasPart"), class("Engine")),
        ));
        assert_eq!(rendered.symbolic, "Car ⊑ ∃hasPart.Engine");
        assert_eq!(
            rendered.functional,
            "SubClassOf(<http://example.org/Car> ObjectSomeValuesFrom(<http://example.org#hasPart> <http://example.org/Engine>))"
        );
    }

    #[test]
    fn test_render_named_subsumption() {
        let rendered = render(&Axiom::subclass_of(class("Margherita"), class("Pizza")));
        assert_eq!(rendered.symbolic, "Margherita ⊑ Pizza");
    }

    #[test]
    fn test_render_placeholders() {
        let rendered = render(&Axiom::subclass_of(
            ClassExpression::intersection(vec![class("A").into(), class("B").into()]),
            ClassExpression::some_values_from(
                ObjectPropertyExpression::inverse(property("hasPart")),
                ClassExpression::union(vec![class("C").into(), class("D").into()]),
            ),
        ));
        assert_eq!(
            rendered.symbolic,
            "AnonymousClass ⊑ ∃AnonymousProperty.AnonymousClass"
        );
        let rendered = render(&Axiom::subclass_of(
            class("A"),
            ClassExpression::all_values_from(property("r"), class("B")),
        ));
        assert_eq!(rendered.symbolic, "A ⊑ AnonymousClass");
    }

    #[test]
    fn test_render_assertions() {
        assert_eq!(
            render(&Axiom::class_assertion(class("Pizza"), individual("p1"))).symbolic,
            "p1 : Pizza"
        );
        assert_eq!(
            render(&Axiom::object_property_assertion(
                property("hasBase"),
                individual("p1"),
                Individual::Anonymous(BlankNode::default()),
            ))
            .symbolic,
            "p1 hasBase AnonymousIndividual"
        );
    }

    #[test]
    fn test_render_fallback() {
        let rendered = render(&Axiom::DeclareClass(class("Pizza")));
        assert_eq!(rendered.symbolic, rendered.functional);
        assert_eq!(rendered.symbolic, "Declaration(Class(<http://example.org/Pizza>))");
    }
}
