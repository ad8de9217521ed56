//! Question synthesis for an axiom group.

use crate::group::AxiomGroup;
use crate::render::class_name;
use oxowl::{Axiom, ClassExpression, ObjectPropertyExpression};

/// Query text used when a group has no existential axiom.
pub const NO_QUERY: &str = "No suitable query generated.";

/// Returns the first `A ⊑ ∃r.B` axiom of the group.
pub fn find_key_axiom<'a>(group: &AxiomGroup<'a>) -> Option<&'a Axiom> {
    group.axioms().iter().copied().find(|axiom| {
        matches!(
            axiom,
            Axiom::SubClassOf {
                super_class: ClassExpression::ObjectSomeValuesFrom { .. },
                ..
            }
        )
    })
}

/// Builds the yes/no question asked about the group's key axiom.
pub fn generate_query(group: &AxiomGroup<'_>) -> String {
    let Some(Axiom::SubClassOf { super_class, .. }) = find_key_axiom(group) else {
        return NO_QUERY.to_owned();
    };
    let Some((property, filler)) = super_class.as_some_values_from() else {
        return NO_QUERY.to_owned();
    };
    format!(
        "Does every {} have {}.{}?",
        group.name(),
        role_label(property),
        class_name(filler)
    )
}

/// Role name as it appears in a question, `r^-1` for the inverse of `r`.
pub fn role_label(property: &ObjectPropertyExpression) -> String {
    match property {
        ObjectPropertyExpression::ObjectProperty(p) => p.short_form().to_owned(),
        ObjectPropertyExpression::ObjectInverseOf(p) => format!("{}^-1", p.short_form()),
    }
}

/// Rewords a generated question without changing its meaning.
///
/// The substitution is purely textual: every `have`, including one inside a
/// name, becomes `contain`.
pub fn paraphrase_query(query: &str) -> String {
    query
        .replace("Does every", "Is it true that all")
        .replace("have", "contain")
}

/// Returns the group axioms except `axiom`, compared by identity.
pub fn without_axiom<'a>(group: &AxiomGroup<'a>, axiom: &Axiom) -> Vec<&'a Axiom> {
    group
        .axioms()
        .iter()
        .copied()
        .filter(|candidate| !std::ptr::eq(*candidate, axiom))
        .collect()
}
