//! Partition of subsumption axioms by their named subject.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use oxowl::{Axiom, OwlClass};
use rustc_hash::FxHashMap;
use tracing::warn;

/// The subsumption axioms sharing one named left-hand side, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxiomGroup<'a> {
    subject: &'a OwlClass,
    axioms: Vec<&'a Axiom>,
}

impl<'a> AxiomGroup<'a> {
    pub fn new(subject: &'a OwlClass, axioms: Vec<&'a Axiom>) -> Self {
        Self { subject, axioms }
    }

    pub fn subject(&self) -> &'a OwlClass {
        self.subject
    }

    /// Short name of the subject.
    pub fn name(&self) -> &'a str {
        self.subject.short_form()
    }

    pub fn axioms(&self) -> &[&'a Axiom] {
        &self.axioms
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }
}

/// Groups keyed by subject, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct AxiomGroups<'a> {
    index: FxHashMap<&'a OwlClass, usize>,
    groups: Vec<AxiomGroup<'a>>,
}

impl<'a> AxiomGroups<'a> {
    pub fn get(&self, subject: &OwlClass) -> Option<&AxiomGroup<'a>> {
        self.index.get(subject).map(|i| &self.groups[*i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxiomGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, subject: &'a OwlClass, axiom: &'a Axiom) {
        let next = self.groups.len();
        let i = *self.index.entry(subject).or_insert(next);
        if i == next {
            self.groups.push(AxiomGroup::new(subject, Vec::new()));
        }
        self.groups[i].axioms.push(axiom);
    }
}

impl<'a, 'b> IntoIterator for &'b AxiomGroups<'a> {
    type Item = &'b AxiomGroup<'a>;
    type IntoIter = std::slice::Iter<'b, AxiomGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Buckets every `SubClassOf` axiom under its named subject.
///
/// Other axiom kinds are ignored. Axioms with an anonymous subject are
/// skipped and reported to `diagnostics`.
pub fn group_by_subject<'a>(
    axioms: impl IntoIterator<Item = &'a Axiom>,
    diagnostics: &mut Diagnostics,
) -> AxiomGroups<'a> {
    let mut groups = AxiomGroups::default();
    for axiom in axioms {
        let Axiom::SubClassOf { sub_class, .. } = axiom else {
            continue;
        };
        if let Some(subject) = sub_class.as_class() {
            groups.push(subject, axiom);
        } else {
            warn!(%axiom, "skipping subsumption with an anonymous subject");
            diagnostics.push(DiagnosticKind::AnonymousSubject, axiom.to_string());
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxowl::{ClassExpression, ObjectProperty};
    use oxrdf::NamedNode;

    fn class(name: &str) -> OwlClass {
        OwlClass::new(NamedNode::new_unchecked(format!("http://example.org#{name}")))
    }

    #[test]
    fn test_group_in_first_seen_order() {
        let has_base = ObjectProperty::new(NamedNode::new_unchecked("http://example.org#hasBase"));
        let axioms = [
            Axiom::subclass_of(class("Margherita"), class("Pizza")),
            Axiom::DeclareClass(class("Topping")),
            Axiom::subclass_of(
                class("Pizza"),
                ClassExpression::some_values_from(has_base, class("PizzaBase")),
            ),
            Axiom::subclass_of(class("Margherita"), class("NamedPizza")),
        ];
        let mut diagnostics = Diagnostics::new();
        let groups = group_by_subject(&axioms, &mut diagnostics);

        assert!(diagnostics.is_empty());
        let names: Vec<_> = groups.iter().map(AxiomGroup::name).collect();
        assert_eq!(names, ["Margherita", "Pizza"]);
        let margherita = groups.get(&class("Margherita")).unwrap();
        assert_eq!(margherita.axioms(), [&axioms[0], &axioms[3]]);
        assert_eq!(groups.get(&class("Pizza")).unwrap().len(), 1);
        assert!(groups.get(&class("Topping")).is_none());
    }

    #[test]
    fn test_anonymous_subject_is_reported() {
        let axioms = [
            Axiom::subclass_of(
                ClassExpression::intersection(vec![class("A").into(), class("B").into()]),
                class("C"),
            ),
            Axiom::subclass_of(class("A"), class("C")),
        ];
        let mut diagnostics = Diagnostics::new();
        let groups = group_by_subject(&axioms, &mut diagnostics);

        assert_eq!(groups.len(), 1);
        assert_eq!(diagnostics.count(DiagnosticKind::AnonymousSubject), 1);
    }

    #[test]
    fn test_empty_input() {
        let axioms: [Axiom; 0] = [];
        let mut diagnostics = Diagnostics::new();
        let groups = group_by_subject(&axioms, &mut diagnostics);
        assert!(groups.is_empty());
    }
}
