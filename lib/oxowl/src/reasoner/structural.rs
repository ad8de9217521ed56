//! Told-structure reasoner.
//!
//! Only follows what is asserted: the transitive closure of named
//! subsumptions and equivalences, told existential restrictions on named
//! classes, told types and told property assertions. It never derives an
//! existential restriction from a left-hand side restriction, so it is
//! fast and incomplete.

use super::{Budget, Reasoner, ReasonerConfig};
use crate::axiom::Axiom;
use crate::entity::{Individual, ObjectProperty, OwlClass};
use crate::error::{OwlError, ReasoningError};
use crate::expression::{ClassExpression, ObjectPropertyExpression};
use crate::ontology::Ontology;
use rustc_hash::{FxHashMap, FxHashSet};

const NAME: &str = "structural";

/// Reasoner over the told (asserted) structure of an ontology.
#[derive(Debug)]
pub struct StructuralReasoner<'a> {
    ontology: &'a Ontology,
    budget: Budget,

    /// Told named superclasses: class -> direct superclasses
    told_super_classes: FxHashMap<OwlClass, Vec<OwlClass>>,
    /// Told existential restrictions: class -> (property, filler)
    told_existentials: FxHashMap<OwlClass, Vec<(ObjectPropertyExpression, ClassExpression)>>,
    /// Told named super properties
    told_super_properties: FxHashMap<ObjectProperty, Vec<ObjectProperty>>,
    /// Told named types of individuals
    told_types: FxHashMap<Individual, Vec<OwlClass>>,
    /// Told property assertions
    property_values: FxHashSet<(ObjectProperty, Individual, Individual)>,
    /// Named pairs declared disjoint
    disjoint_pairs: Vec<(OwlClass, OwlClass)>,

    /// Closure cache: class -> all told superclasses, the class itself included
    closure: FxHashMap<OwlClass, FxHashSet<OwlClass>>,
}

impl<'a> StructuralReasoner<'a> {
    /// Creates a new structural reasoner for the given ontology.
    pub fn new(ontology: &'a Ontology) -> Self {
        Self::with_config(ontology, ReasonerConfig::default())
    }

    /// Creates a new structural reasoner with custom configuration.
    pub fn with_config(ontology: &'a Ontology, config: ReasonerConfig) -> Self {
        let mut reasoner = Self {
            ontology,
            budget: Budget::new(&config),
            told_super_classes: FxHashMap::default(),
            told_existentials: FxHashMap::default(),
            told_super_properties: FxHashMap::default(),
            told_types: FxHashMap::default(),
            property_values: FxHashSet::default(),
            disjoint_pairs: Vec::new(),
            closure: FxHashMap::default(),
        };
        reasoner.initialize();
        reasoner
    }

    fn initialize(&mut self) {
        for axiom in self.ontology.axioms() {
            match axiom {
                Axiom::SubClassOf {
                    sub_class: ClassExpression::Class(sub),
                    super_class,
                } => self.add_told_super(sub, super_class),
                Axiom::EquivalentClasses(classes) => {
                    for sub in classes.iter().filter_map(ClassExpression::as_class) {
                        for sup in classes {
                            if sup.as_class() != Some(sub) {
                                self.add_told_super(sub, sup);
                            }
                        }
                    }
                }
                Axiom::DisjointClasses(classes) => {
                    let named: Vec<&OwlClass> =
                        classes.iter().filter_map(ClassExpression::as_class).collect();
                    for (i, c) in named.iter().enumerate() {
                        for d in &named[i + 1..] {
                            self.disjoint_pairs.push(((*c).clone(), (*d).clone()));
                        }
                    }
                }
                Axiom::SubObjectPropertyOf {
                    sub_property: ObjectPropertyExpression::ObjectProperty(sub),
                    super_property: ObjectPropertyExpression::ObjectProperty(sup),
                } => {
                    self.told_super_properties
                        .entry(sub.clone())
                        .or_default()
                        .push(sup.clone());
                }
                Axiom::EquivalentObjectProperties(properties) => {
                    for p in properties {
                        for q in properties {
                            if p != q {
                                self.told_super_properties
                                    .entry(p.clone())
                                    .or_default()
                                    .push(q.clone());
                            }
                        }
                    }
                }
                Axiom::ClassAssertion {
                    class: ClassExpression::Class(c),
                    individual,
                } => {
                    self.told_types
                        .entry(individual.clone())
                        .or_default()
                        .push(c.clone());
                }
                Axiom::ObjectPropertyAssertion {
                    property,
                    source,
                    target,
                } => {
                    self.property_values
                        .insert((property.clone(), source.clone(), target.clone()));
                }
                _ => {}
            }
        }
    }

    fn add_told_super(&mut self, sub: &OwlClass, sup: &ClassExpression) {
        match sup {
            ClassExpression::Class(sup) => {
                self.told_super_classes
                    .entry(sub.clone())
                    .or_default()
                    .push(sup.clone());
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                self.told_existentials
                    .entry(sub.clone())
                    .or_default()
                    .push((property.clone(), (**filler).clone()));
            }
            ClassExpression::ObjectIntersectionOf(operands) => {
                for operand in operands {
                    self.add_told_super(sub, operand);
                }
            }
            _ => {}
        }
    }

    /// All told superclasses of `class`, itself included.
    fn class_closure(&mut self, class: &OwlClass) -> Result<&FxHashSet<OwlClass>, ReasoningError> {
        if !self.closure.contains_key(class) {
            let mut closure = FxHashSet::default();
            let mut stack = vec![class.clone()];
            while let Some(current) = stack.pop() {
                self.budget.tick()?;
                if let Some(supers) = self.told_super_classes.get(&current) {
                    stack.extend(supers.iter().filter(|s| !closure.contains(*s)).cloned());
                }
                closure.insert(current);
            }
            closure.insert(OwlClass::thing());
            self.closure.insert(class.clone(), closure);
        }
        Ok(&self.closure[class])
    }

    fn is_told_subclass(&mut self, sub: &OwlClass, sup: &OwlClass) -> Result<bool, ReasoningError> {
        Ok(self.class_closure(sub)?.contains(sup))
    }

    fn property_closure(&mut self, property: &ObjectProperty) -> Result<FxHashSet<ObjectProperty>, ReasoningError> {
        let mut closure = FxHashSet::default();
        let mut stack = vec![property.clone()];
        while let Some(current) = stack.pop() {
            self.budget.tick()?;
            if let Some(supers) = self.told_super_properties.get(&current) {
                stack.extend(supers.iter().filter(|s| !closure.contains(*s)).cloned());
            }
            closure.insert(current);
        }
        Ok(closure)
    }

    fn is_told_sub_property(
        &mut self,
        sub: &ObjectPropertyExpression,
        sup: &ObjectPropertyExpression,
    ) -> Result<bool, ReasoningError> {
        match (sub, sup) {
            (
                ObjectPropertyExpression::ObjectProperty(sub),
                ObjectPropertyExpression::ObjectProperty(sup),
            )
            | (
                ObjectPropertyExpression::ObjectInverseOf(sub),
                ObjectPropertyExpression::ObjectInverseOf(sup),
            ) => Ok(self.property_closure(sub)?.contains(sup)),
            _ => Ok(false),
        }
    }

    /// Whether `filler` is subsumed by `target`, by told structure only.
    fn is_told_filler(
        &mut self,
        filler: &ClassExpression,
        target: &ClassExpression,
    ) -> Result<bool, ReasoningError> {
        if filler == target {
            return Ok(true);
        }
        match (filler, target) {
            (ClassExpression::Class(f), ClassExpression::Class(t)) => self.is_told_subclass(f, t),
            (ClassExpression::Class(f), ClassExpression::ObjectSomeValuesFrom { .. }) => {
                self.has_told_existential(f, target)
            }
            _ => Ok(false),
        }
    }

    /// Whether a told superclass of `class` carries a restriction subsuming `restriction`.
    fn has_told_existential(
        &mut self,
        class: &OwlClass,
        restriction: &ClassExpression,
    ) -> Result<bool, ReasoningError> {
        let Some((property, filler)) = restriction.as_some_values_from() else {
            return Ok(false);
        };
        let supers: Vec<OwlClass> = self.class_closure(class)?.iter().cloned().collect();
        for sup in supers {
            let candidates = self.told_existentials.get(&sup).cloned().unwrap_or_default();
            for (told_property, told_filler) in candidates {
                if self.is_told_sub_property(&told_property, property)?
                    && self.is_told_filler(&told_filler, filler)?
                {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn has_told_type(
        &mut self,
        individual: &Individual,
        class: &OwlClass,
    ) -> Result<bool, ReasoningError> {
        if class.is_thing() {
            return Ok(true);
        }
        let types = self.told_types.get(individual).cloned().unwrap_or_default();
        for t in types {
            if self.is_told_subclass(&t, class)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn entails_subsumption(
        &mut self,
        sub: &ClassExpression,
        sup: &ClassExpression,
    ) -> Result<Option<bool>, ReasoningError> {
        let ClassExpression::Class(sub) = sub else {
            return Ok(None);
        };
        match sup {
            ClassExpression::Class(sup) => Ok(Some(self.is_told_subclass(sub, sup)?)),
            ClassExpression::ObjectSomeValuesFrom { .. } => {
                Ok(Some(self.has_told_existential(sub, sup)?))
            }
            _ => Ok(None),
        }
    }
}

impl Reasoner for StructuralReasoner<'_> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn precompute_inferences(&mut self) -> Result<(), OwlError> {
        let classes: Vec<OwlClass> = self.ontology.classes().cloned().collect();
        for class in classes {
            self.class_closure(&class)?;
        }
        Ok(())
    }

    fn is_consistent(&mut self) -> Result<bool, OwlError> {
        let nothing = OwlClass::nothing();
        if self.is_told_subclass(&OwlClass::thing(), &nothing)? {
            return Ok(false);
        }
        let individuals: Vec<Individual> = self.told_types.keys().cloned().collect();
        for individual in individuals {
            if self.has_told_type(&individual, &nothing)? {
                return Ok(false);
            }
            for (c, d) in self.disjoint_pairs.clone() {
                if self.has_told_type(&individual, &c)? && self.has_told_type(&individual, &d)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn is_entailed(&mut self, axiom: &Axiom) -> Result<bool, OwlError> {
        let verdict = match axiom {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => self.entails_subsumption(sub_class, super_class)?,
            Axiom::ClassAssertion {
                class: ClassExpression::Class(class),
                individual,
            } => Some(self.has_told_type(individual, class)?),
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => {
                let mut found = false;
                let candidates: Vec<ObjectProperty> = self
                    .property_values
                    .iter()
                    .filter(|(_, s, t)| s == source && t == target)
                    .map(|(p, _, _)| p.clone())
                    .collect();
                for candidate in candidates {
                    if self.property_closure(&candidate)?.contains(property) {
                        found = true;
                        break;
                    }
                }
                Some(found)
            }
            Axiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => Some(self.is_told_sub_property(sub_property, super_property)?),
            _ => None,
        };
        match verdict {
            Some(verdict) => Ok(verdict || self.ontology.contains_axiom(axiom)),
            None if self.ontology.contains_axiom(axiom) => Ok(true),
            None => Err(ReasoningError::unsupported_construct(axiom, NAME).into()),
        }
    }

    fn super_classes(&mut self, class: &OwlClass) -> Result<Vec<OwlClass>, OwlError> {
        let mut result: Vec<OwlClass> = self
            .class_closure(class)?
            .iter()
            .filter(|c| *c != class && !c.is_thing())
            .cloned()
            .collect();
        result.sort();
        Ok(result)
    }
}
