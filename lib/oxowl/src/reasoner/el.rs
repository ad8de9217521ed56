//! Completion-based reasoner for the OWL 2 EL profile.
//!
//! Axioms are normalized into four rule shapes over concept ids:
//! `A ⊑ B`, `A1 ⊓ A2 ⊑ B`, `A ⊑ ∃r.B` and `∃r.A ⊑ B`, plus a role hierarchy
//! and a set of transitive roles. Complex expressions get auxiliary names.
//! Individuals are handled as nominal concepts `{a}`.
//!
//! Saturation is goal-directed: only the contexts (concepts) that were
//! activated by a query, or by [`precompute_inferences`](Reasoner::precompute_inferences),
//! are saturated. Rules added after saturation started are replayed against
//! the existing contexts, so query normalization can reuse all previous work.
//!
//! Axioms the rules cannot express are kept aside: a query is entailed if it
//! is one of them, or if its left-hand side is subsumed by the left-hand side
//! of a kept `SubClassOf` axiom with the same right-hand side.
//!
//! The nominal rule of EL++ that merges two contexts subsumed by the same
//! nominal when one is reachable from the other is not implemented, so
//! entailments that need it (`c : ∃r.A`, `A ⊑ {a}`, `A ⊑ X` gives `a : X`)
//! are missed.

use super::{Budget, Reasoner, ReasonerConfig};
use crate::axiom::Axiom;
use crate::entity::{Individual, ObjectProperty, OwlClass};
use crate::error::{InconsistencyError, OwlError, ReasoningError};
use crate::expression::{ClassExpression, ObjectPropertyExpression};
use crate::ontology::Ontology;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

const TOP: usize = 0;
const BOTTOM: usize = 1;
const NAME: &str = "EL";

#[derive(Debug, Clone)]
enum Concept {
    Top,
    Bottom,
    Class(OwlClass),
    Nominal,
    Auxiliary,
}

#[derive(Debug, Clone, Copy)]
enum Work {
    /// Second concept is a subsumer of the first one.
    Subsumer(usize, usize),
    /// Source, role, target.
    Link(usize, usize, usize),
}

/// OWL 2 EL completion reasoner.
#[derive(Debug)]
pub struct ElReasoner {
    config: ReasonerConfig,
    budget: Budget,

    concepts: Vec<Concept>,
    class_ids: FxHashMap<OwlClass, usize>,
    nominal_ids: FxHashMap<Individual, usize>,
    role_ids: FxHashMap<ObjectProperty, usize>,

    /// Direct told super roles, per role
    told_super_roles: Vec<Vec<usize>>,
    /// Reflexive transitive closure of the role hierarchy, per role
    super_roles: Vec<FxHashSet<usize>>,
    transitive_roles: FxHashSet<usize>,

    lhs_cache: FxHashMap<ClassExpression, usize>,
    rhs_cache: FxHashMap<ClassExpression, usize>,

    // Normalized rules, indexed by their premise concept
    told: Vec<Vec<usize>>,
    conjunctions: Vec<Vec<(usize, usize)>>,
    existentials_rhs: Vec<Vec<(usize, usize)>>,
    existentials_lhs: Vec<Vec<(usize, usize)>>,

    // Completion state
    subsumers: Vec<FxHashSet<usize>>,
    active: Vec<bool>,
    active_concepts: Vec<usize>,
    links: Vec<FxHashSet<(usize, usize)>>,
    predecessors: Vec<Vec<(usize, usize)>>,
    queue: VecDeque<Work>,

    consistent: Option<bool>,
    /// Ontology axioms outside of the normalized rules
    skipped: Vec<Axiom>,
}

impl ElReasoner {
    /// Creates a new EL reasoner for the given ontology.
    pub fn new(ontology: &Ontology) -> Self {
        Self::with_config(ontology, ReasonerConfig::default())
    }

    /// Creates a new EL reasoner with custom configuration.
    ///
    /// Axioms outside of what the reasoner handles (unions, complements,
    /// universal restrictions, inverse roles, cardinalities, ranges...) are
    /// ignored, see [`skipped_axioms`](Self::skipped_axioms).
    pub fn with_config(ontology: &Ontology, config: ReasonerConfig) -> Self {
        let mut reasoner = Self {
            budget: Budget::new(&config),
            config,
            concepts: Vec::new(),
            class_ids: FxHashMap::default(),
            nominal_ids: FxHashMap::default(),
            role_ids: FxHashMap::default(),
            told_super_roles: Vec::new(),
            super_roles: Vec::new(),
            transitive_roles: FxHashSet::default(),
            lhs_cache: FxHashMap::default(),
            rhs_cache: FxHashMap::default(),
            told: Vec::new(),
            conjunctions: Vec::new(),
            existentials_rhs: Vec::new(),
            existentials_lhs: Vec::new(),
            subsumers: Vec::new(),
            active: Vec::new(),
            active_concepts: Vec::new(),
            links: Vec::new(),
            predecessors: Vec::new(),
            queue: VecDeque::new(),
            consistent: None,
            skipped: Vec::new(),
        };
        reasoner.new_concept(Concept::Top);
        reasoner.new_concept(Concept::Bottom);
        for class in ontology.classes() {
            reasoner.class_id(class);
        }
        for individual in ontology.individuals() {
            reasoner.nominal_id(individual);
        }
        for property in ontology.object_properties() {
            reasoner.role_id(property);
        }
        for axiom in ontology.axioms() {
            if !reasoner.load_axiom(axiom) {
                reasoner.skipped.push(axiom.clone());
            }
        }
        reasoner.close_role_hierarchy();
        reasoner
    }

    /// Number of ontology axioms the reasoner ignored.
    pub fn skipped_axioms(&self) -> usize {
        self.skipped.len()
    }

    fn new_concept(&mut self, concept: Concept) -> usize {
        let id = self.concepts.len();
        self.concepts.push(concept);
        self.told.push(Vec::new());
        self.conjunctions.push(Vec::new());
        self.existentials_rhs.push(Vec::new());
        self.existentials_lhs.push(Vec::new());
        self.subsumers.push(FxHashSet::default());
        self.active.push(false);
        self.links.push(FxHashSet::default());
        self.predecessors.push(Vec::new());
        id
    }

    fn class_id(&mut self, class: &OwlClass) -> usize {
        if class.is_thing() {
            return TOP;
        }
        if class.is_nothing() {
            return BOTTOM;
        }
        if let Some(&id) = self.class_ids.get(class) {
            return id;
        }
        let id = self.new_concept(Concept::Class(class.clone()));
        self.class_ids.insert(class.clone(), id);
        id
    }

    fn nominal_id(&mut self, individual: &Individual) -> usize {
        if let Some(&id) = self.nominal_ids.get(individual) {
            return id;
        }
        let id = self.new_concept(Concept::Nominal);
        self.nominal_ids.insert(individual.clone(), id);
        id
    }

    fn role_id(&mut self, property: &ObjectProperty) -> usize {
        if let Some(&id) = self.role_ids.get(property) {
            return id;
        }
        let id = self.told_super_roles.len();
        self.role_ids.insert(property.clone(), id);
        self.told_super_roles.push(Vec::new());
        self.super_roles.push(std::iter::once(id).collect());
        id
    }

    fn named_role(&mut self, property: &ObjectPropertyExpression) -> Option<usize> {
        property.as_property().map(|p| self.role_id(p))
    }

    fn close_role_hierarchy(&mut self) {
        for role in 0..self.told_super_roles.len() {
            let mut closure = FxHashSet::default();
            let mut stack = vec![role];
            while let Some(r) = stack.pop() {
                if closure.insert(r) {
                    stack.extend(self.told_super_roles[r].iter().copied());
                }
            }
            self.super_roles[role] = closure;
        }
    }

    /// Normalizes an ontology axiom. Returns false if it is ignored.
    fn load_axiom(&mut self, axiom: &Axiom) -> bool {
        match axiom {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => self.add_subsumption(sub_class, super_class),
            Axiom::EquivalentClasses(classes) => {
                let mut loaded = true;
                for (i, c) in classes.iter().enumerate() {
                    for (j, d) in classes.iter().enumerate() {
                        if i != j {
                            loaded &= self.add_subsumption(c, d);
                        }
                    }
                }
                loaded
            }
            Axiom::DisjointClasses(classes) => {
                let mut loaded = true;
                for (i, c) in classes.iter().enumerate() {
                    for d in &classes[i + 1..] {
                        let both = ClassExpression::intersection(vec![c.clone(), d.clone()]);
                        match self.lhs_name(&both) {
                            Some(id) => self.add_told(id, BOTTOM),
                            None => loaded = false,
                        }
                    }
                }
                loaded
            }
            Axiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => match (self.named_role(sub_property), self.named_role(super_property)) {
                (Some(sub), Some(sup)) => {
                    self.told_super_roles[sub].push(sup);
                    true
                }
                _ => false,
            },
            Axiom::EquivalentObjectProperties(properties) => {
                let ids: Vec<usize> = properties.iter().map(|p| self.role_id(p)).collect();
                for &r in &ids {
                    for &s in &ids {
                        if r != s {
                            self.told_super_roles[r].push(s);
                        }
                    }
                }
                true
            }
            Axiom::ObjectPropertyDomain { property, domain } => {
                let role = self.role_id(property);
                match self.rhs_name(domain) {
                    Some(id) => {
                        self.add_existential_lhs(role, TOP, id);
                        true
                    }
                    None => false,
                }
            }
            Axiom::TransitiveObjectProperty(property) => {
                let role = self.role_id(property);
                self.transitive_roles.insert(role);
                true
            }
            Axiom::ClassAssertion { class, individual } => {
                let nominal = self.nominal_id(individual);
                match self.rhs_name(class) {
                    Some(id) => {
                        self.add_told(nominal, id);
                        true
                    }
                    None => false,
                }
            }
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => {
                let role = self.role_id(property);
                let source = self.nominal_id(source);
                let target = self.nominal_id(target);
                self.add_existential_rhs(source, role, target);
                true
            }
            Axiom::SameIndividual(individuals) => {
                let ids: Vec<usize> = individuals.iter().map(|i| self.nominal_id(i)).collect();
                for &a in &ids {
                    for &b in &ids {
                        if a != b {
                            self.add_told(a, b);
                        }
                    }
                }
                true
            }
            Axiom::DeclareClass(_)
            | Axiom::DeclareObjectProperty(_)
            | Axiom::DeclareNamedIndividual(_) => true,
            Axiom::ObjectPropertyRange { .. }
            | Axiom::InverseObjectProperties(..)
            | Axiom::FunctionalObjectProperty(_)
            | Axiom::InverseFunctionalObjectProperty(_)
            | Axiom::ReflexiveObjectProperty(_)
            | Axiom::IrreflexiveObjectProperty(_)
            | Axiom::SymmetricObjectProperty(_)
            | Axiom::AsymmetricObjectProperty(_)
            | Axiom::DifferentIndividuals(_) => false,
        }
    }

    fn add_subsumption(&mut self, sub: &ClassExpression, sup: &ClassExpression) -> bool {
        let Some(sub) = self.lhs_name(sub) else {
            return false;
        };
        let Some(sup) = self.rhs_name(sup) else {
            return false;
        };
        self.add_told(sub, sup);
        true
    }

    /// Returns a concept `X` such that the expression is subsumed by `X`.
    ///
    /// Used for expressions on the left-hand side of a subsumption.
    fn lhs_name(&mut self, expression: &ClassExpression) -> Option<usize> {
        if let Some(&id) = self.lhs_cache.get(expression) {
            return Some(id);
        }
        let id = match expression {
            ClassExpression::Class(c) => return Some(self.class_id(c)),
            ClassExpression::ObjectOneOf(individuals) => {
                return match individuals.as_slice() {
                    [individual] => Some(self.nominal_id(individual)),
                    _ => None,
                };
            }
            ClassExpression::ObjectIntersectionOf(operands) => {
                let mut ids = Vec::with_capacity(operands.len());
                for operand in operands {
                    ids.push(self.lhs_name(operand)?);
                }
                let mut ids = ids.into_iter();
                let Some(mut current) = ids.next() else {
                    return Some(TOP);
                };
                for next in ids {
                    let conjunction = self.new_concept(Concept::Auxiliary);
                    self.add_conjunction(current, next, conjunction);
                    current = conjunction;
                }
                current
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                let role = self.named_role(property)?;
                let filler = self.lhs_name(filler)?;
                let id = self.new_concept(Concept::Auxiliary);
                self.add_existential_lhs(role, filler, id);
                id
            }
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => {
                let role = self.named_role(property)?;
                let filler = self.nominal_id(individual);
                let id = self.new_concept(Concept::Auxiliary);
                self.add_existential_lhs(role, filler, id);
                id
            }
            _ => return None,
        };
        self.lhs_cache.insert(expression.clone(), id);
        Some(id)
    }

    /// Returns a concept `X` such that `X` is subsumed by the expression.
    ///
    /// Used for expressions on the right-hand side of a subsumption.
    fn rhs_name(&mut self, expression: &ClassExpression) -> Option<usize> {
        if let Some(&id) = self.rhs_cache.get(expression) {
            return Some(id);
        }
        let id = match expression {
            ClassExpression::Class(c) => return Some(self.class_id(c)),
            ClassExpression::ObjectOneOf(individuals) => {
                return match individuals.as_slice() {
                    [individual] => Some(self.nominal_id(individual)),
                    _ => None,
                };
            }
            ClassExpression::ObjectIntersectionOf(operands) => {
                let mut ids = Vec::with_capacity(operands.len());
                for operand in operands {
                    ids.push(self.rhs_name(operand)?);
                }
                if let [single] = ids.as_slice() {
                    return Some(*single);
                }
                let id = self.new_concept(Concept::Auxiliary);
                for operand in ids {
                    self.add_told(id, operand);
                }
                id
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                let role = self.named_role(property)?;
                let filler = self.rhs_name(filler)?;
                let id = self.new_concept(Concept::Auxiliary);
                self.add_existential_rhs(id, role, filler);
                id
            }
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => {
                let role = self.named_role(property)?;
                let filler = self.nominal_id(individual);
                let id = self.new_concept(Concept::Auxiliary);
                self.add_existential_rhs(id, role, filler);
                id
            }
            _ => return None,
        };
        self.rhs_cache.insert(expression.clone(), id);
        Some(id)
    }

    fn add_told(&mut self, sub: usize, sup: usize) {
        self.told[sub].push(sup);
        for &x in &self.active_concepts {
            if self.subsumers[x].contains(&sub) {
                self.queue.push_back(Work::Subsumer(x, sup));
            }
        }
    }

    fn add_conjunction(&mut self, first: usize, second: usize, result: usize) {
        self.conjunctions[first].push((second, result));
        if first != second {
            self.conjunctions[second].push((first, result));
        }
        for &x in &self.active_concepts {
            if self.subsumers[x].contains(&first) && self.subsumers[x].contains(&second) {
                self.queue.push_back(Work::Subsumer(x, result));
            }
        }
    }

    fn add_existential_rhs(&mut self, sub: usize, role: usize, filler: usize) {
        self.existentials_rhs[sub].push((role, filler));
        for &x in &self.active_concepts {
            if self.subsumers[x].contains(&sub) {
                self.queue.push_back(Work::Link(x, role, filler));
            }
        }
    }

    fn add_existential_lhs(&mut self, role: usize, filler: usize, result: usize) {
        self.existentials_lhs[filler].push((role, result));
        for &y in &self.active_concepts {
            if self.subsumers[y].contains(&filler) {
                for &(x, r) in &self.predecessors[y] {
                    if self.super_roles[r].contains(&role) {
                        self.queue.push_back(Work::Subsumer(x, result));
                    }
                }
            }
        }
    }

    fn activate(&mut self, concept: usize) {
        if !self.active[concept] {
            self.active[concept] = true;
            self.active_concepts.push(concept);
            self.queue.push_back(Work::Subsumer(concept, concept));
            self.queue.push_back(Work::Subsumer(concept, TOP));
        }
    }

    fn saturate(&mut self) -> Result<(), ReasoningError> {
        while let Some(work) = self.queue.pop_front() {
            self.budget.tick()?;
            match work {
                Work::Subsumer(x, a) => self.process_subsumer(x, a),
                Work::Link(x, r, y) => self.process_link(x, r, y),
            }
        }
        Ok(())
    }

    fn process_subsumer(&mut self, x: usize, a: usize) {
        if !self.subsumers[x].insert(a) {
            return;
        }
        for &b in &self.told[a] {
            self.queue.push_back(Work::Subsumer(x, b));
        }
        for &(other, b) in &self.conjunctions[a] {
            if self.subsumers[x].contains(&other) {
                self.queue.push_back(Work::Subsumer(x, b));
            }
        }
        for &(role, filler) in &self.existentials_rhs[a] {
            self.queue.push_back(Work::Link(x, role, filler));
        }
        for &(y, r) in &self.predecessors[x] {
            for &(s, b) in &self.existentials_lhs[a] {
                if self.super_roles[r].contains(&s) {
                    self.queue.push_back(Work::Subsumer(y, b));
                }
            }
            if a == BOTTOM {
                self.queue.push_back(Work::Subsumer(y, BOTTOM));
            }
        }
    }

    fn process_link(&mut self, x: usize, r: usize, y: usize) {
        if !self.links[x].insert((r, y)) {
            return;
        }
        self.activate(y);
        self.predecessors[y].push((x, r));
        for &a in &self.subsumers[y] {
            for &(s, b) in &self.existentials_lhs[a] {
                if self.super_roles[r].contains(&s) {
                    self.queue.push_back(Work::Subsumer(x, b));
                }
            }
            if a == BOTTOM {
                self.queue.push_back(Work::Subsumer(x, BOTTOM));
            }
        }
        for &s in &self.super_roles[r] {
            if !self.transitive_roles.contains(&s) {
                continue;
            }
            for &(t, w) in &self.links[y] {
                if self.super_roles[t].contains(&s) {
                    self.queue.push_back(Work::Link(x, s, w));
                }
            }
            for &(z, t) in &self.predecessors[x] {
                if self.super_roles[t].contains(&s) {
                    self.queue.push_back(Work::Link(z, s, y));
                }
            }
        }
    }

    fn check_consistency(&mut self) -> Result<bool, ReasoningError> {
        if let Some(consistent) = self.consistent {
            return Ok(consistent);
        }
        self.activate(TOP);
        let nominals: Vec<usize> = self.nominal_ids.values().copied().collect();
        for &nominal in &nominals {
            self.activate(nominal);
        }
        self.saturate()?;
        let consistent = !self.subsumers[TOP].contains(&BOTTOM)
            && nominals
                .iter()
                .all(|&nominal| !self.subsumers[nominal].contains(&BOTTOM));
        self.consistent = Some(consistent);
        Ok(consistent)
    }

    fn ensure_consistent(&mut self) -> Result<(), OwlError> {
        if self.config.check_consistency && !self.check_consistency()? {
            return Err(InconsistencyError::new(
                "owl:Thing or an asserted individual is unsatisfiable",
            )
            .into());
        }
        Ok(())
    }

    /// Checks that `sup` is a subsumer of the context `sub`.
    fn holds(&mut self, sub: usize, sup: usize) -> Result<bool, OwlError> {
        self.ensure_consistent()?;
        self.activate(sub);
        self.saturate()?;
        Ok(self.subsumers[sub].contains(&sup) || self.subsumers[sub].contains(&BOTTOM))
    }

    fn entails_subsumption(
        &mut self,
        sub: &ClassExpression,
        sup: &ClassExpression,
    ) -> Result<bool, OwlError> {
        let x = self
            .rhs_name(sub)
            .ok_or_else(|| ReasoningError::unsupported_construct(sub, NAME))?;
        if let Some(y) = self.lhs_name(sup) {
            return self.holds(x, y);
        }
        // sub ⊑ sup follows from sub ⊑ C and a kept C ⊑ sup
        let candidates: Vec<ClassExpression> = self
            .skipped
            .iter()
            .filter_map(|axiom| match axiom {
                Axiom::SubClassOf {
                    sub_class,
                    super_class,
                } if super_class == sup => Some(sub_class.clone()),
                _ => None,
            })
            .collect();
        if candidates.is_empty() {
            return Err(ReasoningError::unsupported_construct(sup, NAME).into());
        }
        for candidate in &candidates {
            if let Some(y) = self.lhs_name(candidate) {
                if self.holds(x, y)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn entails_sub_property(
        &mut self,
        sub: &ObjectPropertyExpression,
        sup: &ObjectPropertyExpression,
    ) -> Result<bool, OwlError> {
        let r = self
            .named_role(sub)
            .ok_or_else(|| ReasoningError::unsupported_construct(sub, NAME))?;
        let s = self
            .named_role(sup)
            .ok_or_else(|| ReasoningError::unsupported_construct(sup, NAME))?;
        Ok(self.super_roles[r].contains(&s))
    }
}

impl Reasoner for ElReasoner {
    fn name(&self) -> &'static str {
        "el"
    }

    fn precompute_inferences(&mut self) -> Result<(), OwlError> {
        let contexts: Vec<usize> = self
            .concepts
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Concept::Top | Concept::Class(_) | Concept::Nominal))
            .map(|(id, _)| id)
            .collect();
        for id in contexts {
            self.activate(id);
        }
        self.saturate()?;
        Ok(())
    }

    fn is_consistent(&mut self) -> Result<bool, OwlError> {
        Ok(self.check_consistency()?)
    }

    fn is_entailed(&mut self, axiom: &Axiom) -> Result<bool, OwlError> {
        if self.skipped.contains(axiom) {
            self.ensure_consistent()?;
            return Ok(true);
        }
        match axiom {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => self.entails_subsumption(sub_class, super_class),
            Axiom::EquivalentClasses(classes) => {
                for c in classes {
                    for d in classes {
                        if c != d && !self.entails_subsumption(c, d)? {
                            return Ok(false);
                        }
                    }
                }
                Ok(true)
            }
            Axiom::DisjointClasses(classes) => {
                let nothing = ClassExpression::Class(OwlClass::nothing());
                for (i, c) in classes.iter().enumerate() {
                    for d in &classes[i + 1..] {
                        let both = ClassExpression::intersection(vec![c.clone(), d.clone()]);
                        if !self.entails_subsumption(&both, &nothing)? {
                            return Ok(false);
                        }
                    }
                }
                Ok(true)
            }
            Axiom::ClassAssertion { class, individual } => {
                let x = self.nominal_id(individual);
                let y = self
                    .lhs_name(class)
                    .ok_or_else(|| ReasoningError::unsupported_construct(class, NAME))?;
                self.holds(x, y)
            }
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => {
                let x = self.nominal_id(source);
                let value = ClassExpression::ObjectHasValue {
                    property: property.clone().into(),
                    individual: target.clone(),
                };
                let y = self
                    .lhs_name(&value)
                    .ok_or_else(|| ReasoningError::unsupported_construct(&value, NAME))?;
                self.holds(x, y)
            }
            Axiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => self.entails_sub_property(sub_property, super_property),
            Axiom::EquivalentObjectProperties(properties) => {
                for p in properties {
                    for q in properties {
                        if !self.entails_sub_property(&p.clone().into(), &q.clone().into())? {
                            return Ok(false);
                        }
                    }
                }
                Ok(true)
            }
            Axiom::ObjectPropertyDomain { property, domain } => {
                let restriction =
                    ClassExpression::some_values_from(property.clone(), OwlClass::thing());
                self.entails_subsumption(&restriction, domain)
            }
            Axiom::TransitiveObjectProperty(property) => {
                let role = self.role_id(property);
                Ok(self.transitive_roles.contains(&role))
            }
            Axiom::DeclareClass(_)
            | Axiom::DeclareObjectProperty(_)
            | Axiom::DeclareNamedIndividual(_) => Ok(true),
            _ => Err(ReasoningError::unsupported_construct(axiom.kind_name(), NAME).into()),
        }
    }

    fn super_classes(&mut self, class: &OwlClass) -> Result<Vec<OwlClass>, OwlError> {
        let x = self.class_id(class);
        self.activate(x);
        self.saturate()?;
        let mut result: Vec<OwlClass> = self.subsumers[x]
            .iter()
            .filter(|&&id| id != x)
            .filter_map(|&id| match &self.concepts[id] {
                Concept::Class(c) => Some(c.clone()),
                _ => None,
            })
            .collect();
        result.sort();
        Ok(result)
    }
}
