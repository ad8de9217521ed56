//! Entailment reasoners.
//!
//! Two implementations share the [`Reasoner`] trait:
//! - [`ElReasoner`], a completion-based reasoner for the OWL 2 EL profile
//!   with role hierarchies and transitive roles.
//! - [`StructuralReasoner`], which only follows told (asserted) structure.
//!
//! A reasoner borrows the ontology it was created for and is released by
//! dropping it.

mod el;
mod structural;

pub use el::ElReasoner;
pub use structural::StructuralReasoner;

use crate::axiom::Axiom;
use crate::entity::OwlClass;
use crate::error::{OwlError, ReasoningError};
use crate::ontology::Ontology;
use std::fmt;
use std::time::{Duration, Instant};

/// Configuration for the reasoners.
#[derive(Debug, Clone)]
pub struct ReasonerConfig {
    /// Maximum number of inference steps before giving up.
    pub max_iterations: usize,
    /// Maximum time allowed for reasoning (None = unlimited).
    pub timeout: Option<Duration>,
    /// Whether entailment checks fail on an inconsistent ontology.
    pub check_consistency: bool,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000_000,
            timeout: None,
            check_consistency: true,
        }
    }
}

impl ReasonerConfig {
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_check_consistency(mut self, check_consistency: bool) -> Self {
        self.check_consistency = check_consistency;
        self
    }
}

/// Trait for OWL reasoners.
pub trait Reasoner {
    /// Name of the reasoner, for logs and reports.
    fn name(&self) -> &'static str;

    /// Computes the inferences for every class and individual of the ontology.
    ///
    /// Optional: entailment checks compute what they need on demand.
    fn precompute_inferences(&mut self) -> Result<(), OwlError>;

    /// Checks if the ontology is consistent.
    fn is_consistent(&mut self) -> Result<bool, OwlError>;

    /// Checks if the ontology entails `axiom`.
    fn is_entailed(&mut self, axiom: &Axiom) -> Result<bool, OwlError>;

    /// Returns the named superclasses of a class (indirect ones included, the class itself excluded).
    fn super_classes(&mut self, class: &OwlClass) -> Result<Vec<OwlClass>, OwlError>;
}

/// The available reasoner implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReasonerKind {
    /// [`StructuralReasoner`]
    Structural,
    /// [`ElReasoner`]
    #[default]
    El,
}

impl ReasonerKind {
    pub const ALL: [Self; 2] = [Self::El, Self::Structural];

    pub fn name(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::El => "el",
        }
    }

    /// Builds a reasoner of this kind over `ontology`.
    pub fn create<'a>(
        self,
        ontology: &'a Ontology,
        config: ReasonerConfig,
    ) -> Box<dyn Reasoner + 'a> {
        match self {
            Self::Structural => Box::new(StructuralReasoner::with_config(ontology, config)),
            Self::El => Box::new(ElReasoner::with_config(ontology, config)),
        }
    }
}

impl fmt::Display for ReasonerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Step and time accounting shared by the reasoners.
#[derive(Debug)]
pub(crate) struct Budget {
    max_iterations: usize,
    timeout: Option<Duration>,
    start_time: Instant,
    steps: usize,
}

impl Budget {
    pub(crate) fn new(config: &ReasonerConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            timeout: config.timeout,
            start_time: Instant::now(),
            steps: 0,
        }
    }

    /// Accounts for one inference step.
    pub(crate) fn tick(&mut self) -> Result<(), ReasoningError> {
        self.steps += 1;
        if self.steps > self.max_iterations {
            return Err(ReasoningError::max_iterations_exceeded(self.max_iterations));
        }
        if self.steps % 1024 == 0 {
            self.check_timeout()?;
        }
        Ok(())
    }

    pub(crate) fn check_timeout(&self) -> Result<(), ReasoningError> {
        if let Some(timeout) = self.timeout {
            if self.start_time.elapsed() >= timeout {
                return Err(ReasoningError::timeout(timeout));
            }
        }
        Ok(())
    }
}
