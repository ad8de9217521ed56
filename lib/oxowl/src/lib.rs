//! OWL 2 ontology support for the DL benchmark generator.
//!
//! This crate provides:
//! - Ontology data model (classes, object properties, individuals, axioms)
//! - RDF parsing (any format supported by `oxrdfio`), keeping document order
//! - OWL 2 functional-style syntax rendering through [`Display`](std::fmt::Display)
//! - Entailment reasoners: a completion-based EL reasoner and a told-structure reasoner
//!
//! # Example
//! ```
//! use oxowl::{Axiom, ClassExpression, ObjectProperty, Ontology, OwlClass, Reasoner, ReasonerKind};
//!
//! let margherita = OwlClass::new_from_iri("http://example.org/pizza#Margherita")?;
//! let pizza = OwlClass::new_from_iri("http://example.org/pizza#Pizza")?;
//! let base = OwlClass::new_from_iri("http://example.org/pizza#PizzaBase")?;
//! let has_base = ObjectProperty::new_from_iri("http://example.org/pizza#hasBase")?;
//!
//! let mut ontology = Ontology::new(None);
//! ontology.add_axiom(Axiom::subclass_of(margherita.clone(), pizza.clone()));
//! ontology.add_axiom(Axiom::subclass_of(
//!     pizza,
//!     ClassExpression::some_values_from(has_base.clone(), base.clone()),
//! ));
//!
//! let mut reasoner = ReasonerKind::El.create(&ontology, Default::default());
//! let query = Axiom::subclass_of(margherita, ClassExpression::some_values_from(has_base, base));
//! assert!(reasoner.is_entailed(&query)?);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod axiom;
mod entity;
mod error;
mod expression;
mod functional;
mod ontology;
mod parser;
mod reasoner;

pub use axiom::Axiom;
pub use entity::{Individual, ObjectProperty, OwlClass, short_form};
pub use error::{
    InconsistencyError, OwlError, OwlParseError, OwlResult, ParseErrorKind, ReasoningError,
    ReasoningErrorKind,
};
pub use expression::{ClassExpression, ObjectPropertyExpression};
pub use ontology::Ontology;
pub use parser::{
    OWL_NAMESPACE, OntologyParser, ParserConfig, parse_ontology, parse_ontology_from_reader,
    parse_ontology_with_config,
};
pub use reasoner::{ElReasoner, Reasoner, ReasonerConfig, ReasonerKind, StructuralReasoner};
