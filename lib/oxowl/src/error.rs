//! Error types for OWL operations.

use std::io;

/// Errors that can occur during OWL operations.
#[derive(Debug, thiserror::Error)]
pub enum OwlError {
    /// Error building the OWL model from RDF.
    #[error("OWL parse error: {0}")]
    Parse(#[from] OwlParseError),

    /// Error during reasoning.
    #[error("Reasoning error: {0}")]
    Reasoning(#[from] ReasoningError),

    /// Ontology is inconsistent.
    #[error("Inconsistency: {0}")]
    Inconsistent(#[from] InconsistencyError),

    /// IRI parsing error.
    #[error("Invalid IRI: {0}")]
    InvalidIri(#[from] oxiri::IriParseError),

    /// Syntax error in the underlying RDF document.
    #[error("RDF error: {0}")]
    Rdf(#[from] oxrdfio::RdfParseError),

    /// I/O error while reading an ontology document.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors that can occur while building OWL axioms from an RDF graph.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct OwlParseError {
    kind: ParseErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Missing required property.
    MissingProperty,
    /// Invalid property value type.
    InvalidValue,
    /// Unknown OWL construct.
    UnknownConstruct,
    /// Malformed RDF list.
    MalformedList,
}

impl OwlParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a missing property error.
    pub fn missing_property(property: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingProperty,
            format!("Missing required property: {property}"),
        )
    }

    /// Creates an invalid value error.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, message)
    }

    /// Creates a malformed list error.
    pub fn malformed_list(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::MalformedList, message)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Errors that can occur during reasoning.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct ReasoningError {
    kind: ReasoningErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningErrorKind {
    /// Saturation exceeded the configured number of steps.
    MaxIterationsExceeded,
    /// Construct outside of what the reasoner handles.
    UnsupportedConstruct,
    /// Timeout during reasoning.
    Timeout,
}

impl ReasoningError {
    /// Creates a new reasoning error.
    pub fn new(kind: ReasoningErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a max iterations exceeded error.
    pub fn max_iterations_exceeded(iterations: usize) -> Self {
        Self::new(
            ReasoningErrorKind::MaxIterationsExceeded,
            format!("Exceeded maximum iterations ({iterations})"),
        )
    }

    /// Creates an unsupported construct error.
    pub fn unsupported_construct(construct: impl std::fmt::Display, reasoner: &str) -> Self {
        Self::new(
            ReasoningErrorKind::UnsupportedConstruct,
            format!("{construct} is not supported by the {reasoner} reasoner"),
        )
    }

    /// Creates a timeout error.
    pub fn timeout(limit: std::time::Duration) -> Self {
        Self::new(
            ReasoningErrorKind::Timeout,
            format!("Reasoning timeout exceeded ({limit:?})"),
        )
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ReasoningErrorKind {
        self.kind
    }
}

/// Error indicating an inconsistent ontology.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{explanation}")]
pub struct InconsistencyError {
    explanation: String,
}

impl InconsistencyError {
    /// Creates a new inconsistency error.
    pub fn new(explanation: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
        }
    }

    /// Returns the explanation.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// Result type for OWL operations.
pub type OwlResult<T> = Result<T, OwlError>;
