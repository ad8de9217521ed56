//! OWL 2 entity types (classes, object properties, individuals).

use oxrdf::{BlankNode, NamedNode, NamedNodeRef, Term};
use std::fmt;

const OWL_THING: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Thing");
const OWL_NOTHING: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Nothing");

/// Returns the short form of an IRI, that is the text after its last `#`,
/// or after its last `/` when there is no fragment.
///
/// The full IRI is returned if that suffix would be empty.
///
/// ```
/// use oxowl::short_form;
///
/// assert_eq!(short_form("http://example.org/pizza#Margherita"), "Margherita");
/// assert_eq!(short_form("http://example.org/Pizza"), "Pizza");
/// assert_eq!(short_form("http://example.org/"), "http://example.org/");
/// ```
pub fn short_form(iri: &str) -> &str {
    let start = iri
        .rfind('#')
        .or_else(|| iri.rfind('/'))
        .map_or(0, |i| i + 1);
    if start >= iri.len() {
        iri
    } else {
        &iri[start..]
    }
}

/// An OWL class (owl:Class).
///
/// Classes are sets of individuals. Every class is a subclass of owl:Thing
/// and a superclass of owl:Nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwlClass(NamedNode);

impl OwlClass {
    /// Creates a new OWL class from a named node.
    #[inline]
    pub fn new(iri: NamedNode) -> Self {
        Self(iri)
    }

    /// Creates a new OWL class from an IRI string.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// owl:Thing
    pub fn thing() -> Self {
        Self(OWL_THING.into_owned())
    }

    /// owl:Nothing
    pub fn nothing() -> Self {
        Self(OWL_NOTHING.into_owned())
    }

    /// Returns the IRI of this class.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Returns the short form of the class IRI.
    #[inline]
    pub fn short_form(&self) -> &str {
        short_form(self.0.as_str())
    }

    #[inline]
    pub fn is_thing(&self) -> bool {
        self.0.as_ref() == OWL_THING
    }

    #[inline]
    pub fn is_nothing(&self) -> bool {
        self.0.as_ref() == OWL_NOTHING
    }
}

impl fmt::Display for OwlClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNode> for OwlClass {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<OwlClass> for NamedNode {
    fn from(class: OwlClass) -> Self {
        class.0
    }
}

/// An OWL object property (owl:ObjectProperty).
///
/// Object properties relate individuals to individuals. In description logic
/// terms they are roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectProperty(NamedNode);

impl ObjectProperty {
    /// Creates a new object property from a named node.
    #[inline]
    pub fn new(iri: NamedNode) -> Self {
        Self(iri)
    }

    /// Creates a new object property from an IRI string.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// Returns the IRI of this property.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Returns the short form of the property IRI.
    #[inline]
    pub fn short_form(&self) -> &str {
        short_form(self.0.as_str())
    }
}

impl fmt::Display for ObjectProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNode> for ObjectProperty {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<ObjectProperty> for NamedNode {
    fn from(prop: ObjectProperty) -> Self {
        prop.0
    }
}

/// An OWL individual (named or anonymous).
///
/// Named individuals are identified by IRIs, anonymous ones by blank nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    /// A named individual (identified by an IRI).
    Named(NamedNode),
    /// An anonymous individual (blank node).
    Anonymous(BlankNode),
}

impl Individual {
    /// Returns `true` if this is a named individual.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Returns a reference to the named node if this is a named individual.
    #[inline]
    pub fn as_named(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Anonymous(_) => None,
        }
    }

    /// Returns the short form of the individual IRI, `None` for anonymous individuals.
    #[inline]
    pub fn short_form(&self) -> Option<&str> {
        self.as_named().map(|n| short_form(n.as_str()))
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::Anonymous(b) => write!(f, "{b}"),
        }
    }
}

impl From<NamedNode> for Individual {
    fn from(node: NamedNode) -> Self {
        Self::Named(node)
    }
}

impl From<BlankNode> for Individual {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Individual> for Term {
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}
