use super::*;
use crate::ns::{rdf, xsd};

/// An RDF literal.
///
/// The datatype is always materialized:
/// it defaults to `xsd:string`,
/// and is `rdf:langString` whenever a language tag is present.
/// Both fields are always set,
/// so that code consuming literals can treat them uniformly.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    value: String,
    datatype: NamedNode,
    language: Option<String>,
}

impl Literal {
    /// Build a plain literal, with datatype `xsd:string`.
    pub fn new<T: Into<String>>(value: T) -> Self {
        Literal {
            value: value.into(),
            datatype: xsd::string,
            language: None,
        }
    }

    /// Build a literal with the given datatype.
    pub fn new_dt<T: Into<String>>(value: T, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            datatype,
            language: None,
        }
    }

    /// Build a language-tagged string.
    ///
    /// An empty `language` is considered absent,
    /// in which case a plain `xsd:string` literal is returned.
    pub fn new_lang<T: Into<String>, U: Into<String>>(value: T, language: U) -> Self {
        let language = language.into();
        if language.is_empty() {
            return Literal::new(value);
        }
        Literal {
            value: value.into(),
            datatype: rdf::langString,
            language: Some(language),
        }
    }

    /// Build a literal from its three components, as they are.
    ///
    /// # Pre-condition
    ///
    /// If `language` is not `None`, `datatype` should be `rdf:langString`.
    /// This is not checked: this constructor is meant for mirroring literals
    /// produced elsewhere, including malformed ones.
    pub fn new_unchecked<T: Into<String>>(
        value: T,
        datatype: NamedNode,
        language: Option<String>,
    ) -> Self {
        Literal {
            value: value.into(),
            datatype,
            language,
        }
    }

    /// The lexical form of this literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype of this literal.
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// The language tag of this literal, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Whether this literal is a language-tagged string.
    pub fn is_lang_string(&self) -> bool {
        self.language.is_some()
    }

    /// Build a literal from `value` and an optional language tag or datatype.
    pub fn with<T: Into<String>>(value: T, language_or_datatype: LanguageOrDatatype) -> Self {
        match language_or_datatype {
            LanguageOrDatatype::None => Literal::new(value),
            LanguageOrDatatype::Language(tag) => Literal::new_lang(value, tag),
            LanguageOrDatatype::Datatype(dt) => Literal::new_dt(value, dt),
        }
    }
}

/// The optional second argument used to build a [`Literal`]:
/// either a language tag, a datatype, or nothing.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum LanguageOrDatatype {
    /// Neither a language nor a datatype: the literal is an `xsd:string`.
    #[default]
    None,
    /// A language tag: the literal is an `rdf:langString`.
    Language(String),
    /// An explicit datatype.
    Datatype(NamedNode),
}

impl From<&str> for LanguageOrDatatype {
    fn from(tag: &str) -> Self {
        LanguageOrDatatype::Language(tag.to_string())
    }
}

impl From<String> for LanguageOrDatatype {
    fn from(tag: String) -> Self {
        LanguageOrDatatype::Language(tag)
    }
}

impl From<NamedNode> for LanguageOrDatatype {
    fn from(dt: NamedNode) -> Self {
        LanguageOrDatatype::Datatype(dt)
    }
}

impl From<&NamedNode> for LanguageOrDatatype {
    fn from(dt: &NamedNode) -> Self {
        LanguageOrDatatype::Datatype(dt.clone())
    }
}

impl<T: Into<LanguageOrDatatype>> From<Option<T>> for LanguageOrDatatype {
    fn from(other: Option<T>) -> Self {
        other.map(Into::into).unwrap_or_default()
    }
}

impl From<()> for LanguageOrDatatype {
    fn from(_: ()) -> Self {
        LanguageOrDatatype::None
    }
}
