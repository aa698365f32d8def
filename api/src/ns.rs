//! Standard and custom namespaces.
//!
//! This module provides:
//! * the [`Namespace`] type for defining custom dynamic namespaces;
//! * the [`namespace`] macro, for defining custom static namespaces;
//! * modules corresponding to the namespaces needed for ontology modeling
//!   (generated via the [`namespace`] macro).
//!
//! # Example use
//! ```
//! use ontologies_api::ns::{Namespace, rdf, rdfs, xsd};
//!
//! let schema = Namespace::new("http://schema.org/");
//! let s_name = schema.get("name");
//!
//! assert_eq!(s_name.value(), "http://schema.org/name");
//! assert_eq!(rdf::type_.value(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! assert_eq!(rdfs::range.doc(), "http://www.w3.org/2000/01/rdf-schema");
//! assert_eq!(xsd::string.value(), "http://www.w3.org/2001/XMLSchema#string");
//! ```
#[macro_use]
mod _macro;
pub use _macro::*;
mod _namespace;
pub use _namespace::*;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Alt,
        Bag,
        List,
        PlainLiteral,
        Property,
        Seq,
        Statement,
        // datatypes
        HTML,
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        // core properties
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        base64Binary,
        boolean,
        byte,
        date,
        dateTime,
        decimal,
        double,
        duration,
        float,
        gDay,
        gMonth,
        gYear,
        hexBinary,
        int,
        integer,
        language,
        long,
        negativeInteger,
        nonNegativeInteger,
        nonPositiveInteger,
        normalizedString,
        positiveInteger,
        short,
        string,
        time,
        token,
        unsignedByte,
        unsignedInt,
        unsignedLong,
        unsignedShort
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        // types
        Class,
        Container,
        ContainerMembershipProperty,
        Datatype,
        Literal,
        Resource,
        // semantic properties
        domain,
        range,
        subClassOf,
        subPropertyOf,
        // documentation properties
        comment,
        isDefinedBy,
        label,
        member,
        seeAlso
    );
}

/// The standard `owl:` namespace.
pub mod owl {
    namespace!(
        "http://www.w3.org/2002/07/owl#",
        AnnotationProperty,
        Class,
        DatatypeProperty,
        DeprecatedClass,
        DeprecatedProperty,
        FunctionalProperty,
        InverseFunctionalProperty,
        NamedIndividual,
        ObjectProperty,
        Ontology,
        SymmetricProperty,
        TransitiveProperty,
        Thing,
        equivalentClass,
        equivalentProperty,
        imports,
        inverseOf,
        sameAs,
        versionInfo
    );
}
