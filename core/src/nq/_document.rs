use std::io::BufRead;

use ontologies_api::quad::Quad;
use ontologies_api::term::Comparable;
use ontologies_api::Result;
use rio_api::parser::QuadsParser;
use rio_turtle::NQuadsParser;

use super::{render, NqError};
use crate::rio::quad_from_rio;
use crate::PlainFactory;

/// Parse an N-Quads document from a [`BufRead`].
pub fn parse_bufread<R: BufRead>(factory: &PlainFactory, read: R) -> Result<Vec<Quad>, NqError> {
    let mut quads = Vec::new();
    NQuadsParser::new(read).parse_all(&mut |q| -> Result<(), NqError> {
        quads.push(quad_from_rio(factory, q)?);
        Ok(())
    })?;
    log::debug!("parsed {} quads from N-Quads document", quads.len());
    Ok(quads)
}

/// Parse an N-Quads document from a string.
pub fn parse_str(factory: &PlainFactory, txt: &str) -> Result<Vec<Quad>, NqError> {
    parse_bufread(factory, txt.as_bytes())
}

/// Render `quads` as an N-Quads document, one statement per line.
pub fn to_nq_document<'a, I, C>(quads: I) -> Result<String>
where
    I: IntoIterator<Item = C>,
    C: Into<Comparable<'a>>,
{
    let mut doc = String::new();
    for q in quads {
        doc.push_str(&render(q.into())?);
        doc.push('\n');
    }
    Ok(doc)
}

#[cfg(test)]
mod test {
    use super::*;
    use ontologies_api::ns::{rdf, xsd};
    use ontologies_api::prelude::*;

    const DOC: &str = r#"# a comment
<http://ex/s> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://ex/C> .
_:b1 <http://ex/p> "line\nbreak"@en <http://ex/g> .

<http://ex/s> <http://ex/age> "42"^^<http://www.w3.org/2001/XMLSchema#integer> _:g .
"#;

    #[test]
    fn parse_document() {
        let f = PlainFactory::new();
        let quads = parse_str(&f, DOC).unwrap();
        assert_eq!(quads.len(), 3);

        assert_eq!(quads[0].predicate(), &rdf::type_);
        assert!(quads[0].graph().is_default_graph());

        assert_eq!(quads[1].subject(), &Node::from(BlankNode::new("b1")));
        let lit = quads[1].object().as_literal().unwrap();
        assert_eq!(lit.value(), "line\nbreak");
        assert_eq!(lit.language(), Some("en"));
        assert_eq!(quads[1].graph(), &Node::from(NamedNode::new("http://ex/g")));

        let lit = quads[2].object().as_literal().unwrap();
        assert_eq!(lit.datatype(), &xsd::integer);
        assert_eq!(quads[2].graph(), &Node::from(BlankNode::new("g")));
    }

    #[test]
    fn render_document() {
        let f = PlainFactory::new();
        let quads = parse_str(&f, DOC).unwrap();
        let doc = to_nq_document(&quads).unwrap();
        let expected = [
            "<http://ex/s> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://ex/C> .",
            r#"_:b1 <http://ex/p> "line\nbreak"@en <http://ex/g> ."#,
            r#"<http://ex/s> <http://ex/age> "42"^^<http://www.w3.org/2001/XMLSchema#integer> _:g ."#,
        ];
        assert_eq!(doc.lines().collect::<Vec<_>>(), expected);
        assert!(doc.ends_with(".\n"));
        assert_eq!(parse_str(&f, &doc).unwrap(), quads);
    }

    #[test]
    fn empty_document() {
        let f = PlainFactory::new();
        assert!(parse_str(&f, "").unwrap().is_empty());
        assert_eq!(to_nq_document(Vec::<&Quad>::new()).unwrap(), "");
    }

    #[test]
    fn syntax_error() {
        let f = PlainFactory::new();
        let err = parse_str(&f, "<http://ex/s> <http://ex/p> .").unwrap_err();
        assert!(matches!(err, NqError::Syntax(_)));
    }
}
