use lazy_static::lazy_static;
use ontologies_api::factory::RdfObject;
use ontologies_api::quad::{Quad, DEFAULT_GRAPH};
use ontologies_api::term::{BlankNode, Literal, NamedNode, Node, Term};
use ontologies_api::{FactoryError, Result};
use regex::Regex;

lazy_static! {
    static ref LANG_TAG: Regex =
        Regex::new(r"^@((?:[a-zA-Z0-9-]|\\u[0-9a-fA-F]{4}|\\U[0-9a-fA-F]{8})+)").unwrap();
    /// A blank node label may contain dots, but not end with one.
    /// The label is empty when nothing follows `_:`.
    static ref BNODE_LABEL: Regex = Regex::new(concat!(
        r"^_:((?:[a-zA-Z0-9_.-]|\\u[0-9a-fA-F]{4}|\\U[0-9a-fA-F]{8})*",
        r"(?:[a-zA-Z0-9_-]|\\u[0-9a-fA-F]{4}|\\U[0-9a-fA-F]{8}))?",
    ))
    .unwrap();
}

/// Parse the N-Quads rendering of a single term,
/// or of a single statement (3 or 4 terms followed by `.`).
///
/// This is the inverse of [`render`](super::render):
/// statements are returned as [quads](RdfObject::Quad),
/// in the default graph when they have no fourth term.
pub fn parse_id(id: &str) -> Result<RdfObject> {
    let mut parser = IdParser { id, rest: id };
    let first = parser.term()?;
    if parser.at_end() {
        return Ok(RdfObject::Term(first));
    }
    let mut terms = vec![first];
    while !parser.eat('.') {
        if terms.len() == 4 {
            return Err(parser.error("expected '.' after the graph name"));
        }
        terms.push(parser.term()?);
    }
    if !parser.at_end() {
        return Err(parser.error("unexpected text after '.'"));
    }
    parser.statement(terms)
}

struct IdParser<'a> {
    id: &'a str,
    rest: &'a str,
}

impl<'a> IdParser<'a> {
    fn error<T: ToString>(&self, reason: T) -> FactoryError {
        FactoryError::unparseable(self.id, reason)
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn at_end(&mut self) -> bool {
        self.skip_ws();
        self.rest.is_empty()
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn term(&mut self) -> Result<Term> {
        self.skip_ws();
        let rest = self.rest;
        if rest.starts_with('<') {
            Ok(self.iri()?.into())
        } else if rest.starts_with('"') {
            Ok(self.literal()?.into())
        } else if let Some(cap) = BNODE_LABEL.captures(rest) {
            self.rest = &rest[cap[0].len()..];
            let label = cap.get(1).map_or("", |m| m.as_str());
            Ok(BlankNode::new(self.unescape_name(label)?).into())
        } else if rest.is_empty() {
            Err(self.error("unexpected end of text"))
        } else {
            Err(self.error(format!("unexpected text '{}'", rest)))
        }
    }

    fn iri(&mut self) -> Result<NamedNode> {
        let rest = self.rest;
        let mut iri = String::new();
        let mut chars = rest.char_indices().skip(1);
        while let Some((i, chr)) = chars.next() {
            match chr {
                '>' => {
                    self.rest = &rest[i + 1..];
                    return Ok(NamedNode::new(iri));
                }
                '\\' => {
                    let unescaped = match chars.next() {
                        Some((_, 'u')) => unescape_numeric(&mut chars, 4),
                        Some((_, 'U')) => unescape_numeric(&mut chars, 8),
                        _ => None,
                    };
                    iri.push(unescaped.ok_or_else(|| self.error("invalid escape in IRI"))?);
                }
                _ => iri.push(chr),
            }
        }
        Err(self.error("unterminated IRI"))
    }

    fn literal(&mut self) -> Result<Literal> {
        let rest = self.rest;
        let mut value = String::new();
        let mut chars = rest.char_indices().skip(1);
        let mut end = None;
        while let Some((i, chr)) = chars.next() {
            match chr {
                '"' => {
                    end = Some(i + 1);
                    break;
                }
                '\\' => {
                    let unescaped = match chars.next() {
                        Some((_, 't')) => Some('\t'),
                        Some((_, 'b')) => Some('\u{8}'),
                        Some((_, 'n')) => Some('\n'),
                        Some((_, 'r')) => Some('\r'),
                        Some((_, 'f')) => Some('\u{c}'),
                        Some((_, '"')) => Some('"'),
                        Some((_, '\'')) => Some('\''),
                        Some((_, '\\')) => Some('\\'),
                        Some((_, 'u')) => unescape_numeric(&mut chars, 4),
                        Some((_, 'U')) => unescape_numeric(&mut chars, 8),
                        _ => None,
                    };
                    value.push(unescaped.ok_or_else(|| self.error("invalid escape in literal"))?);
                }
                _ => value.push(chr),
            }
        }
        let Some(end) = end else {
            return Err(self.error("unterminated literal"));
        };
        let rest = &rest[end..];
        if let Some(cap) = LANG_TAG.captures(rest) {
            self.rest = &rest[cap[0].len()..];
            Ok(Literal::new_lang(value, self.unescape_name(&cap[1])?))
        } else if let Some(dt) = rest.strip_prefix("^^") {
            if !dt.starts_with('<') {
                return Err(self.error("expected a datatype IRI after '^^'"));
            }
            self.rest = dt;
            let datatype = self.iri()?;
            Ok(Literal::new_dt(value, datatype))
        } else {
            self.rest = rest;
            Ok(Literal::new(value))
        }
    }

    /// Resolve the `UCHAR` escapes of a blank node label or language tag.
    fn unescape_name(&self, name: &str) -> Result<String> {
        let mut out = String::with_capacity(name.len());
        let mut chars = name.char_indices();
        while let Some((_, chr)) = chars.next() {
            if chr != '\\' {
                out.push(chr);
                continue;
            }
            let unescaped = match chars.next() {
                Some((_, 'u')) => unescape_numeric(&mut chars, 4),
                Some((_, 'U')) => unescape_numeric(&mut chars, 8),
                _ => None,
            };
            out.push(unescaped.ok_or_else(|| self.error("invalid escape in name"))?);
        }
        Ok(out)
    }

    fn statement(&self, terms: Vec<Term>) -> Result<RdfObject> {
        let mut terms = terms.into_iter();
        let (Some(s), Some(p), Some(o)) = (terms.next(), terms.next(), terms.next()) else {
            return Err(self.error("a statement needs at least 3 terms"));
        };
        let subject = Node::try_from(s)
            .map_err(|t| self.error(format!("a {} can not be a subject", t.term_type())))?;
        let Term::NamedNode(predicate) = p else {
            return Err(self.error("the predicate must be an IRI"));
        };
        let graph = match terms.next() {
            None => DEFAULT_GRAPH.into(),
            Some(g) => Node::try_from(g)
                .map_err(|t| self.error(format!("a {} can not be a graph name", t.term_type())))?,
        };
        Ok(RdfObject::Quad(Quad::new(subject, predicate, o, graph)))
    }
}

fn unescape_numeric<I: Iterator<Item = (usize, char)>>(chars: &mut I, len: usize) -> Option<char> {
    let hex: String = chars.take(len).map(|(_, chr)| chr).collect();
    if hex.chars().count() != len {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}
