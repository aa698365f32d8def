use ontologies_api::ns::xsd;
use ontologies_api::term::{Comparable, TermType};
use ontologies_api::{FactoryError, Result};

use crate::cmp::{is_default_graph, quad_components};

/// Render a term as an N-Quads term, or a quad as an N-Quads statement.
///
/// Statements are terminated by `.` but not by a newline;
/// their graph is omitted when it is the default graph.
pub fn render(value: Comparable<'_>) -> Result<String> {
    let mut out = String::new();
    match quad_components(value) {
        Some(components) => write_statement(&mut out, components)?,
        None => write_term(&mut out, value)?,
    }
    Ok(out)
}

fn write_statement(out: &mut String, [s, p, o, g]: [Comparable<'_>; 4]) -> Result<()> {
    write_term(out, s)?;
    out.push(' ');
    write_term(out, p)?;
    out.push(' ');
    write_term(out, o)?;
    out.push(' ');
    if !is_default_graph(g) {
        write_term(out, g)?;
        out.push(' ');
    }
    out.push('.');
    Ok(())
}

/// Append the N-Quads rendering of `term` to `out`.
///
/// Fails with [`FactoryError::UnrenderableTerm`]
/// if `term` is not a named node, a blank node or a literal.
pub fn write_term(out: &mut String, term: Comparable<'_>) -> Result<()> {
    let term_type = term.term_type();
    let Some(Ok(kind)) = term_type.map(str::parse::<TermType>) else {
        return Err(FactoryError::UnrenderableTerm(
            term_type.unwrap_or("undefined").to_string(),
        ));
    };
    let value = term.value().unwrap_or_default();
    match kind {
        TermType::NamedNode => write_iri(out, value),
        TermType::BlankNode => {
            out.push_str("_:");
            write_name(out, value, is_label_char, true);
        }
        TermType::Literal => {
            out.push('"');
            write_quoted(out, value);
            out.push('"');
            match (term.language(), term.datatype()) {
                (Some(tag), _) if !tag.is_empty() => {
                    out.push('@');
                    write_name(out, tag, is_lang_char, false);
                }
                (_, Some(dt)) if dt != xsd::string.value() => {
                    out.push_str("^^");
                    write_iri(out, dt);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn write_iri(out: &mut String, iri: &str) {
    out.push('<');
    for chr in iri.chars() {
        match chr {
            '>' => out.push_str("\\u003E"),
            '\\' => out.push_str("\\u005C"),
            _ => out.push(chr),
        }
    }
    out.push('>');
}

/// Characters written as they are in blank node labels.
///
/// A `.` is only allowed inside a label, never as its last character.
fn is_label_char(chr: char) -> bool {
    chr.is_ascii_alphanumeric() || matches!(chr, '_' | '-' | '.')
}

/// Characters written as they are in language tags.
fn is_lang_char(chr: char) -> bool {
    chr.is_ascii_alphanumeric() || chr == '-'
}

/// Write `name`, escaping as `UCHAR` every character not accepted by `plain`,
/// so that any label or tag can be read back unambiguously.
fn write_name(out: &mut String, name: &str, plain: fn(char) -> bool, no_trailing_dot: bool) {
    let mut chars = name.chars().peekable();
    while let Some(chr) = chars.next() {
        let last = chars.peek().is_none();
        if plain(chr) && !(no_trailing_dot && last && chr == '.') {
            out.push(chr);
        } else if (chr as u32) <= 0xFFFF {
            out.push_str(&format!("\\u{:04X}", chr as u32));
        } else {
            out.push_str(&format!("\\U{:08X}", chr as u32));
        }
    }
}

fn write_quoted(out: &mut String, txt: &str) {
    for chr in txt.chars() {
        match chr {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(chr),
        }
    }
}
