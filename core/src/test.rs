//! End-to-end properties of [`PlainFactory`].
use crate::store::LowLevelStore;
use crate::*;
use ontologies_api::ns::{rdf, xsd};
use ontologies_api::prelude::*;
use test_case::test_case;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_terms(f: &mut PlainFactory) -> Vec<Term> {
    vec![
        f.named_node("http://ex/a").into(),
        f.named_node("").into(),
        f.named_node("http://ex/a?b=c#d").into(),
        f.blank_node(None).into(),
        f.blank_node(Some("n3-label.x")).into(),
        f.blank_node(Some("a.")).into(),
        f.blank_node(Some("a b")).into(),
        f.blank_node(Some("caf\u{e9}\\")).into(),
        BlankNode::new("").into(),
        f.literal("plain", ()).into(),
        f.literal("", ()).into(),
        f.literal("with \"quotes\"\nand \\ breaks\r", ()).into(),
        f.literal("hi", "en").into(),
        f.literal("bonjour", "fr-CA").into(),
        f.literal("v", "en_US").into(),
        f.literal("v", "en <http://ex/g>").into(),
        f.literal("v", "\u{1F600}").into(),
        f.literal("42", xsd::integer).into(),
        f.literal("<tag>", rdf::XMLLiteral).into(),
        f.native_literal(3.5).unwrap().into(),
        f.native_literal(1e21).unwrap().into(),
        f.native_literal(true).unwrap().into(),
        f.literal("odd", f.named_node("http://ex/dt>x")).into(),
    ]
}

fn sample_quads(f: &mut PlainFactory) -> Vec<Quad> {
    let s = f.named_node("http://ex/s");
    let b = f.blank_node(None);
    let p = f.named_node("http://ex/p");
    vec![
        f.quad(s.clone(), p.clone(), f.literal("v", ()), None),
        f.quad(b.clone(), p.clone(), s.clone(), Some(s.clone().into())),
        f.quad(s, p, f.literal("hi", "en"), Some(b.into())),
    ]
}

#[test]
fn id_round_trip_for_terms() {
    init_logger();
    let mut f = PlainFactory::new();
    for t in sample_terms(&mut f) {
        let id = f.id(&t).unwrap();
        let back = f.from_id(&id).unwrap();
        assert!(f.equals(&back, &t), "{} -> {:?}", id, back);
        assert_eq!(back.into_term(), Some(t));
    }
}

#[test]
fn id_round_trip_from_another_instance() {
    let mut f1 = PlainFactory::new();
    let f2 = PlainFactory::with_options(FactoryOptions::default().with_bn_index(100));
    for q in sample_quads(&mut f1) {
        let id = f1.id(&q).unwrap();
        let back = f2.from_id(&id).unwrap();
        assert!(f2.equals(&back, &q), "{}", id);
    }
}

#[test]
fn ids_are_deterministic_and_distinct() {
    let mut f = PlainFactory::new();
    let terms = sample_terms(&mut f);
    let ids: Vec<_> = terms.iter().map(|t| f.id(t).unwrap()).collect();
    for (i, t) in terms.iter().enumerate() {
        assert_eq!(f.id(t).unwrap(), ids[i]);
        for (j, other) in terms.iter().enumerate() {
            assert_eq!(ids[i] == ids[j], f.equals(t, other), "{} vs {}", ids[i], ids[j]);
        }
    }
}

#[test]
fn ids_tell_apart_language_tags_from_graph_names() {
    let f = PlainFactory::new();
    let s = f.named_node("http://ex/s");
    let p = f.named_node("http://ex/p");
    let g = f.named_node("http://ex/g");
    let q1 = f.quad(s.clone(), p.clone(), f.literal("v", "en"), Some(g.into()));
    let q2 = f.quad(s, p, f.literal("v", "en <http://ex/g>"), None);
    assert!(!f.equals(&q1, &q2));
    let (id1, id2) = (f.id(&q1).unwrap(), f.id(&q2).unwrap());
    assert_ne!(id1, id2);
    assert!(f.equals(&f.from_id(&id1).unwrap(), &q1));
    assert!(f.equals(&f.from_id(&id2).unwrap(), &q2));

    let mut store = store::MemoryStore::new(f);
    store.add_quads([q1, q2]).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn canonical_default_graph() {
    let f = PlainFactory::new();
    let s = f.named_node("http://ex/s");
    let q = f.quad(s.clone(), rdf::type_, rdf::Property, None);
    assert!(f.equals(q.graph(), &f.default_graph()));
    let qdr = f.quadruple(s, rdf::type_, rdf::Property, None);
    assert!(f.equals(&qdr.3, &f.default_graph()));
}

#[test]
fn literal_default_datatype() {
    let f = PlainFactory::new();
    assert!(f.equals(
        f.literal("x", ()).datatype(),
        &f.named_node("http://www.w3.org/2001/XMLSchema#string")
    ));
}

#[test_case("s", "en")]
#[test_case("", "de")]
#[test_case("multi\nline", "en-US")]
fn language_implies_lang_string(s: &str, l: &str) {
    let f = PlainFactory::new();
    assert_eq!(
        f.literal(s, l).datatype().value(),
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"
    );
}

#[test]
fn equality_is_reflexive_and_symmetric() {
    let mut f = PlainFactory::new();
    let mut values: Vec<RdfObject> = sample_terms(&mut f)
        .into_iter()
        .map(RdfObject::Term)
        .collect();
    values.extend(sample_quads(&mut f).into_iter().map(RdfObject::Quad));
    let qdrs: Vec<Quadruple> = sample_quads(&mut f)
        .iter()
        .map(|q| f.qdr_from_quad(q))
        .collect();
    let mut comparables: Vec<Comparable> = values.iter().map(Comparable::from).collect();
    comparables.extend(qdrs.iter().map(Comparable::from));
    for a in &comparables {
        assert!(f.equals(*a, *a));
        for b in &comparables {
            assert_eq!(f.equals(*a, *b), f.equals(*b, *a), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn quad_quadruple_equivalence() {
    let mut f = PlainFactory::new();
    for q in sample_quads(&mut f) {
        let qdr = f.qdr_from_quad(&q);
        assert!(f.equals(&q, &qdr));
        assert!(f.equals(&f.from_qdr(&qdr), &q));
    }
}

#[test]
fn numeric_coercion_boundary() {
    let f = PlainFactory::new();
    let lit = f.native_literal(3).unwrap();
    assert_eq!((lit.value(), lit.datatype()), ("3", &xsd::integer));
    let lit = f.native_literal(3.5).unwrap();
    assert_eq!((lit.value(), lit.datatype()), ("3.5", &xsd::decimal));
    let lit = f.native_literal(1e21).unwrap();
    assert_eq!(lit.datatype(), &xsd::double);
}

#[test_case(1)]
#[test_case(10)]
#[test_case(1000)]
fn blank_node_uniqueness(n: usize) {
    init_logger();
    let mut f = PlainFactory::new();
    let ids: std::collections::HashSet<String> = (0..n)
        .map(|_| f.blank_node(None).value().to_string())
        .collect();
    assert_eq!(ids.len(), n);
}

#[test]
fn scenario_render_triple_in_default_graph() {
    let f = PlainFactory::new();
    let q = f.quad(
        f.named_node("http://ex/s"),
        f.named_node("http://ex/p"),
        f.literal("v", ()),
        None,
    );
    assert_eq!(f.to_nq(&q).unwrap(), r#"<http://ex/s> <http://ex/p> "v" ."#);
}

#[derive(Debug)]
struct ManualLiteral {
    value: String,
    language: String,
    datatype: NamedNode,
}

impl ForeignTerm for ManualLiteral {
    fn term_type(&self) -> Option<&str> {
        Some("Literal")
    }
    fn value(&self) -> &str {
        &self.value
    }
    fn datatype(&self) -> Option<&str> {
        Some(self.datatype.value())
    }
    fn language(&self) -> Option<&str> {
        Some(&self.language)
    }
}

#[test]
fn scenario_compare_with_manual_literal() {
    let f = PlainFactory::new();
    let manual = ManualLiteral {
        value: "hi".into(),
        language: "en".into(),
        datatype: f.named_node(rdf::langString.value()),
    };
    let lit = f.literal("hi", "en");
    assert!(f.equals(&lit, Comparable::Foreign(&manual)));
    assert!(f.equals(Comparable::Foreign(&manual), &lit));
    assert_eq!(
        f.to_nq(Comparable::Foreign(&manual)).unwrap(),
        f.to_nq(&lit).unwrap()
    );
    assert_eq!(f.from_foreign(&manual).unwrap(), Term::from(lit));
}

#[test]
fn store_round_trip_through_document() {
    init_logger();
    let mut f = PlainFactory::new();
    let quads = sample_quads(&mut f);
    let doc = nq::to_nq_document(&quads).unwrap();
    let mut store = store::MemoryStore::new(f);
    let parsed = nq::parse_str(store.factory(), &doc).unwrap();
    store.add_quads(parsed).unwrap();
    assert_eq!(store.len(), quads.len());
    for q in &quads {
        assert!(store.contains(q).unwrap());
    }
}
