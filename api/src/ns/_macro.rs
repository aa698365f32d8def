/// Create a "namespace module"
/// defining a set of terms within a given IRI space.
///
/// Each term is a `const` [`NamedNode`](crate::term::NamedNode),
/// so building them costs nothing at runtime.
///
/// Terms whose local name is not a valid Rust identifier
/// are listed after a `;`, as `identifier, "local name"` pairs.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            $crate::ns_iri!($iri_prefix, $suffix);
        )*
        $(
            $crate::ns_iri!($iri_prefix, $r_id, $r_sf);
        )*
    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// Create a term in a "namespace module".
/// In general, you should use the [`namespace!`](macro.namespace.html) macro instead.
#[macro_export]
macro_rules! ns_iri {
    ($prefix:literal, $ident:ident) => {
        /// Generated term.
        #[allow(non_upper_case_globals)]
        pub const $ident: $crate::term::NamedNode =
            $crate::term::NamedNode::new_static(concat!($prefix, stringify!($ident)));
    };
    ($prefix:literal, $ident:ident, $suffix:literal) => {
        /// Generated term.
        #[allow(non_upper_case_globals)]
        pub const $ident: $crate::term::NamedNode =
            $crate::term::NamedNode::new_static(concat!($prefix, $suffix));
    };
}
