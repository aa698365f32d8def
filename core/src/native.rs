//! Coercion of [native values](NativeValue) into typed literals.
//!
//! Floating point numbers are formatted the way ECMAScript's `Number.prototype.toString` does
//! (see [`format_number`]), then classified by [`number_datatype`]:
//!
//! | value                                                    | datatype      |
//! |----------------------------------------------------------|---------------|
//! | NaN, infinities                                          | `xsd:double`  |
//! | formatted with an exponent (`\|v\| >= 1e21`, `\|v\| < 1e-6`) | `xsd:double`  |
//! | `ceil(v)` above 2<sup>53</sup>-1                         | `xsd:double`  |
//! | no fractional part                                       | `xsd:integer` |
//! | otherwise                                                | `xsd:decimal` |
use chrono::{DateTime, SecondsFormat, Utc};
use ontologies_api::native::NativeValue;
use ontologies_api::ns::xsd;
use ontologies_api::term::{Literal, NamedNode};
use ontologies_api::{FactoryError, Result};

/// The largest integer `n` such that `n` and `n + 1` are both exactly representable as `f64`.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Coerce `value` into a typed literal.
pub fn to_literal(value: NativeValue) -> Result<Literal> {
    match value {
        NativeValue::Number(v) => {
            let lex = format_number(v);
            let datatype = number_datatype(v, &lex);
            Ok(Literal::new_dt(lex, datatype))
        }
        NativeValue::Integer(i) => Ok(Literal::new_dt(i.to_string(), xsd::integer)),
        NativeValue::BigInt(i) => Ok(Literal::new_dt(i.to_string(), xsd::integer)),
        NativeValue::Boolean(b) => Ok(Literal::new_dt(b.to_string(), xsd::boolean)),
        NativeValue::DateTime(dt) => Ok(datetime_literal(dt)),
        NativeValue::Timestamp(ms) => DateTime::from_timestamp_millis(ms)
            .map(datetime_literal)
            .ok_or_else(|| FactoryError::InvalidValue(format!("timestamp {ms}"))),
        NativeValue::DateParts(parts) => parts.to_datetime().map(datetime_literal),
    }
}

fn datetime_literal(dt: DateTime<Utc>) -> Literal {
    Literal::new_dt(
        dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        xsd::dateTime,
    )
}

/// Format `v` as ECMAScript's `Number.prototype.toString` does.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        // also covers -0
        return "0".to_string();
    }
    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        format!("{}", v)
    } else {
        let txt = format!("{:e}", v);
        match txt.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => txt,
        }
    }
}

/// The datatype of a number `v`, given its formatted lexical form `lex`.
pub fn number_datatype(v: f64, lex: &str) -> NamedNode {
    if !v.is_finite() || lex.contains('e') || v.ceil() > MAX_SAFE_INTEGER {
        xsd::double
    } else if v.fract() == 0.0 {
        xsd::integer
    } else {
        xsd::decimal
    }
}
