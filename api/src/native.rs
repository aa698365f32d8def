//! Native Rust values that can be coerced into typed literals
//! (see [`DataFactory::native_literal`](crate::factory::DataFactory::native_literal)).
//!
//! | native value                             | datatype                                   |
//! |------------------------------------------|--------------------------------------------|
//! | `f64`                                    | `xsd:integer`, `xsd:decimal` or `xsd:double` |
//! | any integer type, [`BigInt`]             | `xsd:integer`                              |
//! | `bool`                                   | `xsd:boolean`                              |
//! | date-times, timestamps, date components  | `xsd:dateTime`                             |
use std::any::Any;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use num_bigint::BigInt;

use crate::{FactoryError, Result};

/// A native value with a defined RDF literal mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    /// A floating point number, classified according to its value.
    Number(f64),
    /// An integer that fits in 128 bits.
    Integer(i128),
    /// An arbitrarily large integer.
    BigInt(BigInt),
    /// A boolean.
    Boolean(bool),
    /// An instant in time.
    DateTime(DateTime<Utc>),
    /// A number of milliseconds since the Unix epoch,
    /// which may fall outside the representable range.
    Timestamp(i64),
    /// Calendar components (in UTC), which may not denote an actual date.
    DateParts(DateParts),
}

/// The calendar components of a date-time, in UTC.
///
/// Nothing prevents building invalid components (e.g. February 30th);
/// they are rejected when coerced into a literal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateParts {
    /// Year
    pub year: i32,
    /// Month, from 1 to 12
    pub month: u32,
    /// Day of the month, from 1
    pub day: u32,
    /// Hours, from 0 to 23
    pub hour: u32,
    /// Minutes, from 0 to 59
    pub minute: u32,
    /// Seconds, from 0 to 59
    pub second: u32,
    /// Milliseconds, from 0 to 999
    pub millisecond: u32,
}

impl DateParts {
    /// Midnight on the given day.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        DateParts {
            year,
            month,
            day,
            ..Default::default()
        }
    }

    /// Resolve these components into an instant,
    /// or fail with [`FactoryError::InvalidValue`].
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| {
                date.and_hms_milli_opt(self.hour, self.minute, self.second, self.millisecond)
            })
            .map(|naive| naive.and_utc())
            .ok_or_else(|| FactoryError::InvalidValue(format!("{:?}", self)))
    }
}

impl NativeValue {
    /// Resolve an arbitrary value into a [`NativeValue`],
    /// if its type has a literal mapping.
    ///
    /// Fails with [`FactoryError::UnsupportedValue`] otherwise,
    /// identifying the offending value by its [`Debug`](fmt::Debug) representation.
    pub fn from_any<T: Any + fmt::Debug>(value: &T) -> Result<Self> {
        let any = value as &dyn Any;
        macro_rules! try_downcast {
            ($($t:ty),*) => {
                $(
                    if let Some(v) = any.downcast_ref::<$t>() {
                        return Ok(NativeValue::from(v.clone()));
                    }
                )*
            };
        }
        try_downcast!(
            f64,
            f32,
            i8,
            i16,
            i32,
            i64,
            i128,
            isize,
            u8,
            u16,
            u32,
            u64,
            u128,
            usize,
            bool,
            BigInt,
            DateTime<Utc>,
            DateTime<FixedOffset>,
            NaiveDateTime,
            DateParts,
            NativeValue
        );
        Err(FactoryError::UnsupportedValue(format!("{:?}", value)))
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Number(value)
    }
}

impl From<f32> for NativeValue {
    /// The shortest decimal representation of `value` is kept,
    /// rather than its exact binary expansion.
    fn from(value: f32) -> Self {
        NativeValue::Number(value.to_string().parse().unwrap_or(f64::NAN))
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NativeValue {
                fn from(value: $t) -> Self {
                    NativeValue::Integer(value as i128)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for NativeValue {
    fn from(value: u128) -> Self {
        match i128::try_from(value) {
            Ok(v) => NativeValue::Integer(v),
            Err(_) => NativeValue::BigInt(BigInt::from(value)),
        }
    }
}

impl From<BigInt> for NativeValue {
    fn from(value: BigInt) -> Self {
        NativeValue::BigInt(value)
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for NativeValue {
    fn from(value: DateTime<Utc>) -> Self {
        NativeValue::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for NativeValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        NativeValue::DateTime(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for NativeValue {
    /// Naive date-times are interpreted as UTC.
    fn from(value: NaiveDateTime) -> Self {
        NativeValue::DateTime(value.and_utc())
    }
}

impl From<DateParts> for NativeValue {
    fn from(value: DateParts) -> Self {
        NativeValue::DateParts(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn integers_widen() {
        assert_eq!(NativeValue::from(42_u8), NativeValue::Integer(42));
        assert_eq!(NativeValue::from(-42_i64), NativeValue::Integer(-42));
        assert_eq!(
            NativeValue::from(u128::MAX),
            NativeValue::BigInt(BigInt::from(u128::MAX))
        );
    }

    #[test]
    fn f32_keeps_its_shortest_representation() {
        assert_eq!(NativeValue::from(0.1_f32), NativeValue::Number(0.1));
    }

    #[test]
    fn from_any_dispatches_on_type() {
        assert_eq!(NativeValue::from_any(&3.5).unwrap(), NativeValue::Number(3.5));
        assert_eq!(NativeValue::from_any(&true).unwrap(), NativeValue::Boolean(true));
        assert_eq!(NativeValue::from_any(&7_u16).unwrap(), NativeValue::Integer(7));
    }

    #[test]
    fn from_any_rejects_unknown_types() {
        let err = NativeValue::from_any(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, FactoryError::UnsupportedValue(ref v) if v == "[1, 2]"));
        assert!(NativeValue::from_any(&"text").is_err());
    }

    #[test_case(2021, 2, 29; "not a leap year")]
    #[test_case(2021, 13, 1; "month out of range")]
    #[test_case(2021, 4, 31; "day out of range")]
    fn invalid_date_parts(year: i32, month: u32, day: u32) {
        let err = DateParts::ymd(year, month, day).to_datetime().unwrap_err();
        assert!(matches!(err, FactoryError::InvalidValue(_)));
    }

    #[test]
    fn valid_date_parts() {
        let parts = DateParts {
            hour: 12,
            millisecond: 250,
            ..DateParts::ymd(2020, 2, 29)
        };
        let dt = parts.to_datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_582_977_600_250);
    }
}
