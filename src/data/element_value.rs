use chrono::{DateTime, FixedOffset, Utc};
use compact_str::CompactString;

use super::element::{Element, ElementType};
use crate::errors::{ConversionError, ElementError, Result};

/// What `Element::val` hands out. `Na` is the marker for "no value", callers never see the
/// payload of a missing element.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum ElementValue {
    Na,
    Text(CompactString),
    Int(i64),
    Float(f64),
    Bool(bool),
    Time(DateTime<FixedOffset>),
}

impl ElementValue {
    pub fn is_na(&self) -> bool {
        matches!(self, ElementValue::Na)
    }

    /// `None` for `Na`, since the marker has no type of its own.
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            ElementValue::Na => None,
            ElementValue::Text(_) => Some(ElementType::Text),
            ElementValue::Int(_) => Some(ElementType::Int),
            ElementValue::Float(_) => Some(ElementType::Float),
            ElementValue::Bool(_) => Some(ElementType::Bool),
            ElementValue::Time(_) => Some(ElementType::Time),
        }
    }
}

macro_rules! impl_from_value_for_result {
    ($enum_type:ident, $type:ty) => {
        impl From<ElementValue> for Result<$type> {
            fn from(item: ElementValue) -> Self {
                match item {
                    ElementValue::$enum_type(v) => Ok(v),
                    ElementValue::Na => Err(ConversionError::na_to(stringify!($type))),
                    _ => Err(ElementError::Conversion(
                        ConversionError::UnwrapToBaseTypeFailed {
                            src_value: format!("{:?}", item),
                            basic_type: stringify!($type),
                        },
                    )),
                }
            }
        }
    };
}
impl_from_value_for_result!(Text, CompactString);
impl_from_value_for_result!(Int, i64);
impl_from_value_for_result!(Float, f64);
impl_from_value_for_result!(Bool, bool);

/// Everything an element can be populated from. Strings get parsed, native values get
/// converted, anything that doesn't fit the target type ends up as NA.
#[derive(Debug, Clone, Copy)]
pub enum RawValue<'a> {
    Na,
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    Time(DateTime<FixedOffset>),
    Element(&'a Element),
}

macro_rules! impl_from_type_for_raw_value {
    ($enum_type:ident, $type:ty) => {
        impl From<$type> for RawValue<'_> {
            fn from(item: $type) -> Self {
                RawValue::$enum_type(item)
            }
        }
    };
}
impl_from_type_for_raw_value!(Int, i64);
impl_from_type_for_raw_value!(Float, f64);
impl_from_type_for_raw_value!(Bool, bool);
impl_from_type_for_raw_value!(Time, DateTime<FixedOffset>);

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(item: &'a str) -> Self {
        RawValue::Str(item)
    }
}

impl<'a> From<&'a Element> for RawValue<'a> {
    fn from(item: &'a Element) -> Self {
        RawValue::Element(item)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(item: &'a String) -> Self {
        RawValue::Str(item.as_str())
    }
}

impl From<i32> for RawValue<'_> {
    fn from(item: i32) -> Self {
        RawValue::Int(i64::from(item))
    }
}

impl From<DateTime<Utc>> for RawValue<'_> {
    fn from(item: DateTime<Utc>) -> Self {
        RawValue::Time(item.into())
    }
}

impl<'a, T> From<Option<T>> for RawValue<'a>
where
    T: Into<RawValue<'a>>,
{
    fn from(item: Option<T>) -> Self {
        item.map_or(RawValue::Na, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn raw_from_native() {
        assert!(matches!(RawValue::from("a"), RawValue::Str("a")));
        assert!(matches!(RawValue::from(3i64), RawValue::Int(3)));
        assert!(matches!(RawValue::from(3i32), RawValue::Int(3)));
        assert!(matches!(RawValue::from(1.5f64), RawValue::Float(f) if f == 1.5));
        assert!(matches!(RawValue::from(true), RawValue::Bool(true)));
        let s = String::from("b");
        assert!(matches!(RawValue::from(&s), RawValue::Str("b")));
    }

    #[test]
    fn raw_from_option() {
        let none: Option<i64> = None;
        assert!(matches!(RawValue::from(none), RawValue::Na));
        assert!(matches!(RawValue::from(Some(1i64)), RawValue::Int(1)));
    }

    #[test]
    fn raw_from_utc() {
        let t = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        match RawValue::from(t) {
            RawValue::Time(ft) => assert_eq!(1609459200, ft.timestamp()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn value_to_int_ok() {
        assert_eq!(Ok(32i64), ElementValue::Int(32).into());
    }

    #[test]
    fn value_na_to_int_err() {
        let res: Result<i64> = ElementValue::Na.into();
        assert_eq!(Err(ConversionError::na_to("i64")), res);
    }

    #[test]
    fn value_text_to_bool_err() {
        let res: Result<bool> = ElementValue::Text("test_data".into()).into();
        let exp = Err(ElementError::Conversion(
            ConversionError::UnwrapToBaseTypeFailed {
                src_value: "Text(\"test_data\")".into(),
                basic_type: "bool",
            },
        ));
        assert_eq!(exp, res);
    }

    #[test]
    fn value_type_info() {
        assert_eq!(None, ElementValue::Na.element_type());
        assert!(ElementValue::Na.is_na());
        assert_eq!(Some(ElementType::Float), ElementValue::Float(0.0).element_type());
    }
}
