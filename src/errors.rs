use std::fmt::Display;
use thiserror::Error;

use crate::data::element::ElementType;

#[derive(Debug, PartialEq, Clone)]
pub enum ElementError {
    Generic { msg: String },
    Conversion(ConversionError),
    Config(ConfigError),
}

impl Display for ElementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementError::Generic { msg } => write!(f, "An error occurred: {:?}", msg),
            ElementError::Conversion(ce) => ce.fmt(f),
            ElementError::Config(ce) => ce.fmt(f),
        }
    }
}

impl std::error::Error for ElementError {}

impl From<ConversionError> for ElementError {
    fn from(e: ConversionError) -> Self {
        ElementError::Conversion(e)
    }
}

impl From<ConfigError> for ElementError {
    fn from(e: ConfigError) -> Self {
        ElementError::Config(e)
    }
}

pub type Result<T> = std::result::Result<T, ElementError>;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ConversionError {
    #[error("can't convert NaN to {target_type}")]
    NaToBasicType { target_type: &'static str },
    #[error("can't convert {src_type} to {target_type}")]
    Unsupported {
        src_type: ElementType,
        target_type: &'static str,
    },
    #[error("can't convert {src_type} value {src_value:?} to {target_type}")]
    ValueNotConvertible {
        src_type: ElementType,
        src_value: String,
        target_type: &'static str,
    },
    #[error("Can't unwrap ElementValue::{src_value} to basic type {basic_type}")]
    UnwrapToBaseTypeFailed {
        src_value: String,
        basic_type: &'static str,
    },
    #[error("element of type {actual} can't be put into column of type {expected}")]
    TypeMismatch {
        expected: ElementType,
        actual: ElementType,
    },
}

impl ConversionError {
    pub fn na_to(target_type: &'static str) -> ElementError {
        ElementError::Conversion(ConversionError::NaToBasicType { target_type })
    }

    pub fn unsupported(src_type: ElementType, target_type: &'static str) -> ElementError {
        ElementError::Conversion(ConversionError::Unsupported {
            src_type,
            target_type,
        })
    }

    pub fn not_convertible<T>(
        src_type: ElementType,
        src_value: T,
        target_type: &'static str,
    ) -> ElementError
    where
        T: Into<String>,
    {
        ElementError::Conversion(ConversionError::ValueNotConvertible {
            src_type,
            src_value: src_value.into(),
            target_type,
        })
    }
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ConfigError {
    #[error("invalid time format pattern: {pattern:?}")]
    InvalidTimePattern { pattern: String },
    #[error("invalid NA regex {pattern:?}; detail: {detail}")]
    InvalidNaRegex { pattern: String, detail: String },
    #[error("could not read config: {msg}")]
    Malformed { msg: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn na_to_int_message() {
        assert_eq!(
            "can't convert NaN to int",
            ConversionError::na_to("int").to_string()
        );
    }

    #[test]
    fn unsupported_message() {
        assert_eq!(
            "can't convert Time to bool",
            ConversionError::unsupported(ElementType::Time, "bool").to_string()
        );
    }

    #[test]
    fn generic_message() {
        let e = ElementError::Generic {
            msg: String::from("boom"),
        };
        assert_eq!("An error occurred: \"boom\"", e.to_string());
    }

    #[test]
    fn config_error_wraps() {
        let e: ElementError = ConfigError::InvalidTimePattern {
            pattern: String::from("%Q"),
        }
        .into();
        assert_eq!(
            ElementError::Config(ConfigError::InvalidTimePattern {
                pattern: String::from("%Q")
            }),
            e
        );
    }
}
