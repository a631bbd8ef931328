//! Typed, possibly missing cells ("elements") for series/column containers.
//!
//! An [`Element`] is one of a closed set of variants (text, int, float, bool, time) that all
//! share one contract: total comparisons (NA or a type mismatch is simply `false`),
//! conversions to the basic types, and rendering. Ingestion never fails, input that can't be
//! read becomes NA. Conversions that can't be satisfied return an error instead.
//!
//! ```
//! use series_element::{Element, ElementConfig, ElementType};
//!
//! let cfg = ElementConfig::default();
//! let t = Element::from_raw(ElementType::Time, "2021-01-01T00:00:00Z", &cfg);
//! assert_eq!(1609459200, t.int().unwrap());
//!
//! let na = Element::from_raw(ElementType::Time, "not-a-date", &cfg);
//! assert!(na.is_na());
//! assert_eq!("NaN", na.to_string());
//! assert!(!na.eq(&na));
//! ```

pub mod conf;
pub mod data;
pub mod errors;

pub use conf::{ElementConfig, TimeFormat, NA_TOKEN};
pub use data::{
    column::{Column, Comparator},
    element::{Element, ElementOps, ElementType},
    element_value::{ElementValue, RawValue},
};
pub use errors::{ConfigError, ConversionError, ElementError, Result};
