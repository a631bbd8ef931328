use std::cmp::Ordering;

use compact_str::CompactString;

use super::{
    element::{log_downgrade, ElementOps, ElementType},
    element_value::{ElementValue, RawValue},
};
use crate::{
    conf::{ElementConfig, NA_TOKEN},
    errors::{ConversionError, Result},
};

/// Reads the usual spellings of a boolean. Shared with `BoolElement`.
pub(crate) fn parse_bool_token(s: &str) -> Option<bool> {
    if ["true", "t", "1"].iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if ["false", "f", "0"].iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextElement {
    e: Option<CompactString>,
}

impl ElementOps for TextElement {
    const TYPE: ElementType = ElementType::Text;

    fn set(&mut self, raw: RawValue<'_>, cfg: &ElementConfig) {
        self.e = match raw {
            RawValue::Na => None,
            RawValue::Str(s) if cfg.is_na_token(s) => None,
            RawValue::Str(s) => Some(CompactString::from(s)),
            RawValue::Int(i) => Some(CompactString::from(i.to_string())),
            RawValue::Float(f) if f.is_nan() => {
                log_downgrade(&raw, Self::TYPE);
                None
            }
            RawValue::Float(f) => Some(CompactString::from(cfg.format_float(f))),
            RawValue::Bool(b) => Some(CompactString::from(if b { "true" } else { "false" })),
            RawValue::Time(t) => Some(CompactString::from(cfg.format_time(&t))),
            RawValue::Element(other) if other.is_na() => None,
            RawValue::Element(other) => Some(CompactString::from(other.render(cfg))),
        };
    }

    fn is_na(&self) -> bool {
        self.e.is_none()
    }

    fn val(&self) -> ElementValue {
        match &self.e {
            Some(s) => ElementValue::Text(s.clone()),
            None => ElementValue::Na,
        }
    }

    fn render(&self, _cfg: &ElementConfig) -> String {
        match &self.e {
            Some(s) => s.to_string(),
            None => String::from(NA_TOKEN),
        }
    }

    fn int(&self) -> Result<i64> {
        let s = self.e.as_ref().ok_or_else(|| ConversionError::na_to("int"))?;
        s.parse::<i64>()
            .map_err(|_| ConversionError::not_convertible(Self::TYPE, s.as_str(), "int"))
    }

    fn float(&self) -> f64 {
        self.e
            .as_ref()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }

    fn bool(&self) -> Result<bool> {
        let s = self.e.as_ref().ok_or_else(|| ConversionError::na_to("bool"))?;
        parse_bool_token(s)
            .ok_or_else(|| ConversionError::not_convertible(Self::TYPE, s.as_str(), "bool"))
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (&self.e, &other.e) {
            (Some(a), Some(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}
