use std::cmp::Ordering;

use super::{
    element::{log_downgrade, ElementOps, ElementType},
    element_value::{ElementValue, RawValue},
    int_element::float_to_i64,
};
use crate::{
    conf::{ElementConfig, NA_TOKEN},
    errors::{ConversionError, Result},
};

/// A float element. NaN is never a present value, it always means NA.
#[derive(Debug, Clone)]
pub struct FloatElement {
    e: f64,
    na: bool,
}

impl Default for FloatElement {
    fn default() -> Self {
        Self {
            e: f64::NAN,
            na: true,
        }
    }
}

impl ElementOps for FloatElement {
    const TYPE: ElementType = ElementType::Float;

    fn set(&mut self, raw: RawValue<'_>, cfg: &ElementConfig) {
        let v = match raw {
            RawValue::Str(s) if cfg.is_na_token(s) => None,
            RawValue::Str(s) => s.parse::<f64>().ok(),
            RawValue::Int(i) => Some(i as f64),
            RawValue::Float(f) => Some(f),
            RawValue::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            RawValue::Element(other) => Some(other.float()),
            RawValue::Na | RawValue::Time(_) => None,
        };
        match v.filter(|f| !f.is_nan()) {
            Some(f) => {
                self.e = f;
                self.na = false;
            }
            None => {
                if !matches!(raw, RawValue::Na) {
                    log_downgrade(&raw, Self::TYPE);
                }
                self.e = f64::NAN;
                self.na = true;
            }
        }
    }

    fn is_na(&self) -> bool {
        self.na || self.e.is_nan()
    }

    fn val(&self) -> ElementValue {
        if self.is_na() {
            return ElementValue::Na;
        }
        ElementValue::Float(self.e)
    }

    fn render(&self, cfg: &ElementConfig) -> String {
        if self.is_na() {
            return String::from(NA_TOKEN);
        }
        cfg.format_float(self.e)
    }

    fn int(&self) -> Result<i64> {
        if self.is_na() {
            return Err(ConversionError::na_to("int"));
        }
        float_to_i64(self.e)
            .ok_or_else(|| ConversionError::not_convertible(Self::TYPE, self.e.to_string(), "int"))
    }

    fn float(&self) -> f64 {
        if self.is_na() {
            return f64::NAN;
        }
        self.e
    }

    fn bool(&self) -> Result<bool> {
        if self.is_na() {
            return Err(ConversionError::na_to("bool"));
        }
        if self.e == 1.0 {
            Ok(true)
        } else if self.e == 0.0 {
            Ok(false)
        } else {
            Err(ConversionError::not_convertible(
                Self::TYPE,
                self.e.to_string(),
                "bool",
            ))
        }
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.is_na() || other.is_na() {
            return None;
        }
        self.e.partial_cmp(&other.e)
    }
}
