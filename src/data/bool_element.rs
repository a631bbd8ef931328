use std::cmp::Ordering;

use super::{
    element::{log_downgrade, ElementOps, ElementType},
    element_value::{ElementValue, RawValue},
    text_element::parse_bool_token,
};
use crate::{
    conf::{ElementConfig, NA_TOKEN},
    errors::{ConversionError, Result},
};

#[derive(Debug, Clone)]
pub struct BoolElement {
    e: bool,
    na: bool,
}

impl Default for BoolElement {
    fn default() -> Self {
        Self { e: false, na: true }
    }
}

impl ElementOps for BoolElement {
    const TYPE: ElementType = ElementType::Bool;

    fn set(&mut self, raw: RawValue<'_>, cfg: &ElementConfig) {
        let v = match raw {
            RawValue::Str(s) if cfg.is_na_token(s) => None,
            RawValue::Str(s) => parse_bool_token(s),
            RawValue::Int(1) => Some(true),
            RawValue::Int(0) => Some(false),
            RawValue::Float(f) if f == 1.0 => Some(true),
            RawValue::Float(f) if f == 0.0 => Some(false),
            RawValue::Bool(b) => Some(b),
            RawValue::Element(other) => other.bool().ok(),
            _ => None,
        };
        match v {
            Some(b) => {
                self.e = b;
                self.na = false;
            }
            None => {
                if !matches!(raw, RawValue::Na) {
                    log_downgrade(&raw, Self::TYPE);
                }
                self.e = false;
                self.na = true;
            }
        }
    }

    fn is_na(&self) -> bool {
        self.na
    }

    fn val(&self) -> ElementValue {
        if self.na {
            return ElementValue::Na;
        }
        ElementValue::Bool(self.e)
    }

    fn render(&self, _cfg: &ElementConfig) -> String {
        match (self.na, self.e) {
            (true, _) => String::from(NA_TOKEN),
            (false, true) => String::from("true"),
            (false, false) => String::from("false"),
        }
    }

    fn int(&self) -> Result<i64> {
        if self.na {
            return Err(ConversionError::na_to("int"));
        }
        Ok(i64::from(self.e))
    }

    fn float(&self) -> f64 {
        match (self.na, self.e) {
            (true, _) => f64::NAN,
            (false, true) => 1.0,
            (false, false) => 0.0,
        }
    }

    fn bool(&self) -> Result<bool> {
        if self.na {
            return Err(ConversionError::na_to("bool"));
        }
        Ok(self.e)
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.na || other.na {
            return None;
        }
        Some(self.e.cmp(&other.e))
    }
}
