use std::cmp::Ordering;

use super::{
    element::{log_downgrade, ElementOps, ElementType},
    element_value::{ElementValue, RawValue},
};
use crate::{
    conf::{ElementConfig, NA_TOKEN},
    errors::{ConversionError, Result},
};

/// Truncates toward zero, `None` if the float has no `i64` counterpart.
pub(crate) fn float_to_i64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which itself is out of range
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct IntElement {
    e: i64,
    na: bool,
}

impl Default for IntElement {
    fn default() -> Self {
        Self { e: 0, na: true }
    }
}

impl ElementOps for IntElement {
    const TYPE: ElementType = ElementType::Int;

    fn set(&mut self, raw: RawValue<'_>, cfg: &ElementConfig) {
        let v = match raw {
            RawValue::Str(s) if cfg.is_na_token(s) => None,
            RawValue::Str(s) => s.parse::<i64>().ok(),
            RawValue::Int(i) => Some(i),
            RawValue::Float(f) => float_to_i64(f),
            RawValue::Bool(b) => Some(i64::from(b)),
            RawValue::Element(other) if other.is_na() => None,
            RawValue::Element(other) => other.int().ok(),
            RawValue::Na | RawValue::Time(_) => None,
        };
        match v {
            Some(i) => {
                self.e = i;
                self.na = false;
            }
            None => {
                if !matches!(raw, RawValue::Na) {
                    log_downgrade(&raw, Self::TYPE);
                }
                self.e = 0;
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
        ElementValue::Int(self.e)
    }

    fn render(&self, _cfg: &ElementConfig) -> String {
        if self.na {
            return String::from(NA_TOKEN);
        }
        self.e.to_string()
    }

    fn int(&self) -> Result<i64> {
        if self.na {
            return Err(ConversionError::na_to("int"));
        }
        Ok(self.e)
    }

    fn float(&self) -> f64 {
        if self.na {
            return f64::NAN;
        }
        self.e as f64
    }

    fn bool(&self) -> Result<bool> {
        match (self.na, self.e) {
            (true, _) => Err(ConversionError::na_to("bool")),
            (false, 1) => Ok(true),
            (false, 0) => Ok(false),
            (false, i) => Err(ConversionError::not_convertible(
                Self::TYPE,
                i.to_string(),
                "bool",
            )),
        }
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.na || other.na {
            return None;
        }
        Some(self.e.cmp(&other.e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int<'a, R: Into<RawValue<'a>>>(raw: R) -> IntElement {
        let mut e = IntElement::default();
        e.set(raw.into(), &ElementConfig::default());
        e
    }

    #[test]
    fn zero_is_a_value() {
        let e = int(0i64);
        assert!(!e.is_na());
        assert_eq!(ElementValue::Int(0), e.val());
        assert_eq!(Ok(0), e.int());
        assert!(IntElement::default().is_na());
    }

    #[test]
    fn from_str() {
        assert_eq!(ElementValue::Int(-12), int("-12").val());
        assert!(int("12.5").is_na());
        assert!(int("").is_na());
        assert!(int("NaN").is_na());
        assert_eq!("NaN", int("x").render(&ElementConfig::default()));
    }

    #[test]
    fn from_float() {
        assert_eq!(ElementValue::Int(2), int(2.9f64).val());
        assert_eq!(ElementValue::Int(-2), int(-2.9f64).val());
        assert!(int(f64::NAN).is_na());
        assert!(int(f64::INFINITY).is_na());
        assert!(int(1e30f64).is_na());
    }

    #[test]
    fn from_bool() {
        assert_eq!(ElementValue::Int(1), int(true).val());
        assert_eq!(ElementValue::Int(0), int(false).val());
    }

    #[test]
    fn conversions() {
        assert_eq!(7.0, int(7i64).float());
        assert!(int(RawValue::Na).float().is_nan());
        assert_eq!(Err(ConversionError::na_to("int")), int(RawValue::Na).int());
        assert_eq!(Ok(true), int(1i64).bool());
        assert_eq!(Ok(false), int(0i64).bool());
        assert!(int(2i64).bool().is_err());
        assert_eq!(Err(ConversionError::na_to("bool")), int(RawValue::Na).bool());
    }

    #[test]
    fn set_again_to_na_resets_payload() {
        let mut e = int(5i64);
        e.set(RawValue::Str("nope"), &ElementConfig::default());
        assert!(e.is_na());
        assert_eq!(ElementValue::Na, e.val());
    }

    #[test]
    fn ordering() {
        assert_eq!(Some(Ordering::Less), int(-1i64).compare(&int(0i64)));
        assert_eq!(None, int(RawValue::Na).compare(&int(0i64)));
    }

    #[test]
    fn float_to_i64_bounds() {
        assert_eq!(Some(0), float_to_i64(-0.5));
        assert_eq!(Some(i64::MIN), float_to_i64(i64::MIN as f64));
        assert_eq!(None, float_to_i64(i64::MAX as f64));
    }
}
