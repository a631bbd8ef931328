use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

use super::{
    element::{log_downgrade, ElementOps, ElementType},
    element_value::{ElementValue, RawValue},
};
use crate::{
    conf::{ElementConfig, NA_TOKEN},
    errors::{ConversionError, Result},
};

/// Unix seconds of `0001-01-01T00:00:00Z`, the zero instant. It doubles as NA: setting a
/// time element to it leaves the element NA.
pub const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

fn is_zero_instant(t: &DateTime<FixedOffset>) -> bool {
    t.timestamp() == ZERO_INSTANT_SECS && t.timestamp_subsec_nanos() == 0
}

/// Seconds since the epoch, truncated toward zero.
fn epoch_seconds(t: &DateTime<FixedOffset>) -> i64 {
    let secs = t.timestamp();
    // timestamp() floors, i.e. for instants before the epoch we are one second off
    if secs < 0 && t.timestamp_subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

/// A point in time with an offset. Equality and ordering look at the instant only, so
/// `10:00+02:00` equals `08:00Z`.
#[derive(Debug, Clone, Default)]
pub struct TimeElement {
    t: Option<DateTime<FixedOffset>>,
}

impl TimeElement {
    pub fn instant(&self) -> Option<&DateTime<FixedOffset>> {
        self.t.as_ref()
    }
}

impl ElementOps for TimeElement {
    const TYPE: ElementType = ElementType::Time;

    fn set(&mut self, raw: RawValue<'_>, cfg: &ElementConfig) {
        let v = match raw {
            RawValue::Str(s) if cfg.is_na_token(s) => None,
            RawValue::Str(s) => cfg.parse_time(s),
            RawValue::Time(t) => Some(t),
            RawValue::Element(other) => match other.val() {
                ElementValue::Time(t) => Some(t),
                ElementValue::Text(s) if !cfg.is_na_token(&s) => cfg.parse_time(&s),
                _ => None,
            },
            RawValue::Na | RawValue::Int(_) | RawValue::Float(_) | RawValue::Bool(_) => None,
        };
        self.t = v.filter(|t| !is_zero_instant(t));
        if self.t.is_none() && !matches!(raw, RawValue::Na) {
            log_downgrade(&raw, Self::TYPE);
        }
    }

    fn is_na(&self) -> bool {
        self.t.is_none()
    }

    fn val(&self) -> ElementValue {
        match self.t {
            Some(t) => ElementValue::Time(t),
            None => ElementValue::Na,
        }
    }

    fn render(&self, cfg: &ElementConfig) -> String {
        match &self.t {
            Some(t) => cfg.format_time(t),
            None => String::from(NA_TOKEN),
        }
    }

    fn int(&self) -> Result<i64> {
        self.t
            .as_ref()
            .map(epoch_seconds)
            .ok_or_else(|| ConversionError::na_to("int"))
    }

    fn float(&self) -> f64 {
        self.t
            .as_ref()
            .map_or(f64::NAN, |t| epoch_seconds(t) as f64)
    }

    fn bool(&self) -> Result<bool> {
        Err(ConversionError::unsupported(Self::TYPE, "bool"))
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (&self.t, &other.t) {
            (Some(a), Some(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        conf::TimeFormat,
        data::element::{Element, ElementType},
        errors::ElementError,
    };
    use chrono::{TimeZone, Utc};

    fn time<'a, R: Into<RawValue<'a>>>(raw: R) -> TimeElement {
        let mut e = TimeElement::default();
        e.set(raw.into(), &ElementConfig::default());
        e
    }

    #[test]
    fn new_year_2021() {
        let e = time("2021-01-01T00:00:00Z");
        assert!(!e.is_na());
        assert_eq!(Ok(1609459200), e.int());
        assert_eq!(1609459200.0, e.float());
        assert_eq!("2021-01-01T00:00:00Z", e.render(&ElementConfig::default()));
    }

    #[test]
    fn not_a_date_is_na() {
        let e = time("not-a-date");
        assert!(e.is_na());
        assert_eq!(ElementValue::Na, e.val());
        assert_eq!("NaN", e.render(&ElementConfig::default()));
        assert_eq!(
            Err(ElementError::Conversion(ConversionError::NaToBasicType {
                target_type: "int"
            })),
            e.int()
        );
    }

    #[test]
    fn never_set_is_na() {
        let e = TimeElement::default();
        assert!(e.is_na());
        assert!(e.instant().is_none());
    }

    #[test]
    fn zero_instant_is_na() {
        let zero = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ZERO_INSTANT_SECS, zero.timestamp());
        assert!(time(zero).is_na());
        assert!(time("0001-01-01T00:00:00Z").is_na());
        // same instant, other offset
        assert!(time("0001-01-01T02:00:00+02:00").is_na());
        assert!(!time("0001-01-01T00:00:01Z").is_na());
    }

    #[test]
    fn bool_always_errors() {
        let exp = Err(ElementError::Conversion(ConversionError::Unsupported {
            src_type: ElementType::Time,
            target_type: "bool",
        }));
        assert_eq!(exp, time("2021-01-01T00:00:00Z").bool());
        assert_eq!(exp, time("not-a-date").bool());
        assert_eq!("can't convert Time to bool", time("x").bool().unwrap_err().to_string());
    }

    #[test]
    fn float_of_na_is_nan() {
        assert!(time("not-a-date").float().is_nan());
    }

    #[test]
    fn int_truncates_toward_zero() {
        assert_eq!(Ok(1), time("1970-01-01T00:00:01.900Z").int());
        assert_eq!(Ok(-1), time("1969-12-31T23:59:58.500Z").int());
        assert_eq!(Ok(0), time("1969-12-31T23:59:59.500Z").int());
    }

    #[test]
    fn rfc3339_round_trip() {
        let cfg = ElementConfig::default();
        for s in [
            "2021-01-01T00:00:00Z",
            "1999-12-31T23:59:59+05:30",
            "2022-06-15T12:30:45.123456789-07:00",
            "1900-02-28T00:00:00Z",
        ] {
            let a = time(s);
            let rendered = a.render(&cfg);
            let b = time(rendered.as_str());
            assert!(!b.is_na(), "{}", rendered);
            assert_eq!(a.int(), b.int(), "{} -> {}", s, rendered);
        }
    }

    #[test]
    fn instants_compare_across_offsets() {
        let a = time("2021-01-01T10:00:00+02:00");
        let b = time("2021-01-01T08:00:00Z");
        assert_eq!(Some(Ordering::Equal), a.compare(&b));
        let c = time("2021-01-01T08:00:01Z");
        assert_eq!(Some(Ordering::Less), a.compare(&c));
        assert_eq!(None, a.compare(&time("x")));
    }

    #[test]
    fn configured_pattern() {
        let cfg = ElementConfig::new()
            .with_time_format(TimeFormat::pattern("%d.%m.%Y").unwrap())
            .build();
        let mut e = TimeElement::default();
        e.set(RawValue::Str("01.01.2021"), &cfg);
        assert_eq!(Ok(1609459200), e.int());
        assert_eq!("01.01.2021", e.render(&cfg));
        assert_eq!("2021-01-01T00:00:00Z", e.render(&ElementConfig::default()));
        e.set(RawValue::Str("2021-01-01T00:00:00Z"), &cfg);
        assert!(e.is_na());
    }

    #[test]
    fn other_natives_are_na() {
        assert!(time(1609459200i64).is_na());
        assert!(time(1.0f64).is_na());
        assert!(time(true).is_na());
    }

    #[test]
    fn from_elements() {
        let cfg = ElementConfig::default();
        let src = Element::from_raw(ElementType::Time, "2021-01-01T00:00:00Z", &cfg);
        assert_eq!(Ok(1609459200), time(&src).int());
        let txt = Element::from_raw(ElementType::Text, "2021-01-01T00:00:00Z", &cfg);
        assert_eq!(Ok(1609459200), time(&txt).int());
        let int = Element::from_raw(ElementType::Int, 1609459200i64, &cfg);
        assert!(time(&int).is_na());
    }
}
