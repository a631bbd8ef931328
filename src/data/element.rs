use std::cmp::Ordering;

use log::trace;
use strum_macros::Display;

use super::{
    bool_element::BoolElement, element_value::ElementValue, element_value::RawValue,
    float_element::FloatElement, int_element::IntElement, text_element::TextElement,
    time_element::TimeElement,
};
use crate::{conf::ElementConfig, errors::Result};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "jsonconf", derive(serde::Deserialize, serde::Serialize))]
pub enum ElementType {
    Text,
    Int,
    Float,
    Bool,
    Time,
}

/// The capability set every element variant provides. `Element` dispatches to it, a
/// variant never has to know about the others (except when being set from one).
pub trait ElementOps: Clone + Default {
    const TYPE: ElementType;

    /// Populates the element. Input that can't be read as this type turns the element
    /// into NA, it never errors.
    fn set(&mut self, raw: RawValue<'_>, cfg: &ElementConfig);
    fn is_na(&self) -> bool;
    fn val(&self) -> ElementValue;
    fn render(&self, cfg: &ElementConfig) -> String;
    fn int(&self) -> Result<i64>;
    fn float(&self) -> f64;
    fn bool(&self) -> Result<bool>;
    /// Ordering of two present values, `None` as soon as one side is NA.
    fn compare(&self, other: &Self) -> Option<Ordering>;
}

/// Logs input that didn't survive ingestion.
pub(crate) fn log_downgrade(raw: &RawValue<'_>, element_type: ElementType) {
    trace!("can't read {:?} as {}, element is NA", raw, element_type);
}

/// One typed, possibly missing cell of a column.
///
/// All comparisons are total: comparing against NA, or against an element of another
/// type, is simply `false`. Note that `neq` follows the same rule, so it is not the
/// negation of `eq`.
#[derive(Debug, Clone)]
pub enum Element {
    Text(TextElement),
    Int(IntElement),
    Float(FloatElement),
    Bool(BoolElement),
    Time(TimeElement),
}

macro_rules! dispatch {
    ($self:expr, $e:ident => $body:expr) => {
        match $self {
            Element::Text($e) => $body,
            Element::Int($e) => $body,
            Element::Float($e) => $body,
            Element::Bool($e) => $body,
            Element::Time($e) => $body,
        }
    };
}

macro_rules! predicate {
    ($fn_name:ident, $($ord:pat_param)|+) => {
        pub fn $fn_name(&self, other: &Element) -> bool {
            matches!(self.compare(other), Some($($ord)|+))
        }
    };
}

impl Element {
    /// A fresh, NA element of the given type.
    pub fn new(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Text => Element::Text(TextElement::default()),
            ElementType::Int => Element::Int(IntElement::default()),
            ElementType::Float => Element::Float(FloatElement::default()),
            ElementType::Bool => Element::Bool(BoolElement::default()),
            ElementType::Time => Element::Time(TimeElement::default()),
        }
    }

    pub fn from_raw<'a, R>(element_type: ElementType, raw: R, cfg: &ElementConfig) -> Self
    where
        R: Into<RawValue<'a>>,
    {
        let mut e = Element::new(element_type);
        e.set(raw, cfg);
        e
    }

    pub fn set<'a, R>(&mut self, raw: R, cfg: &ElementConfig)
    where
        R: Into<RawValue<'a>>,
    {
        let raw = raw.into();
        dispatch!(self, e => e.set(raw, cfg))
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Element::Text(_) => TextElement::TYPE,
            Element::Int(_) => IntElement::TYPE,
            Element::Float(_) => FloatElement::TYPE,
            Element::Bool(_) => BoolElement::TYPE,
            Element::Time(_) => TimeElement::TYPE,
        }
    }

    pub fn is_na(&self) -> bool {
        dispatch!(self, e => e.is_na())
    }

    pub fn val(&self) -> ElementValue {
        dispatch!(self, e => e.val())
    }

    /// An independent element holding the same value, or a NA one of the same type.
    pub fn copy(&self) -> Element {
        if self.is_na() {
            return Element::new(self.element_type());
        }
        self.clone()
    }

    pub fn render(&self, cfg: &ElementConfig) -> String {
        dispatch!(self, e => e.render(cfg))
    }

    pub fn int(&self) -> Result<i64> {
        dispatch!(self, e => e.int())
    }

    pub fn float(&self) -> f64 {
        dispatch!(self, e => e.float())
    }

    pub fn bool(&self) -> Result<bool> {
        dispatch!(self, e => e.bool())
    }

    fn compare(&self, other: &Element) -> Option<Ordering> {
        match (self, other) {
            (Element::Text(a), Element::Text(b)) => a.compare(b),
            (Element::Int(a), Element::Int(b)) => a.compare(b),
            (Element::Float(a), Element::Float(b)) => a.compare(b),
            (Element::Bool(a), Element::Bool(b)) => a.compare(b),
            (Element::Time(a), Element::Time(b)) => a.compare(b),
            _ => None,
        }
    }

    predicate!(eq, Ordering::Equal);
    predicate!(neq, Ordering::Less | Ordering::Greater);
    predicate!(less, Ordering::Less);
    predicate!(less_eq, Ordering::Less | Ordering::Equal);
    predicate!(greater, Ordering::Greater);
    predicate!(greater_eq, Ordering::Greater | Ordering::Equal);
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&ElementConfig::default()))
    }
}
