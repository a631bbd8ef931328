use log::trace;
use strum_macros::Display;

use super::{
    element::{Element, ElementType},
    element_value::RawValue,
};
use crate::{
    conf::ElementConfig,
    errors::{ConversionError, ElementError, Result},
};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "jsonconf", derive(serde::Deserialize))]
pub enum Comparator {
    #[strum(serialize = "==")]
    #[cfg_attr(feature = "jsonconf", serde(rename = "=="))]
    Eq,
    #[strum(serialize = "!=")]
    #[cfg_attr(feature = "jsonconf", serde(rename = "!="))]
    Neq,
    #[strum(serialize = ">")]
    #[cfg_attr(feature = "jsonconf", serde(rename = ">"))]
    Greater,
    #[strum(serialize = ">=")]
    #[cfg_attr(feature = "jsonconf", serde(rename = ">="))]
    GreaterEq,
    #[strum(serialize = "<")]
    #[cfg_attr(feature = "jsonconf", serde(rename = "<"))]
    Less,
    #[strum(serialize = "<=")]
    #[cfg_attr(feature = "jsonconf", serde(rename = "<="))]
    LessEq,
}

impl Comparator {
    pub fn apply(&self, lhs: &Element, rhs: &Element) -> bool {
        match self {
            Comparator::Eq => lhs.eq(rhs),
            Comparator::Neq => lhs.neq(rhs),
            Comparator::Greater => lhs.greater(rhs),
            Comparator::GreaterEq => lhs.greater_eq(rhs),
            Comparator::Less => lhs.less(rhs),
            Comparator::LessEq => lhs.less_eq(rhs),
        }
    }
}

/// An ordered, homogeneous run of elements. All elements share `element_type`.
#[derive(Debug, Clone)]
pub struct Column {
    pub element_type: ElementType, // every element in data has this type
    pub name: String,
    pub idx: usize, // columns are zero-indexed
    data: Vec<Element>,
}

impl Column {
    pub fn new(element_type: ElementType, name: String, idx: usize) -> Self {
        Column {
            element_type,
            name,
            idx,
            data: Vec::new(),
        }
    }

    /// `capacity` copies of `value`. The column takes the type of `value`.
    pub fn new_filled_with(value: &Element, name: String, idx: usize, capacity: usize) -> Self {
        let mut data: Vec<Element> = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            data.push(value.copy());
        }

        Column {
            element_type: value.element_type(),
            name,
            idx,
            data,
        }
    }

    /// Reads every token as an element of `element_type`. Tokens that can't be read end
    /// up as NA, they don't fail the column.
    pub fn from_strs<T>(
        element_type: ElementType,
        name: String,
        idx: usize,
        tokens: &[T],
        cfg: &ElementConfig,
    ) -> Self
    where
        T: AsRef<str>,
    {
        let data: Vec<Element> = tokens
            .iter()
            .map(|t| Element::from_raw(element_type, t.as_ref(), cfg))
            .collect();
        trace!(
            "column {:?} (#{}): {} of {} tokens are NA",
            &name,
            idx,
            data.iter().filter(|e| e.is_na()).count(),
            data.len()
        );
        Column {
            element_type,
            name,
            idx,
            data,
        }
    }

    /// Appends a new element, populated from `raw`.
    pub fn push_raw<'a, R>(&mut self, raw: R, cfg: &ElementConfig)
    where
        R: Into<RawValue<'a>>,
    {
        self.data.push(Element::from_raw(self.element_type, raw, cfg));
    }

    /// Appends an existing element. Its type has to match the column's.
    pub fn push(&mut self, e: Element) -> Result<()> {
        if e.element_type() != self.element_type {
            return Err(ElementError::Conversion(ConversionError::TypeMismatch {
                expected: self.element_type,
                actual: e.element_type(),
            }));
        }
        self.data.push(e);
        Ok(())
    }

    pub fn set_idx(&mut self, new_idx: usize) {
        self.idx = new_idx;
    }

    pub fn get(&self, i: usize) -> Option<&Element> {
        self.data.get(i)
    }

    pub fn elements(&self) -> &[Element] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn na_count(&self) -> usize {
        self.data.iter().filter(|e| e.is_na()).count()
    }

    /// Element-wise `self[i] <comparator> rhs`. NA elements, and an `rhs` of another
    /// type, always give `false`.
    pub fn compare(&self, comparator: Comparator, rhs: &Element) -> Vec<bool> {
        self.data.iter().map(|e| comparator.apply(e, rhs)).collect()
    }

    pub fn render(&self, cfg: &ElementConfig) -> Vec<String> {
        self.data.iter().map(|e| e.render(cfg)).collect()
    }
}
