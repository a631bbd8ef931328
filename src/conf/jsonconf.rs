use serde::Deserialize;

use crate::data::element::ElementType;

/// Parse/render settings as they appear in a json document. Everything is optional,
/// missing entries fall back to the `ElementConfig` defaults.
#[derive(Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ElementConfigEntry {
    pub comment: Option<String>,
    /// Either `"rfc3339"` or a chrono strftime pattern
    pub time_format: Option<String>,
    pub map_to_na: Option<Vec<String>>,
    pub na_regex: Option<String>,
    pub float_precision: Option<usize>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnTypingEntry {
    pub header: Option<String>,
    pub comment: Option<String>,
    pub element_type: ElementType,
    /// Overrides the root settings for this column only
    pub config: Option<ElementConfigEntry>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRoot {
    pub comment: Option<String>,
    pub defaults: Option<ElementConfigEntry>,
    pub column_typings: Option<Vec<ColumnTypingEntry>>,
}
