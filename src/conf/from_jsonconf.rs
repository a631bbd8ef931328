use log::debug;

use crate::{
    conf::{
        jsonconf::{ColumnTypingEntry, ConfigRoot, ElementConfigEntry},
        ElementConfig, TimeFormat,
    },
    data::{column::Column, element::ElementType},
    errors::{ConfigError, ElementError, Result},
};

const RFC3339_KEYWORD: &str = "rfc3339";

/// `base`, with everything `entry` sets laid over it.
fn overlay(base: &ElementConfig, entry: &ElementConfigEntry) -> Result<ElementConfig> {
    let mut cfg = base.clone();
    if let Some(tf) = entry.time_format.as_deref() {
        if tf.eq_ignore_ascii_case(RFC3339_KEYWORD) {
            cfg.with_time_format(TimeFormat::Rfc3339);
        } else {
            cfg.with_time_pattern(tf)?;
        }
    }
    if let Some(map_to_na) = entry.map_to_na.as_ref() {
        cfg.with_map_to_na(map_to_na.clone());
    }
    if let Some(re) = entry.na_regex.as_deref() {
        cfg.with_na_regex(re)?;
    }
    if let Some(prec) = entry.float_precision {
        cfg.with_float_precision(prec);
    }
    Ok(cfg)
}

impl TryFrom<&ElementConfigEntry> for ElementConfig {
    type Error = ElementError;

    fn try_from(entry: &ElementConfigEntry) -> Result<ElementConfig> {
        overlay(&ElementConfig::default(), entry)
    }
}

/// Type and settings for one column.
#[derive(Debug, Clone)]
pub struct ColumnTyping {
    pub header: Option<String>,
    pub element_type: ElementType,
    pub cfg: ElementConfig,
}

impl ColumnTyping {
    /// Builds the column at `idx` from raw tokens. Falls back to the index as the name, if
    /// no header is given.
    pub fn build_column<T>(&self, idx: usize, tokens: &[T]) -> Column
    where
        T: AsRef<str>,
    {
        let name = self.header.clone().unwrap_or_else(|| idx.to_string());
        Column::from_strs(self.element_type, name, idx, tokens, &self.cfg)
    }
}

#[derive(Debug, Clone)]
pub struct ElementsConfig {
    pub defaults: ElementConfig,
    pub column_typings: Vec<ColumnTyping>,
}

impl ElementsConfig {
    pub fn from_json_str(data: &str) -> Result<Self> {
        let root: ConfigRoot = serde_json::from_str(data)
            .map_err(|e| ConfigError::Malformed { msg: e.to_string() })?;
        root.try_into()
    }
}

impl TryFrom<ConfigRoot> for ElementsConfig {
    type Error = ElementError;

    fn try_from(root: ConfigRoot) -> Result<ElementsConfig> {
        let defaults = match root.defaults.as_ref() {
            Some(entry) => ElementConfig::try_from(entry)?,
            None => ElementConfig::default(),
        };

        let column_typings = root
            .column_typings
            .unwrap_or_default()
            .into_iter()
            .map(|ColumnTypingEntry { header, element_type, config, .. }| -> Result<ColumnTyping> {
                let cfg = match config.as_ref() {
                    Some(entry) => overlay(&defaults, entry)?,
                    None => defaults.clone(),
                };
                Ok(ColumnTyping {
                    header,
                    element_type,
                    cfg,
                })
            })
            .collect::<Result<Vec<ColumnTyping>>>()?;

        debug!(
            "loaded element config with {} column typings",
            column_typings.len()
        );
        Ok(ElementsConfig {
            defaults,
            column_typings,
        })
    }
}
