use std::fmt::Write;

use chrono::{
    format::{Item, StrftimeItems},
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};
use log::debug;
use regex::Regex;

use crate::errors::{ConfigError, Result};

#[cfg(feature = "jsonconf")]
pub mod from_jsonconf;
#[cfg(feature = "jsonconf")]
pub mod jsonconf;

/// The literal that always ingests as NA, for every element type, and that NA renders as.
pub const NA_TOKEN: &str = "NaN";

/// Same as `%f` would give us, i.e. six digits after the decimal point.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// How time elements are parsed from and rendered to strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Parses with optional fractional seconds, renders whole seconds with `Z` for UTC.
    #[default]
    Rfc3339,
    /// A chrono strftime pattern. Patterns without an offset are read as UTC,
    /// date-only patterns as midnight UTC.
    Pattern(String),
}

impl TimeFormat {
    pub fn pattern<T>(pattern: T) -> Result<Self>
    where
        T: Into<String>,
    {
        let pattern = pattern.into();
        if pattern.is_empty() || StrftimeItems::new(&pattern).any(|i| matches!(i, Item::Error)) {
            return Err(ConfigError::InvalidTimePattern { pattern }.into());
        }
        Ok(TimeFormat::Pattern(pattern))
    }

    pub fn parse(&self, s: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            TimeFormat::Rfc3339 => DateTime::parse_from_rfc3339(s).ok(),
            TimeFormat::Pattern(p) => DateTime::parse_from_str(s, p)
                .ok()
                .or_else(|| {
                    NaiveDateTime::parse_from_str(s, p)
                        .ok()
                        .map(|ndt| DateTime::<FixedOffset>::from(Utc.from_utc_datetime(&ndt)))
                })
                .or_else(|| {
                    NaiveDate::parse_from_str(s, p)
                        .ok()
                        .and_then(|nd| nd.and_hms_opt(0, 0, 0))
                        .map(|ndt| DateTime::<FixedOffset>::from(Utc.from_utc_datetime(&ndt)))
                }),
        }
    }

    pub fn format(&self, t: &DateTime<FixedOffset>) -> String {
        match self {
            TimeFormat::Rfc3339 => t.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimeFormat::Pattern(p) => {
                let mut out = String::new();
                // A pattern set by hand (i.e. not via `TimeFormat::pattern`) can still be broken
                match write!(out, "{}", t.format(p)) {
                    Ok(_) => out,
                    Err(_) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
                }
            }
        }
    }
}

/// Everything that influences how elements are read from and rendered to strings.
///
/// There is no process-wide instance of this; it is handed to `Element::set` and
/// `Element::render` explicitly, so differently configured columns can be processed
/// side by side.
#[derive(Debug, Clone)]
pub struct ElementConfig {
    pub time_format: TimeFormat,
    pub map_to_na: Vec<String>,
    pub na_regex: Option<Regex>,
    pub float_precision: usize,
}

impl ElementConfig {
    pub fn new() -> Self {
        Self {
            time_format: TimeFormat::Rfc3339,
            map_to_na: Vec::new(),
            na_regex: None,
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }

    pub fn with_time_format(&mut self, time_format: TimeFormat) -> &mut Self {
        self.time_format = time_format;
        self
    }

    pub fn with_time_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        self.time_format = TimeFormat::pattern(pattern)?;
        Ok(self)
    }

    pub fn with_map_to_na(&mut self, map_to_na: Vec<String>) -> &mut Self {
        self.map_to_na = map_to_na;
        self
    }

    pub fn with_na_regex(&mut self, pattern: &str) -> Result<&mut Self> {
        let re = Regex::new(pattern).map_err(|e| ConfigError::InvalidNaRegex {
            pattern: String::from(pattern),
            detail: e.to_string(),
        })?;
        self.na_regex = Some(re);
        Ok(self)
    }

    pub fn with_float_precision(&mut self, float_precision: usize) -> &mut Self {
        self.float_precision = float_precision;
        self
    }

    pub fn build(&mut self) -> Self {
        let cfg = std::mem::take(self);
        debug!("element config: {:?}", &cfg);
        cfg
    }

    /// True if a raw string token stands for a missing value.
    pub fn is_na_token(&self, token: &str) -> bool {
        token == NA_TOKEN
            || self.map_to_na.iter().any(|t| t == token)
            || self.na_regex.as_ref().map_or(false, |re| re.is_match(token))
    }

    pub fn parse_time(&self, s: &str) -> Option<DateTime<FixedOffset>> {
        self.time_format.parse(s)
    }

    pub fn format_time(&self, t: &DateTime<FixedOffset>) -> String {
        self.time_format.format(t)
    }

    pub fn format_float(&self, f: f64) -> String {
        format!("{:.*}", self.float_precision, f)
    }
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self::new()
    }
}
