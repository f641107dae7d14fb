use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat request parameters as they arrive from a form or query string.
///
/// Keys may repeat (`groupby` is multi-valued); insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`Params::get`], but an empty value counts as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Time-bucketing resolution of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    All,
    None,
    Minute,
    Hour,
    Day,
}

impl Granularity {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Granularity::All),
            "none" => Some(Granularity::None),
            "minute" => Some(Granularity::Minute),
            "hour" => Some(Granularity::Hour),
            "day" => Some(Granularity::Day),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::All => "all",
            Granularity::None => "none",
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named lookback windows measured back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindowAlias {
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "7days")]
    SevenDays,
    #[serde(rename = "28days")]
    TwentyEightDays,
    #[serde(rename = "all")]
    All,
}

impl TimeWindowAlias {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1hour" => Some(TimeWindowAlias::OneHour),
            "1day" => Some(TimeWindowAlias::OneDay),
            "7days" => Some(TimeWindowAlias::SevenDays),
            "28days" => Some(TimeWindowAlias::TwentyEightDays),
            "all" => Some(TimeWindowAlias::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindowAlias::OneHour => "1hour",
            TimeWindowAlias::OneDay => "1day",
            TimeWindowAlias::SevenDays => "7days",
            TimeWindowAlias::TwentyEightDays => "28days",
            TimeWindowAlias::All => "all",
        }
    }

    /// `All` is a 100 year lookback, not an unbounded range.
    pub fn duration(&self) -> Duration {
        match self {
            TimeWindowAlias::OneHour => Duration::hours(1),
            TimeWindowAlias::OneDay => Duration::days(1),
            TimeWindowAlias::SevenDays => Duration::days(7),
            TimeWindowAlias::TwentyEightDays => Duration::days(28),
            TimeWindowAlias::All => Duration::days(365 * 100),
        }
    }
}

/// Operators accepted in an indexed filter triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    Eq,
    Neq,
    In,
}

impl FilterOp {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "==" => Some(FilterOp::Eq),
            "!=" => Some(FilterOp::Neq),
            "in" => Some(FilterOp::In),
            _ => None,
        }
    }
}
