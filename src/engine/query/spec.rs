use crate::command::types::Granularity;
use crate::engine::query::filter::Filter;
use crate::shared::time::TimeParser;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

/// Half-open `[start, end)` time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The window of length `lookback` ending at `end`.
    pub fn ending_at(end: DateTime<Utc>, lookback: Duration) -> Self {
        Self {
            start: end - lookback,
            end,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            TimeParser::format(&self.start),
            TimeParser::format(&self.end)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Descending,
}

/// Top-N clause applied by the store together with the limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitSpec {
    pub limit: u32,
    pub column: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AggregationKind {
    #[serde(rename = "doubleSum")]
    DoubleSum,
}

/// Sum of the pre-rolled count column, exposed under the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    pub kind: AggregationKind,
    pub name: String,
    pub field_name: String,
}

impl Aggregation {
    pub fn count(metric: &str) -> Self {
        Self {
            kind: AggregationKind::DoubleSum,
            name: metric.to_string(),
            field_name: metric.to_string(),
        }
    }
}

/// A fully resolved group-by query, ready for the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySpec {
    pub datasource: String,
    pub group_by: Vec<String>,
    pub granularity: Granularity,
    pub interval: Interval,
    pub aggregation: Aggregation,
    pub limit_spec: LimitSpec,
    pub filter: Option<Filter>,
}

impl QuerySpec {
    pub fn metric(&self) -> &str {
        &self.aggregation.name
    }

    pub fn limit(&self) -> u32 {
        self.limit_spec.limit
    }
}
