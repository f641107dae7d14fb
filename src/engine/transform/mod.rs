//! Reshapes group-by rows into the layout each visualization needs.

pub mod distribution;
pub mod flat;
pub mod time_series;

pub use distribution::{DistributionRow, DistributionTable, pivot_distribution};
pub use flat::{FlatTable, flat_table};
pub use time_series::{SeriesKey, TimeSeriesRow, TimeSeriesTable, pivot_time_series};

use crate::command::types::Granularity;
use crate::engine::query::spec::QuerySpec;
use crate::engine::types::ResultRow;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Which reshape a visualization asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotKind {
    Flat,
    TimeSeries,
    Distribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum PivotedTable {
    TimeIndexed(TimeSeriesTable),
    CategoryIndexed(DistributionTable),
    Flat(FlatTable),
}

impl PivotedTable {
    pub fn row_count(&self) -> usize {
        match self {
            PivotedTable::TimeIndexed(t) => t.rows.len(),
            PivotedTable::CategoryIndexed(t) => t.rows.len(),
            PivotedTable::Flat(t) => t.rows.len(),
        }
    }
}

/// Result of a transform. An empty input is `NoData`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ready(PivotedTable),
    NoData,
}

/// What the transforms need to know about the query that produced the rows.
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    pub dimensions: &'a [String],
    pub metric: &'a str,
    pub granularity: Granularity,
}

impl<'a> TransformContext<'a> {
    pub fn from_spec(spec: &'a QuerySpec) -> Self {
        Self {
            dimensions: &spec.group_by,
            metric: spec.metric(),
            granularity: spec.granularity,
        }
    }
}

pub fn transform(kind: PivotKind, rows: &[ResultRow], ctx: &TransformContext<'_>) -> Outcome {
    if rows.is_empty() {
        debug!(target: "panoramix::transform", ?kind, "Empty result set");
        return Outcome::NoData;
    }

    let table = match kind {
        PivotKind::Flat => PivotedTable::Flat(flat_table(rows, ctx)),
        PivotKind::TimeSeries => PivotedTable::TimeIndexed(pivot_time_series(rows, ctx)),
        PivotKind::Distribution => PivotedTable::CategoryIndexed(pivot_distribution(rows, ctx)),
    };

    debug!(
        target: "panoramix::transform",
        ?kind,
        input_rows = rows.len(),
        output_rows = table.row_count(),
        "Reshaped result set"
    );
    Outcome::Ready(table)
}

/// Label for a dimension combination; the metric name when there are no dimensions.
///
/// Values are joined with `", "`. Commas and backslashes inside a value are
/// backslash-escaped so distinct combinations never share a label.
pub(crate) fn combination_label(values: &[String], metric: &str) -> String {
    if values.is_empty() {
        return metric.to_string();
    }
    values
        .iter()
        .map(|v| escape_label_part(v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_label_part(value: &str) -> Cow<'_, str> {
    if value.contains([',', '\\']) {
        Cow::Owned(value.replace('\\', "\\\\").replace(',', "\\,"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Dimension values of `row` in `dimensions` order.
pub(crate) fn combination(row: &ResultRow, dimensions: &[String]) -> Vec<String> {
    dimensions
        .iter()
        .map(|d| row.dimensions.get(d).cloned().unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod flat_test;
