use super::{TransformContext, combination, combination_label};
use crate::engine::types::ResultRow;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One output column: a distinct combination of dimension values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesKey {
    pub values: Vec<String>,
    pub label: String,
}

/// One timestamp. `None` cells mark a missing data point, distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesRow {
    pub timestamp: DateTime<Utc>,
    pub cells: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesTable {
    pub dimensions: Vec<String>,
    pub metric: String,
    pub series: Vec<SeriesKey>,
    pub rows: Vec<TimeSeriesRow>,
}

impl TimeSeriesTable {
    pub fn cell(&self, timestamp: DateTime<Utc>, label: &str) -> Option<Option<f64>> {
        let col = self.series.iter().position(|s| s.label == label)?;
        let row = self.rows.iter().find(|r| r.timestamp == timestamp)?;
        row.cells.get(col).copied()
    }
}

/// Rows become timestamps (ascending), dimension combinations become
/// columns (lexicographic). Repeated (timestamp, combination) pairs are summed.
pub fn pivot_time_series(rows: &[ResultRow], ctx: &TransformContext<'_>) -> TimeSeriesTable {
    let keys: BTreeSet<Vec<String>> = rows
        .iter()
        .map(|row| combination(row, ctx.dimensions))
        .collect();
    let keys: Vec<Vec<String>> = keys.into_iter().collect();

    let mut buckets: BTreeMap<DateTime<Utc>, Vec<Option<f64>>> = BTreeMap::new();
    for row in rows {
        let key = combination(row, ctx.dimensions);
        let Ok(col) = keys.binary_search(&key) else {
            continue;
        };
        let cells = buckets
            .entry(row.timestamp)
            .or_insert_with(|| vec![None; keys.len()]);
        let cell = &mut cells[col];
        *cell = Some(cell.unwrap_or(0.0) + row.metric);
    }

    TimeSeriesTable {
        dimensions: ctx.dimensions.to_vec(),
        metric: ctx.metric.to_string(),
        series: keys
            .into_iter()
            .map(|values| SeriesKey {
                label: combination_label(&values, ctx.metric),
                values,
            })
            .collect(),
        rows: buckets
            .into_iter()
            .map(|(timestamp, cells)| TimeSeriesRow { timestamp, cells })
            .collect(),
    }
}
