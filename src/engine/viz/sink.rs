use crate::engine::transform::{DistributionTable, PivotedTable, TimeSeriesTable};
use crate::engine::viz::kind::ChartKind;
use serde_json::{Value, json};

/// Turns a shaped table into a chart-library document. The output is opaque
/// to the rest of the crate.
pub trait ChartSink: Send + Sync {
    fn serialize(&self, table: &PivotedTable, kind: ChartKind) -> Value;
}

/// Emits Highcharts-style options: `{chart, xAxis, yAxis, series}`.
pub struct HighchartsSink;

impl ChartSink for HighchartsSink {
    fn serialize(&self, table: &PivotedTable, kind: ChartKind) -> Value {
        match table {
            PivotedTable::TimeIndexed(t) => time_series_options(t, kind),
            PivotedTable::CategoryIndexed(t) => distribution_options(t, kind),
            PivotedTable::Flat(_) => json!({
                "chart": { "type": kind.as_str() },
                "series": [],
            }),
        }
    }
}

fn time_series_options(table: &TimeSeriesTable, kind: ChartKind) -> Value {
    let series: Vec<Value> = table
        .series
        .iter()
        .enumerate()
        .map(|(col, key)| {
            let data: Vec<Value> = table
                .rows
                .iter()
                .map(|row| json!([row.timestamp.timestamp_millis(), row.cells[col]]))
                .collect();
            json!({ "name": key.label, "data": data })
        })
        .collect();

    json!({
        "chart": { "type": kind.as_str() },
        "xAxis": { "type": "datetime" },
        "yAxis": { "title": { "text": table.metric } },
        "series": series,
    })
}

fn distribution_options(table: &DistributionTable, kind: ChartKind) -> Value {
    let values: Vec<f64> = table.rows.iter().map(|r| r.value).collect();
    json!({
        "chart": { "type": kind.as_str() },
        "xAxis": { "categories": table.labels() },
        "yAxis": { "title": { "text": table.metric } },
        "series": [{ "name": table.metric, "data": values }],
    })
}
