use super::TransformContext;
use crate::command::types::Granularity;
use crate::engine::types::ResultRow;
use crate::shared::time::TimeParser;
use serde::Serialize;
use serde_json::Value;

pub const TIMESTAMP_COLUMN: &str = "timestamp";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Rows in store order. With granularity `all` every timestamp is the same,
/// so the timestamp column is dropped.
pub fn flat_table(rows: &[ResultRow], ctx: &TransformContext<'_>) -> FlatTable {
    let with_timestamp = ctx.granularity != Granularity::All;

    let mut columns = Vec::with_capacity(ctx.dimensions.len() + 2);
    if with_timestamp {
        columns.push(TIMESTAMP_COLUMN.to_string());
    }
    columns.extend(ctx.dimensions.iter().cloned());
    columns.push(ctx.metric.to_string());

    let rows = rows
        .iter()
        .map(|row| {
            let mut out = Vec::with_capacity(columns.len());
            if with_timestamp {
                out.push(Value::from(TimeParser::format(&row.timestamp)));
            }
            for dim in ctx.dimensions {
                out.push(Value::from(
                    row.dimensions.get(dim).cloned().unwrap_or_default(),
                ));
            }
            out.push(Value::from(row.metric));
            out
        })
        .collect();

    FlatTable { columns, rows }
}
