use super::{TransformContext, combination, combination_label};
use crate::engine::types::ResultRow;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionRow {
    pub key: Vec<String>,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionTable {
    pub dimensions: Vec<String>,
    pub metric: String,
    pub rows: Vec<DistributionRow>,
}

impl DistributionTable {
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }
}

/// Collapses the time axis by summing per dimension combination, then orders
/// rows by descending metric. Ties keep first-seen order.
pub fn pivot_distribution(rows: &[ResultRow], ctx: &TransformContext<'_>) -> DistributionTable {
    let mut totals: IndexMap<Vec<String>, f64> = IndexMap::new();
    for row in rows {
        *totals
            .entry(combination(row, ctx.dimensions))
            .or_insert(0.0) += row.metric;
    }

    let mut out: Vec<DistributionRow> = totals
        .into_iter()
        .map(|(key, value)| DistributionRow {
            label: combination_label(&key, ctx.metric),
            key,
            value,
        })
        .collect();
    // sort_by is stable
    out.sort_by(|a, b| b.value.total_cmp(&a.value));

    DistributionTable {
        dimensions: ctx.dimensions.to_vec(),
        metric: ctx.metric.to_string(),
        rows: out,
    }
}
