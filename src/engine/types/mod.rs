use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// One row returned by a group-by query.
///
/// `dimensions` is ordered like the query's group-by columns; null values
/// from the store are carried as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub timestamp: DateTime<Utc>,
    pub dimensions: IndexMap<String, String>,
    pub metric: f64,
}

impl ResultRow {
    pub fn new(timestamp: DateTime<Utc>, metric: f64) -> Self {
        Self {
            timestamp,
            dimensions: IndexMap::new(),
            metric,
        }
    }

    pub fn with_dimension(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(column.into(), value.into());
        self
    }

    /// The dimension values of this row, in column order.
    pub fn key(&self) -> Vec<String> {
        self.dimensions.values().cloned().collect()
    }
}
