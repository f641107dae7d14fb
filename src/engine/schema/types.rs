use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Column description as reported by segment metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    #[serde(rename = "type", default)]
    pub column_type: String,
}

/// One segment's view of a data source's columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentMetadata {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub columns: IndexMap<String, ColumnInfo>,
}

/// A named data source with the column snapshot taken at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSource {
    pub name: String,
    pub max_time: DateTime<Utc>,
    columns: Vec<String>,
}

impl DataSource {
    /// Columns are sorted and deduplicated.
    pub fn new(
        name: impl Into<String>,
        max_time: DateTime<Utc>,
        columns: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut columns: Vec<String> = columns.into_iter().collect();
        columns.sort();
        columns.dedup();
        Self {
            name: name.into(),
            max_time,
            columns,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.binary_search_by(|c| c.as_str().cmp(column)).is_ok()
    }
}
