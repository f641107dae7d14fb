use super::AnalyticStore;
use crate::engine::errors::StoreError;
use crate::engine::query::spec::{Interval, QuerySpec};
use crate::engine::schema::types::{ColumnInfo, SegmentMetadata};
use crate::engine::types::ResultRow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::time::Duration;

/// In-process store with canned responses.
///
/// `group_by` returns the configured rows truncated to the query's limit and
/// remembers the last spec it was asked to run.
#[derive(Debug, Default)]
pub struct MemoryStore {
    max_time: Option<DateTime<Utc>>,
    segments: Vec<SegmentMetadata>,
    rows: Vec<ResultRow>,
    delay: Option<Duration>,
    last_spec: Mutex<Option<QuerySpec>>,
    last_interval: Mutex<Option<Interval>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_time(mut self, max_time: DateTime<Utc>) -> Self {
        self.max_time = Some(max_time);
        self
    }

    /// Appends a segment exposing `columns` (typed as strings).
    pub fn with_segment<I, S>(mut self, id: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.push(SegmentMetadata {
            id: id.to_string(),
            columns: columns
                .into_iter()
                .map(|c| {
                    (
                        c.into(),
                        ColumnInfo {
                            column_type: "STRING".to_string(),
                        },
                    )
                })
                .collect(),
        });
        self
    }

    pub fn with_rows(mut self, rows: Vec<ResultRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Every call sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn last_spec(&self) -> Option<QuerySpec> {
        self.last_spec.lock().clone()
    }

    pub fn last_metadata_interval(&self) -> Option<Interval> {
        *self.last_interval.lock()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl AnalyticStore for MemoryStore {
    async fn time_boundary(&self, _datasource: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        self.pause().await;
        Ok(self.max_time)
    }

    async fn segment_metadata(
        &self,
        _datasource: &str,
        interval: &Interval,
    ) -> Result<Vec<SegmentMetadata>, StoreError> {
        self.pause().await;
        *self.last_interval.lock() = Some(*interval);
        Ok(self.segments.clone())
    }

    async fn group_by(&self, spec: &QuerySpec) -> Result<Vec<ResultRow>, StoreError> {
        self.pause().await;
        *self.last_spec.lock() = Some(spec.clone());
        Ok(self
            .rows
            .iter()
            .take(spec.limit() as usize)
            .cloned()
            .collect())
    }
}
