pub mod http;
pub mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use crate::engine::errors::StoreError;
use crate::engine::query::spec::{Interval, QuerySpec};
use crate::engine::schema::types::SegmentMetadata;
use crate::engine::types::ResultRow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;

/// The three calls the core needs from an analytic store.
#[async_trait]
pub trait AnalyticStore: Send + Sync {
    /// Most recent event time of `datasource`, or `None` when it has no data.
    async fn time_boundary(&self, datasource: &str) -> Result<Option<DateTime<Utc>>, StoreError>;

    async fn segment_metadata(
        &self,
        datasource: &str,
        interval: &Interval,
    ) -> Result<Vec<SegmentMetadata>, StoreError>;

    /// Executes a group-by query. An empty result is not an error.
    async fn group_by(&self, spec: &QuerySpec) -> Result<Vec<ResultRow>, StoreError>;
}

/// Runs one store round trip with an upper time bound.
pub async fn bounded<T, F>(timeout: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout(timeout)),
    }
}
