use crate::engine::errors::VizError;
use crate::engine::query::spec::QuerySpec;
use crate::engine::store::{AnalyticStore, bounded};
use crate::engine::types::ResultRow;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runs a [`QuerySpec`] against the store: one bounded round trip, no retries.
pub struct QueryExecutor<'a> {
    store: &'a dyn AnalyticStore,
    timeout: Duration,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(store: &'a dyn AnalyticStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn execute(&self, spec: &QuerySpec) -> Result<Vec<ResultRow>, VizError> {
        debug!(
            target: "panoramix::executor",
            datasource = %spec.datasource,
            interval = %spec.interval,
            limit = spec.limit(),
            "Executing group-by query"
        );
        let started = Instant::now();
        let rows = bounded(self.timeout, self.store.group_by(spec)).await?;
        info!(
            target: "panoramix::executor",
            datasource = %spec.datasource,
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Query finished"
        );
        Ok(rows)
    }
}
