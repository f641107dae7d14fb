use crate::engine::errors::VizError;
use crate::engine::query::spec::Interval;
use crate::engine::schema::types::DataSource;
use crate::engine::store::{AnalyticStore, bounded};
use chrono::Duration as ChronoDuration;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Discovers a data source's columns from its most recent segment.
pub struct SchemaResolver<'a> {
    store: &'a dyn AnalyticStore,
    timeout: Duration,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(store: &'a dyn AnalyticStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Looks up the latest time boundary, then reads segment metadata for the
    /// one second ending at it. The last segment returned is taken as the
    /// current schema.
    pub async fn resolve(&self, datasource: &str) -> Result<DataSource, VizError> {
        let max_time = bounded(self.timeout, self.store.time_boundary(datasource))
            .await?
            .ok_or_else(|| {
                warn!(target: "panoramix::schema", datasource, "No time boundary returned");
                VizError::SchemaUnavailable(datasource.to_string())
            })?;

        let interval = Interval::ending_at(max_time, ChronoDuration::seconds(1));
        debug!(
            target: "panoramix::schema",
            datasource,
            interval = %interval,
            "Requesting segment metadata"
        );

        let segments = bounded(
            self.timeout,
            self.store.segment_metadata(datasource, &interval),
        )
        .await?;

        let Some(latest) = segments.into_iter().last() else {
            warn!(target: "panoramix::schema", datasource, "No segment metadata for latest interval");
            return Err(VizError::SchemaUnavailable(datasource.to_string()));
        };

        let ds = DataSource::new(datasource, max_time, latest.columns.into_keys());
        info!(
            target: "panoramix::schema",
            datasource,
            columns = ds.columns().len(),
            "Resolved schema"
        );
        Ok(ds)
    }
}
