use crate::engine::types::ResultRow;
use chrono::{DateTime, Duration, TimeZone, Utc};

pub struct ResultRowFactory {
    inner: ResultRow,
}

impl ResultRowFactory {
    pub fn new() -> Self {
        Self {
            inner: ResultRow::new(Self::base_time(), 1.0),
        }
    }

    /// 2024-03-01T00:00:00Z
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    }

    /// `base_time()` plus `hours`.
    pub fn at_hour(hours: i64) -> DateTime<Utc> {
        Self::base_time() + Duration::hours(hours)
    }

    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.inner.timestamp = ts;
        self
    }

    pub fn with_hour(self, hours: i64) -> Self {
        self.with_timestamp(Self::at_hour(hours))
    }

    pub fn with_dim(mut self, column: &str, value: &str) -> Self {
        self.inner.dimensions.insert(column.into(), value.into());
        self
    }

    pub fn with_metric(mut self, metric: f64) -> Self {
        self.inner.metric = metric;
        self
    }

    pub fn create(self) -> ResultRow {
        self.inner
    }

    /// Rows over a single `country` dimension: `(hour, country, metric)`.
    pub fn by_country(rows: &[(i64, &str, f64)]) -> Vec<ResultRow> {
        rows.iter()
            .map(|(hour, country, metric)| {
                Self::new()
                    .with_hour(*hour)
                    .with_dim("country", country)
                    .with_metric(*metric)
                    .create()
            })
            .collect()
    }
}
