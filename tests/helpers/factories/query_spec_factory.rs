use crate::command::types::Granularity;
use crate::engine::query::filter::Filter;
use crate::engine::query::spec::{Aggregation, Interval, LimitSpec, QuerySpec, SortDirection};
use chrono::{Duration, TimeZone, Utc};

pub struct QuerySpecFactory {
    inner: QuerySpec,
}

impl QuerySpecFactory {
    pub fn new() -> Self {
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Self {
            inner: QuerySpec {
                datasource: "events".into(),
                group_by: vec![],
                granularity: Granularity::All,
                interval: Interval::ending_at(end, Duration::days(1)),
                aggregation: Aggregation::count("count"),
                limit_spec: LimitSpec {
                    limit: 100,
                    column: "count".into(),
                    direction: SortDirection::Descending,
                },
                filter: None,
            },
        }
    }

    pub fn with_group_by(mut self, columns: &[&str]) -> Self {
        self.inner.group_by = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.inner.granularity = granularity;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.inner.limit_spec.limit = limit;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.inner.filter = Some(filter);
        self
    }

    pub fn create(self) -> QuerySpec {
        self.inner
    }
}
