use crate::command::types::{Granularity, Params, TimeWindowAlias};
use crate::engine::errors::VizError;
use crate::engine::query::filter_builder::FilterBuilder;
use crate::engine::query::spec::{Aggregation, Interval, LimitSpec, QuerySpec, SortDirection};
use crate::engine::schema::types::DataSource;
use crate::shared::config::QueryConfig;
use chrono::{DateTime, Utc};
use std::num::IntErrorKind;
use tracing::debug;

/// Turns request parameters into a [`QuerySpec`] for one data source.
#[derive(Debug, Clone)]
pub struct QuerySpecBuilder {
    config: QueryConfig,
}

impl QuerySpecBuilder {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, datasource: &DataSource, params: &Params) -> Result<QuerySpec, VizError> {
        self.build_at(datasource, params, Utc::now())
    }

    /// Same as [`QuerySpecBuilder::build`] with an explicit "now".
    pub fn build_at(
        &self,
        datasource: &DataSource,
        params: &Params,
        now: DateTime<Utc>,
    ) -> Result<QuerySpec, VizError> {
        let group_by = group_by_columns(params);
        for column in &group_by {
            if !datasource.has_column(column) {
                return Err(VizError::InvalidQuerySpec(format!(
                    "group-by column '{}' not found in '{}'",
                    column, datasource.name
                )));
            }
        }

        let granularity = parse_granularity(params)?;
        let since = parse_since(params)?;
        let interval = Interval::ending_at(now, since.duration());
        let limit = self.parse_limit(params);

        let filter = FilterBuilder::build(params)?;
        if let Some(filter) = &filter {
            if let Some(column) = filter.columns().into_iter().find(|c| !datasource.has_column(c)) {
                return Err(VizError::InvalidQuerySpec(format!(
                    "filter column '{}' not found in '{}'",
                    column, datasource.name
                )));
            }
        }

        debug!(
            target: "panoramix::query",
            datasource = %datasource.name,
            group_by = ?group_by,
            granularity = %granularity,
            since = since.as_str(),
            limit,
            has_filter = filter.is_some(),
            "Built query spec"
        );

        Ok(QuerySpec {
            datasource: datasource.name.clone(),
            group_by,
            granularity,
            interval,
            aggregation: Aggregation::count(&self.config.metric),
            limit_spec: LimitSpec {
                limit,
                column: self.config.metric.clone(),
                direction: SortDirection::Descending,
            },
            filter,
        })
    }

    /// Missing, zero, negative or non-numeric limits fall back to the row cap.
    /// Positive values beyond `u32::MAX` saturate.
    fn parse_limit(&self, params: &Params) -> u32 {
        params
            .get_non_empty("limit")
            .and_then(|raw| match raw.trim().parse::<u32>() {
                Ok(limit) => Some(limit),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
                Err(_) => None,
            })
            .filter(|limit| *limit > 0)
            .unwrap_or(self.config.row_limit)
    }
}

/// Distinct non-empty `groupby` values in request order.
fn group_by_columns(params: &Params) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for column in params.get_all("groupby") {
        if !column.is_empty() && !columns.iter().any(|c| c == column) {
            columns.push(column.to_string());
        }
    }
    columns
}

fn parse_granularity(params: &Params) -> Result<Granularity, VizError> {
    match params.get_non_empty("granularity") {
        None => Ok(Granularity::All),
        Some(raw) => Granularity::from_key(raw)
            .ok_or_else(|| VizError::InvalidQuerySpec(format!("unknown granularity '{raw}'"))),
    }
}

fn parse_since(params: &Params) -> Result<TimeWindowAlias, VizError> {
    match params.get_non_empty("since") {
        None => Ok(TimeWindowAlias::All),
        Some(raw) => TimeWindowAlias::from_key(raw)
            .ok_or_else(|| VizError::InvalidQuerySpec(format!("unknown time window '{raw}'"))),
    }
}
