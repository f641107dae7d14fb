use crate::command::types::Params;
use crate::engine::errors::VizError;
use crate::engine::query::{QueryExecutor, QuerySpec, QuerySpecBuilder};
use crate::engine::schema::SchemaResolver;
use crate::engine::store::AnalyticStore;
use crate::engine::transform::{Outcome, PivotedTable, TransformContext, transform};
use crate::engine::viz::kind::VizKind;
use crate::engine::viz::sink::ChartSink;
use crate::shared::config::QueryConfig;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub const NO_DATA_NOTICE: &str = "No data.";

/// What a visualization request hands back to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct VizResponse {
    pub kind: VizKind,
    pub verbose_name: &'static str,
    pub query: QuerySpec,
    pub table: Option<PivotedTable>,
    pub chart_spec: Option<Value>,
    pub no_data: bool,
    pub notice: Option<String>,
}

/// Runs one visualization request end to end: schema, query, execution,
/// reshape, and chart serialization.
pub struct VisualizationAdapter {
    store: Arc<dyn AnalyticStore>,
    sink: Arc<dyn ChartSink>,
    builder: QuerySpecBuilder,
    timeout: Duration,
}

impl VisualizationAdapter {
    pub fn new(
        store: Arc<dyn AnalyticStore>,
        sink: Arc<dyn ChartSink>,
        config: QueryConfig,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            sink,
            builder: QuerySpecBuilder::new(config),
            timeout,
        }
    }

    /// Uses `viz_type` from the parameters, `table` when absent.
    pub async fn render_request(
        &self,
        datasource: &str,
        params: &Params,
    ) -> Result<VizResponse, VizError> {
        let kind = params.get_non_empty("viz_type").unwrap_or("table");
        self.render(kind, datasource, params).await
    }

    pub async fn render(
        &self,
        kind: &str,
        datasource: &str,
        params: &Params,
    ) -> Result<VizResponse, VizError> {
        let kind = VizKind::from_key(kind)?;
        let descriptor = kind.descriptor();

        let ds = SchemaResolver::new(self.store.as_ref(), self.timeout)
            .resolve(datasource)
            .await?;
        let spec = self.builder.build(&ds, params)?;
        let rows = QueryExecutor::new(self.store.as_ref(), self.timeout)
            .execute(&spec)
            .await?;

        let outcome = transform(descriptor.pivot, &rows, &TransformContext::from_spec(&spec));
        let response = match outcome {
            Outcome::NoData => {
                warn!(target: "panoramix::viz", datasource, viz_type = descriptor.key, "No data");
                VizResponse {
                    kind,
                    verbose_name: descriptor.verbose_name,
                    query: spec,
                    table: None,
                    chart_spec: None,
                    no_data: true,
                    notice: Some(NO_DATA_NOTICE.to_string()),
                }
            }
            Outcome::Ready(table) => {
                let chart_spec = descriptor
                    .chart_kind
                    .map(|chart| self.sink.serialize(&table, chart));
                info!(
                    target: "panoramix::viz",
                    datasource,
                    viz_type = descriptor.key,
                    rows = table.row_count(),
                    "Rendered visualization"
                );
                VizResponse {
                    kind,
                    verbose_name: descriptor.verbose_name,
                    query: spec,
                    table: Some(table),
                    chart_spec,
                    no_data: false,
                    notice: None,
                }
            }
        };
        Ok(response)
    }
}
