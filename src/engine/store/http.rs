use super::AnalyticStore;
use crate::command::types::Granularity;
use crate::engine::errors::StoreError;
use crate::engine::query::filter::Filter;
use crate::engine::query::spec::{AggregationKind, Interval, QuerySpec, SortDirection};
use crate::engine::schema::types::SegmentMetadata;
use crate::engine::types::ResultRow;
use crate::shared::time::TimeParser;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use http_body_util::{BodyExt, Full};
use hyper::{Method, Request, Uri, header};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::{debug, warn};

/// Broker client speaking the native JSON query protocol over HTTP.
pub struct HttpStore {
    endpoint: Uri,
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HttpStore {
    pub fn new(broker_url: &str) -> Result<Self, StoreError> {
        let endpoint = format!("{}/druid/v2/", broker_url.trim_end_matches('/'))
            .parse::<Uri>()
            .map_err(|e| StoreError::InvalidUrl(format!("{broker_url}: {e}")))?;
        let client: Client<HttpConnector, Full<Bytes>> =
            Client::builder(TokioExecutor::new()).build_http();
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    async fn post(&self, query_type: &str, body: Vec<u8>) -> Result<Bytes, StoreError> {
        let started = Instant::now();
        let req = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| StoreError::Transport(format!("Failed to build request: {e}")))?;

        let res = self
            .client
            .request(req)
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let status = res.status();
        let bytes = res
            .into_body()
            .collect()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?
            .to_bytes();

        if !status.is_success() {
            warn!(
                target: "panoramix::store",
                query_type,
                status = status.as_u16(),
                "Store rejected query"
            );
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        debug!(
            target: "panoramix::store",
            query_type,
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Store responded"
        );
        Ok(bytes)
    }
}

#[async_trait]
impl AnalyticStore for HttpStore {
    async fn time_boundary(&self, datasource: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        let body = serde_json::to_vec(&encode_time_boundary(datasource)?)?;
        let bytes = self.post("timeBoundary", body).await?;
        decode_time_boundary(&bytes)
    }

    async fn segment_metadata(
        &self,
        datasource: &str,
        interval: &Interval,
    ) -> Result<Vec<SegmentMetadata>, StoreError> {
        let body = serde_json::to_vec(&encode_segment_metadata(datasource, interval)?)?;
        let bytes = self.post("segmentMetadata", body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn group_by(&self, spec: &QuerySpec) -> Result<Vec<ResultRow>, StoreError> {
        let body = serde_json::to_vec(&encode_group_by(spec)?)?;
        let bytes = self.post("groupBy", body).await?;
        decode_group_by(&bytes, spec)
    }
}

// ─────────────────────────────
// Wire format
// ─────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeBoundaryRequest<'a> {
    query_type: &'static str,
    data_source: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SegmentMetadataRequest<'a> {
    query_type: &'static str,
    data_source: &'a str,
    intervals: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupByRequest<'a> {
    query_type: &'static str,
    data_source: &'a str,
    granularity: Granularity,
    intervals: Vec<String>,
    dimensions: &'a [String],
    aggregations: Vec<AggregationWire<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a Filter>,
    limit_spec: LimitSpecWire<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregationWire<'a> {
    #[serde(rename = "type")]
    kind: AggregationKind,
    name: &'a str,
    field_name: &'a str,
}

#[derive(Serialize)]
struct LimitSpecWire<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    limit: u32,
    columns: Vec<OrderByWire<'a>>,
}

#[derive(Serialize)]
struct OrderByWire<'a> {
    dimension: &'a str,
    direction: SortDirection,
}

#[derive(Deserialize)]
struct TimeBoundaryEntry {
    result: TimeBoundaryResult,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeBoundaryResult {
    #[serde(default)]
    max_time: Option<String>,
}

#[derive(Deserialize)]
struct GroupByEntry {
    timestamp: String,
    #[serde(default)]
    event: Map<String, Value>,
}

pub(crate) fn encode_time_boundary(datasource: &str) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(TimeBoundaryRequest {
        query_type: "timeBoundary",
        data_source: datasource,
    })?)
}

pub(crate) fn encode_segment_metadata(
    datasource: &str,
    interval: &Interval,
) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(SegmentMetadataRequest {
        query_type: "segmentMetadata",
        data_source: datasource,
        intervals: vec![interval.to_string()],
    })?)
}

pub(crate) fn encode_group_by(spec: &QuerySpec) -> Result<Value, StoreError> {
    let request = GroupByRequest {
        query_type: "groupBy",
        data_source: &spec.datasource,
        granularity: spec.granularity,
        intervals: vec![spec.interval.to_string()],
        dimensions: &spec.group_by,
        aggregations: vec![AggregationWire {
            kind: spec.aggregation.kind,
            name: &spec.aggregation.name,
            field_name: &spec.aggregation.field_name,
        }],
        filter: spec.filter.as_ref(),
        limit_spec: LimitSpecWire {
            kind: "default",
            limit: spec.limit_spec.limit,
            columns: vec![OrderByWire {
                dimension: &spec.limit_spec.column,
                direction: spec.limit_spec.direction,
            }],
        },
    };
    Ok(serde_json::to_value(request)?)
}

pub(crate) fn decode_time_boundary(body: &[u8]) -> Result<Option<DateTime<Utc>>, StoreError> {
    let entries: Vec<TimeBoundaryEntry> = serde_json::from_slice(body)?;
    let Some(raw) = entries.into_iter().next().and_then(|e| e.result.max_time) else {
        return Ok(None);
    };
    match TimeParser::parse_instant(&raw) {
        Some(ts) => Ok(Some(ts)),
        None => Err(StoreError::InvalidTimestamp(raw)),
    }
}

/// Dimensions are read in group-by order. Every event must carry a numeric metric.
pub(crate) fn decode_group_by(body: &[u8], spec: &QuerySpec) -> Result<Vec<ResultRow>, StoreError> {
    let entries: Vec<GroupByEntry> = serde_json::from_slice(body)?;
    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(timestamp) = TimeParser::parse_instant(&entry.timestamp) else {
            return Err(StoreError::InvalidTimestamp(entry.timestamp));
        };
        let Some(metric) = entry.event.get(spec.metric()).and_then(Value::as_f64) else {
            return Err(StoreError::MissingMetric {
                metric: spec.metric().to_string(),
                timestamp: entry.timestamp,
            });
        };
        let mut row = ResultRow::new(timestamp, metric);
        for column in &spec.group_by {
            row.dimensions
                .insert(column.clone(), dimension_value(entry.event.get(column)));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn dimension_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
