use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use panoramix::command::parser::parse_query_string;
use panoramix::engine::query::filter::Filter;
use panoramix::engine::store::{AnalyticStore, MemoryStore};
use panoramix::engine::transform::PivotedTable;
use panoramix::engine::types::ResultRow;
use panoramix::engine::viz::{HighchartsSink, VisualizationAdapter, VizKind};
use panoramix::shared::config::QueryConfig;
use panoramix::shared::response::{JsonRenderer, Renderer, Response};
use std::sync::Arc;
use std::time::Duration;

fn store() -> Arc<MemoryStore> {
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let row = |hour: i64, country: &str, device: &str, metric: f64| {
        ResultRow::new(base + ChronoDuration::hours(hour), metric)
            .with_dimension("country", country)
            .with_dimension("device", device)
    };
    Arc::new(
        MemoryStore::new()
            .with_max_time(base + ChronoDuration::hours(12))
            .with_segment("events_old", ["__time", "count", "country"])
            .with_segment("events_new", ["__time", "count", "country", "device"])
            .with_rows(vec![
                row(0, "us", "ios", 4.0),
                row(0, "fr", "web", 2.0),
                row(1, "us", "ios", 6.0),
            ]),
    )
}

fn adapter(store: Arc<MemoryStore>) -> VisualizationAdapter {
    let store: Arc<dyn AnalyticStore> = store;
    VisualizationAdapter::new(
        store,
        Arc::new(HighchartsSink),
        QueryConfig::default(),
        Duration::from_secs(1),
    )
}

#[tokio::test]
async fn query_string_to_area_chart() {
    let store = store();
    let params = parse_query_string(
        "?viz_type=area&groupby=country&groupby=device&granularity=hour&since=7days\
         &flt_col_1=device&flt_op_1=in&flt_eq_1=ios,+web&limit=50",
    )
    .unwrap();

    let response = adapter(Arc::clone(&store))
        .render_request("events", &params)
        .await
        .unwrap();

    assert_eq!(response.kind, VizKind::TimeSeriesArea);
    let sent = store.last_spec().unwrap();
    assert_eq!(sent.group_by, vec!["country", "device"]);
    assert_eq!(sent.limit(), 50);
    assert_eq!(
        sent.filter,
        Some(Filter::is_in("device", ["ios", "web"]))
    );
    assert_eq!(sent.interval.duration(), ChronoDuration::days(7));

    let interval = store.last_metadata_interval().unwrap();
    assert_eq!(interval.duration(), ChronoDuration::seconds(1));

    match &response.table {
        Some(PivotedTable::TimeIndexed(t)) => {
            let labels: Vec<_> = t.series.iter().map(|s| s.label.as_str()).collect();
            assert_eq!(labels, vec!["fr, web", "us, ios"]);
            assert_eq!(t.rows.len(), 2);
        }
        other => panic!("Expected time-indexed table, got {:?}", other),
    }

    let chart = response.chart_spec.clone().unwrap();
    assert_eq!(chart["chart"]["type"], "area");
    assert_eq!(chart["series"][0]["data"][1][1], serde_json::Value::Null);
}

#[tokio::test]
async fn renders_json_response() {
    let params = parse_query_string("viz_type=dist_bar&groupby=country").unwrap();
    let viz = adapter(store())
        .render_request("events", &params)
        .await
        .unwrap();

    let response = Response::ok(serde_json::to_value(&viz).unwrap());
    let out = JsonRenderer.render(&response);
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(parsed["status"], 200);
    assert_eq!(parsed["result"]["kind"], "distribution_bar");
    assert_eq!(parsed["result"]["verbose_name"], "Distribution - Bar Chart");
    assert_eq!(parsed["result"]["table"]["layout"], "category_indexed");
    assert_eq!(parsed["result"]["table"]["rows"][0]["label"], "us");
    assert_eq!(parsed["result"]["table"]["rows"][0]["value"], 10.0);
    assert_eq!(parsed["result"]["no_data"], false);
}

#[tokio::test]
async fn column_from_older_segment_only_is_rejected() {
    let store = Arc::new(
        MemoryStore::new()
            .with_max_time(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
            .with_segment("events_old", ["__time", "count", "device"])
            .with_segment("events_new", ["__time", "count", "country"]),
    );
    let params = parse_query_string("groupby=device").unwrap();

    let err = adapter(store)
        .render_request("events", &params)
        .await
        .unwrap_err();
    assert_eq!(err.status().code(), 400);
}
