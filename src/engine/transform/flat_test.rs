use crate::command::types::Granularity;
use crate::engine::transform::flat::TIMESTAMP_COLUMN;
use crate::engine::transform::{TransformContext, flat_table};
use crate::test_helpers::factories::ResultRowFactory;
use serde_json::json;

#[test]
fn granularity_all_drops_timestamp() {
    let rows = ResultRowFactory::by_country(&[(0, "us", 3.0), (0, "fr", 1.0)]);
    let dimensions = vec!["country".to_string()];
    let ctx = TransformContext {
        dimensions: &dimensions,
        metric: "count",
        granularity: Granularity::All,
    };

    let table = flat_table(&rows, &ctx);
    assert_eq!(table.columns, vec!["country", "count"]);
    assert_eq!(
        table.rows,
        vec![vec![json!("us"), json!(3.0)], vec![json!("fr"), json!(1.0)]]
    );
}

#[test]
fn bucketed_granularity_keeps_timestamp_first() {
    let rows = vec![
        ResultRowFactory::new()
            .with_hour(2)
            .with_dim("country", "us")
            .with_dim("device", "ios")
            .with_metric(7.0)
            .create(),
    ];
    let dimensions = vec!["country".to_string(), "device".to_string()];
    let ctx = TransformContext {
        dimensions: &dimensions,
        metric: "count",
        granularity: Granularity::Hour,
    };

    let table = flat_table(&rows, &ctx);
    assert_eq!(table.columns, vec![TIMESTAMP_COLUMN, "country", "device", "count"]);
    assert_eq!(
        table.rows[0],
        vec![
            json!("2024-03-01T02:00:00.000Z"),
            json!("us"),
            json!("ios"),
            json!(7.0)
        ]
    );
}

#[test]
fn keeps_store_order() {
    let rows = ResultRowFactory::by_country(&[(0, "b", 1.0), (0, "a", 9.0), (0, "c", 5.0)]);
    let dimensions = vec!["country".to_string()];
    let ctx = TransformContext {
        dimensions: &dimensions,
        metric: "count",
        granularity: Granularity::All,
    };

    let table = flat_table(&rows, &ctx);
    let firsts: Vec<_> = table.rows.iter().map(|r| r[0].clone()).collect();
    assert_eq!(firsts, vec![json!("b"), json!("a"), json!("c")]);
}
