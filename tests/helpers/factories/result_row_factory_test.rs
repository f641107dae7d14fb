use crate::test_helpers::factories::ResultRowFactory;

#[test]
fn builds_row_with_dimensions_in_insertion_order() {
    let row = ResultRowFactory::new()
        .with_hour(2)
        .with_dim("country", "fr")
        .with_dim("device", "mobile")
        .with_metric(4.0)
        .create();

    assert_eq!(row.timestamp, ResultRowFactory::at_hour(2));
    assert_eq!(row.key(), vec!["fr".to_string(), "mobile".to_string()]);
    assert_eq!(row.metric, 4.0);
}

#[test]
fn by_country_builds_one_row_per_tuple() {
    let rows = ResultRowFactory::by_country(&[(0, "us", 5.0), (1, "fr", 2.0)]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].dimensions["country"], "fr");
    assert_eq!(rows[1].timestamp, ResultRowFactory::at_hour(1));
}
