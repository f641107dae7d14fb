use crate::engine::store::AnalyticStore;
use crate::test_helpers::factories::StoreFactory;

#[tokio::test]
async fn default_store_has_boundary_and_one_segment() {
    let store = StoreFactory::new().create();
    assert!(store.time_boundary("events").await.unwrap().is_some());

    let end = store.time_boundary("events").await.unwrap().unwrap();
    let interval = crate::engine::query::spec::Interval::new(end, end);
    let segments = store.segment_metadata("events", &interval).await.unwrap();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].columns.contains_key("country"));
}

#[tokio::test]
async fn empty_store_variants() {
    let store = StoreFactory::new().without_max_time().without_segments().create();
    assert!(store.time_boundary("events").await.unwrap().is_none());
}
