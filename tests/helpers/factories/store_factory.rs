use crate::engine::store::MemoryStore;
use crate::engine::types::ResultRow;
use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;

pub struct StoreFactory {
    max_time: Option<DateTime<Utc>>,
    segments: Vec<(String, Vec<String>)>,
    rows: Vec<ResultRow>,
    delay: Option<Duration>,
}

impl StoreFactory {
    pub fn new() -> Self {
        Self {
            max_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
            segments: vec![(
                "events_2024-03-01".into(),
                vec![
                    "__time".into(),
                    "device".into(),
                    "country".into(),
                    "count".into(),
                ],
            )],
            rows: vec![],
            delay: None,
        }
    }

    pub fn without_max_time(mut self) -> Self {
        self.max_time = None;
        self
    }

    pub fn without_segments(mut self) -> Self {
        self.segments.clear();
        self
    }

    pub fn with_segment(mut self, id: &str, columns: &[&str]) -> Self {
        self.segments
            .push((id.into(), columns.iter().map(|c| c.to_string()).collect()));
        self
    }

    pub fn with_rows(mut self, rows: Vec<ResultRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn create(self) -> MemoryStore {
        let mut store = MemoryStore::new().with_rows(self.rows);
        if let Some(ts) = self.max_time {
            store = store.with_max_time(ts);
        }
        for (id, columns) in self.segments {
            store = store.with_segment(&id, columns);
        }
        if let Some(delay) = self.delay {
            store = store.with_delay(delay);
        }
        store
    }
}
