use crate::engine::schema::types::DataSource;
use chrono::{DateTime, TimeZone, Utc};

pub struct DataSourceFactory {
    name: String,
    max_time: DateTime<Utc>,
    columns: Vec<String>,
}

impl DataSourceFactory {
    pub fn new() -> Self {
        Self {
            name: "events".into(),
            max_time: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            columns: vec![
                "__time".into(),
                "count".into(),
                "country".into(),
                "device".into(),
            ],
        }
    }

    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn create(self) -> DataSource {
        DataSource::new(self.name, self.max_time, self.columns)
    }
}
