pub mod resolver;
pub mod types;

pub use resolver::SchemaResolver;
pub use types::{ColumnInfo, DataSource, SegmentMetadata};
