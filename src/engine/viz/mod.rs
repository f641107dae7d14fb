pub mod adapter;
pub mod kind;
pub mod sink;

pub use adapter::{NO_DATA_NOTICE, VisualizationAdapter, VizResponse};
pub use kind::{ChartKind, RowOrder, VizDescriptor, VizKind};
pub use sink::{ChartSink, HighchartsSink};
