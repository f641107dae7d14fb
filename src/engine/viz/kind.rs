use crate::engine::errors::VizError;
use crate::engine::transform::PivotKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VizKind {
    Table,
    TimeSeries,
    TimeSeriesArea,
    DistributionBar,
}

/// Chart type label handed to the rendering sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Area,
    Bar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Bar => "bar",
        }
    }
}

/// Row order of the shaped output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// As returned by the store (metric descending via the limit clause)
    Store,
    Chronological,
    MetricDescending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VizDescriptor {
    pub kind: VizKind,
    pub key: &'static str,
    pub verbose_name: &'static str,
    pub pivot: PivotKind,
    pub chart_kind: Option<ChartKind>,
    pub row_order: RowOrder,
}

static VIZ_TYPES: [VizDescriptor; 4] = [
    VizDescriptor {
        kind: VizKind::Table,
        key: "table",
        verbose_name: "Table View",
        pivot: PivotKind::Flat,
        chart_kind: None,
        row_order: RowOrder::Store,
    },
    VizDescriptor {
        kind: VizKind::TimeSeries,
        key: "line",
        verbose_name: "Time Series - Line Chart",
        pivot: PivotKind::TimeSeries,
        chart_kind: Some(ChartKind::Line),
        row_order: RowOrder::Chronological,
    },
    VizDescriptor {
        kind: VizKind::TimeSeriesArea,
        key: "area",
        verbose_name: "Time Series - Area Chart",
        pivot: PivotKind::TimeSeries,
        chart_kind: Some(ChartKind::Area),
        row_order: RowOrder::Chronological,
    },
    VizDescriptor {
        kind: VizKind::DistributionBar,
        key: "dist_bar",
        verbose_name: "Distribution - Bar Chart",
        pivot: PivotKind::Distribution,
        chart_kind: Some(ChartKind::Bar),
        row_order: RowOrder::MetricDescending,
    },
];

impl VizKind {
    pub fn all() -> &'static [VizDescriptor] {
        &VIZ_TYPES
    }

    pub fn from_key(key: &str) -> Result<Self, VizError> {
        VIZ_TYPES
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.kind)
            .ok_or_else(|| VizError::UnknownVisualization(key.to_string()))
    }

    pub fn descriptor(&self) -> &'static VizDescriptor {
        match self {
            VizKind::Table => &VIZ_TYPES[0],
            VizKind::TimeSeries => &VIZ_TYPES[1],
            VizKind::TimeSeriesArea => &VIZ_TYPES[2],
            VizKind::DistributionBar => &VIZ_TYPES[3],
        }
    }

    pub fn key(&self) -> &'static str {
        self.descriptor().key
    }
}
