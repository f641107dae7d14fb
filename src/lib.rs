//! Query building and result reshaping for chart-ready analytics.
//!
//! A request is a flat set of parameters (`viz_type`, `groupby`,
//! `granularity`, `since`, `limit`, `flt_col_i`/`flt_op_i`/`flt_eq_i`).
//! [`engine::viz::VisualizationAdapter`] resolves the data source schema,
//! builds a group-by query, runs it against an [`engine::store::AnalyticStore`]
//! and reshapes the rows for the requested visualization.

pub mod command;
pub mod engine;
pub mod logging;
pub mod shared;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
