pub mod executor;
pub mod filter;
pub mod filter_builder;
pub mod spec;
pub mod spec_builder;

pub use executor::QueryExecutor;
pub use filter::Filter;
pub use filter_builder::FilterBuilder;
pub use spec::{Interval, QuerySpec};
pub use spec_builder::QuerySpecBuilder;

#[cfg(test)]
mod filter_test;
