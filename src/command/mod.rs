pub mod parser;
pub mod types;

pub use types::{FilterOp, Granularity, Params, TimeWindowAlias};
