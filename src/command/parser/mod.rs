pub mod error;
pub mod params;

pub use error::ParseError;
pub use params::{parse_params, parse_query_string};
