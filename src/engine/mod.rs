pub mod errors;
pub mod query;
pub mod schema;
pub mod store;
pub mod transform;
pub mod types;
pub mod viz;

pub use errors::*;
