pub mod datasource_factory;
pub mod params_factory;
pub mod query_spec_factory;
pub mod result_row_factory;
pub mod store_factory;

pub use datasource_factory::DataSourceFactory;
pub use params_factory::ParamsFactory;
pub use query_spec_factory::QuerySpecFactory;
pub use result_row_factory::ResultRowFactory;
pub use store_factory::StoreFactory;

#[cfg(test)]
mod result_row_factory_test;
#[cfg(test)]
mod store_factory_test;
