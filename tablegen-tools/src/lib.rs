mod column_type;
mod error;
mod models;
mod quoting;
mod sql_builder;
mod value_generator;

pub use column_type::*;
pub use error::*;
pub use models::*;
pub use quoting::*;
pub use sql_builder::*;
pub use value_generator::*;
