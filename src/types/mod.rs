mod models;
mod query;

pub use models::*;
pub use query::*;
