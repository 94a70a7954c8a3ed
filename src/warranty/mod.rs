mod engine;
mod resolver;
mod schema;

pub use engine::{RunConfig, WarrantyEngine};
pub use resolver::WarrantyResolver;
pub use schema::RowSchema;
